pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod response;
pub mod trigger;

pub use dispatcher::SyncDispatcher;
pub use error::DispatchError;
pub use outcome::{SyncOutcome, SyncReport, SyncStatus};
pub use response::{ErrorBody, ResponseBody, SyncResponse};
pub use trigger::TriggerEvent;
