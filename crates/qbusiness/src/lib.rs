pub mod aws;
pub mod client;
pub mod config;
pub mod error;

pub use aws::QBusinessClient;
pub use client::{DataSourceSummary, QBusinessApi};
pub use config::QBusinessConfig;
pub use error::QBusinessError;
