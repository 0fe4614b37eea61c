//! Q Business client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QBusinessError {
    #[error("AWS SDK error: {0}")]
    Sdk(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
