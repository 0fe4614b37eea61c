//! Trigger payload delivered by the scheduler.

use serde::Deserialize;

use crate::error::DispatchError;

/// Input delivered on each scheduled invocation.
///
/// The payload is loosely typed on the wire: a missing key and a JSON
/// `null` both surface as `None`, and unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerEvent {
    /// The enterprise-search application whose sources are synced.
    pub application_id: Option<String>,
    /// The index the data sources are registered to.
    pub index_id: Option<String>,
}

impl TriggerEvent {
    /// Both identifiers, or the client error reported when either is
    /// missing or empty.
    pub fn require(&self) -> Result<(&str, &str), DispatchError> {
        match (self.application_id.as_deref(), self.index_id.as_deref()) {
            (Some(application_id), Some(index_id))
                if !application_id.is_empty() && !index_id.is_empty() =>
            {
                Ok((application_id, index_id))
            }
            _ => Err(DispatchError::MissingParameters),
        }
    }
}
