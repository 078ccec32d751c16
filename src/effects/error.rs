//! Errors surfaced by collaborators and the monitor.

use crate::core::{MotionState, ValidationError};
use thiserror::Error;

/// Errors returned by a [`HistoryLookup`](super::HistoryLookup).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    #[error("No {state} record found for device '{device_id}'")]
    NotFound {
        device_id: String,
        state: MotionState,
    },

    #[error("History lookup failed: {0}")]
    Unavailable(String),
}

/// Errors returned by a [`Persistence`](super::Persistence) collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistError {
    #[error("Record rejected by store: {0}")]
    Rejected(String),
}

/// Errors that abort a monitor operation
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
