//! Error types for the Trolley engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Trolley workspace.
///
/// This provides typed, structured error variants with constructor helpers.
/// The reconciliation core itself has no fatal conditions; these variants
/// cover the channel boundary, where a write can fail or a document can
/// refuse to serialize.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TrolleyError {
    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Host channel error (read/write of a host-managed document failed)
    #[error("Channel error: {0}")]
    Channel(String),
}

impl TrolleyError {
    /// Creates a Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Creates a Channel error
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel(message.into())
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a channel error
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel(_))
    }
}

impl From<serde_json::Error> for TrolleyError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias using TrolleyError
pub type Result<T> = std::result::Result<T, TrolleyError>;
