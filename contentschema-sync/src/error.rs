//! Error types for the reconciliation layer.

use thiserror::Error;

/// Result type for management API calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type for reconciliation operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors reported by a [`ManagementClient`](crate::ManagementClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection, TLS, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success response not covered by a more specific variant.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The version token sent with a write no longer matches the remote one.
    #[error("version conflict on {id}: version {version:?} is stale")]
    VersionConflict { id: String, version: Option<u64> },

    /// The addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote answered with something the client cannot use.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by a reconciliation run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A management API call failed.
    #[error("remote call failed: {0}")]
    Remote(#[from] ClientError),

    /// More than one existing content type carries the same id.
    #[error("{count} existing content types match id {id}")]
    AmbiguousMatch { id: String, count: usize },

    /// The run was cancelled before the next remote call.
    #[error("reconciliation cancelled")]
    Cancelled,

    /// Reconciling one content type failed; `reconciled` entries before it
    /// completed and the rest were not attempted.
    #[error("failed to update content type {id} after reconciling {reconciled} entries")]
    Entity {
        id: String,
        reconciled: usize,
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// The content type id this error is attributed to, if any.
    pub fn entity_id(&self) -> Option<&str> {
        match self {
            Self::Entity { id, .. } | Self::AmbiguousMatch { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The innermost error, skipping entity wrappers.
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            Self::Entity { source, .. } => source.root_cause(),
            other => other,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Self::Cancelled)
    }

    pub fn is_version_conflict(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Remote(ClientError::VersionConflict { .. })
        )
    }
}
