//! Error types for host-facing operations.

use thiserror::Error;

use crate::config::ConfigError;
use crate::hir::NodeId;

/// Errors surfaced to the host.
///
/// Extraction itself never fails; these only arise when a host hands in an
/// unusable configuration or a handle from an older snapshot.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// The configuration cannot drive extraction.
    #[error("invalid outline configuration: {0}")]
    Config(#[from] ConfigError),

    /// The handle does not resolve against the current snapshot.
    #[error("node {0:?} is not part of the current snapshot")]
    UnknownNode(NodeId),

    /// Outline serialization failed.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
