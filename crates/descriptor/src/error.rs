//! Error types for the discovery core.
//!
//! Two failure channels with different blast radii:
//! - `DiscoveryError` is fatal to the enumeration call that hit it
//! - `ResolutionError` is scoped to a single candidate and collected
//!   alongside the services that did instantiate

use thiserror::Error;

/// Errors that can occur while enumerating candidates.
///
/// A failed source never yields a partial candidate set: the caller
/// gets either the complete enumeration or this error. The core does
/// not retry.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The underlying source could not be queried at all
    #[error("discovery source '{name}' unavailable: {reason}")]
    SourceUnavailable { name: String, reason: String },

    /// I/O error while scanning a filesystem-backed source
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A plugin manifest exists but could not be parsed
    #[error("invalid manifest {path}: {reason}")]
    Manifest { path: String, reason: String },
}

/// Per-candidate resolution failure.
///
/// Non-fatal to a locate pass. Failures are reported next to the
/// services that succeeded; the caller decides whether a partial
/// result is acceptable.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// No constructor is registered for the candidate's identity
    #[error("no factory registered for '{identity}'")]
    NoFactory { identity: String },

    /// The constructor ran and reported failure
    #[error("constructor for '{identity}' failed: {reason}")]
    ConstructorFailed { identity: String, reason: String },
}

impl ResolutionError {
    /// Identity of the candidate this failure belongs to.
    pub fn identity(&self) -> &str {
        match self {
            ResolutionError::NoFactory { identity } => identity,
            ResolutionError::ConstructorFailed { identity, .. } => identity,
        }
    }
}

/// Convenience alias for discovery results
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;
