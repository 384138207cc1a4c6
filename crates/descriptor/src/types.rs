//! Core domain types for plugin discovery and resolution.
//!
//! A `Candidate` is the cheap, inert half of the story: something a
//! discovery source has seen and could instantiate. A `Service` is the
//! expensive half: a live instance produced from an accepted candidate.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Fully-qualified name identifying one potential implementation,
/// e.g. `"com.example.plugins.Resizer"`.
///
/// The identity is the unit of whitelist/blacklist matching: two
/// candidates with equal identity are the same eligibility unit, no
/// matter which source produced them.
pub type Identity = String;

// =============================================================================
// Candidate
// =============================================================================

/// An inert descriptor of a potential service implementation.
///
/// Candidates carry no behavior. They exist so callers can inspect
/// what *could* be instantiated before paying the cost (and risk) of
/// instantiating it. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    identity: Identity,
    metadata: CandidateMetadata,
}

impl Candidate {
    /// Create a candidate with empty metadata.
    pub fn new(identity: impl Into<Identity>) -> Self {
        Self {
            identity: identity.into(),
            metadata: CandidateMetadata::default(),
        }
    }

    /// Create a candidate with provenance attached.
    pub fn with_metadata(identity: impl Into<Identity>, metadata: CandidateMetadata) -> Self {
        Self {
            identity: identity.into(),
            metadata,
        }
    }

    /// The identity this candidate is matched and deduplicated by.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn metadata(&self) -> &CandidateMetadata {
        &self.metadata
    }
}

// Equality and hashing follow the identity alone. Metadata is
// provenance, not part of the eligibility unit.
impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Candidate {}

impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)
    }
}

/// Strategy-specific provenance for a candidate.
///
/// Everything here is optional: a source attaches whatever it knows,
/// and nothing in the core depends on any of it being present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateMetadata {
    /// Name of the discovery source that produced the candidate
    pub source: Option<String>,
    /// Where the candidate was found (path, registry key, URL)
    pub origin: Option<String>,
    /// Declared version, if the source knows one
    pub version: Option<String>,
    /// Human-readable description, if declared
    pub description: Option<String>,
    /// Free-form key/value pairs the source chose to attach
    pub extra: BTreeMap<String, String>,
}

// =============================================================================
// Service
// =============================================================================

/// A live, usable implementation produced from an accepted candidate.
///
/// The instance is type-erased so arbitrary plugin types can travel
/// through one resolution path; callers downcast at the point of use.
/// The producing candidate rides along for diagnostics. Ownership
/// transfers to the caller when a locate pass returns.
pub struct Service {
    candidate: Candidate,
    instance: Box<dyn Any + Send + Sync>,
}

impl Service {
    pub fn new(candidate: Candidate, instance: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            candidate,
            instance,
        }
    }

    /// The descriptor this service was produced from.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn identity(&self) -> &str {
        self.candidate.identity()
    }

    /// Borrow the instance as a concrete type, if it is one.
    pub fn instance_ref<T: 'static>(&self) -> Option<&T> {
        self.instance.downcast_ref::<T>()
    }

    /// Consume the service, recovering the typed instance.
    ///
    /// Returns the service unchanged when the instance is not a `T`,
    /// so a mismatch is recoverable.
    pub fn into_instance<T: 'static>(self) -> Result<Box<T>, Service> {
        let Service {
            candidate,
            instance,
        } = self;
        instance.downcast::<T>().map_err(|instance| Service {
            candidate,
            instance,
        })
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The instance is opaque; show what we know about it
        f.debug_struct("Service")
            .field("candidate", &self.candidate)
            .finish_non_exhaustive()
    }
}
