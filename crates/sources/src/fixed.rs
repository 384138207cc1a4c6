//! Fixed Source - In-Memory Candidate List
//!
//! The simplest discovery strategy: the candidate set is handed to the
//! source at construction time and returned verbatim on every pass.
//! Useful for plugin sets that are known at build time and as the
//! workhorse source in tests.

use crate::DiscoverySource;
use descriptor::{Candidate, CandidateMetadata, DiscoveryResult, Identity};
use tracing::debug;

/// Discovery source over a fixed, in-memory candidate list.
pub struct FixedSource {
    /// Name reported in logs and stamped into candidate provenance
    name: String,
    candidates: Vec<Candidate>,
}

impl FixedSource {
    /// Create an empty fixed source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    /// Add a pre-built candidate (builder pattern).
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Add a candidate by identity, stamping this source as its origin.
    pub fn with_identity(mut self, identity: impl Into<Identity>) -> Self {
        let metadata = CandidateMetadata {
            source: Some(self.name.clone()),
            ..Default::default()
        };
        self.candidates
            .push(Candidate::with_metadata(identity, metadata));
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl DiscoverySource for FixedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn discover(&self) -> DiscoveryResult<Vec<Candidate>> {
        debug!(
            "Source '{}' returning {} fixed candidates",
            self.name,
            self.candidates.len()
        );
        Ok(self.candidates.clone())
    }
}
