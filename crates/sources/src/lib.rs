//! # Sources Crate
//!
//! This crate defines the discovery seam of the locator core and ships
//! two reference strategies behind it.
//!
//! ## Components
//!
//! ### DiscoverySource (trait)
//! The pluggable discovery strategy: enumerate `Candidate` descriptors
//! without instantiating anything. Failure is distinct from an empty
//! result by construction.
//!
//! ### Fixed Source (in-memory)
//! A fixed candidate list, configured up front:
//! - Never fails, never touches the filesystem
//! - Useful for embedding a known plugin set and for tests
//!
//! ### Manifest Source (directory scan)
//! Scans a directory of `.json` plugin manifests:
//! - Each manifest declares an identity plus optional metadata
//! - An unreadable directory or malformed manifest fails the whole
//!   pass; a directory with no manifests is an empty result
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{DiscoverySource, FixedSource, ManifestSource};
//!
//! let fixed = FixedSource::new("builtin")
//!     .with_identity("com.example.plugins.Echo")
//!     .with_identity("com.example.plugins.Resizer");
//!
//! let manifests = ManifestSource::new("plugins/manifests");
//!
//! let builtin = fixed.discover()?;
//! let scanned = manifests.discover()?;
//! ```

// Public modules
pub mod fixed;
pub mod manifest;

use descriptor::{Candidate, DiscoveryResult};

// Re-export commonly used types
pub use fixed::FixedSource;
pub use manifest::ManifestSource;

/// A pluggable discovery strategy.
///
/// Implementations enumerate what could be instantiated right now.
/// They must not instantiate anything themselves; that is the
/// resolution stage's job.
pub trait DiscoverySource: Send + Sync {
    /// Name of this source, used for logging and candidate provenance.
    fn name(&self) -> &str;

    /// Enumerate the candidates this source can currently see.
    ///
    /// A source that can see nothing returns `Ok(vec![])`; a source
    /// that cannot look returns `Err`. There is no partial success:
    /// implementations return either a complete enumeration or an
    /// error.
    fn discover(&self) -> DiscoveryResult<Vec<Candidate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_is_a_discovery_source() {
        let source: Box<dyn DiscoverySource> =
            Box::new(FixedSource::new("builtin").with_identity("pkg.Foo"));

        let candidates = source.discover().unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].identity(), "pkg.Foo");
    }

    #[test]
    fn manifest_source_is_a_discovery_source() {
        let dir = tempfile::tempdir().unwrap();
        let source: Box<dyn DiscoverySource> = Box::new(ManifestSource::new(dir.path()));

        assert!(source.discover().unwrap().is_empty());
    }
}
