//! # Descriptor Crate
//!
//! Leaf crate of the plugscout workspace: the domain types every other
//! crate speaks in.
//!
//! ## Main Components
//!
//! - **types**: `Candidate` (inert descriptor), `Service` (live
//!   instance), `CandidateMetadata`, and the `Identity` alias
//! - **error**: `DiscoveryError` (fatal to an enumeration call) and
//!   `ResolutionError` (per-candidate, collected)
//!
//! ## Example Usage
//!
//! ```ignore
//! use descriptor::{Candidate, CandidateMetadata};
//!
//! let candidate = Candidate::with_metadata(
//!     "com.example.plugins.Resizer",
//!     CandidateMetadata {
//!         source: Some("manifest".to_string()),
//!         version: Some("1.2.0".to_string()),
//!         ..Default::default()
//!     },
//! );
//!
//! assert_eq!(candidate.identity(), "com.example.plugins.Resizer");
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{DiscoveryError, DiscoveryResult, ResolutionError};
pub use types::{Candidate, CandidateMetadata, Identity, Service};
