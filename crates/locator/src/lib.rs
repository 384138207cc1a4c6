//! # Locator Crate
//!
//! The two-stage locator core: discovery first, resolution second,
//! with the filter policy gating what crosses from one to the other.
//!
//! ## Components
//!
//! - **two_stage**: the `Locator` capability trait and the
//!   `TwoStageLocator` orchestrator
//! - **factory**: the `ServiceFactory` instantiation seam and the
//!   identity-keyed `FactoryRegistry` reference implementation
//! - **resolution**: the `Resolution` report pairing instantiated
//!   services with per-candidate failures
//!
//! ## Example Usage
//!
//! ```ignore
//! use locator::{FactoryRegistry, Locator, TwoStageLocator};
//! use sources::FixedSource;
//!
//! let mut factory = FactoryRegistry::new();
//! factory.register_ok("pkg.Echo", |_candidate| EchoPlugin::default());
//!
//! let mut locator = TwoStageLocator::new(factory)
//!     .with_source(FixedSource::new("builtin").with_identity("pkg.Echo"));
//! locator.whitelist(["pkg.Echo"]);
//!
//! // Stage 1: look before you leap
//! let candidates = locator.candidates()?;
//!
//! // Stage 2: instantiate the accepted subset
//! let resolution = locator.locate(candidates);
//! for service in &resolution.services {
//!     println!("resolved {}", service.identity());
//! }
//! ```

pub mod factory;
pub mod resolution;
pub mod two_stage;

// Re-export main types
pub use factory::{FactoryRegistry, Instance, ServiceFactory};
pub use resolution::Resolution;
pub use two_stage::{Locator, TwoStageLocator};
