//! # Two-Stage Locator
//!
//! This module coordinates a full locate pass:
//! 1. Ask every discovery source for its candidates
//! 2. Merge and deduplicate them by identity
//! 3. Gate each candidate through the filter policy
//! 4. Instantiate the accepted ones through the factory, best-effort
//! 5. Return services and per-candidate failures together
//!
//! The two halves are exposed separately (`candidates` / `locate`)
//! so callers can inspect, re-filter or replace the candidate set
//! before anything is instantiated.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::factory::ServiceFactory;
use crate::resolution::Resolution;
use descriptor::{Candidate, DiscoveryError, Identity, Service};
use policy::FilterPolicy;
use sources::DiscoverySource;

/// Capability interface of a two-stage locator.
///
/// `candidates` is the cheap, side-effect-free stage; `locate` is the
/// one that pays for instantiation. The two are deliberately
/// decoupled: `locate` accepts any candidate set, not just the result
/// of a prior `candidates` call.
pub trait Locator {
    /// Enumerate what this locator could instantiate, without
    /// instantiating anything.
    ///
    /// Returns the complete deduplicated candidate set, or the first
    /// discovery failure. Never a partial set.
    fn candidates(&self) -> Result<Vec<Candidate>, DiscoveryError>;

    /// Filter the given candidates through the configured policy and
    /// instantiate the accepted ones.
    ///
    /// Best-effort over the set: a candidate that fails to instantiate
    /// is reported in the resolution and the rest of the batch still
    /// resolves. An empty input yields an empty resolution.
    fn locate(&self, candidates: Vec<Candidate>) -> Resolution;
}

/// Locator over injected discovery sources and an instantiation
/// factory.
///
/// Holds no state between passes beyond the configured policy; each
/// `candidates`/`locate` call is independent. Configuration happens
/// through `&mut self`, so on one thread it cannot race an in-flight
/// pass; across threads, shared read-only use is safe whenever the
/// injected strategies are themselves reentrant.
pub struct TwoStageLocator {
    sources: Vec<Box<dyn DiscoverySource>>,
    factory: Box<dyn ServiceFactory>,
    policy: FilterPolicy,
}

impl TwoStageLocator {
    /// Create a locator with no sources and an unrestricted policy.
    pub fn new(factory: impl ServiceFactory + 'static) -> Self {
        Self {
            sources: Vec::new(),
            factory: Box::new(factory),
            policy: FilterPolicy::new(),
        }
    }

    /// Add a discovery source (builder pattern).
    ///
    /// Sources are queried in the order they were added; on duplicate
    /// identities, the earlier source wins.
    pub fn with_source(mut self, source: impl DiscoverySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Seed the policy at construction time.
    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the whitelist used by subsequent `locate` calls.
    ///
    /// The identities are copied; the caller's collection is not
    /// retained. Passing an empty collection lifts the restriction.
    pub fn whitelist<I, S>(&mut self, identities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.policy.set_whitelist(identities);
    }

    /// Replace the blacklist used by subsequent `locate` calls. Same
    /// semantics as [`whitelist`](Self::whitelist); the blacklist wins
    /// over the whitelist.
    pub fn blacklist<I, S>(&mut self, identities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Identity>,
    {
        self.policy.set_blacklist(identities);
    }

    /// The currently configured policy.
    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    /// Run both stages in one step: discover, then locate.
    pub fn locate_all(&self) -> Result<Resolution, DiscoveryError> {
        let candidates = self.candidates()?;
        Ok(self.locate(candidates))
    }
}

impl Locator for TwoStageLocator {
    #[instrument(skip(self), fields(sources = self.sources.len()))]
    fn candidates(&self) -> Result<Vec<Candidate>, DiscoveryError> {
        let mut seen: HashSet<Identity> = HashSet::new();
        let mut merged = Vec::new();

        for source in &self.sources {
            // Any failing source aborts the pass: no partial sets
            let found = source.discover()?;
            debug!("Source '{}' discovered {} candidates", source.name(), found.len());
            for candidate in found {
                if seen.insert(candidate.identity().to_string()) {
                    merged.push(candidate);
                }
            }
        }

        info!("Discovery complete: {} distinct candidates", merged.len());
        Ok(merged)
    }

    #[instrument(skip(self, candidates), fields(input = candidates.len()))]
    fn locate(&self, candidates: Vec<Candidate>) -> Resolution {
        // The pass is evaluated against the policy as it was on entry
        let policy = self.policy.clone();

        let mut seen: HashSet<Identity> = HashSet::new();
        let mut resolution = Resolution::default();
        let mut rejected = 0usize;

        for candidate in candidates {
            // Each identity is resolved at most once per pass
            if !seen.insert(candidate.identity().to_string()) {
                continue;
            }
            if !policy.accepts(candidate.identity()) {
                debug!("'{}' rejected by policy", candidate.identity());
                rejected += 1;
                continue;
            }
            match self.factory.instantiate(&candidate) {
                Ok(instance) => {
                    debug!("Instantiated '{}'", candidate.identity());
                    resolution.services.push(Service::new(candidate, instance));
                }
                Err(error) => {
                    warn!("Failed to instantiate '{}': {}", candidate.identity(), error);
                    resolution.failures.push(error);
                }
            }
        }

        info!(
            "Locate complete: {} services, {} failures, {} rejected by policy",
            resolution.services.len(),
            resolution.failures.len(),
            rejected
        );
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FactoryRegistry;
    use sources::FixedSource;

    fn echo_factory() -> FactoryRegistry {
        let mut factory = FactoryRegistry::new();
        factory.register_ok("pkg.Foo", |_| "foo".to_string());
        factory.register_ok("pkg.Bar", |_| "bar".to_string());
        factory
    }

    #[test]
    fn locate_empty_input_is_empty_resolution() {
        let locator = TwoStageLocator::new(echo_factory());

        let resolution = locator.locate(Vec::new());
        assert!(resolution.is_empty());
        assert!(resolution.is_complete());
    }

    #[test]
    fn duplicate_identities_resolve_once() {
        let locator = TwoStageLocator::new(echo_factory());

        let resolution = locator.locate(vec![
            Candidate::new("pkg.Foo"),
            Candidate::new("pkg.Foo"),
            Candidate::new("pkg.Foo"),
        ]);
        assert_eq!(resolution.len(), 1);
        assert!(resolution.is_complete());
    }

    #[test]
    fn candidates_merges_sources_in_order() {
        let locator = TwoStageLocator::new(echo_factory())
            .with_source(
                FixedSource::new("first")
                    .with_identity("pkg.Foo")
                    .with_identity("pkg.Shared"),
            )
            .with_source(
                FixedSource::new("second")
                    .with_identity("pkg.Shared")
                    .with_identity("pkg.Bar"),
            );

        let candidates = locator.candidates().unwrap();
        let identities: Vec<_> = candidates.iter().map(|c| c.identity()).collect();
        assert_eq!(identities, ["pkg.Foo", "pkg.Shared", "pkg.Bar"]);

        // First source wins the duplicate
        let shared = candidates.iter().find(|c| c.identity() == "pkg.Shared").unwrap();
        assert_eq!(shared.metadata().source.as_deref(), Some("first"));
    }

    #[test]
    fn policy_gates_between_the_stages() {
        let mut locator = TwoStageLocator::new(echo_factory())
            .with_source(
                FixedSource::new("builtin")
                    .with_identity("pkg.Foo")
                    .with_identity("pkg.Bar"),
            );
        locator.blacklist(["pkg.Bar"]);

        let resolution = locator.locate_all().unwrap();
        assert_eq!(resolution.identities().collect::<Vec<_>>(), ["pkg.Foo"]);
        assert!(resolution.is_complete());
    }
}
