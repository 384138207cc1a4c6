//! Instantiation seam: turning accepted candidates into live instances.
//!
//! The locator core never constructs a service itself; it hands every
//! accepted candidate to a `ServiceFactory` and collects the outcome.
//! Failure is signalled per candidate so one broken constructor cannot
//! take down the rest of a batch.

use descriptor::{Candidate, Identity, ResolutionError};
use std::any::Any;
use std::collections::HashMap;

/// Type-erased service payload produced by a factory.
pub type Instance = Box<dyn Any + Send + Sync>;

/// Instantiation strategy for accepted candidates.
pub trait ServiceFactory: Send + Sync {
    /// Attempt to produce an instance for one candidate.
    ///
    /// Errors are scoped to this candidate; the locator keeps going
    /// with the rest of the batch.
    fn instantiate(&self, candidate: &Candidate) -> Result<Instance, ResolutionError>;
}

type ConstructorFn = Box<dyn Fn(&Candidate) -> Result<Instance, ResolutionError> + Send + Sync>;

/// Identity-keyed constructor table.
///
/// The reference `ServiceFactory`: register a constructor closure per
/// identity, and candidates with an unknown identity fail with
/// [`ResolutionError::NoFactory`].
#[derive(Default)]
pub struct FactoryRegistry {
    constructors: HashMap<Identity, ConstructorFn>,
}

impl FactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fallible constructor for one identity, replacing any
    /// previous registration for it.
    pub fn register<F, T>(&mut self, identity: impl Into<Identity>, constructor: F)
    where
        F: Fn(&Candidate) -> Result<T, ResolutionError> + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        let boxed: ConstructorFn =
            Box::new(move |candidate| constructor(candidate).map(|value| Box::new(value) as Instance));
        self.constructors.insert(identity.into(), boxed);
    }

    /// Register a constructor that cannot fail.
    pub fn register_ok<F, T>(&mut self, identity: impl Into<Identity>, constructor: F)
    where
        F: Fn(&Candidate) -> T + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        self.register(identity, move |candidate| Ok(constructor(candidate)));
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.constructors.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl ServiceFactory for FactoryRegistry {
    fn instantiate(&self, candidate: &Candidate) -> Result<Instance, ResolutionError> {
        match self.constructors.get(candidate.identity()) {
            Some(constructor) => constructor(candidate),
            None => Err(ResolutionError::NoFactory {
                identity: candidate.identity().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_constructor_runs() {
        let mut registry = FactoryRegistry::new();
        registry.register_ok("pkg.Counter", |_candidate| 7u32);

        let instance = registry.instantiate(&Candidate::new("pkg.Counter")).unwrap();
        assert_eq!(*instance.downcast_ref::<u32>().unwrap(), 7);
    }

    #[test]
    fn unknown_identity_fails_with_no_factory() {
        let registry = FactoryRegistry::new();

        let err = registry.instantiate(&Candidate::new("pkg.Ghost")).unwrap_err();
        assert!(matches!(err, ResolutionError::NoFactory { .. }));
        assert_eq!(err.identity(), "pkg.Ghost");
    }

    #[test]
    fn constructor_failure_carries_the_identity() {
        let mut registry = FactoryRegistry::new();
        registry.register("pkg.Broken", |candidate: &Candidate| {
            Err::<u32, _>(ResolutionError::ConstructorFailed {
                identity: candidate.identity().to_string(),
                reason: "missing dependency".to_string(),
            })
        });

        let err = registry.instantiate(&Candidate::new("pkg.Broken")).unwrap_err();
        assert_eq!(err.identity(), "pkg.Broken");
    }

    #[test]
    fn re_registration_replaces_the_constructor() {
        let mut registry = FactoryRegistry::new();
        registry.register_ok("pkg.Value", |_| 1u32);
        registry.register_ok("pkg.Value", |_| 2u32);
        assert_eq!(registry.len(), 1);

        let instance = registry.instantiate(&Candidate::new("pkg.Value")).unwrap();
        assert_eq!(*instance.downcast_ref::<u32>().unwrap(), 2);
    }

    #[test]
    fn constructor_can_read_candidate_metadata() {
        let mut registry = FactoryRegistry::new();
        registry.register_ok("pkg.Versioned", |candidate: &Candidate| {
            candidate
                .metadata()
                .version
                .clone()
                .unwrap_or_else(|| "unversioned".to_string())
        });

        let candidate = Candidate::with_metadata(
            "pkg.Versioned",
            descriptor::CandidateMetadata {
                version: Some("2.0.0".to_string()),
                ..Default::default()
            },
        );
        let instance = registry.instantiate(&candidate).unwrap();
        assert_eq!(instance.downcast_ref::<String>().unwrap(), "2.0.0");
    }
}
