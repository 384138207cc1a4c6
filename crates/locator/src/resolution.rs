//! Outcome of a locate pass: services plus per-candidate failures.

use descriptor::{ResolutionError, Service};

/// Report of one locate pass.
///
/// Successes and failures travel together: a candidate whose
/// instantiation failed never aborts the batch, it shows up in
/// `failures` instead. Candidates the policy rejected appear in
/// neither list: being filtered out is absence, not an error.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Services that instantiated, in no particular order
    pub services: Vec<Service>,
    /// Accepted candidates that failed to instantiate
    pub failures: Vec<ResolutionError>,
}

impl Resolution {
    /// True when every accepted candidate instantiated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of services produced.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True when the pass produced no services at all.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Identities of the services that instantiated.
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|service| service.identity())
    }

    /// Identities of the candidates that failed.
    pub fn failed_identities(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|failure| failure.identity())
    }

    /// Discard the failure report and keep the services.
    ///
    /// Callers taking this shortcut accept that the result may be
    /// incomplete relative to the candidate set they passed in.
    pub fn into_services(self) -> Vec<Service> {
        self.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use descriptor::{Candidate, ResolutionError, Service};

    #[test]
    fn empty_resolution_is_complete() {
        let resolution = Resolution::default();
        assert!(resolution.is_complete());
        assert!(resolution.is_empty());
        assert_eq!(resolution.len(), 0);
    }

    #[test]
    fn reports_both_channels() {
        let resolution = Resolution {
            services: vec![Service::new(Candidate::new("pkg.Ok"), Box::new(()))],
            failures: vec![ResolutionError::NoFactory {
                identity: "pkg.Missing".to_string(),
            }],
        };

        assert!(!resolution.is_complete());
        assert_eq!(resolution.identities().collect::<Vec<_>>(), ["pkg.Ok"]);
        assert_eq!(
            resolution.failed_identities().collect::<Vec<_>>(),
            ["pkg.Missing"]
        );
        assert_eq!(resolution.into_services().len(), 1);
    }
}
