//! Simple test harness for the two-stage locator.
//!
//! This binary wires a fixed source to a small factory and runs one
//! discovery/locate pass end to end, with one deliberately broken
//! constructor to show the partial-failure report.

use anyhow::Result;
use tracing::info;

use descriptor::{Candidate, ResolutionError};
use locator::{FactoryRegistry, Locator, TwoStageLocator};
use sources::FixedSource;

#[derive(Debug)]
struct Greeter {
    greeting: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,locator=debug,sources=debug,policy=debug")
        .init();

    info!("Starting locator test harness");

    let source = FixedSource::new("builtin")
        .with_identity("demo.Greeter")
        .with_identity("demo.Broken")
        .with_identity("demo.Denied");

    let mut factory = FactoryRegistry::new();
    factory.register_ok("demo.Greeter", |_candidate| Greeter {
        greeting: "hello from a resolved service".to_string(),
    });
    factory.register("demo.Broken", |candidate: &Candidate| {
        Err::<Greeter, _>(ResolutionError::ConstructorFailed {
            identity: candidate.identity().to_string(),
            reason: "simulated missing dependency".to_string(),
        })
    });
    factory.register_ok("demo.Denied", |_candidate| Greeter {
        greeting: "never constructed".to_string(),
    });

    let mut locator = TwoStageLocator::new(factory).with_source(source);
    locator.blacklist(["demo.Denied"]);

    info!("Enumerating candidates...");
    let candidates = locator.candidates()?;
    for candidate in &candidates {
        info!(
            "  candidate: {} (source: {})",
            candidate.identity(),
            candidate.metadata().source.as_deref().unwrap_or("?")
        );
    }

    info!("Resolving...");
    let resolution = locator.locate(candidates);

    info!("Resolved {} services:", resolution.len());
    for service in &resolution.services {
        let greeter = service.instance_ref::<Greeter>();
        info!(
            "  {} -> {}",
            service.identity(),
            greeter.map(|g| g.greeting.as_str()).unwrap_or("<unknown type>")
        );
    }

    info!("{} failures:", resolution.failures.len());
    for failure in &resolution.failures {
        info!("  {}", failure);
    }

    Ok(())
}
