//! Example: Discover candidates from the reference sources
//!
//! Run with: cargo run --package sources --example discover_candidates [manifest-dir]
//!
//! This example shows how to:
//! 1. Build a fixed in-memory source
//! 2. Scan a manifest directory (if one is given)
//! 3. Display the discovered candidates with their provenance

use sources::{DiscoverySource, FixedSource, ManifestSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let fixed = FixedSource::new("builtin")
        .with_identity("com.example.plugins.Echo")
        .with_identity("com.example.plugins.Resizer");

    println!("=== Fixed source ===");
    for candidate in fixed.discover()? {
        println!(
            "{} (source: {})",
            candidate.identity(),
            candidate.metadata().source.as_deref().unwrap_or("?")
        );
    }

    if let Some(dir) = std::env::args().nth(1) {
        println!("\n=== Manifest source: {dir} ===");
        let manifests = ManifestSource::new(&dir);
        for candidate in manifests.discover()? {
            println!(
                "{} {} (origin: {})",
                candidate.identity(),
                candidate.metadata().version.as_deref().unwrap_or("-"),
                candidate.metadata().origin.as_deref().unwrap_or("?")
            );
        }
    }

    Ok(())
}
