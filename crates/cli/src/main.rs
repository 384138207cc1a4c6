use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use descriptor::Candidate;
use locator::{FactoryRegistry, Locator, TwoStageLocator};
use sources::{DiscoverySource, ManifestSource};
use std::path::PathBuf;

/// Plugscout - plugin discovery and resolution
#[derive(Parser)]
#[command(name = "plugscout")]
#[command(about = "Discover plugin candidates and resolve them into services", long_about = None)]
struct Cli {
    /// Directory of JSON plugin manifests to scan
    #[arg(short, long, default_value = "manifests")]
    manifest_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the candidates discovery can currently see
    Candidates,

    /// Run a full discovery + resolution pass
    Locate {
        /// Only consider these identities (repeatable)
        #[arg(long = "allow")]
        allow: Vec<String>,

        /// Never consider these identities (repeatable; wins over --allow)
        #[arg(long = "deny")]
        deny: Vec<String>,
    },

    /// Validate the manifests in the manifest directory
    Check,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let source = ManifestSource::new(&cli.manifest_dir);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Candidates => handle_candidates(source)?,
        Commands::Locate { allow, deny } => handle_locate(source, allow, deny)?,
        Commands::Check => handle_check(source)?,
    }

    Ok(())
}

/// Handle the 'candidates' command
fn handle_candidates(source: ManifestSource) -> Result<()> {
    let dir = source.dir().display().to_string();
    let candidates = source
        .discover()
        .with_context(|| format!("Failed to scan {dir}"))?;

    if candidates.is_empty() {
        println!("No candidates found in {dir}");
        return Ok(());
    }

    println!("{} candidates in {}:", candidates.len(), dir);
    for candidate in &candidates {
        print_candidate(candidate);
    }
    Ok(())
}

/// Handle the 'locate' command
fn handle_locate(source: ManifestSource, allow: Vec<String>, deny: Vec<String>) -> Result<()> {
    let candidates = source
        .discover()
        .with_context(|| format!("Failed to scan {}", source.dir().display()))?;
    let total = candidates.len();

    // The demo factory produces an inert handle per discovered
    // identity, so a resolved service is one the policy let through.
    let mut factory = FactoryRegistry::new();
    for candidate in &candidates {
        factory.register_ok(candidate.identity(), |candidate: &Candidate| PluginHandle {
            identity: candidate.identity().to_string(),
        });
    }

    let mut locator = TwoStageLocator::new(factory).with_source(source);
    locator.whitelist(allow);
    locator.blacklist(deny);

    let resolution = locator.locate(candidates);

    // Skipped covers policy rejections and duplicate identities
    println!(
        "{} resolved, {} failed, {} skipped",
        resolution.len().to_string().green(),
        resolution.failures.len().to_string().red(),
        total - resolution.len() - resolution.failures.len()
    );

    for service in &resolution.services {
        let handle = service
            .instance_ref::<PluginHandle>()
            .expect("demo factory only builds PluginHandle");
        println!("  {} {}", "✓".green(), handle.identity);
    }
    for failure in &resolution.failures {
        println!("  {} {}", "✗".red(), failure);
    }

    Ok(())
}

/// Handle the 'check' command
fn handle_check(source: ManifestSource) -> Result<()> {
    let dir = source.dir().display().to_string();
    match source.discover() {
        Ok(candidates) => {
            println!(
                "{} {} valid manifests in {}",
                "✓".green(),
                candidates.len(),
                dir
            );
            Ok(())
        }
        Err(error) => {
            println!("{} {}", "✗".red(), error);
            std::process::exit(1);
        }
    }
}

fn print_candidate(candidate: &Candidate) {
    let metadata = candidate.metadata();
    let version = metadata.version.as_deref().unwrap_or("-");
    println!(
        "  {} {}",
        candidate.identity().bold(),
        format!("({version})").dimmed()
    );
    if let Some(description) = &metadata.description {
        println!("      {description}");
    }
    if let Some(origin) = &metadata.origin {
        println!("      {}", origin.dimmed());
    }
}

/// Inert stand-in instance built by the demo factory.
struct PluginHandle {
    identity: String,
}
