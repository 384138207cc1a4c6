//! Manifest Source - Plugin Directory Scan
//!
//! Discovers candidates by scanning a directory of JSON plugin
//! manifests, one file per potential implementation:
//!
//! ```json
//! {
//!   "identity": "com.example.plugins.Resizer",
//!   "version": "1.2.0",
//!   "description": "Scales raster images",
//!   "extra": { "author": "example.com" }
//! }
//! ```
//!
//! `identity` is required and must be non-empty; everything else is
//! optional metadata. Files without a `.json` extension are ignored.
//!
//! Failure semantics follow the discovery contract: an unreadable
//! directory or a malformed manifest fails the whole pass, while a
//! directory containing no manifests is an empty, successful result.

use crate::DiscoverySource;
use descriptor::{Candidate, CandidateMetadata, DiscoveryError, DiscoveryResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk manifest schema.
#[derive(Debug, Deserialize)]
struct Manifest {
    identity: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    extra: BTreeMap<String, String>,
}

/// Discovery source that scans a directory of `.json` manifests.
pub struct ManifestSource {
    dir: PathBuf,
    name: String,
}

impl ManifestSource {
    /// Create a source scanning the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: "manifest".to_string(),
        }
    }

    /// Override the source name used in logs and provenance
    /// (default: "manifest").
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The directory this source scans.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_manifest(&self, path: &Path) -> DiscoveryResult<Candidate> {
        let display_path = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
            path: display_path.clone(),
            source,
        })?;

        let manifest: Manifest =
            serde_json::from_str(&contents).map_err(|e| DiscoveryError::Manifest {
                path: display_path.clone(),
                reason: e.to_string(),
            })?;

        if manifest.identity.is_empty() {
            return Err(DiscoveryError::Manifest {
                path: display_path,
                reason: "empty identity".to_string(),
            });
        }

        debug!("Parsed manifest {} -> '{}'", display_path, manifest.identity);

        let metadata = CandidateMetadata {
            source: Some(self.name.clone()),
            origin: Some(display_path),
            version: manifest.version,
            description: manifest.description,
            extra: manifest.extra,
        };
        Ok(Candidate::with_metadata(manifest.identity, metadata))
    }
}

impl DiscoverySource for ManifestSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn discover(&self) -> DiscoveryResult<Vec<Candidate>> {
        debug!("Scanning {} for plugin manifests", self.dir.display());

        let entries = fs::read_dir(&self.dir).map_err(|source| DiscoveryError::Io {
            path: self.dir.display().to_string(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::Io {
                path: self.dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // Directory iteration order is platform-dependent
        paths.sort();

        let mut candidates = Vec::with_capacity(paths.len());
        for path in &paths {
            candidates.push(self.read_manifest(path)?);
        }

        debug!(
            "Source '{}' discovered {} candidates in {}",
            self.name,
            candidates.len(),
            self.dir.display()
        );
        Ok(candidates)
    }
}
