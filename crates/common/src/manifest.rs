//! Manifest loading from YAML files
//!
//! Projects can keep their client-generation settings in an
//! `endpoints-client.yaml` file next to the build instead of passing flags on
//! every invocation. The manifest carries the same surface as
//! [`ClientGenSettings`]; CLI flags applied afterwards override it.
//!
//! ```yaml
//! discovery_docs:
//!   - docs/echo-v1.discovery
//! server_artifacts:
//!   - server/build/discovery-docs.zip
//! client_lib_dir: build/endpoints-client-libs
//! mobile_variant: false
//! ```

use crate::{ClientGenError, ClientGenSettings, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional manifest file name looked up in the project directory.
pub const MANIFEST_FILE_NAME: &str = "endpoints-client.yaml";

/// YAML manifest mirroring the declaration-phase settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientGenManifest {
    /// Discovery document files or directories to scan.
    #[serde(default)]
    pub discovery_docs: Vec<PathBuf>,

    /// Zip archives of discovery documents from an Endpoints server build.
    #[serde(default)]
    pub server_artifacts: Vec<PathBuf>,

    /// Output directory for generated client-library packages.
    #[serde(default)]
    pub client_lib_dir: Option<PathBuf>,

    /// Output directory for generated source handed to compilation.
    #[serde(default)]
    pub gen_src_dir: Option<PathBuf>,

    /// Working directory for archive-extracted discovery documents.
    #[serde(default)]
    pub gen_discovery_docs_dir: Option<PathBuf>,

    /// Whether the consuming project targets the mobile build variant.
    #[serde(default)]
    pub mobile_variant: bool,

    /// Explicit path to the generator executable.
    #[serde(default)]
    pub generator_tool: Option<PathBuf>,
}

impl ClientGenManifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClientGenError::Config(format!(
                "Failed to read manifest file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Record every manifest statement into declaration-phase settings.
    pub fn apply_to(&self, settings: &mut ClientGenSettings) {
        for doc in &self.discovery_docs {
            settings.add_discovery_doc(doc);
        }
        for artifact in &self.server_artifacts {
            settings.add_server_artifact(artifact);
        }
        if let Some(dir) = &self.client_lib_dir {
            settings.set_client_lib_dir(dir);
        }
        if let Some(dir) = &self.gen_src_dir {
            settings.set_gen_src_dir(dir);
        }
        if let Some(dir) = &self.gen_discovery_docs_dir {
            settings.set_gen_discovery_docs_dir(dir);
        }
        if self.mobile_variant {
            settings.set_mobile_variant(true);
        }
        if let Some(tool) = &self.generator_tool {
            settings.set_generator_tool(tool);
        }
    }
}
