//! Two-phase configuration for client library generation
//!
//! Configuration is split into a declaration phase and a resolution phase.
//! [`ClientGenSettings`] only records user statements (from the manifest, CLI
//! flags, or API calls) and accepts them in any order. [`ClientGenSettings::resolve`]
//! is called exactly once, after all statements have been recorded; it applies
//! defaults, anchors relative paths at the project directory, and produces an
//! immutable [`ResolvedConfig`] that the pipeline reads from.

use crate::Result;
use std::path::{Path, PathBuf};

/// Default output directory for generated client-library packages.
pub const DEFAULT_CLIENT_LIB_DIR: &str = "build/endpoints-client-libs";

/// Default directory for generated source handed to compilation.
pub const DEFAULT_GEN_SRC_DIR: &str = "build/endpoints-gen-src";

/// Default working directory for archive-extracted discovery documents.
pub const DEFAULT_GEN_DISCOVERY_DOCS_DIR: &str = "build/endpoints-discovery-docs";

/// Declaration-phase settings for client library generation.
///
/// All fields are optional; list-valued settings accumulate across statements
/// while scalar settings are last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct ClientGenSettings {
    discovery_docs: Vec<PathBuf>,
    server_artifacts: Vec<PathBuf>,
    client_lib_dir: Option<PathBuf>,
    gen_src_dir: Option<PathBuf>,
    gen_discovery_docs_dir: Option<PathBuf>,
    mobile_variant: bool,
    generator_tool: Option<PathBuf>,
}

impl ClientGenSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a discovery document path: either a `.discovery` file or a
    /// directory to be expanded during resolution.
    pub fn add_discovery_doc(&mut self, path: impl Into<PathBuf>) {
        self.discovery_docs.push(path.into());
    }

    /// Add a zip archive of discovery documents produced by an Endpoints
    /// server build.
    pub fn add_server_artifact(&mut self, path: impl Into<PathBuf>) {
        self.server_artifacts.push(path.into());
    }

    pub fn set_client_lib_dir(&mut self, path: impl Into<PathBuf>) {
        self.client_lib_dir = Some(path.into());
    }

    pub fn set_gen_src_dir(&mut self, path: impl Into<PathBuf>) {
        self.gen_src_dir = Some(path.into());
    }

    pub fn set_gen_discovery_docs_dir(&mut self, path: impl Into<PathBuf>) {
        self.gen_discovery_docs_dir = Some(path.into());
    }

    /// Declare that the consuming project targets the mobile build variant,
    /// which delegates source registration to the variant tooling.
    pub fn set_mobile_variant(&mut self, mobile_variant: bool) {
        self.mobile_variant = mobile_variant;
    }

    /// Explicit path to the generator executable. When unset, the tool is
    /// located on PATH at pipeline assembly.
    pub fn set_generator_tool(&mut self, path: impl Into<PathBuf>) {
        self.generator_tool = Some(path.into());
    }

    /// Resolution phase: apply defaults and anchor relative paths at
    /// `project_dir`. Call once, after every declaration has been recorded.
    pub fn resolve(&self, project_dir: &Path) -> Result<ResolvedConfig> {
        let anchor = |path: &Path| -> PathBuf {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_dir.join(path)
            }
        };

        Ok(ResolvedConfig {
            project_dir: project_dir.to_path_buf(),
            discovery_docs: self.discovery_docs.iter().map(|p| anchor(p)).collect(),
            server_artifacts: self.server_artifacts.iter().map(|p| anchor(p)).collect(),
            client_lib_dir: anchor(
                self.client_lib_dir
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_CLIENT_LIB_DIR)),
            ),
            gen_src_dir: anchor(
                self.gen_src_dir
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_GEN_SRC_DIR)),
            ),
            gen_discovery_docs_dir: anchor(
                self.gen_discovery_docs_dir
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_GEN_DISCOVERY_DOCS_DIR)),
            ),
            mobile_variant: self.mobile_variant,
            generator_tool: self.generator_tool.as_deref().map(anchor),
        })
    }
}

/// Immutable configuration produced by [`ClientGenSettings::resolve`].
///
/// Every path is absolute or anchored at the project directory; the pipeline
/// never consults the declaration-phase settings again.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub project_dir: PathBuf,
    pub discovery_docs: Vec<PathBuf>,
    pub server_artifacts: Vec<PathBuf>,
    pub client_lib_dir: PathBuf,
    pub gen_src_dir: PathBuf,
    pub gen_discovery_docs_dir: PathBuf,
    pub mobile_variant: bool,
    pub generator_tool: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_resolve() {
        let settings = ClientGenSettings::new();
        let config = settings.resolve(Path::new("/work/app")).unwrap();

        assert_eq!(
            config.client_lib_dir,
            Path::new("/work/app/build/endpoints-client-libs")
        );
        assert_eq!(
            config.gen_src_dir,
            Path::new("/work/app/build/endpoints-gen-src")
        );
        assert_eq!(
            config.gen_discovery_docs_dir,
            Path::new("/work/app/build/endpoints-discovery-docs")
        );
        assert!(config.discovery_docs.is_empty());
        assert!(config.server_artifacts.is_empty());
        assert!(!config.mobile_variant);
        assert!(config.generator_tool.is_none());
    }

    #[test]
    fn test_relative_paths_anchored_absolute_paths_kept() {
        let mut settings = ClientGenSettings::new();
        settings.add_discovery_doc("docs/api.discovery");
        settings.add_discovery_doc("/shared/other.discovery");
        settings.set_client_lib_dir("/tmp/libs");

        let config = settings.resolve(Path::new("/work/app")).unwrap();

        assert_eq!(
            config.discovery_docs,
            vec![
                PathBuf::from("/work/app/docs/api.discovery"),
                PathBuf::from("/shared/other.discovery"),
            ]
        );
        assert_eq!(config.client_lib_dir, Path::new("/tmp/libs"));
    }

    #[test]
    fn test_statement_order_does_not_matter() {
        let mut first = ClientGenSettings::new();
        first.set_gen_src_dir("gen");
        first.add_discovery_doc("a.discovery");

        let mut second = ClientGenSettings::new();
        second.add_discovery_doc("a.discovery");
        second.set_gen_src_dir("gen");

        let dir = Path::new("/p");
        let first = first.resolve(dir).unwrap();
        let second = second.resolve(dir).unwrap();
        assert_eq!(first.gen_src_dir, second.gen_src_dir);
        assert_eq!(first.discovery_docs, second.discovery_docs);
    }

    #[test]
    fn test_scalar_settings_are_last_write_wins() {
        let mut settings = ClientGenSettings::new();
        settings.set_client_lib_dir("first");
        settings.set_client_lib_dir("second");

        let config = settings.resolve(Path::new("/p")).unwrap();
        assert_eq!(config.client_lib_dir, Path::new("/p/second"));
    }

    #[test]
    fn test_list_settings_accumulate() {
        let mut settings = ClientGenSettings::new();
        settings.add_server_artifact("a.zip");
        settings.add_server_artifact("b.zip");

        let config = settings.resolve(Path::new("/p")).unwrap();
        assert_eq!(config.server_artifacts.len(), 2);
    }
}
