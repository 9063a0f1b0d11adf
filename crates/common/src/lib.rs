//! Common types and utilities for endpoints-client-gen
//!
//! This crate contains the shared error taxonomy, the two-phase configuration
//! model, the YAML manifest, and the source-layout model used across the
//! resolver, generator, and pipeline components.

mod config;
mod layout;
mod manifest;

pub use config::{
    ClientGenSettings, ResolvedConfig, DEFAULT_CLIENT_LIB_DIR, DEFAULT_GEN_DISCOVERY_DOCS_DIR,
    DEFAULT_GEN_SRC_DIR,
};
pub use layout::{SourceLayout, SourceRegistration, SourceSet, MAIN_SOURCE_SET};
pub use manifest::{ClientGenManifest, MANIFEST_FILE_NAME};

use thiserror::Error;

/// Errors that can occur during client library generation
#[derive(Error, Debug)]
pub enum ClientGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Source registration error: {0}")]
    Registration(String),

    #[error("Step '{step}' failed: {source}")]
    Step {
        step: String,
        #[source]
        source: Box<ClientGenError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl ClientGenError {
    /// Wrap an error with the name of the pipeline step it occurred in.
    pub fn in_step(self, step: &str) -> Self {
        ClientGenError::Step {
            step: step.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type for client generation operations
pub type Result<T> = std::result::Result<T, ClientGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_names_the_step() {
        let err = ClientGenError::Generation("tool exited with status 1".to_string())
            .in_step("generate-client-libraries");

        let message = err.to_string();
        assert!(message.contains("generate-client-libraries"));

        // The underlying message stays reachable through the source chain.
        let source = std::error::Error::source(&err).expect("step error should carry a source");
        assert!(source.to_string().contains("tool exited with status 1"));
    }
}
