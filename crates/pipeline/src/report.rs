//! Outcome report of a generation run

use endpoints_client_gen_common::{SourceLayout, SourceRegistration};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a completed run produced and how it was wired into the build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// Server artifact archives unpacked into the discovery-docs directory.
    pub extracted_archives: usize,

    /// Discovery documents from the authored settings, in processing order.
    pub authored_docs: Vec<PathBuf>,

    /// Discovery documents scanned out of the extraction directory.
    pub extracted_docs: Vec<PathBuf>,

    /// Java source files copied into the generated-source directory.
    pub copied_sources: usize,

    /// How the generated sources were handed to the consuming build.
    pub registration: Option<SourceRegistration>,

    /// Steps that compile-like tasks of the consuming build must run after.
    pub compile_dependencies: Vec<String>,

    /// Source sets of the consuming compilation unit after registration.
    pub layout: SourceLayout,
}

impl Default for PipelineReport {
    fn default() -> Self {
        Self {
            extracted_archives: 0,
            authored_docs: Vec::new(),
            extracted_docs: Vec::new(),
            copied_sources: 0,
            registration: None,
            compile_dependencies: Vec::new(),
            layout: SourceLayout::default(),
        }
    }
}

impl PipelineReport {
    /// Total number of discovery documents processed across both passes.
    pub fn total_docs(&self) -> usize {
        self.authored_docs.len() + self.extracted_docs.len()
    }
}
