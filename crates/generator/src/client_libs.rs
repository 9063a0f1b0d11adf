//! Clean-slate client library generation

use crate::fsops::recreate_dir;
use crate::tool::ClientLibGenerator;
use endpoints_client_gen_common::Result;
use endpoints_client_gen_resolver::scan_extracted_docs;
use std::path::{Path, PathBuf};

/// Documents processed by a generation run, by source.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Docs from the authored `discovery_docs` setting, in resolved order.
    pub authored_docs: Vec<PathBuf>,
    /// Docs scanned out of the archive-extraction directory.
    pub extracted_docs: Vec<PathBuf>,
}

impl GenerationSummary {
    pub fn total(&self) -> usize {
        self.authored_docs.len() + self.extracted_docs.len()
    }
}

/// Generate one client-library package per discovery document.
///
/// The client-library directory is deleted and recreated first, so every run
/// reflects exactly the current document set with no stale packages. The
/// authored docs are processed first, then the extraction directory is
/// scanned and its docs processed. The two sets are not deduplicated against
/// each other: a document appearing in both is generated twice, which is
/// harmless because the later invocation overwrites the earlier package.
///
/// The first failing invocation aborts the run; packages already written by
/// earlier invocations are left in place until the next clean-slate run.
pub fn generate_client_libraries(
    generator: &dyn ClientLibGenerator,
    client_lib_dir: &Path,
    authored_docs: &[PathBuf],
    gen_discovery_docs_dir: &Path,
) -> Result<GenerationSummary> {
    recreate_dir(client_lib_dir)?;

    for doc in authored_docs {
        generator.generate(doc, client_lib_dir)?;
    }

    let extracted_docs = scan_extracted_docs(gen_discovery_docs_dir)?;
    for doc in &extracted_docs {
        generator.generate(doc, client_lib_dir)?;
    }

    Ok(GenerationSummary {
        authored_docs: authored_docs.to_vec(),
        extracted_docs,
    })
}
