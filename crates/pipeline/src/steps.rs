//! The three steps of a client generation run

use crate::{PipelineReport, PipelineStep};
use endpoints_client_gen_common::{Result, SourceRegistration};
use endpoints_client_gen_generator::{
    extract_client_sources, generate_client_libraries, ClientLibGenerator, SourceRegistrar,
};
use endpoints_client_gen_resolver::extract_archives;
use std::path::PathBuf;

pub const EXTRACT_DISCOVERY_DOCS_STEP: &str = "extract-discovery-docs";
pub const GENERATE_CLIENT_LIBRARIES_STEP: &str = "generate-client-libraries";
pub const GENERATE_CLIENT_SOURCE_STEP: &str = "generate-client-source";

/// Unpacks discovery-document archives from server builds into the managed
/// extraction directory. Runs to completion before the extracted-docs scan of
/// the generation step; the orchestrator enforces that ordering.
pub struct ExtractDiscoveryDocs {
    server_artifacts: Vec<PathBuf>,
    gen_discovery_docs_dir: PathBuf,
}

impl ExtractDiscoveryDocs {
    pub fn new(server_artifacts: Vec<PathBuf>, gen_discovery_docs_dir: PathBuf) -> Self {
        Self {
            server_artifacts,
            gen_discovery_docs_dir,
        }
    }
}

impl PipelineStep for ExtractDiscoveryDocs {
    fn name(&self) -> &str {
        EXTRACT_DISCOVERY_DOCS_STEP
    }

    fn run(&self, report: &mut PipelineReport) -> Result<()> {
        extract_archives(&self.server_artifacts, &self.gen_discovery_docs_dir)?;
        report.extracted_archives = self.server_artifacts.len();
        Ok(())
    }
}

/// Clean-slates the client-library directory and invokes the generator once
/// per discovery document, authored pass first.
pub struct GenerateClientLibraries {
    generator: Box<dyn ClientLibGenerator>,
    client_lib_dir: PathBuf,
    authored_docs: Vec<PathBuf>,
    gen_discovery_docs_dir: PathBuf,
}

impl GenerateClientLibraries {
    pub fn new(
        generator: Box<dyn ClientLibGenerator>,
        client_lib_dir: PathBuf,
        authored_docs: Vec<PathBuf>,
        gen_discovery_docs_dir: PathBuf,
    ) -> Self {
        Self {
            generator,
            client_lib_dir,
            authored_docs,
            gen_discovery_docs_dir,
        }
    }
}

impl PipelineStep for GenerateClientLibraries {
    fn name(&self) -> &str {
        GENERATE_CLIENT_LIBRARIES_STEP
    }

    fn run(&self, report: &mut PipelineReport) -> Result<()> {
        let summary = generate_client_libraries(
            self.generator.as_ref(),
            &self.client_lib_dir,
            &self.authored_docs,
            &self.gen_discovery_docs_dir,
        )?;
        report.authored_docs = summary.authored_docs;
        report.extracted_docs = summary.extracted_docs;
        Ok(())
    }
}

/// Derives the generated-source directory from the client-library packages
/// and registers it with the consuming build.
pub struct GenerateClientSource {
    registrar: Box<dyn SourceRegistrar>,
    client_lib_dir: PathBuf,
    gen_src_dir: PathBuf,
}

impl GenerateClientSource {
    pub fn new(
        registrar: Box<dyn SourceRegistrar>,
        client_lib_dir: PathBuf,
        gen_src_dir: PathBuf,
    ) -> Self {
        Self {
            registrar,
            client_lib_dir,
            gen_src_dir,
        }
    }
}

impl PipelineStep for GenerateClientSource {
    fn name(&self) -> &str {
        GENERATE_CLIENT_SOURCE_STEP
    }

    fn run(&self, report: &mut PipelineReport) -> Result<()> {
        report.copied_sources = extract_client_sources(&self.client_lib_dir, &self.gen_src_dir)?;

        let registration = self.registrar.register(&self.gen_src_dir, &mut report.layout)?;
        if matches!(registration, SourceRegistration::SourceRoot(_)) {
            // Sources must exist before compilation.
            report
                .compile_dependencies
                .push(GENERATE_CLIENT_SOURCE_STEP.to_string());
        }
        report.registration = Some(registration);
        Ok(())
    }
}
