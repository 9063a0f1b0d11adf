//! Step orchestration for endpoints-client-gen
//!
//! Assembles the fixed, linear step chain of a client generation run:
//!
//! 1. `extract-discovery-docs` unpacks server-built archives into the
//!    managed discovery-docs directory,
//! 2. `generate-client-libraries` clean-slates the client-library directory
//!    and invokes the external generator per document,
//! 3. `generate-client-source` derives the generated-source directory and
//!    registers it with the consuming build.
//!
//! Each step's filesystem output is the next step's input, so execution is
//! strictly sequential; ordering is enforced by the assembly order, not
//! inferred from data flow. Authored discovery documents are resolved at
//! assembly time, so configuration errors surface before any step touches
//! the filesystem.

mod report;
mod steps;

pub use report::PipelineReport;
pub use steps::{
    ExtractDiscoveryDocs, GenerateClientLibraries, GenerateClientSource,
    EXTRACT_DISCOVERY_DOCS_STEP, GENERATE_CLIENT_LIBRARIES_STEP, GENERATE_CLIENT_SOURCE_STEP,
};

use endpoints_client_gen_common::{ResolvedConfig, Result};
use endpoints_client_gen_generator::{
    ClientLibGenerator, EndpointsToolGenerator, MobileVariantRegistrar, SourceRegistrar,
    StandardSourceRegistrar,
};
use endpoints_client_gen_resolver::resolve_discovery_docs;

/// One stage of a client generation run.
pub trait PipelineStep {
    /// Stable task-style name, reported when the step fails.
    fn name(&self) -> &str;

    fn run(&self, report: &mut PipelineReport) -> Result<()>;
}

/// The assembled step chain for one generation run.
pub struct ClientGenPipeline {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl ClientGenPipeline {
    /// Assemble with the production generator tool and the registrar selected
    /// by the project's declared capabilities.
    pub fn assemble(config: &ResolvedConfig) -> Result<Self> {
        let generator = Box::new(EndpointsToolGenerator::locate(
            config.generator_tool.as_deref(),
        )?);
        let registrar: Box<dyn SourceRegistrar> = if config.mobile_variant {
            Box::new(MobileVariantRegistrar)
        } else {
            Box::new(StandardSourceRegistrar)
        };
        Self::from_parts(config, generator, registrar)
    }

    /// Assemble with explicit collaborators. Used by embedders and tests that
    /// substitute the external generator.
    pub fn from_parts(
        config: &ResolvedConfig,
        generator: Box<dyn ClientLibGenerator>,
        registrar: Box<dyn SourceRegistrar>,
    ) -> Result<Self> {
        // Fail-closed: authored documents are resolved here, before any step
        // runs, so a bad path never leaves partial output behind.
        let authored_docs = resolve_discovery_docs(&config.discovery_docs)?;

        let steps: Vec<Box<dyn PipelineStep>> = vec![
            Box::new(ExtractDiscoveryDocs::new(
                config.server_artifacts.clone(),
                config.gen_discovery_docs_dir.clone(),
            )),
            Box::new(GenerateClientLibraries::new(
                generator,
                config.client_lib_dir.clone(),
                authored_docs,
                config.gen_discovery_docs_dir.clone(),
            )),
            Box::new(GenerateClientSource::new(
                registrar,
                config.client_lib_dir.clone(),
                config.gen_src_dir.clone(),
            )),
        ];

        Ok(Self { steps })
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run the chain in order, stopping at the first failing step. The error
    /// carries the failing step's name around the underlying cause.
    pub fn run(&self) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();
        for step in &self.steps {
            step.run(&mut report).map_err(|e| e.in_step(step.name()))?;
        }
        Ok(report)
    }
}
