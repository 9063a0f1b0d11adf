//! endpoints-client-gen CLI
//!
//! Command-line interface for generating Cloud Endpoints Java client
//! libraries from API discovery documents.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use endpoints_client_gen_common::{
    ClientGenManifest, ClientGenSettings, ResolvedConfig, SourceRegistration, MANIFEST_FILE_NAME,
};
use endpoints_client_gen_generator::MOBILE_VARIANT_TOOLING;
use endpoints_client_gen_pipeline::ClientGenPipeline;
use endpoints_client_gen_resolver::{resolve_discovery_docs, scan_extracted_docs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "endpoints-client-gen")]
#[command(version, about = "Generate Cloud Endpoints Java client libraries from discovery documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full chain: extract archives, generate client libraries,
    /// derive and register sources
    #[command(after_help = "EXAMPLES:\n  \
        # Generate from an authored discovery doc\n  \
        endpoints-client-gen generate --discovery-doc docs/echo-v1.discovery\n\n  \
        # Generate from a server-built archive of discovery docs\n  \
        endpoints-client-gen generate --server-artifact server/build/discovery-docs.zip\n\n  \
        # Use the manifest in the project directory, print a JSON report\n  \
        endpoints-client-gen generate --project-dir app/ --json")]
    Generate {
        #[command(flatten)]
        options: GenOptions,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the discovery documents a generation run would process
    #[command(after_help = "EXAMPLES:\n  \
        # Show what a directory entry expands to\n  \
        endpoints-client-gen resolve --discovery-doc docs/")]
    Resolve {
        #[command(flatten)]
        options: GenOptions,
    },
}

#[derive(Args)]
struct GenOptions {
    /// Project directory that relative paths are anchored at
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Manifest file (defaults to endpoints-client.yaml in the project dir)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Discovery document file or directory to scan (repeatable)
    #[arg(short, long = "discovery-doc")]
    discovery_docs: Vec<PathBuf>,

    /// Zip archive of discovery documents from an Endpoints server build
    /// (repeatable)
    #[arg(long = "server-artifact")]
    server_artifacts: Vec<PathBuf>,

    /// Output directory for generated client-library packages
    #[arg(long)]
    client_lib_dir: Option<PathBuf>,

    /// Output directory for generated source handed to compilation
    #[arg(long)]
    gen_src_dir: Option<PathBuf>,

    /// Working directory for archive-extracted discovery documents
    #[arg(long)]
    gen_discovery_docs_dir: Option<PathBuf>,

    /// Delegate source registration to the mobile variant tooling
    #[arg(long)]
    mobile_variant: bool,

    /// Explicit path to the endpoints-framework-tool executable
    #[arg(long)]
    generator_tool: Option<PathBuf>,
}

impl GenOptions {
    /// Record manifest statements first, then flags, so flags override the
    /// manifest; resolve once everything is declared.
    fn resolve_config(&self, verbose: bool) -> Result<ResolvedConfig> {
        let mut settings = ClientGenSettings::new();

        let manifest_path = self.manifest.clone().or_else(|| {
            let conventional = self.project_dir.join(MANIFEST_FILE_NAME);
            conventional.is_file().then_some(conventional)
        });
        if let Some(path) = manifest_path {
            if verbose {
                println!("  Manifest: {}", path.display());
            }
            let manifest = ClientGenManifest::load(&path)
                .with_context(|| format!("Failed to load manifest {}", path.display()))?;
            manifest.apply_to(&mut settings);
        }

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

        let config = settings
            .resolve(&self.project_dir)
            .context("Failed to resolve configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { options, json } => generate_command(&options, json, cli.verbose),
        Commands::Resolve { options } => resolve_command(&options, cli.verbose),
    }
}

fn generate_command(options: &GenOptions, json: bool, verbose: bool) -> Result<()> {
    let config = options.resolve_config(verbose)?;

    if verbose {
        println!("  Project dir: {}", config.project_dir.display());
        println!("  Client libs: {}", config.client_lib_dir.display());
        println!("  Gen src: {}", config.gen_src_dir.display());
    }

    println!(
        "{} Generating client libraries into {}",
        "→".cyan(),
        config.client_lib_dir.display()
    );

    let pipeline =
        ClientGenPipeline::assemble(&config).context("Failed to assemble generation pipeline")?;
    let report = pipeline.run().context("Client library generation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!(
        "  Documents: {} authored, {} extracted",
        report.authored_docs.len(),
        report.extracted_docs.len()
    );
    println!(
        "  Sources: {} files in {}",
        report.copied_sources,
        config.gen_src_dir.display()
    );
    match &report.registration {
        Some(SourceRegistration::SourceRoot(dir)) => {
            println!("  Registered source root: {}", dir.display().to_string().yellow());
        }
        Some(SourceRegistration::MobileVariant) => {
            println!(
                "  Source registration delegated to {}",
                MOBILE_VARIANT_TOOLING.yellow()
            );
        }
        None => {}
    }

    Ok(())
}

fn resolve_command(options: &GenOptions, verbose: bool) -> Result<()> {
    let config = options.resolve_config(verbose)?;

    let authored = resolve_discovery_docs(&config.discovery_docs)
        .context("Failed to resolve discovery docs")?;
    let extracted = scan_extracted_docs(&config.gen_discovery_docs_dir)
        .context("Failed to scan extracted discovery docs")?;

    println!(
        "{} {} authored discovery doc(s)",
        "→".cyan(),
        authored.len()
    );
    for doc in &authored {
        println!("  • {}", doc.display());
    }

    if config.server_artifacts.is_empty() && extracted.is_empty() {
        return Ok(());
    }

    println!(
        "{} {} extracted discovery doc(s) from a previous run",
        "→".cyan(),
        extracted.len()
    );
    for doc in &extracted {
        println!("  • {}", doc.display());
    }
    if !config.server_artifacts.is_empty() {
        println!(
            "{} {} server artifact(s) will be re-extracted at generate time",
            "→".cyan(),
            config.server_artifacts.len()
        );
    }

    Ok(())
}
