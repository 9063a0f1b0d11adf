//! External Endpoints framework tool invocation

use endpoints_client_gen_common::{ClientGenError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the Endpoints framework tool executable looked up on PATH.
pub const ENDPOINTS_TOOL: &str = "endpoints-framework-tool";

const CLIENT_LIB_ACTION: &str = "get-client-lib";
const TARGET_LANGUAGE: &str = "java";
const BUILD_SYSTEM: &str = "gradle";

/// Seam to the external code generator.
///
/// Given a discovery document, an implementation emits one client-library
/// package under the shared output directory. Invocations are independent;
/// any failure is fatal to the generation step.
#[cfg_attr(test, mockall::automock)]
pub trait ClientLibGenerator {
    fn generate(&self, discovery_doc: &Path, output_dir: &Path) -> Result<()>;
}

/// Production generator backed by the `endpoints-framework-tool` executable.
///
/// The tool is invoked as
/// `endpoints-framework-tool get-client-lib -l java -bs gradle -o <output_dir> <doc>`;
/// target language and build system are fixed.
pub struct EndpointsToolGenerator {
    tool_path: PathBuf,
}

impl EndpointsToolGenerator {
    /// Locate the generator tool, preferring an explicitly configured path
    /// over a PATH lookup.
    pub fn locate(configured: Option<&Path>) -> Result<Self> {
        let tool_path = match configured {
            Some(path) if path.is_file() => path.to_path_buf(),
            Some(path) => {
                return Err(ClientGenError::Generation(format!(
                    "Configured generator tool not found: {}",
                    path.display()
                )))
            }
            None => which::which(ENDPOINTS_TOOL).map_err(|_| {
                ClientGenError::Generation(format!(
                    "'{}' not found on PATH; install the Endpoints framework tools \
                     or configure generator_tool",
                    ENDPOINTS_TOOL
                ))
            })?,
        };

        Ok(Self { tool_path })
    }

    pub fn tool_path(&self) -> &Path {
        &self.tool_path
    }
}

impl ClientLibGenerator for EndpointsToolGenerator {
    fn generate(&self, discovery_doc: &Path, output_dir: &Path) -> Result<()> {
        let output = Command::new(&self.tool_path)
            .arg(CLIENT_LIB_ACTION)
            .args(["-l", TARGET_LANGUAGE, "-bs", BUILD_SYSTEM])
            .arg("-o")
            .arg(output_dir)
            .arg(discovery_doc)
            .output()
            .map_err(|e| {
                ClientGenError::Generation(format!(
                    "Failed to run {}: {}",
                    self.tool_path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClientGenError::Generation(format!(
                "Client library generation failed for {}: {}",
                discovery_doc.display(),
                stderr.trim()
            )));
        }

        Ok(())
    }
}
