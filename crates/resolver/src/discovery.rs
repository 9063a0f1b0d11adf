//! Discovery document file resolution

use endpoints_client_gen_common::{ClientGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of discovery documents.
pub const DISCOVERY_DOC_EXTENSION: &str = "discovery";

/// Resolve authored discovery document entries into a flat list of files.
///
/// Directory entries are expanded to their immediate `.discovery` children;
/// nested directories and non-matching files are ignored, and no recursion
/// takes place. File entries are included verbatim with no extension check,
/// since authored paths are trusted. A path that exists as neither file nor
/// directory fails resolution before any generation step runs.
pub fn resolve_discovery_docs(entries: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            docs.extend(list_discovery_docs(entry)?);
        } else if entry.is_file() {
            docs.push(entry.clone());
        } else {
            return Err(ClientGenError::Config(format!(
                "Discovery doc path does not exist: {}",
                entry.display()
            )));
        }
    }
    Ok(docs)
}

/// Scan the managed extraction directory for discovery documents.
///
/// Unlike [`resolve_discovery_docs`], a missing directory is not an error: no
/// declared server artifacts means nothing was ever extracted.
pub fn scan_extracted_docs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    list_discovery_docs(dir)
}

/// List the immediate `.discovery` children of a directory, sorted so that
/// repeated runs process documents in a stable order.
fn list_discovery_docs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_discovery_doc(&path) {
            docs.push(path);
        }
    }
    docs.sort();
    Ok(docs)
}

fn is_discovery_doc(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == DISCOVERY_DOC_EXTENSION)
}
