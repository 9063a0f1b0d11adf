//! Extraction of discovery document archives

use endpoints_client_gen_common::{ClientGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Unpack every archive into `target_dir`, replacing its previous contents.
///
/// An empty archive set is a successful no-op that leaves `target_dir`
/// untouched (in particular, absent if it never existed); the downstream
/// directory scan tolerates that. With at least one archive, `target_dir` is
/// deleted and recreated first, so each run reflects exactly the declared
/// artifacts.
pub fn extract_archives(archives: &[PathBuf], target_dir: &Path) -> Result<()> {
    if archives.is_empty() {
        return Ok(());
    }

    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }
    fs::create_dir_all(target_dir)?;

    for archive in archives {
        extract_archive(archive, target_dir)?;
    }
    Ok(())
}

fn extract_archive(archive: &Path, target_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive).map_err(|e| {
        ClientGenError::Extraction(format!("Failed to open archive {}: {}", archive.display(), e))
    })?;

    let mut zip = ZipArchive::new(file).map_err(|e| {
        ClientGenError::Extraction(format!("Failed to read archive {}: {}", archive.display(), e))
    })?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| {
            ClientGenError::Extraction(format!(
                "Failed to read entry {} of archive {}: {}",
                i,
                archive.display(),
                e
            ))
        })?;

        // Reject entries whose paths would escape the target directory.
        let Some(relative) = entry.enclosed_name() else {
            return Err(ClientGenError::Extraction(format!(
                "Archive {} contains unsafe entry path '{}'",
                archive.display(),
                entry.name()
            )));
        };

        let out_path = target_dir.join(relative);
        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&out_path)?;
            std::io::copy(&mut entry, &mut out_file)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = fs::File::create(path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_empty_archive_set_leaves_target_absent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("discovery-docs");

        extract_archives(&[], &target).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_extracts_entries_preserving_paths() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("docs.zip");
        write_zip(
            &archive,
            &[
                ("echo-v1.discovery", "{\"name\": \"echo\"}"),
                ("nested/greet-v1.discovery", "{\"name\": \"greet\"}"),
            ],
        );

        let target = dir.path().join("out");
        extract_archives(&[archive], &target).unwrap();

        assert!(target.join("echo-v1.discovery").is_file());
        assert!(target.join("nested/greet-v1.discovery").is_file());
    }

    #[test]
    fn test_prior_target_contents_replaced() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("stale.discovery"), "{}").unwrap();

        let archive = dir.path().join("docs.zip");
        write_zip(&archive, &[("fresh.discovery", "{}")]);
        extract_archives(&[archive], &target).unwrap();

        assert!(!target.join("stale.discovery").exists());
        assert!(target.join("fresh.discovery").is_file());
    }

    #[test]
    fn test_unreadable_archive_is_extraction_error() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("broken.zip");
        fs::write(&archive, "not a zip").unwrap();

        let result = extract_archives(&[archive], &dir.path().join("out"));
        assert!(matches!(result, Err(ClientGenError::Extraction(_))));
    }
}
