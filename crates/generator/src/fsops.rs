//! Filesystem helpers shared by the generation steps

use endpoints_client_gen_common::Result;
use std::fs;
use std::path::Path;

/// Delete and recreate a directory owned by a generation step.
pub(crate) fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_recreate_dir_drops_prior_contents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("out");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/stale.txt"), "old").unwrap();

        recreate_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert!(!dir.join("nested").exists());
    }
}
