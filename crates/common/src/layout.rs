//! Source layout handed back to the consuming build
//!
//! The pipeline does not own a compiler; it reports which directories a
//! compilation unit should treat as source roots. [`SourceLayout`] models the
//! source sets of the consuming project, and [`SourceRegistration`] records how
//! the generated sources were wired in (standard source-root registration or
//! delegation to the mobile variant tooling).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the source set that generated sources are registered into.
pub const MAIN_SOURCE_SET: &str = "main";

/// A named group of source directories within the consuming project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSet {
    pub name: String,
    pub src_dirs: Vec<PathBuf>,
}

impl SourceSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            src_dirs: Vec::new(),
        }
    }

    /// Add a source directory unless it is already registered.
    pub fn add_src_dir(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        if !self.src_dirs.contains(&dir) {
            self.src_dirs.push(dir);
        }
    }
}

/// Source sets of the consuming compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLayout {
    pub source_sets: Vec<SourceSet>,
}

impl Default for SourceLayout {
    fn default() -> Self {
        let mut main = SourceSet::new(MAIN_SOURCE_SET);
        main.add_src_dir("src/main/java");
        Self {
            source_sets: vec![main],
        }
    }
}

impl SourceLayout {
    pub fn source_set(&self, name: &str) -> Option<&SourceSet> {
        self.source_sets.iter().find(|s| s.name == name)
    }

    /// Mutable access to a source set, creating it on first use.
    pub fn source_set_mut(&mut self, name: &str) -> &mut SourceSet {
        let index = match self.source_sets.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.source_sets.push(SourceSet::new(name));
                self.source_sets.len() - 1
            }
        };
        &mut self.source_sets[index]
    }

    pub fn main_src_dirs(&self) -> &[PathBuf] {
        self.source_set(MAIN_SOURCE_SET)
            .map(|s| s.src_dirs.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_src_dir(&self, dir: &Path) -> bool {
        self.source_sets
            .iter()
            .any(|s| s.src_dirs.iter().any(|d| d == dir))
    }
}

/// How generated sources were handed to the consuming build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceRegistration {
    /// The generated-source directory was added to the main source set, and
    /// compile tasks depend on the generation step.
    SourceRoot(PathBuf),
    /// Registration is delegated to the mobile variant tooling; this pipeline
    /// performed no source-root wiring of its own.
    MobileVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_has_main_source_set() {
        let layout = SourceLayout::default();
        let main = layout.source_set(MAIN_SOURCE_SET).unwrap();
        assert_eq!(main.src_dirs, vec![PathBuf::from("src/main/java")]);
    }

    #[test]
    fn test_add_src_dir_ignores_duplicates() {
        let mut layout = SourceLayout::default();
        layout
            .source_set_mut(MAIN_SOURCE_SET)
            .add_src_dir("build/gen");
        layout
            .source_set_mut(MAIN_SOURCE_SET)
            .add_src_dir("build/gen");

        assert_eq!(layout.main_src_dirs().len(), 2);
        assert!(layout.contains_src_dir(Path::new("build/gen")));
    }

    #[test]
    fn test_source_set_mut_creates_missing_set() {
        let mut layout = SourceLayout::default();
        layout.source_set_mut("test").add_src_dir("src/test/java");

        assert_eq!(
            layout.source_set("test").unwrap().src_dirs,
            vec![PathBuf::from("src/test/java")]
        );
    }
}
