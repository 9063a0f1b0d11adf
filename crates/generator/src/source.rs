//! Source extraction from client-library packages and registration

use crate::fsops::recreate_dir;
use endpoints_client_gen_common::{
    ClientGenError, Result, SourceLayout, SourceRegistration, MAIN_SOURCE_SET,
};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Name of the external tooling that handles the mobile build variant.
pub const MOBILE_VARIANT_TOOLING: &str = "endpoints-framework-mobile-client";

const JAVA_SOURCE_ROOT: [&str; 3] = ["src", "main", "java"];

/// Derive the generated-source directory from the client-library packages.
///
/// Each package under `client_lib_dir` is either a `.zip` produced by the
/// generator tool or an already-unpacked directory; in both cases every
/// `.java` file beneath a `src/main/java` root is copied into `gen_src_dir`
/// with its package-relative path preserved. `gen_src_dir` holds no state of
/// its own and is recreated from scratch on every run.
///
/// Returns the number of source files copied.
pub fn extract_client_sources(client_lib_dir: &Path, gen_src_dir: &Path) -> Result<usize> {
    if !client_lib_dir.is_dir() {
        return Err(ClientGenError::Registration(format!(
            "Client library directory missing: {}",
            client_lib_dir.display()
        )));
    }

    recreate_dir(gen_src_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(client_lib_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            copied += copy_sources_from_dir(&path, gen_src_dir)?;
        } else if is_zip(&path) {
            copied += copy_sources_from_zip(&path, gen_src_dir)?;
        }
    }

    Ok(copied)
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

fn is_java_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "java")
}

/// Path of a source file relative to its `src/main/java` root, or `None` when
/// the file does not live under one.
fn java_relative_path(path: &Path) -> Option<PathBuf> {
    let components: Vec<_> = path.iter().collect();
    let root_at = components
        .windows(JAVA_SOURCE_ROOT.len())
        .position(|window| {
            window
                .iter()
                .zip(JAVA_SOURCE_ROOT)
                .all(|(component, root)| *component == root)
        })?;

    let rest: PathBuf = components[root_at + JAVA_SOURCE_ROOT.len()..]
        .iter()
        .collect();
    if rest.as_os_str().is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn copy_sources_from_dir(package_dir: &Path, gen_src_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(package_dir) {
        let entry = entry.map_err(|e| {
            ClientGenError::Registration(format!(
                "Failed to walk client library package {}: {}",
                package_dir.display(),
                e
            ))
        })?;
        if !entry.file_type().is_file() || !is_java_source(entry.path()) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(package_dir) else {
            continue;
        };
        if let Some(source_path) = java_relative_path(relative) {
            let target = gen_src_dir.join(source_path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn copy_sources_from_zip(package_zip: &Path, gen_src_dir: &Path) -> Result<usize> {
    let file = fs::File::open(package_zip).map_err(|e| {
        ClientGenError::Registration(format!(
            "Failed to open client library package {}: {}",
            package_zip.display(),
            e
        ))
    })?;
    let mut zip = ZipArchive::new(file).map_err(|e| {
        ClientGenError::Registration(format!(
            "Malformed client library package {}: {}",
            package_zip.display(),
            e
        ))
    })?;

    let mut copied = 0;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| {
            ClientGenError::Registration(format!(
                "Malformed client library package {}: {}",
                package_zip.display(),
                e
            ))
        })?;
        if entry.is_dir() {
            continue;
        }

        let Some(entry_path) = entry.enclosed_name() else {
            continue;
        };
        if !is_java_source(&entry_path) {
            continue;
        }

        if let Some(source_path) = java_relative_path(&entry_path) {
            let target = gen_src_dir.join(source_path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = fs::File::create(&target)?;
            std::io::copy(&mut entry, &mut out_file)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Hands the generated-source directory to the consuming build.
///
/// The implementation is selected once at pipeline assembly based on the
/// declared project capabilities.
pub trait SourceRegistrar {
    fn register(&self, gen_src_dir: &Path, layout: &mut SourceLayout) -> Result<SourceRegistration>;
}

/// Standard registration: the generated-source directory becomes a source
/// root of the main source set, and compile tasks depend on the generation
/// step so sources exist before compilation.
pub struct StandardSourceRegistrar;

impl SourceRegistrar for StandardSourceRegistrar {
    fn register(&self, gen_src_dir: &Path, layout: &mut SourceLayout) -> Result<SourceRegistration> {
        layout
            .source_set_mut(MAIN_SOURCE_SET)
            .add_src_dir(gen_src_dir);
        Ok(SourceRegistration::SourceRoot(gen_src_dir.to_path_buf()))
    }
}

/// Mobile-variant registration: source wiring is owned by the variant
/// tooling ([`MOBILE_VARIANT_TOOLING`]); this pipeline records the delegation
/// and touches no source set.
pub struct MobileVariantRegistrar;

impl SourceRegistrar for MobileVariantRegistrar {
    fn register(
        &self,
        _gen_src_dir: &Path,
        _layout: &mut SourceLayout,
    ) -> Result<SourceRegistration> {
        Ok(SourceRegistration::MobileVariant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_relative_path_strips_source_root() {
        assert_eq!(
            java_relative_path(Path::new(
                "echo-v1/src/main/java/com/example/echo/Echo.java"
            )),
            Some(PathBuf::from("com/example/echo/Echo.java"))
        );
    }

    #[test]
    fn test_java_relative_path_requires_source_root() {
        assert_eq!(
            java_relative_path(Path::new("echo-v1/build.gradle")),
            None
        );
        assert_eq!(java_relative_path(Path::new("src/main/java")), None);
    }

    #[test]
    fn test_standard_registrar_extends_main_source_set() {
        let mut layout = SourceLayout::default();
        let registration = StandardSourceRegistrar
            .register(Path::new("/p/build/endpoints-gen-src"), &mut layout)
            .unwrap();

        assert_eq!(
            registration,
            SourceRegistration::SourceRoot(PathBuf::from("/p/build/endpoints-gen-src"))
        );
        assert!(layout.contains_src_dir(Path::new("/p/build/endpoints-gen-src")));
    }

    #[test]
    fn test_mobile_variant_registrar_leaves_layout_alone() {
        let mut layout = SourceLayout::default();
        let before = layout.clone();

        let registration = MobileVariantRegistrar
            .register(Path::new("/p/build/endpoints-gen-src"), &mut layout)
            .unwrap();

        assert_eq!(registration, SourceRegistration::MobileVariant);
        assert_eq!(layout, before);
    }
}
