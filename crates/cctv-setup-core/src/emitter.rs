//! Output directory creation and file emission.
//!
//! ## Directory layout
//!
//! ```text
//! <output>/
//! ├── install.sh              # mode 755
//! ├── server.js
//! ├── index.html
//! ├── setup_instructions.md
//! ├── package.json
//! └── camera_utils.sh         # mode 755
//! ```
//!
//! Existing files are overwritten. A failed write stops the run and leaves the files
//! written so far in place.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{CctvSetupError, Result};
use crate::templates::renderer::TemplateRenderer;
use crate::templates::TemplateId;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./cctv-setup";

/// Mode applied to the generated shell scripts.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// What a successful [`emit_all`] produced.
#[derive(Debug, Clone)]
pub struct EmitReport {
    /// Absolute path of the output directory.
    pub output_dir: PathBuf,
    /// Written files, in emission order.
    pub files: Vec<PathBuf>,
}

/// Create `path` and any missing ancestors. No-op when it already is a directory.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(CctvSetupError::filesystem(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path is empty"),
        ));
    }

    if path.is_dir() {
        tracing::debug!(path = %path.display(), "output directory already exists");
        return Ok(());
    }

    if path.exists() {
        return Err(CctvSetupError::filesystem(
            path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists and is not a directory",
            ),
        ));
    }

    std::fs::create_dir_all(path).map_err(|e| CctvSetupError::filesystem(path, e))?;
    tracing::info!(path = %path.display(), "created output directory");
    Ok(())
}

/// Render every template from `config` and write it into `output_dir`.
pub fn emit_all(config: &GeneratorConfig, output_dir: &Path) -> Result<EmitReport> {
    ensure_output_directory(output_dir)?;
    let absolute_dir = std::path::absolute(output_dir)
        .map_err(|e| CctvSetupError::filesystem(output_dir, e))?;

    let renderer = TemplateRenderer::new();
    let mut files = Vec::with_capacity(TemplateId::ALL.len());

    for id in TemplateId::ALL {
        let path = output_dir.join(id.file_name());
        let contents = renderer.render(id, config)?;
        write_file(&path, &contents)?;
        tracing::info!(template = %id, path = %path.display(), bytes = contents.len(), "wrote file");
        files.push(path);
    }

    for id in TemplateId::ALL.iter().filter(|id| id.is_executable()) {
        make_executable(&output_dir.join(id.file_name()))?;
    }

    Ok(EmitReport {
        output_dir: absolute_dir,
        files,
    })
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| CctvSetupError::filesystem(path, e))
}

/// Set `path` to mode `755`.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| CctvSetupError::filesystem(path, e))?;
    tracing::debug!(path = %path.display(), mode = %format!("{EXECUTABLE_MODE:o}"), "set permissions");
    Ok(())
}

/// Mode bits do not exist off unix; the file only has to exist.
#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| CctvSetupError::filesystem(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn dir_entries(dir: &Path) -> BTreeSet<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect()
    }

    fn expected_names() -> BTreeSet<String> {
        TemplateId::ALL
            .iter()
            .map(|id| id.file_name().to_string())
            .collect()
    }

    #[test]
    fn test_ensure_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a/b/cctv-setup");
        ensure_output_directory(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cctv-setup");
        ensure_output_directory(&out).unwrap();
        std::fs::write(out.join("keep.txt"), "keep").unwrap();
        ensure_output_directory(&out).unwrap();
        assert_eq!(std::fs::read_to_string(out.join("keep.txt")).unwrap(), "keep");
        assert_eq!(dir_entries(&out).len(), 1);
    }

    #[test]
    fn test_ensure_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cctv-setup");
        std::fs::write(&out, "not a dir").unwrap();
        let err = ensure_output_directory(&out).unwrap_err();
        assert!(matches!(err, CctvSetupError::Filesystem { .. }));
        assert_eq!(err.path(), Some(out.as_path()));
    }

    #[test]
    fn test_ensure_rejects_empty_path() {
        let err = ensure_output_directory(Path::new("")).unwrap_err();
        assert!(matches!(err, CctvSetupError::Filesystem { .. }));
        assert_eq!(err.path(), Some(Path::new("")));
    }

    #[test]
    fn test_emit_all_empty_path_writes_nothing() {
        let err = emit_all(&GeneratorConfig::default(), Path::new("")).unwrap_err();
        assert!(matches!(err, CctvSetupError::Filesystem { .. }));
        for id in TemplateId::ALL {
            assert!(
                !Path::new(id.file_name()).exists(),
                "{id} written to the working directory"
            );
        }
    }

    #[test]
    fn test_emit_all_writes_exactly_six_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("cctv-setup");
        let report = emit_all(&GeneratorConfig::default(), &out).unwrap();
        assert_eq!(dir_entries(&out), expected_names());
        assert_eq!(report.files.len(), 6);
        assert!(report.output_dir.is_absolute());
        assert_eq!(report.files[0], out.join("install.sh"));
        assert_eq!(report.files[5], out.join("camera_utils.sh"));
    }

    #[test]
    fn test_emit_all_default_scenario() {
        let dir = tempfile::tempdir().unwrap();
        emit_all(&GeneratorConfig::default(), dir.path()).unwrap();
        let server = std::fs::read_to_string(dir.path().join("server.js")).unwrap();
        let docs = std::fs::read_to_string(dir.path().join("setup_instructions.md")).unwrap();
        assert!(server.contains("const PORT = 8080;"));
        assert!(docs.contains("http://[PHONE_IP]:8080"));
    }

    #[cfg(unix)]
    #[test]
    fn test_emit_all_sets_executable_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        emit_all(&GeneratorConfig::default(), dir.path()).unwrap();
        for id in TemplateId::ALL {
            let mode = std::fs::metadata(dir.path().join(id.file_name()))
                .unwrap()
                .permissions()
                .mode();
            if id.is_executable() {
                assert_eq!(mode & 0o777, 0o755, "{id}");
            }
        }
    }

    #[test]
    fn test_emit_all_twice_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        emit_all(&config, dir.path()).unwrap();
        let first: Vec<_> = TemplateId::ALL
            .iter()
            .map(|id| std::fs::read(dir.path().join(id.file_name())).unwrap())
            .collect();

        emit_all(&config, dir.path()).unwrap();
        let second: Vec<_> = TemplateId::ALL
            .iter()
            .map(|id| std::fs::read(dir.path().join(id.file_name())).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(dir_entries(dir.path()), expected_names());
    }

    #[test]
    fn test_emit_all_replaces_stale_content() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("server.js"), "stale").unwrap();
        let config = GeneratorConfig {
            server_port: 9090,
            ..GeneratorConfig::default()
        };
        emit_all(&config, dir.path()).unwrap();
        let server = std::fs::read_to_string(dir.path().join("server.js")).unwrap();
        assert!(server.contains("const PORT = 9090;"));
    }

    #[test]
    fn test_emit_all_stops_at_failing_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of server.js makes its write fail.
        std::fs::create_dir(dir.path().join("server.js")).unwrap();

        let err = emit_all(&GeneratorConfig::default(), dir.path()).unwrap_err();
        assert!(err.to_string().contains("server.js"));
        assert_eq!(err.path(), Some(dir.path().join("server.js").as_path()));

        // Earlier files stay, later ones were never written.
        assert!(dir.path().join("install.sh").is_file());
        assert!(!dir.path().join("index.html").exists());
        assert!(!dir.path().join("camera_utils.sh").exists());
    }
}
