//! Template system for the generated CCTV kit.
//!
//! Skeletons are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{server_port}}` — port the generated server binds
//! - `{{camera_resolution}}` — `<width>x<height>`
//! - `{{stream_quality}}` — quality name as configured
//! - `{{quality_factor}}` — resolved MJPEG quality factor (2, 5 or 10)
//! - `{{recording_enabled}}` — `true` / `false`
//! - `{{admin_password}}` — plaintext basic-auth password
//!
//! Values are inserted verbatim. There is no escaping for shell, JavaScript or HTML, so a
//! password containing a quote will corrupt `server.js`. This is an accepted limitation.
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/termux/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a [`TemplateId`] variant and extend [`TemplateId::ALL`]

pub mod embedded;
pub mod renderer;

use std::fmt;

/// One of the six generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    InstallScript,
    ServerCode,
    HtmlInterface,
    SetupInstructions,
    PackageManifest,
    CameraUtils,
}

impl TemplateId {
    /// Every template, in emission order.
    pub const ALL: [TemplateId; 6] = [
        Self::InstallScript,
        Self::ServerCode,
        Self::HtmlInterface,
        Self::SetupInstructions,
        Self::PackageManifest,
        Self::CameraUtils,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InstallScript => "install_script",
            Self::ServerCode => "server_code",
            Self::HtmlInterface => "html_interface",
            Self::SetupInstructions => "setup_instructions",
            Self::PackageManifest => "package_manifest",
            Self::CameraUtils => "camera_utils",
        }
    }

    /// Resolve a template by identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    /// File name written into the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::InstallScript => "install.sh",
            Self::ServerCode => "server.js",
            Self::HtmlInterface => "index.html",
            Self::SetupInstructions => "setup_instructions.md",
            Self::PackageManifest => "package.json",
            Self::CameraUtils => "camera_utils.sh",
        }
    }

    /// Shell scripts get mode `755` after writing.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::InstallScript | Self::CameraUtils)
    }

    /// The unrendered Handlebars skeleton.
    pub fn source(&self) -> &'static str {
        match self {
            Self::InstallScript => embedded::INSTALL_SCRIPT,
            Self::ServerCode => embedded::SERVER_CODE,
            Self::HtmlInterface => embedded::HTML_INTERFACE,
            Self::SetupInstructions => embedded::SETUP_INSTRUCTIONS,
            Self::PackageManifest => embedded::PACKAGE_MANIFEST,
            Self::CameraUtils => embedded::CAMERA_UTILS,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_name_roundtrips_all() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_name(id.as_str()), Some(id));
        }
        assert!(TemplateId::from_name("server.js").is_none());
        assert!(TemplateId::from_name("").is_none());
    }

    #[test]
    fn test_file_names_unique() {
        let names: HashSet<_> = TemplateId::ALL.iter().map(|id| id.file_name()).collect();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_only_shell_scripts_executable() {
        let executables: Vec<_> = TemplateId::ALL
            .iter()
            .filter(|id| id.is_executable())
            .map(|id| id.file_name())
            .collect();
        assert_eq!(executables, vec!["install.sh", "camera_utils.sh"]);
    }

    #[test]
    fn test_shell_templates_have_shebang() {
        for id in TemplateId::ALL.iter().filter(|id| id.is_executable()) {
            assert!(id.source().starts_with("#!/data/data/com.termux/files/usr/bin/bash"));
        }
    }
}
