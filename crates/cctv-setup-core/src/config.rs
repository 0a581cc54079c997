//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built once at startup (defaults, optionally a JSON file,
//! then command-line overrides) and is read-only afterwards. Every template is rendered
//! from the same instance so the six generated files agree on port, resolution and
//! credentials.
//!
//! ## File format
//!
//! ```json
//! {
//!   "server_port": 8080,
//!   "camera_resolution": "1280x720",
//!   "stream_quality": "medium",
//!   "recording_enabled": true,
//!   "admin_password": "admin123"
//! }
//! ```
//!
//! Every key is optional; missing keys take the default value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CctvSetupError, Result};

/// Stream quality names with a dedicated MJPEG quality factor.
pub const KNOWN_QUALITIES: [&str; 3] = ["high", "medium", "low"];

/// Quality factor used for `"medium"` and any unrecognised quality.
pub const DEFAULT_QUALITY_FACTOR: u8 = 5;

/// The five generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Port the generated server binds.
    pub server_port: u16,
    /// Capture resolution, `<width>x<height>`.
    pub camera_resolution: String,
    /// `high`, `medium` or `low`. Other values fall back to the default factor.
    pub stream_quality: String,
    /// Whether the generated server records on a schedule.
    pub recording_enabled: bool,
    /// Basic-auth password, embedded verbatim into the generated files.
    pub admin_password: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            camera_resolution: "1280x720".into(),
            stream_quality: "medium".into(),
            recording_enabled: true,
            admin_password: "admin123".into(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CctvSetupError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| CctvSetupError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| CctvSetupError::ConfigSerialize {
                path: path.to_path_buf(),
                source: e,
            })?;
        std::fs::write(path, json).map_err(|e| CctvSetupError::filesystem(path, e))?;
        Ok(())
    }

    /// MJPEG quality factor for ffmpeg's `-q:v` (lower is better).
    pub fn quality_factor(&self) -> u8 {
        match self.stream_quality.as_str() {
            "high" => 2,
            "low" => 10,
            _ => DEFAULT_QUALITY_FACTOR,
        }
    }

    /// Non-fatal observations about suspicious values.
    ///
    /// Nothing here is rejected: values are interpolated as given.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !KNOWN_QUALITIES.contains(&self.stream_quality.as_str()) {
            warnings.push(format!(
                "unknown stream quality '{}', using quality factor {DEFAULT_QUALITY_FACTOR}",
                self.stream_quality
            ));
        }

        if !is_resolution(&self.camera_resolution) {
            warnings.push(format!(
                "camera resolution '{}' is not in <width>x<height> form",
                self.camera_resolution
            ));
        }

        if self.admin_password.contains(['"', '\'', '`', '\\', '$']) {
            warnings.push(
                "admin password contains quote or shell characters; generated files are not escaped"
                    .into(),
            );
        }

        warnings
    }
}

fn is_resolution(s: &str) -> bool {
    match s.split_once('x') {
        Some((w, h)) => {
            !w.is_empty()
                && !h.is_empty()
                && w.bytes().all(|b| b.is_ascii_digit())
                && h.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
