//! Handlebars-based template renderer for the generated kit.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! `{{variable}}` missing from the context is an error rather than an empty string, and
//! with HTML escaping switched off: values land verbatim in shell, JavaScript, HTML,
//! Markdown and JSON alike.
//!
//! ## Usage
//!
//! ```ignore
//! use cctv_setup_core::config::GeneratorConfig;
//! use cctv_setup_core::templates::{renderer::TemplateRenderer, TemplateId};
//!
//! let renderer = TemplateRenderer::new();
//! let server_js = renderer.render(TemplateId::ServerCode, &GeneratorConfig::default())?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use super::TemplateId;
use crate::config::GeneratorConfig;
use crate::error::{CctvSetupError, Result};

/// Values exposed to every template.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub server_port: u16,
    pub camera_resolution: &'a str,
    pub stream_quality: &'a str,
    pub quality_factor: u8,
    pub recording_enabled: bool,
    pub admin_password: &'a str,
}

impl<'a> From<&'a GeneratorConfig> for RenderContext<'a> {
    fn from(config: &'a GeneratorConfig) -> Self {
        Self {
            server_port: config.server_port,
            camera_resolution: &config.camera_resolution,
            stream_quality: &config.stream_quality,
            quality_factor: config.quality_factor(),
            recording_enabled: config.recording_enabled,
            admin_password: &config.admin_password,
        }
    }
}

/// Template renderer using Handlebars for generating the kit files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render one of the embedded templates from a configuration.
    ///
    /// Pure: the same `(id, config)` always yields byte-identical output.
    pub fn render(&self, id: TemplateId, config: &GeneratorConfig) -> Result<String> {
        self.render_str(id.source(), &RenderContext::from(config))
    }

    /// Render an arbitrary template string with the given context.
    pub fn render_str<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| CctvSetupError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
