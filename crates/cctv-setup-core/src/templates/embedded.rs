//! Compile-time embedded skeletons for the generated kit.
//!
//! Each constant loads a template file from `templates/termux/` via [`include_str!`]. The
//! paths are relative to this source file (`crates/cctv-setup-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT add a `{{variable}}` to a template without adding it to the render context in
//! [`super::renderer`]; strict mode turns it into an error.

// -------------------------------------------------------
// Shell scripts (written with mode 755)
// -------------------------------------------------------

pub const INSTALL_SCRIPT: &str = include_str!("../../../../templates/termux/install.sh.tmpl");
pub const CAMERA_UTILS: &str = include_str!("../../../../templates/termux/camera_utils.sh.tmpl");

// -------------------------------------------------------
// Server and dashboard
// -------------------------------------------------------

pub const SERVER_CODE: &str = include_str!("../../../../templates/termux/server.js.tmpl");
pub const HTML_INTERFACE: &str = include_str!("../../../../templates/termux/index.html.tmpl");
pub const PACKAGE_MANIFEST: &str =
    include_str!("../../../../templates/termux/package.json.tmpl");

// -------------------------------------------------------
// Documentation
// -------------------------------------------------------

pub const SETUP_INSTRUCTIONS: &str =
    include_str!("../../../../templates/termux/setup_instructions.md.tmpl");
