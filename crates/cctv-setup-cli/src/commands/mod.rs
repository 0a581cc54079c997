//! CLI command implementations for cctv-setup.
//!
//! Each module corresponds to a subcommand (`cctv-setup <command>`).

pub mod generate;
pub mod render;
pub mod templates;
