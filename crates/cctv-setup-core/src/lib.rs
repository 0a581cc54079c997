//! Core library for the cctv-setup generator.
//!
//! Turns one [`config::GeneratorConfig`] into the six files of a Termux CCTV kit: an
//! install script, a Node server, an HTML dashboard, setup docs, a package manifest and a
//! camera utility script. Rendering lives in [`templates`], writing in [`emitter`].
//!
//! None of the generated files are executed here; they are opaque text.

pub mod config;
pub mod emitter;
pub mod error;
pub mod templates;
