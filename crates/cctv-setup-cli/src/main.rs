//! cctv-setup CLI — writes a ready-to-copy Termux CCTV kit to a local directory.
//!
//! Three commands: `generate` (the default), `render`, and `templates`.
//! Each delegates to [`cctv_setup_core`] for configuration, rendering and file emission.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use cctv_setup_core::config::GeneratorConfig;
use cctv_setup_core::emitter::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(
    name = "cctv-setup",
    about = "Generate a Termux CCTV kit: install script, Node server, dashboard and docs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write all six files to the output directory
    Generate {
        /// Output directory (created if missing)
        #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Also write the resolved configuration to this JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print one rendered template to stdout
    Render {
        /// Template identifier (see `cctv-setup templates`)
        template: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the available templates
    Templates,
}

/// Configuration sources shared by `generate` and `render`.
///
/// Precedence: built-in defaults, then `--config`, then individual flags.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// JSON config file with any of the five settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port the generated server listens on
    #[arg(long)]
    pub port: Option<u16>,

    /// Camera resolution, <width>x<height>
    #[arg(long)]
    pub resolution: Option<String>,

    /// Stream quality: high, medium or low
    #[arg(long)]
    pub quality: Option<String>,

    /// Admin password embedded in the generated server
    #[arg(long)]
    pub password: Option<String>,

    /// Disable scheduled recording
    #[arg(long)]
    pub no_recording: bool,
}

impl ConfigArgs {
    /// Build the configuration once; it is read-only from here on.
    pub fn resolve(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading config file");
                GeneratorConfig::load(path)?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(resolution) = &self.resolution {
            config.camera_resolution = resolution.clone();
        }
        if let Some(quality) = &self.quality {
            config.stream_quality = quality.clone();
        }
        if let Some(password) = &self.password {
            config.admin_password = password.clone();
        }
        if self.no_recording {
            config.recording_enabled = false;
        }

        for warning in config.warnings() {
            tracing::warn!("{warning}");
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => {
            commands::generate::run(
                Path::new(DEFAULT_OUTPUT_DIR),
                None,
                &ConfigArgs::default(),
            )?;
        }
        Some(Commands::Generate {
            output,
            save_config,
            config,
        }) => {
            commands::generate::run(&output, save_config.as_deref(), &config)?;
        }
        Some(Commands::Render { template, config }) => {
            commands::render::run(&template, &config)?;
        }
        Some(Commands::Templates) => {
            commands::templates::run();
        }
    }

    Ok(())
}
