use std::path::Path;

use anyhow::Result;

use cctv_setup_core::emitter;

use crate::output;
use crate::ConfigArgs;

/// Generate the CCTV kit into `output_dir`.
///
/// Resolves the configuration, optionally records it to `save_config`, renders and
/// writes all six files, marks the shell scripts executable, then prints the summary
/// block. The admin password is printed in plain text.
pub fn run(output_dir: &Path, save_config: Option<&Path>, args: &ConfigArgs) -> Result<()> {
    let config = args.resolve()?;

    if let Some(path) = save_config {
        config.save(path)?;
        tracing::info!(path = %path.display(), "saved resolved config");
    }

    let report = emitter::emit_all(&config, output_dir)?;

    let dir_name = output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_dir.display().to_string());

    output::print_banner("Termux CCTV Setup Files Generated!");
    output::print_key_value("Files saved to", &report.output_dir.display().to_string());
    output::print_key_value("Server will run on port", &config.server_port.to_string());
    output::print_key_value("Camera resolution", &config.camera_resolution);
    output::print_key_value("Admin password", &config.admin_password);
    println!();
    let cd_step = format!("cd into the {dir_name} directory");
    println!("Next Steps:");
    output::print_numbered(&[
        cd_step.as_str(),
        "Run: bash install.sh",
        "Then run: ./start_cctv.sh",
    ]);
    output::print_rule();

    Ok(())
}
