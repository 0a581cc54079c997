use cctv_setup_core::templates::TemplateId;

use crate::output;

/// List template identifiers with their output file and forced mode.
pub fn run() {
    output::print_banner("Templates");
    for id in TemplateId::ALL {
        let mode = if id.is_executable() { "755" } else { "-" };
        println!("{:<20} {:<24} {}", id.as_str(), id.file_name(), mode);
    }
}
