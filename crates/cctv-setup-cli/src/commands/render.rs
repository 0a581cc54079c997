use anyhow::Result;

use cctv_setup_core::templates::renderer::TemplateRenderer;
use cctv_setup_core::templates::TemplateId;

use crate::ConfigArgs;

/// Print a single rendered template to stdout without touching the filesystem.
pub fn run(template: &str, args: &ConfigArgs) -> Result<()> {
    let Some(id) = TemplateId::from_name(template) else {
        let known: Vec<_> = TemplateId::ALL.iter().map(|id| id.as_str()).collect();
        anyhow::bail!("unknown template: {template} (supported: {})", known.join(", "));
    };

    let config = args.resolve()?;
    let text = TemplateRenderer::new().render(id, &config)?;
    print!("{text}");

    Ok(())
}
