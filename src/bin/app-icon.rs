use anyhow::Context as _;
use app_icon_renderer::{ExportReport, Exporter, IconRenderer};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let renderer = IconRenderer::new();
    let exporter = Exporter::default();

    let report = exporter.export(&renderer).with_context(|| {
        format!(
            "export app icon into '{}'",
            exporter.resources_dir().display()
        )
    })?;

    if let ExportReport::Rendered { variants, .. } = &report {
        for file in variants {
            eprintln!("wrote {} ({}x{})", file.path.display(), file.size, file.size);
        }
    }
    Ok(())
}
