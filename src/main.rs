//! Campaign Report - prints a summary and the first records of the report.

use anyhow::{Context, Result};
use campaign_report::data::{render_preview, LoaderConfig, ReportLoader};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let loader = ReportLoader::new(LoaderConfig::beside_executable()?);
    let records = loader.load()?;

    let preview = render_preview(&records).with_context(|| {
        format!("Failed to preview {}", loader.config().path.display())
    })?;
    println!("{preview}");

    Ok(())
}
