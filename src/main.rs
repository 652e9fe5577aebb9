use autotoc::cli::Args;
use autotoc::engine::{self, ExtractConfig};
use autotoc::output;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ExtractConfig::from(Args::parse());
    let entries = engine::run(&config)?;

    if entries.is_empty() {
        tracing::warn!(range = %config.range, "no contents entries found");
    }

    output::write_entries(&entries, config.format, config.output.as_deref())?;

    Ok(())
}
