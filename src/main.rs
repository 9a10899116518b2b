use anyhow::Result;
use price_import::{config::ImportConfig, process, report};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stderr, so stdout carries only the report below
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) convert ──────────────────────────────────────────────────
    let config = ImportConfig::default();
    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "startup"
    );
    let summary = process::run_import(&config)?;

    // ─── 3) report ───────────────────────────────────────────────────
    report::write_report(&mut io::stdout().lock(), &summary)?;
    Ok(())
}
