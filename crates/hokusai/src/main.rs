//! Hokusai CLI binary.
//!
//! One invocation runs the full pipeline: capture the heatmap, publish it,
//! optionally analyze it, broadcast to the channel. Any stage failure exits
//! non-zero.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::Cli;
    use hokusai::{Credentials, HokusaiConfig, Pipeline};
    use hokusai_core::RunProfile;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    let profile = if cli.analyze {
        RunProfile::Annotated
    } else {
        RunProfile::Standard
    };

    let credentials = Credentials::from_env(profile)?;
    let config = HokusaiConfig::load(cli.config.as_deref())?;

    let date = chrono::Local::now().date_naive();
    let path = cli.out_dir.join(profile.filename(date));

    let pipeline = Pipeline::assemble(profile, &config, &credentials)?;
    let report = pipeline
        .run(config.heatmap(), &config.capture_settings(profile), &path)
        .await?;

    tracing::info!(
        snapshot = %report.snapshot_path().display(),
        url = %report.image_url(),
        analyzed = report.analyzed(),
        "run complete"
    );

    Ok(())
}
