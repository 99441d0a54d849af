//! Entry point for the tensor viewer.

use anyhow::{Context, Result};
use clap::Parser;
use std::{fs::File, io::BufWriter};
use tensor_viewer::{
    app::App,
    config::Config,
    loader::FsLoader,
    render::{JsonScene, LogSceneSink},
};

fn main() -> Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = Config::parse();
    log::debug!("Configuration: {:?}", config);

    // Single-threaded runtime: the file read is the only suspension point.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    rt.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let mut app = App::new(FsLoader);

    let Some(dump_path) = config.dump.as_ref() else {
        let mut sink = LogSceneSink::default();
        app.open(&config.file, &mut sink).await?;
        return Ok(());
    };

    let mut scene = JsonScene::default();
    app.open(&config.file, &mut scene).await?;

    // Only create the output once the load has succeeded.
    let file = File::create(dump_path)
        .with_context(|| format!("Failed to create {}", dump_path.display()))?;
    scene.write(BufWriter::new(file), config.pretty)?;

    log::info!("Wrote scene to {}", dump_path.display());

    Ok(())
}
