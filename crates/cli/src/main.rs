use anyhow::{Context, Result};
use capcloud_pipeline::{LogWatcher, LogWatcherConfig, Pipeline, PipelineConfig};
use std::path::PathBuf;

mod config;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let pipeline_config = PipelineConfig {
        log_path: PathBuf::from(config::LOG_FILE),
        transcript_dir: PathBuf::from(config::TRANSCRIPT_DIR),
        image_path: PathBuf::from(config::OUTPUT_IMAGE),
        language: config::SUBTITLE_LANG.to_string(),
    };

    tokio::fs::create_dir_all(&pipeline_config.transcript_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create transcript directory {}",
                pipeline_config.transcript_dir.display()
            )
        })?;

    let pipeline = Pipeline::new(pipeline_config).context("failed to build pipeline")?;
    let watcher = LogWatcher::start(pipeline, LogWatcherConfig::default())
        .context("failed to start log watcher")?;

    // Per-cycle diagnostics for an operator watching the process output.
    let mut updates = watcher.subscribe_updates();
    let reporter = tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            if let Some(outcome) = update.outcome {
                log::debug!(
                    "cycle ({}) in {}ms: {} line(s), {} new id(s), {} fetched, {} failed, {} render(s)",
                    update.reason,
                    update.duration_ms,
                    outcome.lines,
                    outcome.new_ids.len(),
                    outcome.fetched,
                    outcome.fetch_failures,
                    outcome.renders,
                );
            }
        }
    });

    log::info!("watching {} for video URLs", config::LOG_FILE);
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for interrupt")?;

    log::info!("interrupt received; shutting down");
    watcher.shutdown().await;
    reporter.abort();

    let health = watcher.health_snapshot();
    log::info!(
        "final state: {}",
        serde_json::to_string(&health).unwrap_or_else(|_| "{}".to_string())
    );
    Ok(())
}

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Stderr).init();
}
