use crate::error::{PipelineError, Result};
use crate::pipeline::{CycleOutcome, Pipeline};
use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};
use tokio::sync::{broadcast, mpsc, watch};

const FS_EVENT_REASON: &str = "fs_event";

/// Broadcast after every handled cycle, success or failure.
#[derive(Debug, Clone)]
pub struct CycleUpdate {
    pub completed_at: SystemTime,
    pub duration_ms: u64,
    pub outcome: Option<CycleOutcome>,
    pub success: bool,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatcherHealth {
    pub last_success: Option<SystemTime>,
    pub last_error: Option<String>,
    pub consecutive_failures: u32,
    pub cycles: u64,
    pub fetches: u64,
    pub fetch_failures: u64,
    pub renders: u64,
    pub known_ids: usize,
    pub processing: bool,
}

impl WatcherHealth {
    fn initial() -> Self {
        Self {
            last_success: None,
            last_error: None,
            consecutive_failures: 0,
            cycles: 0,
            fetches: 0,
            fetch_failures: 0,
            renders: 0,
            known_ids: 0,
            processing: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LogWatcherConfig {
    /// Poll interval for notify backends that need one (fallback only; the
    /// inotify backend ignores it).
    pub poll_interval: Duration,
}

impl Default for LogWatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Subscribes to modification events on the log file's directory and drives
/// the pipeline: one event handled to completion at a time, events arriving
/// meanwhile queue in the channel the subscription feeds.
#[derive(Clone)]
pub struct LogWatcher {
    inner: Arc<LogWatcherInner>,
}

struct LogWatcherInner {
    command_tx: mpsc::Sender<WatcherCommand>,
    update_tx: broadcast::Sender<CycleUpdate>,
    health_tx: watch::Sender<WatcherHealth>,
    // Keeps the watch channel open so health updates sent while no snapshot
    // is being taken are still stored (`watch::Sender::send` drops the value
    // once every receiver is gone).
    _health_rx: watch::Receiver<WatcherHealth>,
    watcher: std::sync::Mutex<Option<RecommendedWatcher>>,
}

enum WatcherCommand {
    Trigger { reason: String },
    Shutdown,
}

impl LogWatcher {
    /// Start watching. The pipeline moves into a spawned handler task; the
    /// returned handle only observes and controls it.
    pub fn start(pipeline: Pipeline, config: LogWatcherConfig) -> Result<Self> {
        let log_path = pipeline.log_path().to_path_buf();
        let watch_dir = watch_dir_for(&log_path);

        let (event_tx, event_rx) = mpsc::channel(1024);
        let (command_tx, command_rx) = mpsc::channel(16);
        let (health_tx, health_rx) = watch::channel(WatcherHealth::initial());
        let (update_tx, _) = broadcast::channel(32);

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = event_tx.blocking_send(res);
            },
            NotifyConfig::default().with_poll_interval(config.poll_interval),
        )?;
        watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;
        log::info!(
            "watching {} for video URLs (log: {})",
            watch_dir.display(),
            log_path.display()
        );

        spawn_event_loop(
            pipeline,
            log_path,
            event_rx,
            command_rx,
            update_tx.clone(),
            health_tx.clone(),
        );

        Ok(Self {
            inner: Arc::new(LogWatcherInner {
                command_tx,
                update_tx,
                health_tx,
                _health_rx: health_rx,
                watcher: std::sync::Mutex::new(Some(watcher)),
            }),
        })
    }

    /// Queue a manual cycle, as if the log had just been modified.
    pub async fn trigger(&self, reason: impl Into<String>) -> Result<()> {
        self.inner
            .command_tx
            .send(WatcherCommand::Trigger {
                reason: reason.into(),
            })
            .await
            .map_err(|e| PipelineError::Other(format!("failed to send trigger: {e}")))?;
        Ok(())
    }

    /// Stop the handler loop and drop the notify subscription. Any cycle in
    /// flight finishes first.
    pub async fn shutdown(&self) {
        let _ = self.inner.command_tx.send(WatcherCommand::Shutdown).await;
        if let Ok(mut guard) = self.inner.watcher.lock() {
            guard.take();
        }
    }

    #[must_use]
    pub fn subscribe_updates(&self) -> broadcast::Receiver<CycleUpdate> {
        self.inner.update_tx.subscribe()
    }

    #[must_use]
    pub fn health_snapshot(&self) -> WatcherHealth {
        self.inner.health_tx.subscribe().borrow().clone()
    }
}

impl Drop for LogWatcher {
    fn drop(&mut self) {
        if Arc::strong_count(&self.inner) == 1 {
            let _ = self.inner.command_tx.try_send(WatcherCommand::Shutdown);
        }
    }
}

fn watch_dir_for(log_path: &Path) -> PathBuf {
    match log_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    }
}

fn spawn_event_loop(
    mut pipeline: Pipeline,
    log_path: PathBuf,
    mut event_rx: mpsc::Receiver<notify::Result<Event>>,
    mut command_rx: mpsc::Receiver<WatcherCommand>,
    update_tx: broadcast::Sender<CycleUpdate>,
    health_tx: watch::Sender<WatcherHealth>,
) {
    tokio::spawn(async move {
        let mut health = WatcherHealth::initial();

        loop {
            tokio::select! {
                maybe_event = event_rx.recv() => {
                    let Some(event) = maybe_event else { break };
                    if !is_relevant(&log_path, &event) {
                        continue;
                    }
                    run_cycle(
                        &mut pipeline,
                        FS_EVENT_REASON,
                        &mut health,
                        &update_tx,
                        &health_tx,
                    )
                    .await;
                }
                maybe_cmd = command_rx.recv() => {
                    match maybe_cmd {
                        Some(WatcherCommand::Trigger { reason }) => {
                            run_cycle(&mut pipeline, &reason, &mut health, &update_tx, &health_tx)
                                .await;
                        }
                        Some(WatcherCommand::Shutdown) | None => break,
                    }
                }
            }
        }
        log::info!("log watcher stopped");
    });
}

/// An event is relevant iff one of its paths is the monitored log file.
/// Notify reports canonical paths on most platforms, so compare against the
/// canonicalized log path as well.
fn is_relevant(log_path: &Path, event: &notify::Result<Event>) -> bool {
    match event {
        Ok(event) => {
            let canonical = std::fs::canonicalize(log_path).ok();
            event
                .paths
                .iter()
                .any(|path| path == log_path || Some(path) == canonical.as_ref())
        }
        Err(err) => {
            log::warn!("watcher error: {err}");
            false
        }
    }
}

async fn run_cycle(
    pipeline: &mut Pipeline,
    reason: &str,
    health: &mut WatcherHealth,
    update_tx: &broadcast::Sender<CycleUpdate>,
    health_tx: &watch::Sender<WatcherHealth>,
) {
    health.processing = true;
    let _ = health_tx.send(health.clone());

    let started = Instant::now();
    let result = pipeline.process_log().await;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let update = match result {
        Ok(outcome) => {
            health.last_success = Some(SystemTime::now());
            health.last_error = None;
            health.consecutive_failures = 0;
            health.fetches += outcome.fetched as u64;
            health.fetch_failures += outcome.fetch_failures as u64;
            health.renders += outcome.renders as u64;
            CycleUpdate {
                completed_at: SystemTime::now(),
                duration_ms,
                outcome: Some(outcome),
                success: true,
                reason: reason.to_string(),
            }
        }
        Err(err) => {
            // Typically a transiently unreadable log; the next modification
            // event retries naturally.
            log::warn!("log read failed ({reason}): {err}");
            health.last_error = Some(err.to_string());
            health.consecutive_failures += 1;
            CycleUpdate {
                completed_at: SystemTime::now(),
                duration_ms,
                outcome: None,
                success: false,
                reason: reason.to_string(),
            }
        }
    };

    health.cycles += 1;
    health.known_ids = pipeline.known_ids();
    health.processing = false;
    let _ = health_tx.send(health.clone());
    let _ = update_tx.send(update);
}
