//! # Capcloud Pipeline
//!
//! Log-driven transcript ingestion.
//!
//! ## Pipeline
//!
//! ```text
//! Log file (live-appended)
//!     │  fs modification event
//!     ├──> Log Watcher (full re-read per event)
//!     │      └─> lines
//!     ├──> Identifier Extractor (URL pattern match)
//!     │      └─> candidate VideoIds
//!     ├──> Dedup Ledger (at most one dispatch per id per run)
//!     │      └─> new VideoIds
//!     └──> Transcript Fetcher (external command, blocking)
//!            └─ success ─> Corpus Aggregator + Word Cloud Renderer
//! ```
//!
//! Event handling is strictly sequential: a cycle (read → extract → dedup →
//! fetch → aggregate → render) runs to completion before the next filesystem
//! event is taken off the channel.

mod error;
mod extract;
mod fetch;
mod ledger;
mod pipeline;
mod watcher;

pub use error::{PipelineError, Result};
pub use extract::{extract_video_id, VideoId};
pub use fetch::{TranscriptFetcher, YtDlpFetcher};
pub use ledger::DedupLedger;
pub use pipeline::{CycleOutcome, Pipeline, PipelineConfig};
pub use watcher::{CycleUpdate, LogWatcher, LogWatcherConfig, WatcherHealth};
