use crate::error::Result;
use crate::extract::{extract_video_id, VideoId};
use crate::fetch::{TranscriptFetcher, YtDlpFetcher};
use crate::ledger::DedupLedger;
use capcloud_corpus::{CorpusAggregator, HeuristicLexicon};
use capcloud_render::{WordCloud, WordCloudConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Static wiring for one pipeline instance. All paths are fixed for the
/// process lifetime; there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Live-appended log file to monitor.
    pub log_path: PathBuf,
    /// Directory the fetch command writes transcripts into.
    pub transcript_dir: PathBuf,
    /// Word cloud artifact, overwritten on every successful render.
    pub image_path: PathBuf,
    /// Subtitle language code passed to the fetch command.
    pub language: String,
}

/// What one event-handling cycle did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CycleOutcome {
    /// Log lines scanned this cycle.
    pub lines: usize,
    /// Identifiers seen for the first time this process run.
    pub new_ids: Vec<VideoId>,
    pub fetched: usize,
    pub fetch_failures: usize,
    /// Successful render passes (at most one per successful fetch).
    pub renders: usize,
    /// Token count of the most recent non-empty corpus, if any.
    pub corpus_tokens: usize,
}

/// The sequential event-handling flow: read log → extract → dedup → fetch →
/// aggregate → render. Owns the dedup ledger; callers must not run two cycles
/// concurrently (the watcher loop guarantees this by construction).
pub struct Pipeline {
    log_path: PathBuf,
    image_path: PathBuf,
    ledger: DedupLedger,
    fetcher: Box<dyn TranscriptFetcher>,
    aggregator: CorpusAggregator,
    cloud: WordCloud,
}

impl Pipeline {
    /// Production wiring: `yt-dlp` fetcher, heuristic lexical filter, default
    /// word cloud dimensions.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let fetcher = YtDlpFetcher::new(&config.transcript_dir, &config.language);
        Self::with_fetcher(config, Box::new(fetcher))
    }

    /// Same wiring with the fetch step replaced, for tests and alternative
    /// download tools.
    pub fn with_fetcher(config: PipelineConfig, fetcher: Box<dyn TranscriptFetcher>) -> Result<Self> {
        let aggregator =
            CorpusAggregator::new(&config.transcript_dir, Box::new(HeuristicLexicon::new()))?;
        Ok(Self {
            log_path: config.log_path,
            image_path: config.image_path,
            ledger: DedupLedger::new(),
            fetcher,
            aggregator,
            cloud: WordCloud::new(WordCloudConfig::default()),
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Identifiers dispatched so far this process run.
    pub fn known_ids(&self) -> usize {
        self.ledger.len()
    }

    /// Handle one log modification event to completion.
    ///
    /// The whole file is re-read from the beginning; the ledger, not a file
    /// offset, prevents duplicate dispatch, so rotation or truncation of the
    /// log cannot corrupt state. Fetch and render failures are reported and
    /// absorbed here; only a failure to read the log itself is returned.
    pub async fn process_log(&mut self) -> Result<CycleOutcome> {
        let contents = tokio::fs::read_to_string(&self.log_path).await?;

        let mut outcome = CycleOutcome::default();
        for line in contents.lines() {
            outcome.lines += 1;
            let Some(id) = extract_video_id(line) else {
                continue;
            };
            // Marked dispatched before the fetch runs: a slow or failing
            // fetch can never be re-dispatched within this process run.
            if !self.ledger.insert(id.clone()) {
                continue;
            }
            outcome.new_ids.push(id.clone());

            log::info!("fetching transcript for {id}");
            match self.fetcher.fetch(&id).await {
                Ok(()) => {
                    outcome.fetched += 1;
                    log::info!("downloaded transcript for {id}");
                    match self.refresh_cloud() {
                        Ok(Some(tokens)) => {
                            outcome.renders += 1;
                            outcome.corpus_tokens = tokens;
                        }
                        Ok(None) => {}
                        Err(err) => log::error!("word cloud refresh failed: {err}"),
                    }
                }
                Err(err) => {
                    outcome.fetch_failures += 1;
                    log::error!("failed to fetch transcript for {id}: {err}");
                }
            }
        }
        Ok(outcome)
    }

    /// Full corpus rebuild plus render. Returns the corpus token count, or
    /// `None` when the corpus is empty and the render was skipped.
    fn refresh_cloud(&self) -> Result<Option<usize>> {
        let corpus = self.aggregator.aggregate()?;
        if corpus.is_empty() {
            log::info!("no words extracted for word cloud; skipping render");
            return Ok(None);
        }
        self.cloud.render_to_file(&corpus, &self.image_path)?;
        let tokens = corpus.split_whitespace().count();
        log::info!(
            "word cloud saved to {} ({tokens} tokens)",
            self.image_path.display()
        );
        Ok(Some(tokens))
    }
}
