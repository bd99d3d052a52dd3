use crate::error::{CorpusError, Result};
use crate::lexicon::LexicalFilter;
use crate::srt::extract_caption_text;
use std::fs;
use std::path::{Path, PathBuf};

/// Rebuilds the corpus from every transcript currently on disk.
///
/// Every call is a full rescan: no per-file caching, no incremental state.
/// Given a deterministic [`LexicalFilter`], the result is a pure function of
/// the `.srt` files present in the transcript directory.
pub struct CorpusAggregator {
    dir: PathBuf,
    filter: Box<dyn LexicalFilter>,
}

impl CorpusAggregator {
    pub fn new(dir: impl AsRef<Path>, filter: Box<dyn LexicalFilter>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if dir.exists() && !dir.is_dir() {
            return Err(CorpusError::InvalidDir(format!(
                "not a directory: {}",
                dir.display()
            )));
        }
        Ok(Self { dir, filter })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scan the transcript directory and build the corpus string.
    ///
    /// Files are visited in sorted name order so the corpus is byte-identical
    /// across runs over the same directory contents. A missing directory or an
    /// empty one yields an empty corpus.
    pub fn aggregate(&self) -> Result<String> {
        let mut paths = match fs::read_dir(&self.dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| is_transcript(path))
                .collect::<Vec<_>>(),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        paths.sort();

        let mut parts = Vec::new();
        for path in &paths {
            let raw = match fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) => {
                    // A single unreadable transcript must not poison the pass.
                    log::warn!("skipping unreadable transcript {}: {err}", path.display());
                    continue;
                }
            };
            let words = self.filter.filter(&extract_caption_text(&raw));
            if !words.is_empty() {
                parts.push(words);
            }
        }

        log::debug!(
            "aggregated {} transcript(s) from {}",
            paths.len(),
            self.dir.display()
        );
        Ok(parts.join(" "))
    }
}

fn is_transcript(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("srt"))
}
