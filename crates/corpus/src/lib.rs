//! # Capcloud Corpus
//!
//! Transcript aggregation for word-cloud generation.
//!
//! ## Pipeline
//!
//! ```text
//! Transcript directory (*.srt)
//!     │
//!     ├──> Subtitle extraction (drop sequence/timing lines)
//!     │      └─> Raw caption text
//!     │
//!     └──> Lexical filter (lemmas, stop words removed)
//!            └─> Corpus string
//! ```
//!
//! Aggregation is a full rebuild on every call: the corpus is always a
//! deterministic function of the transcript files currently on disk.

mod aggregate;
mod error;
mod lexicon;
mod srt;

pub use aggregate::CorpusAggregator;
pub use error::{CorpusError, Result};
pub use lexicon::{HeuristicLexicon, LexicalFilter};
pub use srt::extract_caption_text;
