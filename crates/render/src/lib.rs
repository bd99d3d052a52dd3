//! # Capcloud Render
//!
//! Stateless word-cloud rendering: a corpus string of space-separated tokens
//! in, a PNG of frequency-sized words out.
//!
//! The renderer has a hard precondition: the corpus must contain at least one
//! countable token. Callers are expected to skip rendering for empty corpora
//! (the aggregator reports those as informational no-ops).

mod cloud;
mod error;
mod font;
mod freq;

pub use cloud::{WordCloud, WordCloudConfig};
pub use error::{RenderError, Result};
pub use freq::count_frequencies;
