use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus error: {0}")]
    Corpus(#[from] capcloud_corpus::CorpusError),

    #[error("Render error: {0}")]
    Render(#[from] capcloud_render::RenderError),

    #[error("Watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error("transcript fetch for {id} failed with {status}")]
    FetchFailed { id: String, status: String },

    #[error("{0}")]
    Other(String),
}
