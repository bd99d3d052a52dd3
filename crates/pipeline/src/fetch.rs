use crate::error::{PipelineError, Result};
use crate::extract::VideoId;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Fetches the transcript for one video into the transcript directory.
///
/// The trait isolates the external command so tests can substitute a stub and
/// so the dispatch logic stays independent of the download tool. A fetch
/// blocks the calling cycle until the command exits; there is no timeout.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, id: &VideoId) -> Result<()>;
}

/// Production fetcher: invokes `yt-dlp` to download auto-generated and
/// human-authored captions in SubRip format, written directly into the
/// transcript directory as `<id>.<lang>.srt`.
pub struct YtDlpFetcher {
    program: String,
    transcript_dir: PathBuf,
    language: String,
}

impl YtDlpFetcher {
    pub fn new(transcript_dir: impl AsRef<Path>, language: impl Into<String>) -> Self {
        Self {
            program: "yt-dlp".to_string(),
            transcript_dir: transcript_dir.as_ref().to_path_buf(),
            language: language.into(),
        }
    }

    /// Override the command name, e.g. an absolute path to the binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn output_template(&self) -> String {
        self.transcript_dir
            .join("%(id)s.%(ext)s")
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait]
impl TranscriptFetcher for YtDlpFetcher {
    async fn fetch(&self, id: &VideoId) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("--skip-download")
            .arg("--write-auto-subs")
            .arg("--write-subs")
            .args(["--sub-lang", &self.language])
            .args(["--convert-subs", "srt"])
            .args(["--sub-format", "srt"])
            .args(["-o", &self.output_template()])
            .arg(id.watch_url())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(PipelineError::FetchFailed {
                id: id.to_string(),
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TranscriptFetcher, YtDlpFetcher};
    use crate::extract::extract_video_id;
    use crate::PipelineError;

    #[test]
    fn output_template_targets_the_transcript_dir() {
        let fetcher = YtDlpFetcher::new("/tmp/subtitles", "en");
        assert_eq!(fetcher.output_template(), "/tmp/subtitles/%(id)s.%(ext)s");
    }

    #[tokio::test]
    async fn missing_program_surfaces_as_io_error() {
        let id = extract_video_id("https://youtu.be/aaaaaaaaaaa").expect("id");
        let fetcher =
            YtDlpFetcher::new("/tmp/subtitles", "en").with_program("capcloud-no-such-tool");
        let err = fetcher.fetch(&id).await.expect_err("must fail");
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_fetch_failure() {
        let id = extract_video_id("https://youtu.be/aaaaaaaaaaa").expect("id");
        // `false` ignores its arguments and exits 1.
        let fetcher = YtDlpFetcher::new("/tmp/subtitles", "en").with_program("false");
        let err = fetcher.fetch(&id).await.expect_err("must fail");
        assert!(matches!(err, PipelineError::FetchFailed { .. }));
    }
}
