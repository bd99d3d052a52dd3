//! Deployment configuration. Deliberately a set of named constants rather
//! than CLI flags: the daemon is wired once per install and left running.

/// Live-appended proxy log to monitor. Use the full path of your squid (or
/// similar) access log.
pub const LOG_FILE: &str = "access.log";

/// Directory the fetch command writes transcripts into; created at startup if
/// missing. Transcripts are never deleted.
pub const TRANSCRIPT_DIR: &str = "subtitles";

/// Word cloud artifact, overwritten on every successful render.
pub const OUTPUT_IMAGE: &str = "wordcloud.png";

/// Subtitle language requested from the fetch command.
pub const SUBTITLE_LANG: &str = "en";
