use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Recognized URL shapes: `youtube.com/watch?v=<id>` and `youtu.be/<id>`,
/// where the id is the 11-character platform-assigned code.
static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([\w-]{11})")
        .expect("video url pattern is valid")
});

/// Opaque token uniquely naming a remote video. Immutable once extracted;
/// equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL handed to the fetch command.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pure extraction: one log line in, zero or one identifier out.
///
/// When a line carries several URLs only the first match is taken
/// (single-match-per-line policy).
pub fn extract_video_id(line: &str) -> Option<VideoId> {
    VIDEO_URL
        .captures(line)
        .map(|caps| VideoId(caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::extract_video_id;
    use pretty_assertions::assert_eq;

    fn id_of(line: &str) -> Option<String> {
        extract_video_id(line).map(|id| id.as_str().to_string())
    }

    #[test]
    fn extracts_watch_urls() {
        assert_eq!(
            id_of("GET https://www.youtube.com/watch?v=dQw4w9WgXcQ 200"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            id_of("https://youtube.com/watch?v=abcdefghijk"),
            Some("abcdefghijk".to_string())
        );
    }

    #[test]
    fn extracts_short_urls() {
        assert_eq!(
            id_of("referer=https://youtu.be/aaaaaaaaaaa"),
            Some("aaaaaaaaaaa".to_string())
        );
        assert_eq!(
            id_of("http://youtu.be/A1b2-C3d4_e"),
            Some("A1b2-C3d4_e".to_string())
        );
    }

    #[test]
    fn lines_without_a_recognized_url_yield_nothing() {
        assert_eq!(id_of(""), None);
        assert_eq!(id_of("plain squid log line"), None);
        assert_eq!(id_of("https://example.com/watch?v=dQw4w9WgXcQ"), None);
        // Too short to be a video id.
        assert_eq!(id_of("https://youtu.be/short"), None);
    }

    #[test]
    fn first_match_wins_on_multi_url_lines() {
        assert_eq!(
            id_of("https://youtu.be/aaaaaaaaaaa then https://youtu.be/bbbbbbbbbbb"),
            Some("aaaaaaaaaaa".to_string())
        );
    }

    #[test]
    fn watch_url_round_trips_the_id() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").expect("id");
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
    }
}
