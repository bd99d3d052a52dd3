/// Extract caption text from SubRip subtitle content.
///
/// SubRip cues look like:
///
/// ```text
/// 1
/// 00:00:01,000 --> 00:00:04,000
/// caption text here
/// ```
///
/// Sequence lines (pure integers), timing lines (containing `-->`) and blank
/// lines are structural and dropped; everything else is caption text, trimmed
/// and joined with single spaces.
pub fn extract_caption_text(srt: &str) -> String {
    let mut text = Vec::new();
    for line in srt.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_sequence_line(trimmed) || trimmed.contains("-->") {
            continue;
        }
        text.push(trimmed);
    }
    text.join(" ")
}

fn is_sequence_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::extract_caption_text;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_sequence_and_timing_lines() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\nhello world\n\n2\n00:00:04,500 --> 00:00:06,000\nsecond cue\n";
        assert_eq!(extract_caption_text(srt), "hello world second cue");
    }

    #[test]
    fn multi_line_cues_are_joined() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\nfirst line\nsecond line\n";
        assert_eq!(extract_caption_text(srt), "first line second line");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        assert_eq!(extract_caption_text(""), "");
    }

    #[test]
    fn numbers_inside_captions_survive() {
        // Only lines that are *entirely* digits are sequence markers.
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nchapter 12 begins\n";
        assert_eq!(extract_caption_text(srt), "chapter 12 begins");
    }

    #[test]
    fn structural_only_input_yields_empty_text() {
        let srt = "1\n00:00:01,000 --> 00:00:04,000\n\n2\n00:00:05,000 --> 00:00:06,000\n";
        assert_eq!(extract_caption_text(srt), "");
    }
}
