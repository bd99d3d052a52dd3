use crate::error::{RenderError, Result};
use crate::font::{glyph, GLYPH_SIZE};
use crate::freq::count_frequencies;
use image::{Rgba, RgbaImage};
use std::collections::HashSet;
use std::path::Path;

const MARGIN: u32 = 8;
const GAP: u32 = 6;
const MAX_SCALE: u32 = 6;

/// Word colors cycle through this palette in frequency order.
const PALETTE: [[u8; 4]; 8] = [
    [31, 60, 136, 255],
    [178, 34, 52, 255],
    [0, 121, 64, 255],
    [230, 126, 34, 255],
    [94, 53, 177, 255],
    [0, 131, 143, 255],
    [109, 76, 65, 255],
    [55, 71, 79, 255],
];

#[derive(Debug, Clone)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub max_words: usize,
    pub stop_words: HashSet<String>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: Rgba([255, 255, 255, 255]),
            max_words: 100,
            stop_words: HashSet::new(),
        }
    }
}

/// Stateless renderer: corpus string in, frequency-sized word image out.
///
/// Words are laid out row by row in frequency order, each scaled relative to
/// the most frequent token. The layout is deterministic for a fixed corpus.
pub struct WordCloud {
    config: WordCloudConfig,
}

impl WordCloud {
    pub fn new(config: WordCloudConfig) -> Self {
        Self { config }
    }

    /// Render the corpus into an image buffer.
    ///
    /// Precondition: the corpus must contain at least one token that survives
    /// the stop-word set, otherwise [`RenderError::EmptyCorpus`] is returned.
    pub fn render(&self, corpus: &str) -> Result<RgbaImage> {
        let freq = count_frequencies(corpus, &self.config.stop_words);
        let Some((_, max_count)) = freq.first() else {
            return Err(RenderError::EmptyCorpus);
        };
        let max_count = *max_count;

        let mut img =
            RgbaImage::from_pixel(self.config.width, self.config.height, self.config.background);

        let mut cursor_x = MARGIN;
        let mut cursor_y = MARGIN;
        let mut row_height = 0u32;
        let mut placed = 0usize;

        for (idx, (word, count)) in freq.iter().take(self.config.max_words).enumerate() {
            let Some(scale) = self.fit_scale(word, scale_for(*count, max_count)) else {
                continue;
            };
            let word_w = word_width(word, scale);
            let word_h = GLYPH_SIZE * scale;

            if cursor_x + word_w > self.config.width - MARGIN {
                cursor_x = MARGIN;
                cursor_y += row_height + GAP;
                row_height = 0;
            }
            if cursor_y + word_h > self.config.height - MARGIN {
                // Canvas is full; everything less frequent is dropped.
                break;
            }

            let color = Rgba(PALETTE[idx % PALETTE.len()]);
            draw_word(&mut img, word, cursor_x, cursor_y, scale, color);
            cursor_x += word_w + GAP;
            row_height = row_height.max(word_h);
            placed += 1;
        }

        log::debug!("placed {placed} of {} word(s)", freq.len());
        Ok(img)
    }

    /// Render and overwrite the image artifact at `path`.
    pub fn render_to_file(&self, corpus: &str, path: impl AsRef<Path>) -> Result<()> {
        let img = self.render(corpus)?;
        img.save(path.as_ref())?;
        Ok(())
    }

    /// Largest scale, at most `wanted`, at which the word fits the canvas
    /// width. `None` when the word is too long even at scale 1.
    fn fit_scale(&self, word: &str, wanted: u32) -> Option<u32> {
        let usable = self.config.width.saturating_sub(2 * MARGIN);
        (1..=wanted)
            .rev()
            .find(|&scale| word_width(word, scale) <= usable)
    }
}

/// Linear scale by share of the maximum count, clamped to `1..=MAX_SCALE`.
fn scale_for(count: usize, max_count: usize) -> u32 {
    let max_count = max_count.max(1) as u64;
    let scaled = (count as u64 * u64::from(MAX_SCALE)).div_ceil(max_count);
    u32::try_from(scaled).unwrap_or(MAX_SCALE).clamp(1, MAX_SCALE)
}

fn word_width(word: &str, scale: u32) -> u32 {
    u32::try_from(word.chars().count()).unwrap_or(u32::MAX) * GLYPH_SIZE * scale
}

fn draw_word(img: &mut RgbaImage, word: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    let mut pen_x = x;
    for c in word.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (0x80 >> col) == 0 {
                        continue;
                    }
                    fill_rect(
                        img,
                        pen_x + col * scale,
                        y + row as u32 * scale,
                        scale,
                        color,
                    );
                }
            }
        }
        pen_x += GLYPH_SIZE * scale;
    }
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let (px, py) = (x + dx, y + dy);
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{scale_for, WordCloud, WordCloudConfig};
    use crate::error::RenderError;
    use image::Rgba;

    fn cloud() -> WordCloud {
        WordCloud::new(WordCloudConfig::default())
    }

    #[test]
    fn empty_corpus_is_a_precondition_violation() {
        assert!(matches!(cloud().render(""), Err(RenderError::EmptyCorpus)));
        assert!(matches!(
            cloud().render("   "),
            Err(RenderError::EmptyCorpus)
        ));
    }

    #[test]
    fn corpus_of_only_stop_words_is_empty_too() {
        let config = WordCloudConfig {
            stop_words: ["cat".to_string()].into_iter().collect(),
            ..WordCloudConfig::default()
        };
        let cloud = WordCloud::new(config);
        assert!(matches!(
            cloud.render("cat cat"),
            Err(RenderError::EmptyCorpus)
        ));
    }

    #[test]
    fn render_paints_words_onto_the_background() {
        let img = cloud()
            .render("cat run dog jump cat cat dog")
            .expect("render");
        assert_eq!((img.width(), img.height()), (800, 400));
        let background = Rgba([255, 255, 255, 255]);
        assert!(
            img.pixels().any(|p| *p != background),
            "rendered image contains no ink"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let corpus = "cat run dog jump cat cat dog";
        let a = cloud().render(corpus).expect("first render");
        let b = cloud().render(corpus).expect("second render");
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn render_to_file_writes_a_non_empty_png() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let path = temp.path().join("cloud.png");
        cloud()
            .render_to_file("cat run dog jump", &path)
            .expect("render to file");
        let meta = std::fs::metadata(&path).expect("artifact metadata");
        assert!(meta.len() > 0, "image artifact is empty");
    }

    #[test]
    fn overlong_words_are_skipped_not_fatal() {
        let long = "a".repeat(500);
        let corpus = format!("{long} cat");
        let img = cloud().render(&corpus).expect("render");
        assert_eq!(img.width(), 800);
    }

    #[test]
    fn scale_tracks_relative_frequency() {
        assert_eq!(scale_for(10, 10), 6);
        assert_eq!(scale_for(1, 10), 1);
        assert!(scale_for(5, 10) > scale_for(1, 10));
        assert_eq!(scale_for(1, 1), 6);
    }
}
