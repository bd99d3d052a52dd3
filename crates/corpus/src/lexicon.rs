use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Reduces raw caption text to its meaningful lexical content: a space-joined
/// sequence of lower-cased lemma tokens.
///
/// Implementations must be deterministic for a fixed input, which makes corpus
/// aggregation idempotent over an unchanged transcript directory.
pub trait LexicalFilter: Send + Sync {
    fn filter(&self, text: &str) -> String;
}

/// Function words a part-of-speech pass restricted to nouns and verbs would
/// discard anyway: articles, pronouns, auxiliaries, prepositions, conjunctions
/// and a handful of high-frequency adverbs common in auto-generated captions.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down",
        "during", "each", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into",
        "is", "it", "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor",
        "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
        "ourselves", "out", "over", "own", "really", "same", "she", "should", "so", "some",
        "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
        "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
        "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "would", "you", "your", "yours", "yourself", "yourselves", "yeah", "okay",
        "oh", "um", "uh", "gonna", "wanna", "like",
    ]
    .into_iter()
    .collect()
});

/// Default lexical filter: unicode word segmentation, alphabetic-only tokens,
/// stop-word removal and conservative suffix lemmatization.
///
/// The trait seam exists so a real part-of-speech tagger can replace this
/// heuristic without touching the aggregator.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicLexicon;

impl HeuristicLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl LexicalFilter for HeuristicLexicon {
    fn filter(&self, text: &str) -> String {
        let mut out = Vec::new();
        for word in text.unicode_words() {
            if !word.chars().all(char::is_alphabetic) {
                continue;
            }
            let lowered = word.to_lowercase();
            if lowered.chars().count() < 2 || STOP_WORDS.contains(lowered.as_str()) {
                continue;
            }
            let lemma = lemmatize(&lowered);
            if lemma.len() < 2 || STOP_WORDS.contains(lemma.as_str()) {
                continue;
            }
            out.push(lemma);
        }
        out.join(" ")
    }
}

/// Conservative suffix stripping: plural `-ies`/`-s`, progressive `-ing`,
/// past `-ed`. Errs on the side of leaving a word alone rather than producing
/// a non-word.
fn lemmatize(word: &str) -> String {
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if word.len() > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            if has_vowel(stem) {
                return undouble(stem);
            }
        }
    }
    if word.len() > 4 {
        if let Some(stem) = word.strip_suffix("ed") {
            if has_vowel(stem) {
                return undouble(stem);
            }
        }
    }
    if word.len() > 3 && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is") {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// `running` strips to `runn`; collapse the doubled final consonant.
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        if last == chars[chars.len() - 2] && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 's' | 'l') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::{HeuristicLexicon, LexicalFilter};
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_stop_words_and_non_alphabetic_tokens() {
        let filter = HeuristicLexicon::new();
        assert_eq!(
            filter.filter("the cat ran to 42 houses and x1 barns"),
            "cat ran house barn"
        );
    }

    #[test]
    fn lowercases_tokens() {
        let filter = HeuristicLexicon::new();
        assert_eq!(filter.filter("Cat DOG"), "cat dog");
    }

    #[test]
    fn lemmatizes_common_suffixes() {
        let filter = HeuristicLexicon::new();
        assert_eq!(filter.filter("running jumped cities dogs"), "run jump city dog");
    }

    #[test]
    fn keeps_short_stems_intact() {
        let filter = HeuristicLexicon::new();
        // "sing"/"bed" are too short for suffix stripping to apply.
        assert_eq!(filter.filter("sing bed"), "sing bed");
    }

    #[test]
    fn empty_input_filters_to_empty() {
        let filter = HeuristicLexicon::new();
        assert_eq!(filter.filter(""), "");
        assert_eq!(filter.filter("the of and"), "");
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let filter = HeuristicLexicon::new();
        let text = "videos explaining rust programs keep compiling";
        assert_eq!(filter.filter(text), filter.filter(text));
    }
}
