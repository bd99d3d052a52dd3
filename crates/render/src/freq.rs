use std::collections::{HashMap, HashSet};

/// Count token frequencies in a space-separated corpus, excluding the given
/// stop words.
///
/// The result is sorted by descending count, then ascending token, so the
/// ordering (and therefore the rendered layout) is deterministic for a fixed
/// corpus.
pub fn count_frequencies(corpus: &str, stop_words: &HashSet<String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in corpus.split_whitespace() {
        if stop_words.contains(token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
