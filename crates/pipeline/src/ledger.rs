use crate::extract::VideoId;
use std::collections::HashSet;

/// Process-lifetime record of identifiers already dispatched for fetching.
///
/// Append-only and unbounded: an id enters the ledger at most once and is
/// never evicted, which guarantees at most one fetch per id per process run.
/// Ownership stays with the sequential event-handling flow, so no locking is
/// needed.
#[derive(Debug, Default)]
pub struct DedupLedger {
    dispatched: HashSet<VideoId>,
}

impl DedupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as dispatched. Returns `true` when the id was not seen
    /// before; the caller must only invoke the fetcher on `true`.
    pub fn insert(&mut self, id: VideoId) -> bool {
        self.dispatched.insert(id)
    }

    pub fn contains(&self, id: &VideoId) -> bool {
        self.dispatched.contains(id)
    }

    pub fn len(&self) -> usize {
        self.dispatched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatched.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::DedupLedger;
    use crate::extract::extract_video_id;

    #[test]
    fn first_insert_is_new_second_is_not() {
        let id = extract_video_id("https://youtu.be/aaaaaaaaaaa").expect("id");
        let mut ledger = DedupLedger::new();
        assert!(ledger.insert(id.clone()));
        assert!(!ledger.insert(id.clone()));
        assert!(ledger.contains(&id));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn distinct_ids_are_tracked_independently() {
        let a = extract_video_id("https://youtu.be/aaaaaaaaaaa").expect("id");
        let b = extract_video_id("https://youtu.be/bbbbbbbbbbb").expect("id");
        let mut ledger = DedupLedger::new();
        assert!(ledger.insert(a));
        assert!(ledger.insert(b));
        assert_eq!(ledger.len(), 2);
    }
}
