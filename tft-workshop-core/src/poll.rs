//! Poll records: one persisted mapping from identity to chosen option per
//! quiz. Tallies are re-derived by scanning all entries each render; at
//! this data scale that beats maintaining incremental counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key for one quiz's poll record.
#[must_use]
pub fn storage_key(quiz_id: &str) -> String {
    format!("quiz_{quiz_id}")
}

/// Mapping identity -> selected option index. Last write wins; re-voting
/// overwrites the identity's previous entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollRecord {
    votes: BTreeMap<String, usize>,
}

impl PollRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, identity: &str, option: usize) {
        self.votes.insert(identity.to_string(), option);
    }

    #[must_use]
    pub fn selection(&self, identity: &str) -> Option<usize> {
        self.votes.get(identity).copied()
    }

    /// Number of distinct identities with a recorded vote.
    #[must_use]
    pub fn total_respondents(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Per-option vote counts for the first `option_count` options.
    /// Out-of-range entries (stale data from an edited quiz) count toward
    /// the respondent total but no option bucket.
    #[must_use]
    pub fn counts(&self, option_count: usize) -> Vec<usize> {
        let mut counts = vec![0_usize; option_count];
        for &choice in self.votes.values() {
            if let Some(slot) = counts.get_mut(choice) {
                *slot += 1;
            }
        }
        counts
    }

    /// Share of respondents who picked `option`, rounded to the nearest
    /// whole percent. Zero when nobody has voted.
    #[must_use]
    pub fn percentage(&self, option: usize) -> usize {
        let total = self.total_respondents();
        if total == 0 {
            return 0;
        }
        let count = self.votes.values().filter(|&&v| v == option).count();
        // Integer round-half-up, avoiding float casts.
        (count * 200 + total) / (total * 2)
    }

    /// Identities that picked `option`, in stable (sorted) order.
    #[must_use]
    pub fn voters_for(&self, option: usize) -> Vec<&str> {
        self.votes
            .iter()
            .filter(|&(_, &choice)| choice == option)
            .map(|(identity, _)| identity.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PollRecord {
        let mut record = PollRecord::new();
        record.record("Alice", 1);
        record.record("Bob", 0);
        record.record("Cara", 0);
        record
    }

    #[test]
    fn counts_sum_to_respondent_total() {
        let record = sample();
        let counts = record.counts(4);
        assert_eq!(counts, vec![2, 1, 0, 0]);
        assert_eq!(counts.iter().sum::<usize>(), record.total_respondents());
    }

    #[test]
    fn percentages_sum_to_about_one_hundred() {
        let record = sample();
        let sum: usize = (0..4).map(|i| record.percentage(i)).sum();
        assert!((99..=101).contains(&sum), "got {sum}");
        assert_eq!(record.percentage(0), 67);
        assert_eq!(record.percentage(1), 33);
    }

    #[test]
    fn empty_record_yields_zero_percent() {
        let record = PollRecord::new();
        assert_eq!(record.percentage(0), 0);
        assert_eq!(record.total_respondents(), 0);
    }

    #[test]
    fn revote_overwrites_without_growing_total() {
        let mut record = sample();
        record.record("Alice", 3);
        assert_eq!(record.total_respondents(), 3);
        assert_eq!(record.selection("Alice"), Some(3));
        assert_eq!(record.counts(4), vec![2, 0, 0, 1]);
    }

    #[test]
    fn voters_listed_per_option_in_stable_order() {
        let record = sample();
        assert_eq!(record.voters_for(0), vec!["Bob", "Cara"]);
        assert_eq!(record.voters_for(1), vec!["Alice"]);
        assert!(record.voters_for(2).is_empty());
    }

    #[test]
    fn persists_as_plain_identity_map() {
        let mut record = PollRecord::new();
        record.record("Alice", 1);
        let json = serde_json::to_string(&record).expect("serializes");
        assert_eq!(json, r#"{"Alice":1}"#);
        let back: PollRecord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back.selection("Alice"), Some(1));
    }

    #[test]
    fn out_of_range_votes_do_not_panic_tallies() {
        let mut record = PollRecord::new();
        record.record("Dana", 9);
        assert_eq!(record.counts(4), vec![0, 0, 0, 0]);
        assert_eq!(record.total_respondents(), 1);
        assert_eq!(record.percentage(9), 100);
    }
}
