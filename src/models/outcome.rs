use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Why an utterance was dropped from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// A word marked `type="retracing"`
    Retracing,
    /// A word carrying an `untranscribed` attribute
    Untranscribed,
    /// A grouped-token wrapper (`g`) among the utterance's children
    GroupedToken,
}

/// Result of resolving a word or building an utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Surface text to emit (may be empty)
    Emitted(String),
    /// The owning utterance must be dropped
    Dropped(DropReason),
}

/// Counters collected while streaming one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    /// Utterances visited, any speaker
    pub utterances_seen: usize,
    /// Utterances skipped because of the speaker filter
    pub other_speaker: usize,
    /// Lines yielded
    pub emitted: usize,
    /// Built but empty or a bare period
    pub suppressed: usize,
    /// Dropped utterances by reason
    pub dropped: BTreeMap<DropReason, usize>,
}

impl CleanStats {
    pub fn record_drop(&mut self, reason: DropReason) {
        *self.dropped.entry(reason).or_insert(0) += 1;
    }

    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    /// Add another document's counters into this one
    pub fn merge(&mut self, other: &CleanStats) {
        self.utterances_seen += other.utterances_seen;
        self.other_speaker += other.other_speaker;
        self.emitted += other.emitted;
        self.suppressed += other.suppressed;
        for (reason, count) in &other.dropped {
            *self.dropped.entry(*reason).or_insert(0) += count;
        }
    }
}
