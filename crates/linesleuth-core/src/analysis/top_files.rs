/// Top-N rankings computed once the walk has finished.
///
/// Both rankings use a stable sort over every candidate, so entries with
/// equal counts keep the order in which the walk first encountered them.
use crate::model::{ExtensionCount, TopFile};
use compact_str::CompactString;
use std::collections::HashMap;

/// Number of entries kept in each ranking.
pub const TOP_N: usize = 10;

/// Sort `candidates` descending by line count and keep the first `n`.
pub fn rank_files(mut candidates: Vec<TopFile>, n: usize) -> Vec<TopFile> {
    // `sort_by` is stable: ties stay in encounter order.
    candidates.sort_by(|a, b| b.lines.cmp(&a.lines));
    candidates.truncate(n);
    candidates
}

/// Per-extension file counter that remembers first-seen order.
///
/// The order matters for ranking ties, which is why this is not a plain
/// `HashMap<CompactString, u64>`.
#[derive(Debug, Default)]
pub struct ExtensionTally {
    counts: Vec<ExtensionCount>,
    index: HashMap<CompactString, usize>,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file with extension `ext`.
    pub fn increment(&mut self, ext: &str) {
        match self.index.get(ext) {
            Some(&slot) => self.counts[slot].files += 1,
            None => {
                let key = CompactString::new(ext);
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push(ExtensionCount {
                    extension: key,
                    files: 1,
                });
            }
        }
    }

    /// Number of distinct extensions seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing has been tallied.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sort descending by file count and keep the first `n`.
    pub fn rank(self, n: usize) -> Vec<ExtensionCount> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.files.cmp(&a.files));
        counts.truncate(n);
        counts
    }
}
