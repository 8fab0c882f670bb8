//! Side-by-side comparison set
//!
//! A bounded ordered set of skip ids the user wants to compare. Insertion
//! order is preserved; adding beyond the cap evicts the oldest entry.

use serde::{Deserialize, Serialize};
use skiphire_types::SkipRecord;

/// Maximum number of skips that can be compared at once
pub const MAX_COMPARE: usize = 3;

/// Ordered set of skip ids selected for comparison, capped at [`MAX_COMPARE`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSet {
    ids: Vec<u32>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id in or out of the set.
    ///
    /// Present ids are removed, keeping the relative order of the rest.
    /// Absent ids are appended; if that overflows the cap, the oldest
    /// (first-inserted) id is evicted first. Total over the id domain:
    /// this never fails. Returns whether the id is now in the set.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            if self.ids.len() >= MAX_COMPARE {
                self.ids.remove(0);
            }
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Map the set's ids to their records, in set order.
    ///
    /// Ids no longer present in `all_skips` are silently skipped; the source
    /// data may have changed between selection and resolution.
    pub fn resolve<'a>(&self, all_skips: &'a [SkipRecord]) -> Vec<&'a SkipRecord> {
        self.ids
            .iter()
            .filter_map(|id| all_skips.iter().find(|s| s.id == *id))
            .collect()
    }
}
