//! The set of user-placed cut positions.
//!
//! Positions are rows in original-image space. The set is kept ordered so
//! the list view, index-based removal and boundary computation all see the
//! same ascending sequence.

use std::collections::BTreeSet;

use crate::error::{SlicerError, SlicerResult};

/// Ordered, duplicate-free set of cut rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutLineSet {
    lines: BTreeSet<u32>,
}

impl CutLineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cut row. Returns `false` if it was already present.
    ///
    /// Range checking against the image height is the caller's job.
    pub fn insert(&mut self, y: u32) -> bool {
        self.lines.insert(y)
    }

    /// Remove the line at `index` in the ascending view and return its row.
    pub fn remove_at(&mut self, index: usize) -> SlicerResult<u32> {
        let y = self
            .lines
            .iter()
            .nth(index)
            .copied()
            .ok_or_else(|| SlicerError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            })?;
        self.lines.remove(&y);
        Ok(y)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Ascending view of the set.
    pub fn sorted_lines(&self) -> Vec<u32> {
        self.lines.iter().copied().collect()
    }

    /// Iterate rows in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.lines.iter().copied()
    }

    pub fn contains(&self, y: u32) -> bool {
        self.lines.contains(&y)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rows for the list view, e.g. `"Line 1: y=300"`.
    pub fn list_labels(&self) -> Vec<String> {
        self.iter()
            .enumerate()
            .map(|(i, y)| format!("Line {}: y={}", i + 1, y))
            .collect()
    }
}

impl FromIterator<u32> for CutLineSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for CutLineSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
