//! Packing Progress
//!
//! Aggregate counts derived from the current list on every render.

use super::item::Item;

/// Counts over a non-empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackingStats {
    pub num_items: usize,
    pub num_packed: usize,
    /// Rounded half-up, so 199 of 200 packed already reads 100
    pub percent: u32,
}

impl PackingStats {
    /// `None` for an empty list
    pub fn from_items(items: &[Item]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let num_items = items.len();
        let num_packed = items.iter().filter(|item| item.packed).count();
        let percent = (200 * num_packed + num_items) / (2 * num_items);
        Some(Self {
            num_items,
            num_packed,
            percent: percent as u32,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

/// What the stats footer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSummary {
    /// Nothing added yet
    Empty,
    InProgress(PackingStats),
    Complete(PackingStats),
}

impl StatsSummary {
    pub fn of(items: &[Item]) -> Self {
        match PackingStats::from_items(items) {
            None => StatsSummary::Empty,
            Some(stats) if stats.is_complete() => StatsSummary::Complete(stats),
            Some(stats) => StatsSummary::InProgress(stats),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsSummary::Empty => write!(f, "Start adding items to your packing list"),
            StatsSummary::Complete(_) => write!(f, "You got everything! Ready to go✈️"),
            StatsSummary::InProgress(stats) => write!(
                f,
                "You have {} items on your list, and you already packed {} ({}%)",
                stats.num_items, stats.num_packed, stats.percent
            ),
        }
    }
}
