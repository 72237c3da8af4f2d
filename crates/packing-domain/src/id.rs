//! Item Id Sources
//!
//! Fresh ids for new items. `ClockIds` follows the wall clock in
//! milliseconds but never hands out the same value twice, even when
//! several items are added within one millisecond.

use chrono::Utc;
use super::item::ItemId;

/// Produces unique item ids for one session
pub trait IdSource {
    fn next_id(&mut self) -> ItemId;
}

/// Millisecond timestamp ids, strictly increasing
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: Option<u64>,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_at(&mut self, now_millis: i64) -> ItemId {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        ItemId(id)
    }
}

impl IdSource for ClockIds {
    fn next_id(&mut self) -> ItemId {
        self.next_at(Utc::now().timestamp_millis())
    }
}

/// Counter ids starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}
