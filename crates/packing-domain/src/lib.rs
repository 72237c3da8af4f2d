//! Packing List Domain
//!
//! Items, the list that holds them, the derived views (sort orders and
//! progress stats) and the controller that applies user actions.
//! Nothing here touches the browser.

mod error;
mod item;
mod id;
mod list;
mod sort;
mod stats;
mod form;
mod confirm;
mod controller;
mod config;

#[cfg(test)]
mod tests;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemId, Quantity};
pub use id::{IdSource, ClockIds, SequentialIds};
pub use list::PackingList;
pub use sort::{sorted_view, Collator, DefaultCollator, SortMode};
pub use stats::{PackingStats, StatsSummary};
pub use form::FormDraft;
pub use confirm::{Confirm, FixedConfirm};
pub use controller::{ClearOutcome, PackingController, CLEAR_LIST_PROMPT};
pub use config::AppConfig;
