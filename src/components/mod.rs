//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod item_form;
mod item_list;
mod packing_item;
mod sort_selector;
mod stats;

pub use logo::Logo;
pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use packing_item::PackingItem;
pub use sort_selector::SortSelector;
pub use stats::Stats;
