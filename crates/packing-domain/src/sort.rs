//! Sorted Views
//!
//! Display orderings over the stored list. Sorting never touches the
//! stored order: input order borrows the slice, the other modes sort a copy.

use std::borrow::Cow;
use std::cmp::Ordering;

use pinyin::ToPinyin;
use serde::{Deserialize, Serialize};

use super::item::Item;

/// Ordering picked in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Order in which items were added
    #[default]
    Input,
    /// Alphabetical by description
    Description,
    /// Unpacked items first
    Packed,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Input, SortMode::Description, SortMode::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortMode::Description,
            "packed" => SortMode::Packed,
            _ => SortMode::Input,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Input => "Sort by input order",
            SortMode::Description => "Sort by description",
            SortMode::Packed => "Sort by packed status",
        }
    }
}

/// String comparison used for the description ordering
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Case-insensitive comparison; Chinese characters compare by pinyin
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollator;

impl DefaultCollator {
    fn sort_key(text: &str) -> String {
        let mut key = String::with_capacity(text.len());
        for c in text.chars() {
            match c.to_pinyin() {
                Some(p) => key.push_str(p.plain()),
                None => key.extend(c.to_lowercase()),
            }
        }
        key
    }
}

impl Collator for DefaultCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        Self::sort_key(a)
            .cmp(&Self::sort_key(b))
            .then_with(|| a.cmp(b))
    }
}

/// Items in display order for `mode`
pub fn sorted_view<'a, C>(items: &'a [Item], mode: SortMode, collator: &C) -> Cow<'a, [Item]>
where
    C: Collator + ?Sized,
{
    match mode {
        SortMode::Input => Cow::Borrowed(items),
        SortMode::Description => {
            let mut copy = items.to_vec();
            copy.sort_by(|a, b| collator.compare(&a.description, &b.description));
            Cow::Owned(copy)
        }
        SortMode::Packed => {
            // Stable sort keeps input order inside each group
            let mut copy = items.to_vec();
            copy.sort_by_key(|item| item.packed);
            Cow::Owned(copy)
        }
    }
}
