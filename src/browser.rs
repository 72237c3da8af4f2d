//! Browser Adapters
//!
//! `window.confirm` and `String.prototype.localeCompare` behind the
//! domain's `Confirm` and `Collator` traits.

use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};
use packing_domain::{Collator, Confirm};

/// Blocking `window.confirm` prompt. Declines when no window is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("[CONFIRM] No window, treating as declined");
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("[CONFIRM] Prompt failed: {:?}", e);
            false
        })
    }
}

/// Locale-aware comparison in the user's default locale
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCollator;

impl Collator for BrowserCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        JsString::from(a)
            .locale_compare(b, &Array::new(), &Object::new())
            .cmp(&0)
    }
}
