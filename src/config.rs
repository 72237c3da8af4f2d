//! Page Configuration
//!
//! Reads the optional JSON block
//! `<script id="far-away-config" type="application/json">` from the page.

use packing_domain::{AppConfig, DomainResult};

const CONFIG_ELEMENT_ID: &str = "far-away-config";

/// Config from the page, defaults when the block is missing or empty
pub fn load_config() -> DomainResult<AppConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_config(raw.as_deref())
}

fn parse_config(raw: Option<&str>) -> DomainResult<AppConfig> {
    match raw.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => AppConfig::from_json(json),
        None => Ok(AppConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_block_uses_defaults() {
        assert_eq!(parse_config(None).unwrap(), AppConfig::default());
        assert_eq!(parse_config(Some("  \n ")).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_block_overrides() {
        let config = parse_config(Some(r#" { "max_quantity": 10 } "#)).unwrap();
        assert_eq!(config.max_quantity().get(), 10);
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn test_malformed_block() {
        assert!(parse_config(Some("{ not json")).is_err());
    }
}
