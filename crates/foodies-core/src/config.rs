//! Site configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Storefront configuration.
///
/// Every field has a default, so an empty JSON object (or no config at all)
/// yields the stock behaviour of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Local storage key holding the serialized cart.
    pub storage_key: String,

    /// Glyph prefixed to rendered prices.
    pub currency_symbol: String,

    /// Resting text of add-to-cart buttons.
    pub add_label: String,

    /// Text shown on an add-to-cart button right after a click.
    pub added_label: String,

    /// Delay before an add-to-cart button reverts to `add_label`.
    pub added_label_revert_ms: u32,

    /// Quiet period before the nav indicator follows a window resize.
    pub resize_debounce_ms: u32,

    /// Delay between toggling the mobile nav and re-initializing the indicator.
    pub nav_toggle_reinit_ms: u32,

    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,

    /// Log output format (`json` or `human`).
    pub log_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "foodies_cart_v1".to_string(),
            currency_symbol: "\u{20b1}".to_string(),
            add_label: "Add to cart".to_string(),
            added_label: "Added \u{2713}".to_string(),
            added_label_revert_ms: 900,
            resize_debounce_ms: 80,
            nav_toggle_reinit_ms: 120,
            log_level: "info".to_string(),
            log_format: "human".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the storefront cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn added_label_revert(&self) -> Duration {
        Duration::from_millis(self.added_label_revert_ms.into())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms.into())
    }

    pub fn nav_toggle_reinit(&self) -> Duration {
        Duration::from_millis(self.nav_toggle_reinit_ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "foodies_cart_v1");
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.added_label, "Added ✓");
        assert_eq!(config.added_label_revert(), Duration::from_millis(900));
        assert_eq!(config.resize_debounce(), Duration::from_millis(80));
        assert_eq!(config.nav_toggle_reinit(), Duration::from_millis(120));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"currency_symbol": "$", "resize_debounce_ms": 50}"#)
            .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.resize_debounce_ms, 50);
        assert_eq!(config.storage_key, "foodies_cart_v1");
        assert_eq!(config.add_label, "Add to cart");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let err = SiteConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "storage_key",
                ..
            }
        ));
    }
}
