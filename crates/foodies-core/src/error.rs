//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for `SiteConfig`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the storefront cannot work with.
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
