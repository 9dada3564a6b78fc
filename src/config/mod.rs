//! # Configuration Management Module
//!
//! Tradewish reads a TOML file with three sections:
//!
//! - [`WishlistConfig`] - where the wishlist patterns come from and how they compile
//! - [`OverlayConfig`] - whether markers are drawn at all
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tradewish::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Wishlist source: {:?}", config.wishlist.source);
//!
//!     Config::create_default("config.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [wishlist]
//! source = "inline"
//! patterns = "Gold*,Jade,?ron"
//!
//! [overlay]
//! enabled = true
//!
//! [logging]
//! level = "info"
//! file = "tradewish.log"
//! ```
//!
//! With `source = "file"` the patterns are read from `patterns_file` instead, one or
//! more comma-separated patterns per line, re-read whenever a settlement needs a
//! fresh match.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::wishlist::errors::WishlistError;
use crate::wishlist::pattern::{PatternOptions, DEFAULT_SIZE_LIMIT};
use crate::world::{FileWishlist, InlineWishlist, WishlistSource};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wishlist: WishlistConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the wishlist text is obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Inline,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistConfig {
    #[serde(default)]
    pub source: SourceKind,
    /// Comma-separated wildcard patterns used by the inline source.
    #[serde(default)]
    pub patterns: String,
    /// Pattern file used by the file source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns_file: Option<String>,
    /// Compiled-size ceiling per pattern in bytes; larger patterns are dropped.
    #[serde(default = "default_pattern_size_limit")]
    pub pattern_size_limit: usize,
}

fn default_pattern_size_limit() -> usize {
    DEFAULT_SIZE_LIMIT
}

impl Default for WishlistConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Inline,
            patterns: String::new(),
            patterns_file: None,
            pattern_size_limit: default_pattern_size_limit(),
        }
    }
}

impl WishlistConfig {
    pub fn pattern_options(&self) -> PatternOptions {
        PatternOptions {
            size_limit: self.pattern_size_limit,
        }
    }

    /// Resolve the configured wishlist source once, at startup.
    ///
    /// A source that cannot be wired up is `ConfigurationUnavailable`; callers
    /// disable the overlay rather than exit.
    pub fn resolve_source(&self) -> Result<Arc<dyn WishlistSource>, WishlistError> {
        match self.source {
            SourceKind::Inline => Ok(Arc::new(InlineWishlist::new(self.patterns.clone()))),
            SourceKind::File => {
                let path = self.patterns_file.as_deref().ok_or_else(|| {
                    WishlistError::ConfigurationUnavailable(
                        "source = \"file\" requires patterns_file".to_string(),
                    )
                })?;
                Ok(Arc::new(FileWishlist::open(path)?))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_overlay_enabled")]
    pub enabled: bool,
}

fn default_overlay_enabled() -> bool {
    true
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: default_overlay_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let mut config = Config::default();
        config.wishlist.patterns = "Gold*,Jade".to_string();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
