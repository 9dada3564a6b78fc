//! Wishlist pattern providers.
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::world::WishlistSource;
use crate::wishlist::errors::WishlistError;

/// A fixed pattern string, typically taken from `[wishlist] patterns`.
#[derive(Debug, Clone, Default)]
pub struct InlineWishlist {
    patterns: String,
}

impl InlineWishlist {
    pub fn new(patterns: impl Into<String>) -> Self {
        Self {
            patterns: patterns.into(),
        }
    }
}

impl WishlistSource for InlineWishlist {
    fn wishlist_text(&self) -> Result<String, WishlistError> {
        Ok(self.patterns.clone())
    }
}

/// Patterns kept in a plain-text file that may be edited while running.
///
/// The file is read again on every request so edits take effect for the next
/// cache miss. Line breaks act as additional separators.
#[derive(Debug, Clone)]
pub struct FileWishlist {
    path: PathBuf,
}

impl FileWishlist {
    /// Bind to `path`, failing with `ConfigurationUnavailable` when the file
    /// cannot be read at all.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WishlistError> {
        let path = path.as_ref().to_path_buf();
        fs::read_to_string(&path).map_err(|e| {
            WishlistError::ConfigurationUnavailable(format!("{}: {}", path.display(), e))
        })?;
        info!("Wishlist patterns bound to {}", path.display());
        Ok(Self { path })
    }
}

impl WishlistSource for FileWishlist {
    fn wishlist_text(&self) -> Result<String, WishlistError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(raw.lines().collect::<Vec<_>>().join(","))
    }
}
