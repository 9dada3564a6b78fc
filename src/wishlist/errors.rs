use thiserror::Error;

/// Errors that can arise while obtaining or compiling the wishlist.
#[derive(Debug, Error)]
pub enum WishlistError {
    /// The wishlist pattern text cannot be obtained from its provider.
    #[error("wishlist configuration unavailable: {0}")]
    ConfigurationUnavailable(String),

    /// A single pattern fragment did not compile into a matchable form.
    #[error("malformed wishlist pattern '{fragment}': {reason}")]
    MalformedPattern { fragment: String, reason: String },

    /// Wrapper around IO errors (pattern file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
