//! Wildcard wishlist patterns.
//!
//! A wishlist is a comma-delimited list of user patterns such as `Gold*,Jade,?ron`.
//! Each fragment is compiled into an anchored, case-insensitive [`Regex`] where
//! `*` matches any run of characters and `?` matches exactly one character. Every
//! other character is matched literally, so `.` or `(` in an item label need no
//! escaping by the player.
//!
//! Both ASCII `,` and the full-width `，` separate fragments. Empty fragments are
//! discarded and fragments are not trimmed: `"Gold, Jade"` yields the fragments
//! `Gold` and ` Jade`.
use log::warn;
use regex::{Regex, RegexBuilder};

use crate::logutil::escape_log;
use crate::wishlist::errors::WishlistError;

/// Characters that separate fragments in the raw wishlist text.
pub const SEPARATORS: [char; 2] = [',', '，'];

/// Default compiled-size ceiling for a single fragment (bytes).
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// Compilation knobs for wishlist fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Upper bound on the compiled program size of one fragment. Fragments
    /// exceeding it are dropped as malformed.
    pub size_limit: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// A compiled wishlist: the fragments that compiled, plus the ones that did not.
#[derive(Debug, Clone, Default)]
pub struct WishlistPatterns {
    compiled: Vec<Regex>,
    dropped: Vec<String>,
}

impl WishlistPatterns {
    /// Split and compile `text`. Fragments that fail to compile are logged and
    /// skipped; the rest of the wishlist stays usable.
    pub fn compile(text: &str, options: &PatternOptions) -> Self {
        let mut patterns = WishlistPatterns::default();
        for fragment in text.split(&SEPARATORS[..]).filter(|f| !f.is_empty()) {
            match compile_fragment(fragment, options) {
                Ok(re) => patterns.compiled.push(re),
                Err(e) => {
                    warn!("Dropping wishlist pattern: {}", escape_log(&e.to_string()));
                    patterns.dropped.push(fragment.to_string());
                }
            }
        }
        patterns
    }

    /// Number of usable patterns.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Fragments that were skipped because they failed to compile.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// True when any pattern matches any label. No patterns never matches.
    pub fn matches_any<I, S>(&self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.compiled.is_empty() {
            return false;
        }
        let labels: Vec<S> = labels.into_iter().collect();
        self.compiled
            .iter()
            .any(|re| labels.iter().any(|label| re.is_match(label.as_ref())))
    }
}

/// Translate a wildcard fragment into anchored regex source.
pub fn wildcard_to_regex(fragment: &str) -> String {
    let mut source = String::with_capacity(fragment.len() + 8);
    source.push('^');
    let mut buf = [0u8; 4];
    for ch in fragment.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            c => source.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }
    source.push('$');
    source
}

fn compile_fragment(fragment: &str, options: &PatternOptions) -> Result<Regex, WishlistError> {
    RegexBuilder::new(&wildcard_to_regex(fragment))
        .case_insensitive(true)
        .size_limit(options.size_limit)
        .build()
        .map_err(|e| WishlistError::MalformedPattern {
            fragment: fragment.to_string(),
            reason: e.to_string(),
        })
}

/// Does any of `labels` match any pattern in the delimited `pattern_text`?
///
/// Pure; compiles the wishlist on every call with default options.
pub fn has_match<I, S>(labels: I, pattern_text: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WishlistPatterns::compile(pattern_text, &PatternOptions::default()).matches_any(labels)
}
