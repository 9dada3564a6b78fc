//! Helpers for logging player-authored text (settlement names, item labels,
//! wishlist patterns) on a single line.

/// Longest settlement name or item label kept in a log line, in characters.
pub const LABEL_PREVIEW: usize = 48;

/// Longest free text (wishlist patterns, error details) kept in a log line.
pub const MAX_PREVIEW: usize = 160;

/// Escape `s` for single-line logging, keeping at most `max_chars` characters and
/// marking a cut with `…`.
///
/// Line breaks and tabs become `\n`, `\r`, `\t`; other control characters are
/// written as `\xNN`. Non-ASCII text such as `玉` is kept as-is.
pub fn escape_preview(s: &str, max_chars: usize) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(s.len().min(max_chars) + 4);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(max_chars) {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}

/// Escape a settlement name or item label.
pub fn escape_label(label: &str) -> String {
    escape_preview(label, LABEL_PREVIEW)
}

/// Escape free text such as the raw wishlist.
pub fn escape_log(s: &str) -> String {
    escape_preview(s, MAX_PREVIEW)
}

/// Short description of a raw wishlist for startup logs, e.g. `3 patterns: Gold*,Jade,Steel`.
pub fn describe_wishlist(text: &str) -> String {
    let count = text
        .split(&crate::wishlist::pattern::SEPARATORS[..])
        .filter(|f| !f.is_empty())
        .count();
    match count {
        0 => "no patterns".to_string(),
        1 => format!("1 pattern: {}", escape_log(text)),
        n => format!("{} patterns: {}", n, escape_log(text)),
    }
}
