// src/core/sanitize.rs
//
// String helpers for the wiki's image keys and URLs.

use percent_encoding::percent_decode_str;

use crate::config::consts::{ORIGINAL_QUALITY_SUFFIX, REVISION_MARKER};

/// Percent-decode an image key into a filename.
/// Path separators are replaced so the result stays a single path component.
pub fn decode_key(key: &str) -> String {
    let decoded = percent_decode_str(key).decode_utf8_lossy();
    let mut out = String::with_capacity(decoded.len());
    for ch in decoded.chars() {
        match ch {
            '/' | '\\' | '\0' => out.push('_'),
            _ => out.push(ch),
        }
    }
    match out.as_str() {
        "" | "." | ".." => format!("_{out}"),
        _ => out,
    }
}

/// Turn a downscaled image URL into one that asks for the original upload.
///
/// `https://x/revision/v1/scale-to-width-down/100` →
/// `https://x/revision/latest?format=original`
pub fn original_quality_url(downscaled: &str) -> String {
    let base = downscaled
        .split_once(REVISION_MARKER)
        .map_or(downscaled, |(base, _)| base);
    format!("{base}{ORIGINAL_QUALITY_SUFFIX}")
}

/// Numeric id after `prefix`, e.g. `Set_12` → 12.
pub fn id_after_prefix(s: &str, prefix: &str) -> Option<u32> {
    s.strip_prefix(prefix)?.parse().ok()
}

/// Set id from an emote key: the first `_`-separated number after `prefix`.
/// `Icon_Emoji_Paimon%27s_Paintings_12_Amber_1.png` → 12.
pub fn set_id_from_key(key: &str, prefix: &str) -> Option<u32> {
    let rest = key.strip_prefix(prefix)?;
    let first = rest.split('_').next()?;
    first.parse().ok()
}
