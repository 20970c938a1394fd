//! Textual fallback normalization
//!
//! Used only when a document cannot be parsed as XML. The output is meant for
//! literal comparison, not for display: every ASCII space, tab, newline and
//! carriage return is removed outright rather than collapsed.

use crate::profile::NormalizationProfile;

/// Whitespace removal, applied in order. Runs of four and two spaces are
/// removed before single spaces, so no space survives.
const WHITESPACE_RULES: [&str; 6] = ["\n", "\r", "\t", "    ", "  ", " "];

/// Predefined entity references and their literals, applied in order.
/// Each rule runs once over the output of the previous one, so
/// `&amp;quot;` ends up as `&quot;`.
const ENTITY_RULES: [(&str, &str); 5] = [
    ("&quot;", "\""),
    ("&gt;", ">"),
    ("&lt;", "<"),
    ("&amp;", "&"),
    ("&apos;", "'"),
];

/// Remove all ASCII whitespace used in markup layout
pub fn strip_whitespace(source: &str) -> String {
    WHITESPACE_RULES
        .iter()
        .fold(source.to_string(), |acc, pattern| acc.replace(pattern, ""))
}

/// Replace the five predefined XML entity references with their literals
pub fn unescape_entities(source: &str) -> String {
    ENTITY_RULES
        .iter()
        .fold(source.to_string(), |acc, (entity, literal)| {
            acc.replace(entity, literal)
        })
}

/// Normalize a document for literal comparison under the given profile
pub fn normalize(source: &str, profile: NormalizationProfile) -> String {
    let stripped = strip_whitespace(source);
    if profile.canonicalizes_entities() {
        unescape_entities(&stripped)
    } else {
        stripped
    }
}

/// Compare two documents by their normalized text
pub fn textually_equivalent(old: &str, new: &str, profile: NormalizationProfile) -> bool {
    normalize(old, profile) == normalize(new, profile)
}
