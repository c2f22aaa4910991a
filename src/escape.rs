//! Reserved-character escaping for Mermaid output.
//!
//! User-supplied text (node identifiers, edge labels, descriptions) is
//! sanitized by replacing each reserved character with a numeric token
//! `#<codepoint>;` so it cannot break the diagram syntax. Which characters
//! are reserved depends on where the text lands in the document.

/// Characters that would break a node identifier.
pub const NODE_ID_RESERVED: &str = "()<>#& -\n\t";

/// Characters that would break an edge label (the identifier set plus `"`).
pub const EDGE_LABEL_RESERVED: &str = "\"()<>#& -\n\t";

/// Characters escaped in plain-text descriptions.
pub const PLAIN_TEXT_RESERVED: &str = "\"<>#&";

/// Characters escaped in HTML-mode descriptions (markup passes through).
pub const HTML_TEXT_RESERVED: &str = "\"";

/// Replace every character of `text` found in `reserved` with a decimal
/// character-reference token (`<` becomes `#60;`); all other characters pass
/// through unchanged.
///
/// Escaping is idempotent only when `reserved` is disjoint from the token
/// alphabet (`#`, digits, `;`): re-escaping with a set that reserves `#`
/// escapes the tokens produced by the first pass.
pub fn escape(text: &str, reserved: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if reserved.contains(ch) {
            out.push_str(&format!("#{};", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}
