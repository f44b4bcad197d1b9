//! Case-insensitive identifier handling.
//!
//! Pascal identifiers compare case-insensitively: `DoWork`, `dowork` and
//! `DOWORK` all name the same routine. Every comparison and every table key
//! in this crate goes through the helpers here, so the convention holds on
//! all matching paths.

use smol_str::SmolStr;

/// Compare two identifiers case-insensitively.
///
/// ASCII inputs take a byte-wise fast path; anything else falls back to
/// char-wise Unicode lowercasing.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// The case-folded form of an identifier, used as a table key.
pub fn fold(s: &str) -> SmolStr {
    if s.is_ascii() {
        if !s.bytes().any(|b| b.is_ascii_uppercase()) {
            return SmolStr::new(s);
        }
        return s.to_ascii_lowercase().into();
    }
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `s` is a well-formed simple (undotted) identifier.
///
/// Pascal allows a leading underscore; the rest follows the usual
/// identifier character classes.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || unicode_ident::is_xid_start(c) => {}
        _ => return false,
    }
    chars.all(unicode_ident::is_xid_continue)
}
