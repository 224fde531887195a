//! Utility functions for string processing.

/// Canonical form of an ingredient name: surrounding whitespace trimmed, then
/// lowercased.
///
/// This is the only normalization applied anywhere. Dictionary keys go through
/// it at load time and query input goes through it before lookup, so both
/// sides always agree. No diacritic stripping, no whitespace collapsing:
/// `"Crème  Fraîche"` canonicalizes to `"crème  fraîche"`.
pub fn canonicalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Is `value` already a non-empty canonical name?
pub fn is_canonical(value: &str) -> bool {
    !value.is_empty() && canonicalize(value) == value
}

/// Length in Unicode scalar values, the unit edit distance is counted in.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
