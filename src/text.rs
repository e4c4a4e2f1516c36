//! ASCII case-insensitive string search used by the detectors.
//!
//! Signature tokens are ASCII, so byte offsets returned here always fall on
//! char boundaries of the haystack.

/// Find `needle` in `haystack` ignoring ASCII case, returning the byte offset
/// of the first occurrence.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Returns true if `haystack` contains `needle`, ignoring ASCII case.
pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle).is_some()
}

/// Returns true if `haystack` contains any of `needles`, ignoring ASCII case.
pub(crate) fn contains_any_ignore_ascii_case(haystack: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| contains_ignore_ascii_case(haystack, needle))
}
