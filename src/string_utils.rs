//! String utility functions for name normalisation.

use std::ffi::OsStr;

/// Strip leading and trailing whitespace from a single path segment.
///
/// Whitespace follows the Unicode `White_Space` property, so non-breaking and
/// ideographic spaces are stripped as well as ASCII blanks. Interior
/// whitespace is preserved.
///
/// Names that are not valid UTF-8 are trimmed on their valid ends: bytes that
/// do not decode are kept as they are. A name made up entirely of whitespace
/// trims to the empty name.
///
/// # Example
///
/// ```
/// use std::ffi::OsStr;
/// use trimnames::string_utils::trim_name;
///
/// assert_eq!(trim_name(OsStr::new("  notes final.txt ")), OsStr::new("notes final.txt"));
/// assert_eq!(trim_name(OsStr::new("clean.rs")), OsStr::new("clean.rs"));
/// assert_eq!(trim_name(OsStr::new("   ")), OsStr::new(""));
/// ```
pub fn trim_name(name: &OsStr) -> &OsStr {
    if let Some(s) = name.to_str() {
        return OsStr::new(s.trim());
    }

    let bytes = name.as_encoded_bytes();
    let leading = bytes
        .utf8_chunks()
        .next()
        .map_or(0, |chunk| chunk.valid().len() - chunk.valid().trim_start().len());
    let trailing = match bytes.utf8_chunks().last() {
        Some(chunk) if chunk.invalid().is_empty() => {
            chunk.valid().len() - chunk.valid().trim_end().len()
        }
        _ => 0,
    };

    let end = bytes.len() - trailing;
    let start = leading.min(end);
    // SAFETY: both cut points sit next to whitespace characters decoded from
    // valid UTF-8 in `name`, which is where encoded bytes may be split.
    unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[start..end]) }
}

/// Check whether `trim_name` would change this name.
pub fn needs_trim(name: &OsStr) -> bool {
    trim_name(name) != name
}
