//! Core path types and canonical key derivation.

/// Separator placed between segments in a canonical key.
pub const KEY_SEPARATOR: char = '^';

/// Escape prefix for separator and escape characters found inside a segment.
const KEY_ESCAPE: char = '\\';

/// Path: ordered sequence of segments from the root to a node.
pub type Path = Vec<String>;

/// Compute the canonical flat-index key for a path.
///
/// Segments are joined with [`KEY_SEPARATOR`]. Occurrences of the separator
/// or of `\` inside a segment are escaped with `\`, so distinct segment
/// sequences always map to distinct keys. The empty path maps to the empty
/// string.
pub fn key<S: AsRef<str>>(path: &[S]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.as_ref().len() + 1).sum());
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            out.push(KEY_SEPARATOR);
        }
        escape_segment_into(&mut out, segment.as_ref());
    }
    out
}

/// Append one segment to a key under construction, escaping as [`key`] does.
///
/// The caller pushes [`KEY_SEPARATOR`] between segments.
pub fn escape_segment_into(key: &mut String, segment: &str) {
    for ch in segment.chars() {
        if ch == KEY_SEPARATOR || ch == KEY_ESCAPE {
            key.push(KEY_ESCAPE);
        }
        key.push(ch);
    }
}

/// Copy a borrowed segment slice into an owned [`Path`].
pub fn to_path<S: AsRef<str>>(path: &[S]) -> Path {
    path.iter().map(|s| s.as_ref().to_string()).collect()
}
