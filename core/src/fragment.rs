//! # Pattern Fragments
//!
//! Small helpers for composing regex text. A fragment never leaves a group open, so any two
//! fragments can be concatenated and the result is still a valid pattern.

/// Matches any decimal octet `0..=255` without leading zeros.
///
/// Same text the range compiler produces for `0..=255`.
pub const ANY_OCTET: &str = r"(?:\d|[1-9]\d|1\d{2}|2(?:[0-4]\d|5[0-5]))";

/// Separator between the octets of a dotted quad.
pub const DOT: &str = r"\.";

/// Joins fragments as alternatives.
///
/// * No fragments yields the empty string, which callers treat as "nothing to add".
/// * A single fragment is returned as is.
/// * Several fragments are wrapped in a non-capturing group: `(?:a|b|c)`.
pub fn alternate(fragments: Vec<String>) -> String {
    match fragments.len() {
        0 => String::new(),
        1 => fragments.into_iter().next().unwrap_or_default(),
        _ => format!("(?:{})", fragments.join("|")),
    }
}

/// Joins per-octet fragments with a literal dot.
pub fn dotted<S: AsRef<str>>(octets: &[S]) -> String {
    octets
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(DOT)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
