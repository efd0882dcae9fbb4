use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::PatternError;

/// Compiles `pattern` so that it only matches whole inputs.
///
/// Unicode is turned off so `\d` stays ASCII: `"٣"` is not a number here.
pub fn anchored(pattern: &str) -> Result<Regex, PatternError> {
    build(pattern, false)
}

/// Compiles a user-written `pattern` so that it only matches whole inputs.
///
/// Unicode stays on, so `.` and negated classes like `[^x]` are accepted.
pub fn anchored_raw(pattern: &str) -> Result<Regex, PatternError> {
    build(pattern, true)
}

fn build(pattern: &str, unicode: bool) -> Result<Regex, PatternError> {
    let source = format!("^(?:{pattern})$");
    debug!(pattern = %source, unicode, "building matcher");
    RegexBuilder::new(&source)
        .unicode(unicode)
        .build()
        .map_err(|source| PatternError::Regex {
            input: pattern.to_string(),
            source,
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
