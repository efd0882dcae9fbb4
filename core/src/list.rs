//! Comma-separated lists of CIDR tokens, e.g. `192.168/16, 10/8`.

use regex::Regex;
use tracing::debug;

use crate::cidr;
use crate::error::PatternError;
use crate::fragment::alternate;
use crate::matcher;

/// Compiles every token of the list and joins them as alternatives.
///
/// Whitespace around the commas is ignored. The first failing token aborts the whole list.
pub fn pattern(cidrs: &str) -> Result<String, PatternError> {
    let tokens: Vec<&str> = cidrs.split(',').map(str::trim).collect();

    if tokens.iter().all(|token| token.is_empty()) {
        return Err(PatternError::EmptyList {
            input: cidrs.to_string(),
        });
    }

    debug!(count = tokens.len(), "compiling CIDR list");

    let patterns = tokens
        .into_iter()
        .map(cidr::pattern)
        .collect::<Result<Vec<String>, PatternError>>()?;

    Ok(alternate(patterns))
}

/// Returns an anchored, compiled matcher for the list.
pub fn compile(cidrs: &str) -> Result<Regex, PatternError> {
    matcher::anchored(&pattern(cidrs)?)
}

/// Compiles `cidrs` and checks whether the whole of `input` matches it.
pub fn matches(cidrs: &str, input: &str) -> Result<bool, PatternError> {
    Ok(compile(cidrs)?.is_match(input))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
