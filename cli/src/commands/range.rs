use cidrex_common::config::Config;
use cidrex_core::{matcher, range};
use regex::Regex;
use tracing::warn;

use crate::terminal::print;

/// Prints the pattern for `min..=max` and returns its matcher.
pub fn range(min: i64, max: i64, cfg: &Config) -> anyhow::Result<Regex> {
    if min > max {
        warn!("range [{min} {max}] is empty, the pattern matches nothing but \"\"");
    }

    let source: String = range::pattern(min, max);
    print::pattern(&format!("range [{min} {max}]"), &source, cfg);

    Ok(matcher::anchored(&source)?)
}
