use anyhow::Context;
use cidrex_common::config::Config;
use cidrex_core::{CidrSpec, list, matcher};
use regex::Regex;
use tracing::info;

use crate::terminal::print;

/// Prints the pattern for a CIDR list and returns its matcher.
pub fn cidr(cidrs: &str, cfg: &Config) -> anyhow::Result<Regex> {
    let source: String =
        list::pattern(cidrs).with_context(|| format!("[{cidrs}] is not a CIDR pattern list"))?;

    if cfg.quiet == 0 {
        report_coverage(cidrs);
    }
    print::pattern(&format!("cidr [{cidrs}]"), &source, cfg);

    Ok(matcher::anchored(&source)?)
}

/// Logs the address block behind each token that covers a contiguous one.
fn report_coverage(cidrs: &str) {
    for token in cidrs.split(',').map(str::trim) {
        let Ok(spec) = token.parse::<CidrSpec>() else {
            continue;
        };
        if let Some(block) = spec.addresses() {
            let len = block.len();
            let unit: &str = if len == 1 { "address" } else { "addresses" };
            info!("{token} covers {block} ({len} {unit})");
        }
    }
}
