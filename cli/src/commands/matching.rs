use cidrex_common::config::Config;

use crate::commands::cidr::cidr;
use crate::terminal::print;

/// Compiles `cidrs` once and reports a verdict for every input.
pub fn check(cidrs: &str, inputs: &[String], cfg: &Config) -> anyhow::Result<()> {
    let matcher = cidr(cidrs, cfg)?;

    for input in inputs {
        print::verdict(input, matcher.is_match(input));
    }

    Ok(())
}
