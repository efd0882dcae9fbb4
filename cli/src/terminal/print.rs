use cidrex_common::config::Config;
use cidrex_common::{output, success};
use colored::*;
use tracing::warn;

pub const TOTAL_WIDTH: usize = 64;

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    output!("{}", line);
}

/// Prints a compiled pattern, prefixed by what it was compiled from unless quiet level is 2+.
pub fn pattern(label: &str, pattern: &str, cfg: &Config) {
    let shown: String = cfg.display_pattern(pattern);
    match cfg.quiet {
        0 | 1 => output!("{} = {}", label.bright_black(), shown.bold()),
        _ => output!("{}", shown),
    }
}

pub fn verdict(input: &str, matched: bool) {
    if matched {
        success!("match [{}] {}", input, "success".green());
    } else {
        warn!("match [{}] {}", input, "failed".red());
    }
}
