//! # Numeric Range Compiler
//!
//! Turns an inclusive integer interval into a regex matching exactly the canonical decimal
//! strings of the integers inside it: no leading zeros, `-` only for negatives, no `+`.
//!
//! The interval is cut into decimal widths (`0..=9`, `10..=99`, `100..=999`, ...). Inside one
//! width every value has the same number of digits, so the range is split by leading digit:
//! a partial low edge, a block of whole leading digits (`[lo-hi]\d{n}`), and a partial high edge,
//! each edge recursing one digit to the right.

use regex::Regex;
use tracing::trace;

use crate::error::PatternError;
use crate::fragment::alternate;
use crate::matcher;

/// Returns the pattern source matching every integer in `min..=max`.
///
/// An empty range (`min > max`) yields the empty string so it can be dropped into a larger
/// alternation as a no-op.
pub fn pattern(min: i64, max: i64) -> String {
    trace!(min, max, "compiling numeric range");
    alternate(pieces(i128::from(min), i128::from(max)))
}

/// Returns an anchored, compiled matcher for `min..=max`.
pub fn compile(min: i64, max: i64) -> Result<Regex, PatternError> {
    matcher::anchored(&pattern(min, max))
}

/// Splits `min..=max` into alternatives covering negatives, single digits and each wider
/// decimal width in turn.
fn pieces(mut min: i128, max: i128) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    if min > max {
        return fragments;
    }

    if min < 0 {
        let magnitude = alternate(pieces((-max).max(1), -min));
        fragments.push(format!("-{magnitude}"));
        min = 0;
    }

    if min < 10 && min <= max {
        fragments.push(digit_class(min, max));
        min = 10;
    }

    let mut modulus: i128 = 10;
    let mut digits: u32 = 2;
    while min <= max {
        let mask = modulus * 10;
        if min < mask {
            fragments.extend(split_by_leading_digit(min, max.min(mask - 1), digits, modulus));
            min = mask;
        }
        modulus = mask;
        digits += 1;
    }

    fragments
}

/// Character class for the single digits in `min..=max`, clamped to `0..=9`.
///
/// * `5` for one digit, `\d` for all ten.
/// * `[45]` for two adjacent digits, `[3-7]` otherwise.
fn digit_class(min: i128, max: i128) -> String {
    let min = min.max(0);
    let max = max.min(9);
    if min > max {
        String::new()
    } else if min == max {
        min.to_string()
    } else if min == 0 && max == 9 {
        r"\d".to_string()
    } else if max - min == 1 {
        format!("[{min}{max}]")
    } else {
        format!("[{min}-{max}]")
    }
}

/// Fixed-width split of `min..=max`, where both bounds are written with exactly `digits`
/// digits (leading zeros included) and `modulus` is `10^(digits-1)`.
///
/// Callers guarantee `min <= max < 10 * modulus`.
fn split_by_leading_digit(min: i128, max: i128, digits: u32, modulus: i128) -> Vec<String> {
    if modulus == 1 {
        return vec![digit_class(min, max)];
    }

    let lower = modulus / 10;
    let mut min_digit = min / modulus;
    let mut max_digit = max / modulus;

    if min_digit == max_digit {
        let rest = alternate(split_by_leading_digit(
            min % modulus,
            max % modulus,
            digits - 1,
            lower,
        ));
        return vec![format!("{min_digit}{rest}")];
    }

    let mut fragments: Vec<String> = Vec::new();

    if min != min_digit * modulus {
        let rest = alternate(split_by_leading_digit(
            min % modulus,
            modulus - 1,
            digits - 1,
            lower,
        ));
        fragments.push(format!("{min_digit}{rest}"));
        min_digit += 1;
    }

    let mut high_edge: Option<String> = None;
    if max + 1 != (max_digit + 1) * modulus {
        let rest = alternate(split_by_leading_digit(0, max % modulus, digits - 1, lower));
        high_edge = Some(format!("{max_digit}{rest}"));
        max_digit -= 1;
    }

    if min_digit <= max_digit {
        let class = digit_class(min_digit, max_digit);
        if digits <= 2 {
            fragments.push(format!(r"{class}\d"));
        } else {
            fragments.push(format!(r"{class}\d{{{}}}", digits - 1));
        }
    }

    fragments.extend(high_edge);
    fragments
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
