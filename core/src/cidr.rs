//! # CIDR Pattern Compiler
//!
//! Parses a single CIDR-like token and turns it into a regex over dotted-quad strings.
//!
//! Supported formats:
//! * **Prefix**: `10/8`, `192.168/16`, `10.1.2.3/30`. Omitted trailing octets are `0`.
//! * **Address**: `10.1.2.3`, same as `/32`.
//! * **Wildcards**: `10.1.2.*`, `*.18.23/24`. A `*` octet matches any value.
//! * **Range**: `192.168.50.100-192.168.51.3`. Both ends must be full addresses.

use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::debug;

use crate::address::Ipv4Range;
use crate::error::PatternError;
use crate::fragment::{ANY_OCTET, DOT, alternate, dotted};
use crate::range;

/// One position of a dotted quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Octet {
    Literal(u8),
    /// `*`, any value in `0..=255`.
    Any,
}

/// A parsed CIDR token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CidrSpec {
    /// Four octets and the number of leading bits that are fixed (`1..=32`).
    Prefix { octets: [Octet; 4], bits: u8 },
    /// An explicit `start-end` address range.
    Range(Ipv4Range),
}

impl FromStr for CidrSpec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((start_str, end_str)) = s.split_once('-') {
            return parse_address_range(s, start_str, end_str);
        }

        let (quad_str, bits) = match s.split_once('/') {
            Some((quad_str, bits_str)) => {
                let bits = parse_bits(bits_str).ok_or_else(|| PatternError::syntax(s))?;
                (quad_str, Some(bits))
            }
            None => (s, None),
        };

        let parsed = parse_quad(quad_str).ok_or_else(|| PatternError::syntax(s))?;
        let bits = match bits {
            Some(bits) => bits,
            None if parsed.len() == 4 => 32,
            None => {
                return Err(PatternError::MissingPrefix {
                    input: s.to_string(),
                });
            }
        };

        let mut octets = [Octet::Literal(0); 4];
        octets[..parsed.len()].copy_from_slice(&parsed);
        Ok(CidrSpec::Prefix { octets, bits })
    }
}

impl CidrSpec {
    /// Compiles the token into pattern source.
    pub fn pattern(&self) -> Result<String, PatternError> {
        match self {
            CidrSpec::Prefix { octets, bits } => Ok(prefix_pattern(octets, *bits)),
            CidrSpec::Range(ipv4_range) => {
                let start = ipv4_range.start_addr.octets();
                let end = ipv4_range.end_addr.octets();
                span_pattern(&start, &end)
                    .ok_or_else(|| PatternError::OutOfOrder {
                        input: ipv4_range.to_string(),
                    })
            }
        }
    }

    /// The contiguous block of addresses this token covers.
    ///
    /// `None` when a wildcard sits inside the fixed bits (`*.18.23/24` is not contiguous).
    pub fn addresses(&self) -> Option<Ipv4Range> {
        match self {
            CidrSpec::Range(ipv4_range) => Some(*ipv4_range),
            CidrSpec::Prefix { octets, bits } => {
                let mut literal = [0u8; 4];
                for (i, octet) in octets.iter().enumerate() {
                    match octet {
                        Octet::Literal(value) => literal[i] = *value,
                        Octet::Any if fixed_bits(*bits, i) > 0 => return None,
                        Octet::Any => {}
                    }
                }
                Ipv4Range::from_prefix(Ipv4Addr::from(literal), *bits)
            }
        }
    }
}

/// Compiles a single CIDR token into pattern source.
pub fn pattern(token: &str) -> Result<String, PatternError> {
    debug!(token, "compiling CIDR token");
    token.parse::<CidrSpec>()?.pattern()
}

/// Number of fixed bits falling into octet `index`, `0..=8`.
fn fixed_bits(bits: u8, index: usize) -> u8 {
    bits.saturating_sub(8 * index as u8).min(8)
}

fn prefix_pattern(octets: &[Octet; 4], bits: u8) -> String {
    let parts: Vec<String> = octets
        .iter()
        .enumerate()
        .map(|(i, octet)| match (*octet, fixed_bits(bits, i)) {
            (_, 0) | (Octet::Any, _) => ANY_OCTET.to_string(),
            (Octet::Literal(value), 8) => value.to_string(),
            (Octet::Literal(value), fixed) => {
                let mask: u8 = (1 << (8 - fixed)) - 1;
                let base = value & !mask;
                range::pattern(i64::from(base), i64::from(base | mask))
            }
        })
        .collect();
    dotted(&parts)
}

/// Pattern for every address between `start` and `end`, comparing octet by octet.
///
/// Both slices have the same length. Returns `None` if `start > end`.
fn span_pattern(start: &[u8], end: &[u8]) -> Option<String> {
    let (&low, &high) = (start.first()?, end.first()?);
    if low > high {
        return None;
    }

    let rest = start.len() - 1;
    if rest == 0 {
        return Some(range::pattern(i64::from(low), i64::from(high)));
    }

    if low == high {
        let tail = span_pattern(&start[1..], &end[1..])?;
        return Some(format!("{low}{DOT}{tail}"));
    }

    let mut branches: Vec<String> = Vec::with_capacity(3);

    let low_tail = span_pattern(&start[1..], &vec![u8::MAX; rest])?;
    branches.push(format!("{low}{DOT}{low_tail}"));

    if high - low > 1 {
        let interior = range::pattern(i64::from(low) + 1, i64::from(high) - 1);
        let any = dotted(&vec![ANY_OCTET; rest]);
        branches.push(format!("{interior}{DOT}{any}"));
    }

    let high_tail = span_pattern(&vec![0; rest], &end[1..])?;
    branches.push(format!("{high}{DOT}{high_tail}"));

    Some(alternate(branches))
}

fn parse_address_range(s: &str, start_str: &str, end_str: &str) -> Result<CidrSpec, PatternError> {
    let start = parse_quad(start_str).ok_or_else(|| PatternError::syntax(s))?;
    let end = parse_quad(end_str)
        .and_then(|octets| full_address(&octets))
        .ok_or_else(|| PatternError::syntax(s))?;
    let start = full_address(&start).ok_or_else(|| PatternError::RangeForm {
        input: s.to_string(),
    })?;

    Ok(CidrSpec::Range(Ipv4Range::new(start, end)))
}

/// Four literal octets, or `None` for a partial or wildcarded quad.
fn full_address(octets: &[Octet]) -> Option<Ipv4Addr> {
    match octets {
        [
            Octet::Literal(a),
            Octet::Literal(b),
            Octet::Literal(c),
            Octet::Literal(d),
        ] => Some(Ipv4Addr::new(*a, *b, *c, *d)),
        _ => None,
    }
}

/// One to four dot-separated octets.
fn parse_quad(s: &str) -> Option<Vec<Octet>> {
    let octets: Vec<Octet> = s.split('.').map(parse_octet).collect::<Option<_>>()?;
    if octets.len() > 4 {
        return None;
    }
    Some(octets)
}

fn parse_octet(s: &str) -> Option<Octet> {
    if s == "*" {
        return Some(Octet::Any);
    }
    let value = parse_decimal(s, 255)?;
    u8::try_from(value).ok().map(Octet::Literal)
}

fn parse_bits(s: &str) -> Option<u8> {
    match parse_decimal(s, 32)? {
        0 => None,
        bits => u8::try_from(bits).ok(),
    }
}

/// Canonical decimal up to `max`: digits only, no sign, no leading zeros.
fn parse_decimal(s: &str, max: u32) -> Option<u32> {
    let canonical = !s.is_empty()
        && s.len() <= 3
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s.len() == 1 || !s.starts_with('0'));
    if !canonical {
        return None;
    }
    s.parse::<u32>().ok().filter(|value| *value <= max)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
