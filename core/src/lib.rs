//! # cidrex
//!
//! Compiles numeric ranges and IPv4 CIDR expressions into regular expressions that match the
//! decimal text of the numbers (or dotted quads) inside them, with no numeric parsing at match
//! time.
//!
//! ## Modules
//! * **[`range`]**: `min..=max` to a pattern over canonical decimal integers.
//! * **[`cidr`]**: a single token such as `10/8`, `10.1.2.*` or `1.2.3.4-1.2.5.14`.
//! * **[`list`]**: comma-separated lists of tokens.
//!
//! ## Regex dialect
//! Generated patterns only use character classes, alternation, non-capturing groups `(?:...)`,
//! `\d`, `\d{n}` and `\.`. They must be matched against the whole input; [`matcher::anchored`]
//! does that for the `regex` crate.
//!
//! ```
//! let re = cidrex_core::list::compile("192.168/16, 10.1.2.*").unwrap();
//! assert!(re.is_match("10.1.2.200"));
//! assert!(!re.is_match("10.1.3.0"));
//! ```

pub mod address;
pub mod cidr;
pub mod error;
pub mod fragment;
pub mod list;
pub mod matcher;
pub mod range;

pub use address::Ipv4Range;
pub use cidr::{CidrSpec, Octet};
pub use error::{ErrorKind, PatternError};
