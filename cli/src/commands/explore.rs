//! # Pattern Explorer
//!
//! A small line-oriented shell for trying patterns out:
//!
//! ```text
//! range -11 17       compile a numeric range
//! cidr 10/8, 1.2.*   compile a CIDR list
//! pattern [a-f]+     install a raw regex
//! match 10.1.2.3     test an input against the current pattern
//! 10.1.2.3           same as `match` once a pattern is set
//! .                  exit
//! ```

use std::io::{self, BufRead};

use anyhow::Context;
use cidrex_common::config::Config;
use cidrex_common::output;
use cidrex_core::matcher;
use regex::Regex;
use tracing::{error, warn};

use crate::commands::{cidr::cidr, range::range};
use crate::terminal::print;

const USAGE: &str = "\
usage: range min max   - print regex for range
       cidr list       - parse CIDR list and print regex
       pattern regex   - install a raw regex
       match input     - after cidr, range or pattern, test against an input
       .               - exit";

/// What a single explorer line did.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Compiled,
    Matched(bool),
    NoPattern,
    Usage,
}

pub struct Explorer<'a> {
    cfg: &'a Config,
    pattern: Option<Regex>,
}

impl<'a> Explorer<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg, pattern: None }
    }

    /// Runs one line, logging instead of propagating errors so the session keeps going.
    pub fn run(&mut self, line: &str) {
        if let Err(e) = self.execute(line) {
            error!("{e:#}");
        }
    }

    pub fn execute(&mut self, line: &str) -> anyhow::Result<Outcome> {
        let line = line.trim();
        let (verb, arg) = line
            .split_once(char::is_whitespace)
            .map(|(verb, arg)| (verb, arg.trim()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "range" => {
                let Some((min, max)) = parse_bounds(arg) else {
                    output!("usage: range min max");
                    return Ok(Outcome::Usage);
                };
                self.pattern = Some(range(min, max, self.cfg)?);
                Ok(Outcome::Compiled)
            }
            "cidr" => {
                self.pattern = Some(cidr(arg, self.cfg)?);
                Ok(Outcome::Compiled)
            }
            "pattern" => {
                let regex = matcher::anchored_raw(arg)
                    .with_context(|| format!("[{arg}] is not a valid pattern"))?;
                self.pattern = Some(regex);
                Ok(Outcome::Compiled)
            }
            "match" => Ok(self.test(arg)),
            "" => {
                output!("{USAGE}");
                Ok(Outcome::Usage)
            }
            _ if self.pattern.is_some() => Ok(self.test(line)),
            _ => {
                output!("{USAGE}");
                Ok(Outcome::Usage)
            }
        }
    }

    fn test(&self, input: &str) -> Outcome {
        match &self.pattern {
            Some(regex) => {
                let matched = regex.is_match(input);
                print::verdict(input, matched);
                Outcome::Matched(matched)
            }
            None => {
                warn!("set a pattern first");
                Outcome::NoPattern
            }
        }
    }
}

/// Runs `commands` in order, or reads commands from stdin until EOF or a lone `.`.
pub fn explore(commands: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut explorer = Explorer::new(cfg);

    if !commands.is_empty() {
        for command in commands {
            explorer.run(command);
        }
        return Ok(());
    }

    output!("{USAGE}");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim() == "." {
            break;
        }
        explorer.run(&line);
    }

    Ok(())
}

fn parse_bounds(arg: &str) -> Option<(i64, i64)> {
    let mut parts = arg.split_whitespace();
    let min = parts.next()?.parse().ok()?;
    let max = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((min, max))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
