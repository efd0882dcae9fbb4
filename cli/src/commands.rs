pub mod cidr;
pub mod explore;
pub mod matching;
pub mod range;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cidrex")]
#[command(about = "Compiles numeric ranges and CIDR expressions into regular expressions.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output. Repeat to print bare patterns only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Print patterns wrapped in ^(?:...)$
    #[arg(long, global = true)]
    pub anchored: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the pattern matching every integer from MIN to MAX
    #[command(alias = "r")]
    Range {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },
    /// Print the pattern for a comma-separated CIDR list, e.g. "192.168/16, 10.1.2.*"
    #[command(alias = "c")]
    Cidr { cidrs: String },
    /// Test inputs against a CIDR list
    #[command(alias = "m")]
    Match {
        cidrs: String,
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Interactive explorer. Runs each COMMAND, or reads commands from stdin
    #[command(alias = "e")]
    Explore { commands: Vec<String> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
