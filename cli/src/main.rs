mod commands;
mod terminal;

use cidrex_common::config::Config;
use commands::{CommandLine, Commands, cidr, explore, matching, range};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        quiet: commands.quiet,
        anchored: commands.anchored,
    };

    match commands.command {
        Commands::Range { min, max } => {
            print::header("numeric range", cfg.quiet);
            range::range(min, max, &cfg).map(drop)
        }
        Commands::Cidr { cidrs } => {
            print::header("cidr list", cfg.quiet);
            cidr::cidr(&cidrs, &cfg).map(drop)
        }
        Commands::Match { cidrs, inputs } => {
            print::header("matching inputs", cfg.quiet);
            matching::check(&cidrs, &inputs, &cfg)
        }
        Commands::Explore { commands } => {
            print::header("pattern explorer", cfg.quiet);
            explore::explore(&commands, &cfg)
        }
    }
}
