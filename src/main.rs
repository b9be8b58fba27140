use clap::Parser;
use harvest_counter::logging::{self, LogSpec};
use std::{io, process::ExitCode};
use tracing::Level;

#[derive(Parser)]
#[command(name = "harvest")]
#[command(about = "Count the days until harvest")]
#[command(version)]
#[command(after_help = "EXAMPLES:
    harvest           Ask for the number of days, then count them
    harvest 5         Count five days without asking

Diagnostics go to stderr. Use -v or -vv, or set HARVEST_LOG to a filter.")]
struct Cli {
    /// Number of days until harvest, asked interactively when omitted
    #[arg(value_parser = harvest_counter::parse_days, allow_negative_numbers = true)]
    days: Option<u64>,

    /// Log more diagnostics on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::enable_logs_for(LogSpec::default().with_level(cli.log_level()));

    match harvest_counter::run(cli.days, io::stdin().lock(), io::stdout().lock()) {
        Ok(days) => {
            tracing::debug!(days, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn days_argument() {
        assert_eq!(Cli::try_parse_from(["harvest"]).unwrap().days, None);
        assert_eq!(Cli::try_parse_from(["harvest", "5"]).unwrap().days, Some(5));
        assert!(Cli::try_parse_from(["harvest", "-1"]).is_err());
        assert!(Cli::try_parse_from(["harvest", "0"]).is_err());
        assert!(Cli::try_parse_from(["harvest", "five"]).is_err());
        assert!(Cli::try_parse_from(["harvest", "18446744073709551616"]).is_err());
    }

    #[test]
    fn verbosity_raises_log_level() {
        let level = |args: &[&str]| Cli::try_parse_from(args).unwrap().log_level();
        assert_eq!(level(&["harvest"]), Level::WARN);
        assert_eq!(level(&["harvest", "-v", "3"]), Level::DEBUG);
        assert_eq!(level(&["harvest", "-vv"]), Level::TRACE);
        assert_eq!(level(&["harvest", "--verbose", "--verbose", "-v"]), Level::TRACE);
    }
}
