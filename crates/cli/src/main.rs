use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use dirstat_runtime::logging;

#[derive(Debug, Parser)]
#[command(
    name = "dirstat",
    version,
    about = "Portable file status",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Stat(args) => commands::stat::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stat_flags() {
        let cli = Cli::try_parse_from([
            "dirstat",
            "stat",
            "--no-follow",
            "--json",
            "--exact-ctime",
            "a",
            "b/c",
        ])
        .expect("valid command line");

        let Command::Stat(args) = cli.command;
        assert!(args.no_follow);
        assert!(args.json);
        assert!(args.exact_ctime);
        assert_eq!(args.color, "auto");
        assert_eq!(args.paths.len(), 2);
    }

    #[test]
    fn stat_requires_a_path() {
        assert!(Cli::try_parse_from(["dirstat", "stat"]).is_err());
    }
}
