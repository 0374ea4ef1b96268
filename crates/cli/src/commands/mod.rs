pub mod stat;

use clap::Subcommand;
pub use stat::StatArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the status of one or more paths.
    ///
    /// Example:
    ///   dirstat stat /var/log/syslog
    ///   dirstat stat --no-follow --json ~/.bashrc /etc/hosts
    Stat(StatArgs),
}
