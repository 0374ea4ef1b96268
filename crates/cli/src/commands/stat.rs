use std::{
    io::{self, Stderr, Stdout},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use clap::Args;
use dirstat_fs::{CtimeNanos, TranslateOptions, lstat_with, stat_with};
use log::{debug, error};

use crate::printer::{ColorChoice, EntryPrinter, HumanPrinter, JsonPrinter, OutputFormat};

#[derive(Debug, Args)]
pub struct StatArgs {
    /// Paths to examine
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Describe a trailing symlink itself instead of its target
    #[arg(long)]
    pub no_follow: bool,

    /// Take change-time nanoseconds from the change time instead of the
    /// access time (overrides DIRSTAT_CTIME_NSEC)
    #[arg(long)]
    pub exact_ctime: bool,

    /// Output entries as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl StatArgs {
    fn options(&self) -> TranslateOptions {
        let mut opts = TranslateOptions::from_env();
        if self.exact_ctime {
            opts.ctime_nanos = CtimeNanos::ChangeTime;
        }
        opts
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }

    fn make_printer(&self) -> Box<dyn EntryPrinter> {
        match self.format() {
            OutputFormat::Human => Box::new(HumanPrinter::<Stdout, Stderr>::stdout(
                ColorChoice::parse(&self.color),
            )),
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout()),
        }
    }
}

pub fn run(args: StatArgs) -> ExitCode {
    let mut printer = args.make_printer();
    match execute(&args, printer.as_mut()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[stat] {e}");
            eprintln!("[stat] {e}");
            ExitCode::from(2)
        }
    }
}

/// Prints every path, reporting failures as it goes, and returns how many
/// paths failed. Only output errors abort the run.
pub fn execute(args: &StatArgs, printer: &mut dyn EntryPrinter) -> Result<usize> {
    let opts = args.options();
    debug!("[stat] {} path(s), options {:?}", args.paths.len(), opts);

    let mut failed = 0usize;
    for path in &args.paths {
        let res = if args.no_follow {
            lstat_with(path, &opts)
        } else {
            stat_with(path, &opts)
        };

        match res {
            Ok(entry) => printer.print_entry(&path.to_string_lossy(), &entry)?,
            Err(e) => {
                // the printer reports it; a log line here would double it on stderr
                debug!("[stat] {e}");
                failed += 1;
                printer.print_error(&e)?;
            }
        }
    }

    if failed > 0 {
        debug!("[stat] {failed} of {} path(s) failed", args.paths.len());
    }
    Ok(failed)
}

/// Output piped into something like `head` that exited early.
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
