use std::io::{self, Write};

use dirstat_fs::{DirEntry, StatError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `key: value` block per entry.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Self {
        match s {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Receives one call per path given on the command line.
pub trait EntryPrinter {
    fn print_entry(&mut self, path: &str, entry: &DirEntry) -> io::Result<()>;

    fn print_error(&mut self, err: &StatError) -> io::Result<()>;
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
    printed: usize,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    /// Generic writers can't be probed for a TTY, so `Auto` means no color.
    pub fn new(out: W, err: E, color: ColorChoice) -> Self {
        Self {
            out,
            err,
            use_color: color == ColorChoice::Always,
            printed: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    #[inline]
    fn format_name(&self, name: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", name)
        } else {
            name.to_owned()
        }
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    pub fn stdout(color: ColorChoice) -> Self {
        use std::io::IsTerminal;

        let color = match color {
            ColorChoice::Auto if io::stdout().is_terminal() => ColorChoice::Always,
            other => other,
        };
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<W: Write, E: Write> EntryPrinter for HumanPrinter<W, E> {
    fn print_entry(&mut self, path: &str, e: &DirEntry) -> io::Result<()> {
        if self.printed > 0 {
            writeln!(self.out)?;
        }
        self.printed += 1;

        let name = self.format_name(&e.name);
        writeln!(self.out, "  path: {path}")?;
        writeln!(self.out, "  name: {name}")?;
        writeln!(self.out, "  kind: {}", e.kind())?;
        if e.followed_symlink {
            writeln!(self.out, "   via: symbolic link")?;
        }
        writeln!(self.out, "  mode: {:o}", e.mode)?;
        writeln!(self.out, "  size: {}", e.size)?;
        writeln!(
            self.out,
            "blocks: {} (io block {})",
            e.blocks, e.blksize
        )?;
        writeln!(
            self.out,
            "device: {} inode: {} links: {}",
            e.dev, e.ino, e.nlink
        )?;
        if e.is_char_device() || e.is_block_device() {
            writeln!(self.out, "  rdev: {}", e.rdev)?;
        }
        writeln!(self.out, " owner: {}:{}", e.uid, e.gid)?;
        writeln!(self.out, " atime: {}", e.atime_ns)?;
        writeln!(self.out, " mtime: {}", e.mtime_ns)?;
        writeln!(self.out, " ctime: {}", e.ctime_ns)
    }

    fn print_error(&mut self, err: &StatError) -> io::Result<()> {
        writeln!(self.err, "dirstat: {err}")
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl JsonPrinter<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> EntryPrinter for JsonPrinter<W, E> {
    fn print_entry(&mut self, path: &str, entry: &DirEntry) -> io::Result<()> {
        let obj = serde_json::json!({
            "path": path,
            "kind": entry.kind(),
            "entry": entry,
        });
        writeln!(self.out, "{}", obj)
    }

    fn print_error(&mut self, err: &StatError) -> io::Result<()> {
        let obj = serde_json::json!({
            "type": "error",
            "op": err.op,
            "path": err.path.to_string_lossy(),
            "message": err.source.to_string(),
        });
        writeln!(self.err, "{}", obj)
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
