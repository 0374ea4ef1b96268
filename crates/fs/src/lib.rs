mod config;
mod entry;
mod error;
pub mod mode;
#[cfg(unix)]
pub mod os;
mod raw;
mod translate;

pub use config::{CtimeNanos, TranslateOptions};
pub use entry::DirEntry;
pub use error::StatError;
pub use mode::FileKind;
#[cfg(unix)]
pub use os::{fstat, fstat_with, lstat, lstat_with, stat, stat_with};
pub use raw::{RawStatus, StatRecord, Timespec};
pub use translate::{base_name, build_entry, build_entry_with, is_symbolic_link, timestamp_nanos};
