use dirstat_runtime::{PROGRAM_CTIME_NSEC, env_value};
use log::warn;

/// Which nanosecond component the change time is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CtimeNanos {
    /// Seconds from the change time, nanoseconds from the access time.
    /// This is what the entry layout has always reported; kept as the
    /// default so existing consumers see the same values.
    #[default]
    AccessTime,
    /// Seconds and nanoseconds both from the change time.
    ChangeTime,
}

impl CtimeNanos {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "atime" => Some(Self::AccessTime),
            "ctime" => Some(Self::ChangeTime),
            _ => None,
        }
    }
}

/// Knobs for [`crate::build_entry_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub ctime_nanos: CtimeNanos,
}

impl TranslateOptions {
    /// Options from `DIRSTAT_CTIME_NSEC`. Unknown values fall back to the
    /// default with a warning.
    pub fn from_env() -> Self {
        let ctime_nanos = match env_value(PROGRAM_CTIME_NSEC) {
            None => CtimeNanos::default(),
            Some(v) => CtimeNanos::parse(&v).unwrap_or_else(|| {
                warn!("[config] ignoring {PROGRAM_CTIME_NSEC}={v:?}, expected atime or ctime");
                CtimeNanos::default()
            }),
        };
        Self { ctime_nanos }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
