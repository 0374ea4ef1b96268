pub const PROGRAM_NAME: &str = "dirstat";
pub const PROGRAM_LOG_LEVEL: &str = "DIRSTAT_LOG_LEVEL";
/// Selects where the change-time nanoseconds come from: `atime` or `ctime`.
pub const PROGRAM_CTIME_NSEC: &str = "DIRSTAT_CTIME_NSEC";

/// Trimmed, lowercased value of an environment variable. Unset, empty and
/// non-unicode values all read as `None`.
pub fn env_value(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
