mod config;
pub mod logging;

pub use config::{PROGRAM_CTIME_NSEC, PROGRAM_LOG_LEVEL, PROGRAM_NAME, env_value};

pub use logging::init;
