use crate::fan_error::FanLogError;
use log::LevelFilter;
use std::env;

/// Parses a severity threshold from a string, case-insensitively.
///
/// Accepted values are `debug`, `info`, `warn`, `error`, and `warning` as an
/// alias for `warn`. Any other input is rejected; callers are expected to keep
/// their previous threshold in that case.
///
/// # Errors
///
/// `FanLogError::LevelFilter` if the input is not one of the accepted values.
pub fn parse_level_filter<S: AsRef<str>>(s: S) -> Result<LevelFilter, FanLogError> {
    match s.as_ref().to_lowercase().as_ref() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(FanLogError::LevelFilter(s.as_ref().to_string())),
    }
}

/// Reads the severity threshold from the environment variable `RUST_LOG`.
///
/// Returns `None` if the variable is not set.
///
/// # Errors
///
/// `FanLogError::LevelFilter` if the variable is set but not a valid severity.
pub fn level_from_env() -> Result<Option<LevelFilter>, FanLogError> {
    match env::var("RUST_LOG") {
        Ok(value) => parse_level_filter(&value).map(Some),
        Err(..) => Ok(None),
    }
}
