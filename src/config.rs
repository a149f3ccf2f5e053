//! Startup configuration, read from the command line and the environment.
//!
//! `kik [filename]` takes at most one positional argument; anything after it
//! is ignored. Two environment variables tune the rest:
//!
//! - `KIK_LOG`: file to append log records to. Unset means no logging, so
//!   nothing is ever written over the editing screen.
//! - `KIK_POLL_MS`: how long one input poll waits, in milliseconds.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            log_file: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::args_os().skip(1),
            std::env::var_os("KIK_LOG"),
            std::env::var("KIK_POLL_MS").ok(),
        )
    }

    /// `args` excludes the program name.
    pub fn from_parts<I>(args: I, log_file: Option<OsString>, poll_ms: Option<String>) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let poll_interval = poll_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        Self {
            path: args.into_iter().next().map(PathBuf::from),
            log_file: log_file.filter(|p| !p.is_empty()).map(PathBuf::from),
            poll_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_no_arguments() {
        let config = Config::from_parts(args(&[]), None, None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_first_argument_is_the_file() {
        let config = Config::from_parts(args(&["notes.txt", "extra"]), None, None);
        assert_eq!(config.path, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_log_file_from_env() {
        let config = Config::from_parts(args(&[]), Some(OsString::from("/tmp/kik.log")), None);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/kik.log")));

        let config = Config::from_parts(args(&[]), Some(OsString::new()), None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_poll_interval() {
        let config = Config::from_parts(args(&[]), None, Some("250".to_string()));
        assert_eq!(config.poll_interval, Duration::from_millis(250));

        let config = Config::from_parts(args(&[]), None, Some("0".to_string()));
        assert_eq!(config.poll_interval, Duration::from_millis(1));

        let config = Config::from_parts(args(&[]), None, Some("soon".to_string()));
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
    }
}
