/*  container-startup: command dispatcher for container startup plugins
 *  Copyright (C) 2019 The container-startup developers
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Log sinks of the startup system
//!
//! All sinks implement [Logger] and are handed to the command processors as
//! `Arc<dyn Logger>`. Which sinks are used depends on the command being run,
//! see [initialise].
//!
//! # Verbosity
//!
//! * 0 = logging disabled
//! * 1 = error only
//! * 2 = error and warning
//! * 3 = error, warning and note
//! * 4 = error, warning, note and info (default)
//! * 5 = all messages

pub mod combined;
pub mod file;
#[cfg(test)]
pub mod memory;
pub mod stdio;
pub mod syslog;

use std::fmt::Display;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;
use std::path::Path;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::Level;
use log::Record;
use log4rs::append::Append;

use crate::config::StartupConfig;
use crate::errors::print_error;

pub use combined::CombinedLogger;
pub use file::FileLogger;
pub use stdio::StdioLogger;
pub use syslog::SyslogLogger;

pub const DEFAULT_VERBOSITY: u8 = 4;

pub const MAX_VERBOSITY: u8 = 5;

/// Line format of the stdio and file sinks, the message carries the severity
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.6f)} {m}{n}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Info,
    Debug,
}

impl Severity {
    /// Lowest verbosity at which this severity is dropped
    fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Note => 2,
            Severity::Info => 3,
            Severity::Debug => 4,
        }
    }

    fn level(self) -> Level {
        match self {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warn,
            Severity::Note | Severity::Info => Level::Info,
            Severity::Debug => Level::Debug,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Info => "info",
            Severity::Debug => "debug",
        };
        write!(f, "{}", name)
    }
}

/// Verbosity threshold shared by all sinks
#[derive(Debug)]
pub struct Verbosity(AtomicU8);

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity(AtomicU8::new(DEFAULT_VERBOSITY))
    }
}

impl Verbosity {
    pub fn set(&self, level: u8) {
        self.0.store(level, Ordering::Relaxed);
    }

    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn enables(&self, severity: Severity) -> bool {
        self.get() > severity.rank()
    }
}

/// Line logger with five severities
pub trait Logger: Send + Sync + std::fmt::Debug {
    fn write(&self, severity: Severity, message: &str);

    /// See the [module documentation](self) for the levels
    fn set_verbosity(&self, level: u8);

    /// Whether messages end up on stdout or stderr
    fn uses_stdio(&self) -> bool {
        false
    }

    fn debug(&self, message: &str) {
        self.write(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(Severity::Info, message);
    }

    fn note(&self, message: &str) {
        self.write(Severity::Note, message);
    }

    fn warning(&self, message: &str) {
        self.write(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.write(Severity::Error, message);
    }
}

/// Pass one message to a log4rs appender
fn append(appender: &dyn Append, severity: Severity, message: &str) {
    let result = appender.append(
        &Record::builder()
            .args(format_args!("[{}] {}", severity, message))
            .level(severity.level())
            .target("startup")
            .build(),
    );

    if let Err(e) = result {
        print_error(&format!("Could not write log message: {}", e));
    }
}

/// Whether `command` runs the container, so logs belong on the console
pub fn is_run_command(command: Option<&str>) -> bool {
    matches!(command, Some("run") | Some("run-and-enter"))
}

/// Select the sinks for `command`
///
/// * `run` / `run-and-enter`: stdio and syslog, or stdio and file if
///   there is no syslog socket
/// * other commands: syslog, or file if there is no syslog socket
///
/// The verbosity is taken from the configuration.
pub fn initialise(command: Option<&str>, config: &StartupConfig) -> Arc<dyn Logger> {
    let use_syslog = Path::new(&config.syslog_socket).exists();

    let persistent: Box<dyn Logger> = if use_syslog {
        Box::new(SyslogLogger::new())
    } else {
        match FileLogger::new(&config.log_file) {
            Ok(logger) => Box::new(logger),
            Err(e) => {
                print_error(&format!(
                    "Could not open log file {}: {}",
                    config.log_file, e
                ));
                Box::new(CombinedLogger::new())
            }
        }
    };

    let logger: Box<dyn Logger> = if is_run_command(command) {
        let mut combined = CombinedLogger::new();
        combined.add(Box::new(StdioLogger::new()));
        combined.add(persistent);
        Box::new(combined)
    } else {
        persistent
    };

    logger.set_verbosity(config.verbosity.unwrap_or(DEFAULT_VERBOSITY));
    Arc::from(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_verbosity_hides_debug_only() {
        let verbosity = Verbosity::default();

        assert!(verbosity.enables(Severity::Info));
        assert!(!verbosity.enables(Severity::Debug));
    }

    #[test]
    fn verbosity_zero_disables_everything() {
        let verbosity = Verbosity::default();
        verbosity.set(0);

        assert!(!verbosity.enables(Severity::Error));
    }

    #[test]
    fn each_level_adds_one_severity() {
        let verbosity = Verbosity::default();
        let all = [
            Severity::Error,
            Severity::Warning,
            Severity::Note,
            Severity::Info,
            Severity::Debug,
        ];

        for level in 0..=MAX_VERBOSITY {
            verbosity.set(level);
            let enabled = all.iter().filter(|s| verbosity.enables(**s)).count();
            assert_eq!(level as usize, enabled);
        }
    }

    #[test]
    fn run_commands_are_case_sensitive() {
        assert!(is_run_command(Some("run")));
        assert!(is_run_command(Some("run-and-enter")));
        assert!(!is_run_command(Some("RUN")));
        assert!(!is_run_command(None));
    }

    #[test]
    fn run_command_logs_to_stdio_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StartupConfig {
            log_file: dir.path().join("startup.log").to_str().unwrap().to_owned(),
            syslog_socket: dir.path().join("missing").to_str().unwrap().to_owned(),
            ..StartupConfig::default()
        };

        let logger = initialise(Some("run"), &config);

        assert!(logger.uses_stdio());
    }

    #[test]
    fn other_commands_log_to_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("startup.log");
        let config = StartupConfig {
            log_file: path.to_str().unwrap().to_owned(),
            syslog_socket: dir.path().join("missing").to_str().unwrap().to_owned(),
            verbosity: Some(2),
            ..StartupConfig::default()
        };

        let logger = initialise(Some("setup"), &config);
        logger.warning("kept");
        logger.note("dropped");

        assert!(!logger.uses_stdio());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("[warning] kept"));
        assert!(!content.contains("dropped"));
    }
}
