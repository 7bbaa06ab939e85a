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

//! Console sink used while the container runs in the foreground

use log4rs::append::console::ConsoleAppender;
use log4rs::append::console::Target;
use log4rs::encode::pattern::PatternEncoder;

use crate::logging::append;
use crate::logging::Logger;
use crate::logging::Severity;
use crate::logging::Verbosity;
use crate::logging::PATTERN;

/// Writes errors to stderr and everything else to stdout
#[derive(Debug)]
pub struct StdioLogger {
    stdout: ConsoleAppender,

    stderr: ConsoleAppender,

    verbosity: Verbosity,
}

impl Default for StdioLogger {
    fn default() -> Self {
        StdioLogger::new()
    }
}

impl StdioLogger {
    pub fn new() -> Self {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();

        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();

        StdioLogger {
            stdout,
            stderr,
            verbosity: Verbosity::default(),
        }
    }
}

impl Logger for StdioLogger {
    fn write(&self, severity: Severity, message: &str) {
        if !self.verbosity.enables(severity) {
            return;
        }

        match severity {
            Severity::Error => append(&self.stderr, severity, message),
            _ => append(&self.stdout, severity, message),
        }
    }

    fn set_verbosity(&self, level: u8) {
        self.verbosity.set(level);
    }

    fn uses_stdio(&self) -> bool {
        true
    }
}
