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

//! Sink appending to a log file

use std::io;

use log4rs::append::file::FileAppender;
use log4rs::encode::pattern::PatternEncoder;

use crate::logging::append;
use crate::logging::Logger;
use crate::logging::Severity;
use crate::logging::Verbosity;
use crate::logging::PATTERN;

pub const DEFAULT_LOG_FILE: &str = "/var/log/gp-startup.log";

#[derive(Debug)]
pub struct FileLogger {
    appender: FileAppender,

    verbosity: Verbosity,
}

impl FileLogger {
    /// Open `path` for appending, creating it if needed
    pub fn new(path: &str) -> io::Result<Self> {
        let appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .append(true)
            .build(path)?;

        Ok(FileLogger {
            appender,
            verbosity: Verbosity::default(),
        })
    }
}

impl Logger for FileLogger {
    fn write(&self, severity: Severity, message: &str) {
        if self.verbosity.enables(severity) {
            append(&self.appender, severity, message);
        }
    }

    fn set_verbosity(&self, level: u8) {
        self.verbosity.set(level);
    }
}
