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

//! Sink writing to the syslog daemon of the host

use std::ffi::CString;

use crate::logging::Logger;
use crate::logging::Severity;
use crate::logging::Verbosity;
use crate::util::libc_helpers;

/// Socket whose presence indicates a reachable syslog daemon
pub const DEFAULT_SYSLOG_SOCKET: &str = "/dev/log";

/// Logs to facility `LOCAL5` as `Docker (<hostname>)`
#[derive(Debug)]
pub struct SyslogLogger {
    ident: CString,

    verbosity: Verbosity,
}

impl Default for SyslogLogger {
    fn default() -> Self {
        SyslogLogger::new()
    }
}

impl SyslogLogger {
    pub fn new() -> Self {
        let hostname = nix::unistd::gethostname()
            .map(|h| h.to_string_lossy().into_owned())
            .unwrap_or_default();

        SyslogLogger {
            ident: libc_helpers::to_cstring(&format!("Docker ({})", hostname)),
            verbosity: Verbosity::default(),
        }
    }

    pub fn ident(&self) -> &str {
        self.ident.to_str().unwrap_or_default()
    }
}

fn priority(severity: Severity) -> libc::c_int {
    match severity {
        Severity::Error => libc::LOG_ERR,
        Severity::Warning => libc::LOG_WARNING,
        Severity::Note => libc::LOG_NOTICE,
        Severity::Info => libc::LOG_INFO,
        Severity::Debug => libc::LOG_DEBUG,
    }
}

impl Logger for SyslogLogger {
    fn write(&self, severity: Severity, message: &str) {
        if self.verbosity.enables(severity) {
            libc_helpers::syslog(&self.ident, libc::LOG_LOCAL5, priority(severity), message);
        }
    }

    fn set_verbosity(&self, level: u8) {
        self.verbosity.set(level);
    }
}
