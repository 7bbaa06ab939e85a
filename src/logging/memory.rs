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

//! Sink keeping messages in memory

use std::sync::Arc;
use std::sync::Mutex;

use crate::logging::Logger;
use crate::logging::Severity;
use crate::logging::Verbosity;

/// Clones share the recorded lines
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    pub(crate) lines: Arc<Mutex<Vec<String>>>,

    pub(crate) verbosity: Arc<Verbosity>,

    pub stdio: bool,
}

impl MemoryLogger {
    pub fn new() -> Self {
        MemoryLogger::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lines().iter().any(|l| l.contains(text))
    }
}

impl Logger for MemoryLogger {
    fn write(&self, severity: Severity, message: &str) {
        if self.verbosity.enables(severity) {
            self.lines
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(format!("[{}] {}", severity, message));
        }
    }

    fn set_verbosity(&self, level: u8) {
        self.verbosity.set(level);
    }

    fn uses_stdio(&self) -> bool {
        self.stdio
    }
}
