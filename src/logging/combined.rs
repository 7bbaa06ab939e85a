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

//! Sink fanning out to several other sinks

use crate::logging::Logger;
use crate::logging::Severity;

#[derive(Debug, Default)]
pub struct CombinedLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl CombinedLogger {
    pub fn new() -> Self {
        CombinedLogger::default()
    }

    pub fn add(&mut self, logger: Box<dyn Logger>) {
        self.loggers.push(logger);
    }
}

impl Logger for CombinedLogger {
    fn write(&self, severity: Severity, message: &str) {
        for logger in &self.loggers {
            logger.write(severity, message);
        }
    }

    /// Forwarded to every sink, on the same 0 to 5 scale
    fn set_verbosity(&self, level: u8) {
        for logger in &self.loggers {
            logger.set_verbosity(level);
        }
    }

    fn uses_stdio(&self) -> bool {
        self.loggers.iter().any(|l| l.uses_stdio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::memory::MemoryLogger;
    use crate::logging::StdioLogger;

    #[test]
    fn messages_reach_every_sink() {
        let first = MemoryLogger::new();
        let second = MemoryLogger::new();
        let mut combined = CombinedLogger::new();
        combined.add(Box::new(first.clone()));
        combined.add(Box::new(second.clone()));

        combined.warning("careful");

        assert_eq!(vec!["[warning] careful".to_owned()], first.lines());
        assert_eq!(vec!["[warning] careful".to_owned()], second.lines());
    }

    #[test]
    fn verbosity_is_forwarded_on_full_scale() {
        let sink = MemoryLogger::new();
        let mut combined = CombinedLogger::new();
        combined.add(Box::new(sink.clone()));

        combined.set_verbosity(5);
        combined.debug("visible");

        assert_eq!(vec!["[debug] visible".to_owned()], sink.lines());
    }

    #[test]
    fn uses_stdio_if_any_sink_does() {
        let mut combined = CombinedLogger::new();
        combined.add(Box::new(MemoryLogger::new()));
        assert!(!combined.uses_stdio());

        combined.add(Box::new(StdioLogger::new()));
        assert!(combined.uses_stdio());
    }

    #[test]
    fn empty_combination_discards_messages() {
        let combined = CombinedLogger::new();

        combined.error("nobody listens");

        assert!(!combined.uses_stdio());
    }
}
