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

//! Access to values piped in via stdin

use std::io::BufRead;

use crate::util::libc_helpers;

/// Source of values for named arguments accepting stdin
pub trait StdinSource {
    /// Whether stdin is attached to a terminal, in which case nothing is read
    fn is_terminal(&self) -> bool;

    /// Read one line without its trailing whitespace
    ///
    /// Returns [None] at end of input.
    fn read_line(&mut self) -> Option<String>;
}

/// The stdin of the running process
#[derive(Debug, Default)]
pub struct ProcessStdin;

impl StdinSource for ProcessStdin {
    fn is_terminal(&self) -> bool {
        libc_helpers::is_stdin_terminal()
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end().to_owned()),
        }
    }
}

/// Read a line unless stdin is a terminal
pub fn readline_if_no_tty(stdin: &mut dyn StdinSource) -> Option<String> {
    if stdin.is_terminal() {
        None
    } else {
        stdin.read_line()
    }
}

/// Stdin replaying fixed lines
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedStdin {
    pub terminal: bool,

    pub lines: std::collections::VecDeque<String>,

    pub reads: usize,
}

#[cfg(test)]
impl ScriptedStdin {
    pub fn piped(lines: &[&str]) -> Self {
        ScriptedStdin {
            terminal: false,
            lines: lines.iter().map(|s| s.to_string()).collect(),
            reads: 0,
        }
    }

    pub fn terminal() -> Self {
        ScriptedStdin {
            terminal: true,
            ..ScriptedStdin::default()
        }
    }
}

#[cfg(test)]
impl StdinSource for ScriptedStdin {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_line(&mut self) -> Option<String> {
        self.reads += 1;
        self.lines.pop_front()
    }
}
