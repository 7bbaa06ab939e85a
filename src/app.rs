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

//! Offer a command to every command processor
//!
//! All processors are asked in turn, so several plugins can contribute to
//! the same command (e.g. each one preparing its service on `run`). The
//! first non-zero exit code stops the processing.

use std::sync::Arc;

use crate::command::CommandProcessor;
use crate::errors::print_error;
use crate::errors::EXIT_CODE_GENERAL_ERROR;
use crate::errors::EXIT_CODE_SUCCESS;
use crate::errors::EXIT_CODE_UNKNOWN_COMMAND;
use crate::logging::Logger;

const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

#[derive(Debug)]
pub struct App {
    log: Arc<dyn Logger>,

    processors: Vec<CommandProcessor>,
}

impl App {
    pub fn new(log: Arc<dyn Logger>, processors: Vec<CommandProcessor>) -> Self {
        App { log, processors }
    }

    /// Run the command in `args` and return the exit code of the process
    pub fn run(&self, args: &[String]) -> i32 {
        self.log.info("--- Container Startup System");
        self.log.info(SEPARATOR);

        let exit_code = self.dispatch(args);

        self.log.info(SEPARATOR);
        self.log.info(&format!(
            "--- Container Startup System exited with code ({})",
            exit_code
        ));

        exit_code
    }

    fn dispatch(&self, args: &[String]) -> i32 {
        let mut exit_code = None;

        for processor in &self.processors {
            match processor.process(args) {
                Ok(Some(code)) => {
                    exit_code = Some(code);
                    if code != EXIT_CODE_SUCCESS {
                        break;
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    let message = format!(
                        "Command processor '{}' failed: {}",
                        processor.name(),
                        error
                    );
                    self.log.error(&message);
                    if !self.log.uses_stdio() {
                        print_error(&message);
                    }
                    return EXIT_CODE_GENERAL_ERROR;
                }
            }
        }

        if let Some(code) = exit_code {
            return code;
        }

        let command = args.first().map(|c| c.to_lowercase());
        if let Some(command @ ("run" | "run-and-enter")) = command.as_deref() {
            // the base image itself has nothing to run
            self.log.error(&format!(
                "Could not find a command processor plugin that handles '{}'.",
                command
            ));
            self.log.error(
                "Please implement a command processor plugin that handles 'run' and 'run-and-enter' appropriately.",
            );
            return EXIT_CODE_SUCCESS;
        }

        print_error(&format!("Unknown command ({:?}).", args));
        EXIT_CODE_UNKNOWN_COMMAND
    }
}
