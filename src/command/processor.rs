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

//! Dispatch of one invocation to the best fitting command handler
//!
//! # Matching
//!
//! Of all registrations whose positional arguments match the start of the
//! invocation, the one with the most positional arguments is selected. Ties
//! go to the earliest registration. Nothing matching means the command is
//! not handled by this processor.
//!
//! # Named arguments
//!
//! Supplied named arguments must be declared by the selected registration
//! and occur within the declared bounds. An argument accepting stdin takes a
//! line from stdin if stdin is not a terminal, the command line taking
//! precedence. Arguments with a minimum occurrence must be supplied by one
//! of both sources.
//!
//! Argument errors are reported and end the call with exit code 2 before
//! the handler runs.
//!
//! # Errors raised by handlers
//!
//! The routes registered via
//! [add_exception_handler](CommandProcessor::add_exception_handler) are tried
//! in order of registration. Without a route, errors carrying an exit code
//! are reported and their code returned. Other errors are passed to the
//! caller.

use std::sync::Arc;

use crate::command::arguments::ArgumentDefinition;
use crate::command::arguments::DefinitionError;
use crate::command::arguments::NamedArgument;
use crate::command::handler::NamedArguments;
use crate::command::invocation::Invocation;
use crate::command::registry::Registration;
use crate::command::registry::Registry;
use crate::command::routing::RoutingTable;
use crate::command::stdin::readline_if_no_tty;
use crate::command::stdin::ProcessStdin;
use crate::command::stdin::StdinSource;
use crate::errors::print_error;
use crate::errors::Error;
use crate::errors::ErrorKind;
use crate::errors::EXIT_CODE_GENERAL_ERROR;
use crate::logging::Logger;

/// A handler selected for an invocation, with its validated arguments
#[derive(Debug)]
pub struct Selection<'a> {
    pub registration: &'a Registration,

    pub positional: Vec<String>,

    pub named: NamedArguments,
}

/// Owner of the command handlers of one plugin
#[derive(Debug)]
pub struct CommandProcessor {
    name: String,

    log: Arc<dyn Logger>,

    registry: Registry,

    routes: RoutingTable,
}

impl CommandProcessor {
    pub fn new(name: &str, log: Arc<dyn Logger>) -> Self {
        CommandProcessor {
            name: name.to_owned(),
            log,
            registry: Registry::new(),
            routes: RoutingTable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `handler` for invocations starting with the positional
    /// arguments among `definitions`
    ///
    /// The named arguments among `definitions` are the ones allowed in
    /// conjunction with the command.
    pub fn add_handler<F, I>(&mut self, handler: F, definitions: I) -> Result<(), DefinitionError>
    where
        F: Fn(&[String], &NamedArguments) -> Result<i32, Error> + Send + Sync + 'static,
        I: IntoIterator<Item = ArgumentDefinition>,
    {
        let registration =
            Registration::new(Box::new(handler), definitions.into_iter().collect())?;
        self.registry.push(registration);
        Ok(())
    }

    /// Let `handler` compute the exit code for errors of `kind`
    pub fn add_exception_handler<F>(&mut self, handler: F, kind: ErrorKind)
    where
        F: Fn(&Error) -> i32 + Send + Sync + 'static,
    {
        self.routes.push(kind, Box::new(handler));
    }

    /// Process a command read from the command line of this process
    ///
    /// Returns the exit code of the command, or [None] if no handler matched.
    pub fn process(&self, args: &[String]) -> Result<Option<i32>, Error> {
        self.process_with(args, &mut ProcessStdin)
    }

    /// Like [process](CommandProcessor::process) with stdin supplied by the caller
    pub fn process_with(
        &self,
        args: &[String],
        stdin: &mut dyn StdinSource,
    ) -> Result<Option<i32>, Error> {
        let selection = match self.select(args, stdin) {
            Ok(Some(selection)) => selection,
            Ok(None) => return Ok(None),
            Err(error) => return Ok(Some(self.report(&error))),
        };

        let result = selection
            .registration
            .handler
            .handle(&selection.positional, &selection.named);

        match result {
            Ok(code) => Ok(Some(code)),
            Err(error) => self.recover(error).map(Some),
        }
    }

    /// Find the handler for `args` and assemble its arguments
    ///
    /// # Errors
    ///
    /// Malformed, unexpected and missing arguments are reported as
    /// [CommandLineArgument](Error::CommandLineArgument) errors.
    pub fn select<'a>(
        &'a self,
        args: &[String],
        stdin: &mut dyn StdinSource,
    ) -> Result<Option<Selection<'a>>, Error> {
        let invocation = Invocation::parse(args)?;

        let registration = match self.registry.best_fit(&invocation) {
            Some(registration) => registration,
            None => return Ok(None),
        };

        let named = self.effective_arguments(registration, &invocation, stdin)?;

        Ok(Some(Selection {
            registration,
            positional: invocation.positional().to_vec(),
            named,
        }))
    }

    fn effective_arguments(
        &self,
        registration: &Registration,
        invocation: &Invocation,
        stdin: &mut dyn StdinSource,
    ) -> Result<NamedArguments, Error> {
        let mut unsatisfied: Vec<&NamedArgument> = registration.named.iter().collect();

        for (key, values) in invocation.named() {
            let definition = match registration.find_named(key) {
                Some(definition) => definition,
                None => {
                    return Err(Error::command_line_argument(format!(
                        "The named argument '--{}' is not allowed in conjunction with the specified positional arguments.",
                        key
                    )));
                }
            };
            unsatisfied.retain(|d| !std::ptr::eq(*d, definition));

            if values.len() < definition.min_occurrences() {
                return Err(Error::command_line_argument(format!(
                    "The named argument '--{}' is required at least {} times.",
                    key,
                    definition.min_occurrences()
                )));
            }

            if values.len() > definition.max_occurrences() {
                return Err(Error::command_line_argument(format!(
                    "The named argument '--{}' is allowed at maximum {} times.",
                    key,
                    definition.max_occurrences()
                )));
            }
        }

        let mut effective = NamedArguments::new();
        for definition in &registration.named {
            self.log.debug(&format!(
                "Evaluating named argument '{}'...",
                definition.name()
            ));

            let mut from_stdin = None;
            if definition.reads_stdin() {
                from_stdin = readline_if_no_tty(stdin);
                match &from_stdin {
                    Some(value) => {
                        self.log
                            .debug(&format!("=> Reading from stdin returned '{}'.", value));
                        unsatisfied.retain(|d| !std::ptr::eq(*d, definition));
                    }
                    None if stdin.is_terminal() => {
                        self.log
                            .debug("=> Reading from stdin does not work, running in terminal mode.");
                        unsatisfied.retain(|d| !std::ptr::eq(*d, definition));
                    }
                    None => {
                        self.log
                            .debug("=> Reading from stdin failed. Not enough data piped in?");
                    }
                }
            }

            let mut values: Vec<String> = invocation
                .named_values(&definition.key())
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            for value in &values {
                self.log.debug(&format!(
                    "=> Reading from command line returned '{}'.",
                    value
                ));
            }

            if values.is_empty() {
                values.extend(from_stdin);
            }

            effective.insert(definition.name(), values);
        }

        if let Some(missing) = unsatisfied.iter().find(|d| d.min_occurrences() > 0) {
            return Err(Error::command_line_argument(format!(
                "The named argument '--{}' must be specified.",
                missing.name()
            )));
        }

        Ok(effective)
    }

    /// Turn an error raised by a handler into an exit code
    fn recover(&self, error: Error) -> Result<i32, Error> {
        if let Some(code) = self.routes.route(&error) {
            return Ok(code);
        }

        if error.exit_code().is_some() {
            return Ok(self.report(&error));
        }

        Err(error)
    }

    /// Tell the user about `error` and return its exit code
    fn report(&self, error: &Error) -> i32 {
        self.log.error(error.message());
        if !self.log.uses_stdio() {
            print_error(error.message());
        }
        error.exit_code().unwrap_or(EXIT_CODE_GENERAL_ERROR)
    }
}
