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

//! Contracts of command handlers and error handlers

use std::collections::HashMap;

use crate::errors::Error;

/// Effective values of the named arguments passed to a handler
///
/// Every named argument of the selected registration has an entry, which is
/// empty if the argument was neither given on the command line nor piped in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedArguments {
    values: HashMap<String, Vec<String>>,
}

impl NamedArguments {
    pub fn new() -> Self {
        NamedArguments::default()
    }

    pub fn insert(&mut self, name: &str, values: Vec<String>) {
        self.values.insert(name.to_lowercase(), values);
    }

    /// All values of `name`, empty if unknown
    pub fn values(&self, name: &str) -> &[String] {
        self.values
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first value of `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    /// Whether `name` has at least one value
    pub fn is_present(&self, name: &str) -> bool {
        !self.values(name).is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Handles one command shape
///
/// Receives the positional tokens and the effective named arguments and
/// returns the exit code of the command.
pub trait CommandHandler: Send + Sync {
    fn handle(&self, positional: &[String], named: &NamedArguments) -> Result<i32, Error>;
}

impl<F> CommandHandler for F
where
    F: Fn(&[String], &NamedArguments) -> Result<i32, Error> + Send + Sync,
{
    fn handle(&self, positional: &[String], named: &NamedArguments) -> Result<i32, Error> {
        self(positional, named)
    }
}

/// Turns an error raised by a [CommandHandler] into an exit code
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, error: &Error) -> i32;
}

impl<F> ErrorHandler for F
where
    F: Fn(&Error) -> i32 + Send + Sync,
{
    fn handle(&self, error: &Error) -> i32 {
        self(error)
    }
}
