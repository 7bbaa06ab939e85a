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

//! Definitions of the arguments a command handler expects
//!
//! A handler is registered together with an ordered list of
//! [PositionalArguments](PositionalArgument), which select the handler, and a
//! set of [NamedArguments](NamedArgument), which are allowed in conjunction
//! with it.

use std::fmt::Display;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;

/// Errors in argument definitions, raised while registering handlers
#[derive(Debug, PartialEq, Eq)]
pub enum DefinitionError {
    /// `min_occurrences` exceeds `max_occurrences`
    InvalidOccurrences { name: String, min: usize, max: usize },

    /// Reading from stdin is only possible for arguments occurring at most once
    StdinRequiresSingleOccurrence { name: String, max: usize },

    /// Two named arguments of a registration share a name
    DuplicateNamedArgument(String),
}

impl Display for DefinitionError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        match self {
            DefinitionError::InvalidOccurrences { name, min, max } => write!(
                f,
                "Named argument '--{}' requires at least {} but at most {} occurrences",
                name, min, max
            ),
            DefinitionError::StdinRequiresSingleOccurrence { name, max } => write!(
                f,
                "Named argument '--{}' may occur {} times but must occur only once to be read from stdin",
                name, max
            ),
            DefinitionError::DuplicateNamedArgument(name) => {
                write!(f, "Named argument '--{}' is defined more than once", name)
            }
        }
    }
}

impl std::error::Error for DefinitionError {}

/// A literal token the invocation must contain at a fixed position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalArgument {
    name: String,
}

impl PositionalArgument {
    pub fn new(name: &str) -> Self {
        PositionalArgument {
            name: name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self, token: &str) -> bool {
        self.name.to_lowercase() == token.to_lowercase()
    }
}

/// An option of the form `--name[=value]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    name: String,

    allow_stdin: bool,

    min_occurrences: usize,

    max_occurrences: usize,
}

impl NamedArgument {
    /// An optional argument which may occur once
    pub fn new(name: &str) -> Self {
        NamedArgument {
            name: name.to_owned(),
            allow_stdin: false,
            min_occurrences: 0,
            max_occurrences: 1,
        }
    }

    /// An argument which must occur exactly once
    pub fn required(name: &str) -> Self {
        NamedArgument {
            min_occurrences: 1,
            ..NamedArgument::new(name)
        }
    }

    /// Fully specified argument
    ///
    /// If `allow_stdin` is set the value may also be piped in via stdin, the
    /// command line taking precedence.
    ///
    /// # Errors
    ///
    /// Fails if `min_occurrences > max_occurrences` or if `allow_stdin` is
    /// requested for an argument that may occur more than once.
    pub fn try_new(
        name: &str,
        allow_stdin: bool,
        min_occurrences: usize,
        max_occurrences: usize,
    ) -> Result<Self, DefinitionError> {
        if min_occurrences > max_occurrences {
            return Err(DefinitionError::InvalidOccurrences {
                name: name.to_owned(),
                min: min_occurrences,
                max: max_occurrences,
            });
        }

        if allow_stdin && max_occurrences > 1 {
            return Err(DefinitionError::StdinRequiresSingleOccurrence {
                name: name.to_owned(),
                max: max_occurrences,
            });
        }

        Ok(NamedArgument {
            name: name.to_owned(),
            allow_stdin,
            min_occurrences,
            max_occurrences,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as supplied keys are compared against it
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn allow_stdin(&self) -> bool {
        self.allow_stdin
    }

    pub fn min_occurrences(&self) -> usize {
        self.min_occurrences
    }

    pub fn max_occurrences(&self) -> usize {
        self.max_occurrences
    }

    pub(crate) fn reads_stdin(&self) -> bool {
        self.allow_stdin && self.max_occurrences == 1
    }
}

/// Either kind of argument definition, as passed to
/// [add_handler](crate::command::CommandProcessor::add_handler)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentDefinition {
    Positional(PositionalArgument),
    Named(NamedArgument),
}

impl From<PositionalArgument> for ArgumentDefinition {
    fn from(argument: PositionalArgument) -> Self {
        ArgumentDefinition::Positional(argument)
    }
}

impl From<NamedArgument> for ArgumentDefinition {
    fn from(argument: NamedArgument) -> Self {
        ArgumentDefinition::Named(argument)
    }
}
