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

//! Exit codes and the errors mapping to them.
//!
//! Handlers report failures as [Error]. Each built-in variant carries a
//! human-readable message and a fixed exit code. Application-defined
//! failures use [Error::Application] and only turn into an exit code when a
//! command processor routes their [ErrorKind] to a handler.

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Error as FmtError;
use std::fmt::Formatter;
use std::io;

pub const EXIT_CODE_SUCCESS: i32 = 0;
pub const EXIT_CODE_GENERAL_ERROR: i32 = 1;
pub const EXIT_CODE_COMMAND_LINE_ARGUMENT_ERROR: i32 = 2;
pub const EXIT_CODE_FILE_NOT_FOUND: i32 = 3;
pub const EXIT_CODE_IO_ERROR: i32 = 4;
pub const EXIT_CODE_CONFIGURATION_ERROR: i32 = 5;

/// Returned by the application if no command processor knew the command
pub const EXIT_CODE_UNKNOWN_COMMAND: i32 = 127;

/// Discriminator of an [Error], used to route errors to handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    General,
    CommandLineArgument,
    FileNotFound,
    Io,
    Configuration,

    /// Application-defined kind, compared by name
    Application(&'static str),
}

/// Failure raised by command handlers and the helpers they use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure that cannot be specified any further
    General(String),

    /// Something is wrong with the specified command line arguments
    CommandLineArgument(String),

    /// A required file does not exist
    FileNotFound(String),

    /// Reading or writing failed
    Io(String),

    /// The container configuration is wrong
    Configuration(String),

    /// Error without an exit code of its own
    Application { kind: &'static str, message: String },
}

impl Error {
    pub fn general<S: Into<String>>(message: S) -> Self {
        Error::General(message.into())
    }

    pub fn command_line_argument<S: Into<String>>(message: S) -> Self {
        Error::CommandLineArgument(message.into())
    }

    pub fn file_not_found<S: Into<String>>(message: S) -> Self {
        Error::FileNotFound(message.into())
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Error::Io(message.into())
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Error::Configuration(message.into())
    }

    pub fn application<S: Into<String>>(kind: &'static str, message: S) -> Self {
        Error::Application {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::General(_) => ErrorKind::General,
            Error::CommandLineArgument(_) => ErrorKind::CommandLineArgument,
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            Error::Io(_) => ErrorKind::Io,
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::Application { kind, .. } => ErrorKind::Application(*kind),
        }
    }

    /// The exit code attached to this error
    ///
    /// [Error::Application] has none.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::General(_) => Some(EXIT_CODE_GENERAL_ERROR),
            Error::CommandLineArgument(_) => Some(EXIT_CODE_COMMAND_LINE_ARGUMENT_ERROR),
            Error::FileNotFound(_) => Some(EXIT_CODE_FILE_NOT_FOUND),
            Error::Io(_) => Some(EXIT_CODE_IO_ERROR),
            Error::Configuration(_) => Some(EXIT_CODE_CONFIGURATION_ERROR),
            Error::Application { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::General(message)
            | Error::CommandLineArgument(message)
            | Error::FileNotFound(message)
            | Error::Io(message)
            | Error::Configuration(message)
            | Error::Application { message, .. } => message,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        match self {
            Error::Application { kind, message } => write!(f, "{}: {}", kind, message),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl StdError for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(error.to_string()),
            _ => Error::Io(error.to_string()),
        }
    }
}

/// Print a message to stderr the way users of the container see errors
pub fn print_error(message: &str) {
    eprintln!("ERROR: {}", message);
}
