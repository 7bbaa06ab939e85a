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

//! Startup system of container images. Images add their setup steps as
//! command processor plugins, which are offered every command the container
//! is started with.
//!
//! ## Commands
//!
//! A command consists of positional tokens and named arguments:
//!
//! ```text
//! startup <positional>... [--<name>[=<value>]]...
//! ```
//!
//! Each plugin registers handlers for the positional tokens it understands,
//! see [command]. If no plugin handles `run` or `run-and-enter` the startup
//! succeeds anyway. Any other unknown command exits with code 127.
//!
//! ## Logging
//!
//! `run` and `run-and-enter` log to the console and to syslog. All other
//! commands log to syslog only, leaving stdout to the command itself. If
//! there is no syslog socket a log file is used instead. The verbosity can be
//! set via `STARTUP_VERBOSITY`, see [logging].
//!
//! ## Configuration
//!
//! See [config].

pub mod app;
pub mod command;
pub mod config;
pub mod errors;
pub mod logging;
pub mod plugins;
pub mod util;

#[cfg(test)]
mod test_util;
