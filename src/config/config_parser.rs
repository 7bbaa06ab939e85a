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

use std::env;
use std::fs;
use std::io;

use crate::config::environment;
use crate::config::StartupConfig;
use crate::config::CONFIG_PATH_VARIABLE;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::config::VERBOSITY_VARIABLE;
use crate::errors::Error;
use crate::logging::Logger;
use crate::logging::MAX_VERBOSITY;

/// Read the configuration file
///
/// # Errors
///
/// A file named via `STARTUP_CONFIG` must exist, [DEFAULT_CONFIG_PATH] may
/// be absent. Unparsable content is a [Configuration](Error::Configuration)
/// error.
pub fn load() -> Result<StartupConfig, Error> {
    match env::var(CONFIG_PATH_VARIABLE) {
        Ok(path) if !path.is_empty() => parse_config(&path),
        _ => parse_optional_config(DEFAULT_CONFIG_PATH),
    }
}

/// Verbosity requested via `STARTUP_VERBOSITY`, if any
///
/// # Errors
///
/// Values other than integers from 0 to 5 are
/// [Configuration](Error::Configuration) errors.
pub fn verbosity_override(log: &dyn Logger) -> Result<Option<u8>, Error> {
    let value = environment::get_integer(
        log,
        VERBOSITY_VARIABLE,
        None,
        Some(0),
        Some(i64::from(MAX_VERBOSITY)),
    )?;
    Ok(value.map(|v| v as u8))
}

pub fn parse_config(path: &str) -> Result<StartupConfig, Error> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            Error::file_not_found(format!("Configuration file {} does not exist", path))
        }
        _ => Error::io(format!("Failed to read configuration file {}: {}", path, e)),
    })?;
    parse_raw_config(&content, path)
}

fn parse_optional_config(path: &str) -> Result<StartupConfig, Error> {
    match fs::metadata(path) {
        Ok(_) => parse_config(path),
        Err(_) => Ok(StartupConfig::default()),
    }
}

fn parse_raw_config(raw_config: &str, path: &str) -> Result<StartupConfig, Error> {
    if raw_config.trim().is_empty() {
        return Ok(StartupConfig::default());
    }

    serde_yaml::from_str(raw_config)
        .map_err(|e| Error::configuration(format!("Could not parse config {}: {}", path, e)))
}
