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

//! Settings passed to the container via environment variables
//!
//! An unset or empty variable yields the default. Every lookup is logged so
//! the effective container settings show up in the startup log.

use std::env;

use crate::errors::Error;
use crate::logging::Logger;

fn read(log: &dyn Logger, name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            log.info(&format!("Environment variable '{}' is not set...", name));
            None
        }
    }
}

fn log_default<T: std::fmt::Display>(log: &dyn Logger, name: &str, default: &Option<T>) {
    if let Some(value) = default {
        log.info(&format!("=> Using '{}' for '{}' instead.", value, name));
    }
}

/// Read a boolean, accepting `0`/`false` and `1`/`true` in any case
pub fn get_bool(log: &dyn Logger, name: &str, default: Option<bool>) -> Result<Option<bool>, Error> {
    let value = match read(log, name) {
        Some(value) => value,
        None => {
            log_default(log, name, &default);
            return Ok(default);
        }
    };

    let result = match value.to_lowercase().as_str() {
        "0" | "false" => false,
        "1" | "true" => true,
        _ => {
            return Err(Error::configuration(format!(
                "Environment variable '{}' does not specify a boolean value ({}).",
                name, value
            )))
        }
    };

    log.info(&format!(
        "Environment variable '{}' is set to '{}'.",
        name, result
    ));
    Ok(Some(result))
}

/// Read a decimal integer within the inclusive bounds `min` and `max`
pub fn get_integer(
    log: &dyn Logger,
    name: &str,
    default: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<Option<i64>, Error> {
    let value = match read(log, name) {
        Some(value) => value,
        None => {
            log_default(log, name, &default);
            return Ok(default);
        }
    };

    let result = value.trim().parse::<i64>().map_err(|_| {
        Error::configuration(format!(
            "Environment variable '{}' does not specify a valid integer ({}).",
            name, value
        ))
    })?;

    log.info(&format!(
        "Environment variable '{}' is set to '{}'.",
        name, result
    ));

    if let Some(min) = min {
        if result < min {
            return Err(Error::configuration(format!(
                "Environment variable '{}' is less than the lower bound ({}).",
                name, min
            )));
        }
    }

    if let Some(max) = max {
        if result > max {
            return Err(Error::configuration(format!(
                "Environment variable '{}' is greater than the upper bound ({}).",
                name, max
            )));
        }
    }

    Ok(Some(result))
}

pub fn get_string(log: &dyn Logger, name: &str, default: Option<&str>) -> Option<String> {
    match read(log, name) {
        Some(value) => {
            log.info(&format!(
                "Environment variable '{}' is set to '{}'.",
                name, value
            ));
            Some(value)
        }
        None => {
            let default = default.map(str::to_owned);
            log_default(log, name, &default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::memory::MemoryLogger;
    use crate::test_util::EnvGuard;

    #[test]
    fn booleans_are_parsed_ignoring_case() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_BOOL", "TRUE");

        assert_eq!(Ok(Some(true)), get_bool(&log, "STARTUP_TEST_BOOL", None));
        assert!(log.contains("'STARTUP_TEST_BOOL' is set to 'true'"));
    }

    #[test]
    fn zero_is_false() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_BOOL", "0");

        assert_eq!(Ok(Some(false)), get_bool(&log, "STARTUP_TEST_BOOL", Some(true)));
    }

    #[test]
    fn invalid_boolean_is_configuration_error() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_BOOL", "yes");

        let output = get_bool(&log, "STARTUP_TEST_BOOL", None);

        assert!(matches!(output, Err(Error::Configuration(_))));
    }

    #[test]
    fn unset_variable_gives_default() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::unset("STARTUP_TEST_UNSET");

        assert_eq!(Ok(Some(false)), get_bool(&log, "STARTUP_TEST_UNSET", Some(false)));
        assert_eq!(Ok(Some(3)), get_integer(&log, "STARTUP_TEST_UNSET", Some(3), None, None));
        assert_eq!(
            Some("x".to_owned()),
            get_string(&log, "STARTUP_TEST_UNSET", Some("x"))
        );
        assert!(log.contains("'STARTUP_TEST_UNSET' is not set"));
    }

    #[test]
    fn empty_variable_counts_as_unset() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_EMPTY", "");

        assert_eq!(None, get_string(&log, "STARTUP_TEST_EMPTY", None));
    }

    #[test]
    fn integers_are_checked_against_bounds() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_INT", "7");

        assert_eq!(
            Ok(Some(7)),
            get_integer(&log, "STARTUP_TEST_INT", None, Some(0), Some(7))
        );
        assert!(matches!(
            get_integer(&log, "STARTUP_TEST_INT", None, Some(8), None),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            get_integer(&log, "STARTUP_TEST_INT", None, None, Some(6)),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn negative_integers_are_accepted() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_INT", "-12");

        assert_eq!(Ok(Some(-12)), get_integer(&log, "STARTUP_TEST_INT", None, None, None));
    }

    #[test]
    fn non_numeric_integer_is_configuration_error() {
        let log = MemoryLogger::new();
        let _guard = EnvGuard::set("STARTUP_TEST_INT", "five");

        let output = get_integer(&log, "STARTUP_TEST_INT", None, None, None);

        assert!(matches!(output, Err(Error::Configuration(_))));
    }
}
