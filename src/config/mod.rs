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

//! Configuration of the startup system
//!
//! The configuration is read from the yaml file named by `STARTUP_CONFIG`,
//! falling back to [DEFAULT_CONFIG_PATH]. It can look like this:
//!
//! ```yml
//! # 0 = silent ... 5 = everything, see crate::logging
//! verbosity: 4
//!
//! # Used if there is no syslog socket
//! log_file: /var/log/gp-startup.log
//!
//! syslog_socket: /dev/log
//!
//! plugins:
//!   base:
//!     enabled: false
//! ```
//!
//! The environment variable `STARTUP_VERBOSITY` overrides `verbosity`.

pub mod config_parser;
pub mod environment;

use std::collections::HashMap;

use serde_derive::Deserialize;

use crate::logging::file::DEFAULT_LOG_FILE;
use crate::logging::syslog::DEFAULT_SYSLOG_SOCKET;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/startup.yml";

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VARIABLE: &str = "STARTUP_CONFIG";

/// Environment variable overriding the verbosity
pub const VERBOSITY_VARIABLE: &str = "STARTUP_VERBOSITY";

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_owned()
}

fn default_syslog_socket() -> String {
    DEFAULT_SYSLOG_SOCKET.to_owned()
}

fn default_enabled() -> bool {
    true
}

/// Settings of a single plugin
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig { enabled: true }
    }
}

/// Top-level Configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    #[serde(default)]
    pub verbosity: Option<u8>,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_syslog_socket")]
    pub syslog_socket: String,

    #[serde(default)]
    pub plugins: HashMap<String, PluginConfig>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        StartupConfig {
            verbosity: None,
            log_file: default_log_file(),
            syslog_socket: default_syslog_socket(),
            plugins: HashMap::new(),
        }
    }
}

impl StartupConfig {
    /// Plugins not mentioned in the configuration are enabled
    pub fn is_plugin_enabled(&self, name: &str) -> bool {
        self.plugins
            .get(name)
            .map(|p| p.enabled)
            .unwrap_or(true)
    }
}
