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

//! Command processor plugins
//!
//! Images deriving from the base image contribute their commands as
//! [Plugins](Plugin). The entry point lists them in a [PluginRegistry], which
//! instantiates the command processors of all enabled plugins in name order.

pub mod base;

use std::sync::Arc;

use crate::command::CommandProcessor;
use crate::command::DefinitionError;
use crate::config::StartupConfig;
use crate::logging::Logger;

pub trait Plugin {
    /// Unique name, also determining the order processors are asked in
    fn name(&self) -> &str;

    /// Whether the plugin wants to take part at all
    fn enabled(&self) -> bool {
        true
    }

    /// Create the command processor with all handlers registered
    fn processor(&self, log: Arc<dyn Logger>) -> Result<CommandProcessor, DefinitionError>;
}

#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        PluginRegistry::default()
    }

    /// Registry containing the plugins shipped with the base image
    pub fn builtin() -> Self {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(base::BasePlugin));
        registry
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    /// Instantiate the processors of all enabled plugins, ordered by name
    ///
    /// # Errors
    ///
    /// An invalid handler registration is a programming error of the plugin
    /// and aborts loading.
    pub fn load_processors(
        &self,
        log: &Arc<dyn Logger>,
        config: &StartupConfig,
    ) -> Result<Vec<CommandProcessor>, DefinitionError> {
        log.debug("Loading command processor plugins...");

        let mut plugins: Vec<&dyn Plugin> = self.plugins.iter().map(|p| p.as_ref()).collect();
        plugins.sort_by(|a, b| a.name().cmp(b.name()));

        let mut processors = Vec::new();
        for plugin in plugins {
            if !plugin.enabled() || !config.is_plugin_enabled(plugin.name()) {
                log.debug(&format!(
                    "Skipping command processor plugin '{}', since it is disabled.",
                    plugin.name()
                ));
                continue;
            }

            log.debug(&format!(
                "Trying to instantiate the command processor of plugin '{}'...",
                plugin.name()
            ));
            processors.push(plugin.processor(log.clone())?);
            log.debug("Command processor was instantiated successfully.");
        }

        log.debug("Finished loading command processor plugins.");
        Ok(processors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::NamedArgument;
    use crate::config::PluginConfig;
    use crate::logging::memory::MemoryLogger;

    struct TestPlugin {
        name: &'static str,
        enabled: bool,
        valid: bool,
    }

    impl Plugin for TestPlugin {
        fn name(&self) -> &str {
            self.name
        }

        fn enabled(&self) -> bool {
            self.enabled
        }

        fn processor(&self, log: Arc<dyn Logger>) -> Result<CommandProcessor, DefinitionError> {
            let mut processor = CommandProcessor::new(self.name, log);
            if !self.valid {
                processor.add_handler(
                    |_: &[String], _| Ok(0),
                    vec![NamedArgument::new("a").into(), NamedArgument::new("a").into()],
                )?;
            }
            Ok(processor)
        }
    }

    fn plugin(name: &'static str, enabled: bool) -> Box<dyn Plugin> {
        Box::new(TestPlugin {
            name,
            enabled,
            valid: true,
        })
    }

    fn log() -> Arc<dyn Logger> {
        Arc::new(MemoryLogger::new())
    }

    #[test]
    fn processors_are_ordered_by_name() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("20-web", true));
        registry.register(plugin("10-db", true));

        let output = registry
            .load_processors(&log(), &StartupConfig::default())
            .unwrap();

        let names: Vec<&str> = output.iter().map(|p| p.name()).collect();
        assert_eq!(vec!["10-db", "20-web"], names);
    }

    #[test]
    fn disabled_plugins_are_skipped() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("a", false));
        registry.register(plugin("b", true));

        let output = registry
            .load_processors(&log(), &StartupConfig::default())
            .unwrap();

        assert_eq!(1, output.len());
        assert_eq!("b", output[0].name());
    }

    #[test]
    fn plugins_can_be_disabled_by_configuration() {
        let mut registry = PluginRegistry::new();
        registry.register(plugin("a", true));
        let mut config = StartupConfig::default();
        config
            .plugins
            .insert("a".to_owned(), PluginConfig { enabled: false });

        let output = registry.load_processors(&log(), &config).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn invalid_registration_aborts_loading() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(TestPlugin {
            name: "broken",
            enabled: true,
            valid: false,
        }));

        let output = registry.load_processors(&log(), &StartupConfig::default());

        assert!(output.is_err());
    }

    #[test]
    fn builtin_registry_contains_base_plugin() {
        let registry = PluginRegistry::builtin();

        let output = registry
            .load_processors(&log(), &StartupConfig::default())
            .unwrap();

        assert_eq!(1, output.len());
        assert_eq!(base::NAME, output[0].name());
    }
}
