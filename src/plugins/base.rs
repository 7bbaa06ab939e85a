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

//! Commands shipped with the base image

use std::sync::Arc;

use crate::command::CommandProcessor;
use crate::command::DefinitionError;
use crate::command::NamedArgument;
use crate::command::NamedArguments;
use crate::command::PositionalArgument;
use crate::errors::Error;
use crate::errors::EXIT_CODE_SUCCESS;
use crate::logging::Logger;
use crate::plugins::Plugin;
use crate::util::password::generate_password;
use crate::util::password::DEFAULT_PASSWORD_CHARS;

pub const NAME: &str = "base";

const DEFAULT_PASSWORD_LENGTH: usize = 16;

const MAX_PASSWORD_LENGTH: usize = 1024;

#[derive(Debug, Default)]
pub struct BasePlugin;

impl Plugin for BasePlugin {
    fn name(&self) -> &str {
        NAME
    }

    fn processor(&self, log: Arc<dyn Logger>) -> Result<CommandProcessor, DefinitionError> {
        let mut processor = CommandProcessor::new(NAME, log);

        processor.add_handler(
            |_: &[String], named: &NamedArguments| {
                let password = password(named)?;
                println!("{}", password);
                Ok(EXIT_CODE_SUCCESS)
            },
            vec![
                PositionalArgument::new("generate-password").into(),
                NamedArgument::new("length").into(),
                NamedArgument::new("chars").into(),
            ],
        )?;

        Ok(processor)
    }
}

/// Password according to `--length` and `--chars`
fn password(named: &NamedArguments) -> Result<String, Error> {
    let length = match named.value("length") {
        None => DEFAULT_PASSWORD_LENGTH,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(length) if (1..=MAX_PASSWORD_LENGTH).contains(&length) => length,
            _ => {
                return Err(Error::command_line_argument(format!(
                    "The password length must be a number from 1 to {} ({}).",
                    MAX_PASSWORD_LENGTH, raw
                )))
            }
        },
    };

    let chars = match named.value("chars") {
        Some(chars) if !chars.is_empty() => chars,
        _ => DEFAULT_PASSWORD_CHARS,
    };

    generate_password(length, chars)
}
