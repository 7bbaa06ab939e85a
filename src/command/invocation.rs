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

//! Split raw command line tokens into positional tokens and named values

use crate::errors::Error;

/// Tokenized command line of one call to a command processor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    raw: Vec<String>,

    positional: Vec<String>,

    /// Keys in order of first occurrence, values in order of occurrence
    named: Vec<(String, Vec<String>)>,
}

impl Invocation {
    /// Classify every token by its own `--` prefix
    ///
    /// Tokens are trimmed. A named token is split on the first `=`, its key
    /// lower-cased. A missing `=` gives an empty value.
    ///
    /// # Errors
    ///
    /// A named token without key (`--` or `--=value`) is a
    /// [CommandLineArgument](Error::CommandLineArgument) error.
    pub fn parse(args: &[String]) -> Result<Self, Error> {
        let mut positional = Vec::new();
        let mut named: Vec<(String, Vec<String>)> = Vec::new();

        for arg in args {
            let arg = arg.trim();
            match arg.strip_prefix("--") {
                Some(option) => {
                    let (key, value) = match option.split_once('=') {
                        Some((key, value)) => (key, value),
                        None => (option, ""),
                    };
                    let key = key.to_lowercase().trim().to_owned();
                    if key.is_empty() {
                        return Err(Error::command_line_argument(
                            "Invalid named argument format.",
                        ));
                    }

                    match named.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, values)) => values.push(value.to_owned()),
                        None => named.push((key, vec![value.to_owned()])),
                    }
                }
                None => positional.push(arg.to_owned()),
            }
        }

        Ok(Invocation {
            raw: args.to_vec(),
            positional,
            named,
        })
    }

    /// The tokens exactly as passed, untrimmed and unclassified
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn named(&self) -> &[(String, Vec<String>)] {
        &self.named
    }

    pub fn named_values(&self, key: &str) -> Option<&[String]> {
        self.named
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }
}
