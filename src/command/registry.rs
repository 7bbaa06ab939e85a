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

//! Registered command handlers and the selection of the best fitting one

use crate::command::arguments::ArgumentDefinition;
use crate::command::arguments::DefinitionError;
use crate::command::arguments::NamedArgument;
use crate::command::arguments::PositionalArgument;
use crate::command::handler::CommandHandler;
use crate::command::invocation::Invocation;

/// A handler together with the argument shape it accepts
pub struct Registration {
    pub handler: Box<dyn CommandHandler>,

    pub positional: Vec<PositionalArgument>,

    pub named: Vec<NamedArgument>,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("positional", &self.positional)
            .field("named", &self.named)
            .finish()
    }
}

impl Registration {
    /// Partition `definitions` into positional and named arguments
    ///
    /// # Errors
    ///
    /// Two named arguments whose names only differ in case are rejected.
    pub fn new(
        handler: Box<dyn CommandHandler>,
        definitions: Vec<ArgumentDefinition>,
    ) -> Result<Self, DefinitionError> {
        let mut positional = Vec::new();
        let mut named: Vec<NamedArgument> = Vec::new();

        for definition in definitions {
            match definition {
                ArgumentDefinition::Positional(argument) => positional.push(argument),
                ArgumentDefinition::Named(argument) => {
                    if named.iter().any(|n| n.key() == argument.key()) {
                        return Err(DefinitionError::DuplicateNamedArgument(
                            argument.name().to_owned(),
                        ));
                    }
                    named.push(argument);
                }
            }
        }

        Ok(Registration {
            handler,
            positional,
            named,
        })
    }

    /// Length of the prefix of `raw` matching the positional arguments
    ///
    /// Compares against the tokens as passed on the command line, not the
    /// trimmed positional tokens. The caller guarantees `raw` is at least as
    /// long as the positional arguments.
    pub fn match_count(&self, raw: &[String]) -> usize {
        self.positional
            .iter()
            .zip(raw)
            .take_while(|(argument, token)| argument.matches(token))
            .count()
    }

    pub fn find_named(&self, key: &str) -> Option<&NamedArgument> {
        self.named.iter().find(|n| n.key() == key)
    }
}

/// Handlers of one command processor in registration order
#[derive(Debug, Default)]
pub struct Registry {
    registrations: Vec<Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn push(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }

    /// Select the registration matching `invocation` most specifically
    ///
    /// A registration qualifies if all its positional arguments match. Of
    /// those the one with the most positional arguments wins, ties go to the
    /// earliest registration.
    pub fn best_fit(&self, invocation: &Invocation) -> Option<&Registration> {
        let mut best: Option<(&Registration, usize)> = None;

        for registration in &self.registrations {
            let expected = registration.positional.len();
            if expected > invocation.positional().len() {
                continue;
            }

            if registration.match_count(invocation.raw()) != expected {
                continue;
            }

            match best {
                Some((_, count)) if count >= expected => {}
                _ => best = Some((registration, expected)),
            }
        }

        best.map(|(registration, _)| registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::handler::NamedArguments;
    use crate::errors::Error;

    fn handler(code: i32) -> Box<dyn CommandHandler> {
        Box::new(move |_: &[String], _: &NamedArguments| -> Result<i32, Error> { Ok(code) })
    }

    fn registration(code: i32, names: &[&str]) -> Registration {
        let definitions = names
            .iter()
            .map(|n| PositionalArgument::new(n).into())
            .collect();
        Registration::new(handler(code), definitions).unwrap()
    }

    fn invocation(tokens: &[&str]) -> Invocation {
        let args: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        Invocation::parse(&args).unwrap()
    }

    fn selected_code(registry: &Registry, tokens: &[&str]) -> Option<i32> {
        registry.best_fit(&invocation(tokens)).map(|r| {
            r.handler
                .handle(&[], &NamedArguments::new())
                .expect("test handlers succeed")
        })
    }

    #[test]
    fn longer_match_wins_regardless_of_order() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run"]));
        registry.push(registration(2, &["run", "app"]));

        assert_eq!(Some(2), selected_code(&registry, &["run", "app"]));
        assert_eq!(Some(1), selected_code(&registry, &["run", "other"]));
    }

    #[test]
    fn equal_length_keeps_first_registration() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run"]));
        registry.push(registration(2, &["RUN"]));

        assert_eq!(Some(1), selected_code(&registry, &["run"]));
    }

    #[test]
    fn partial_match_is_not_selected() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run", "app"]));

        assert_eq!(None, selected_code(&registry, &["run", "other"]));
    }

    #[test]
    fn registration_needing_more_tokens_is_skipped() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run", "app"]));

        assert_eq!(None, selected_code(&registry, &["run", "--app"]));
    }

    #[test]
    fn registration_without_positional_arguments_matches_anything() {
        let mut registry = Registry::new();
        registry.push(registration(1, &[]));

        assert_eq!(Some(1), selected_code(&registry, &["whatever"]));
        assert_eq!(Some(1), selected_code(&registry, &[]));
    }

    #[test]
    fn no_registration_gives_nothing() {
        let registry = Registry::new();

        assert_eq!(None, selected_code(&registry, &["unknown"]));
    }

    // Positional names are compared against the untrimmed tokens, so
    // surrounding whitespace prevents a match although the trimmed
    // positional token would be equal.
    #[test]
    fn matching_uses_untrimmed_tokens() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run"]));

        assert_eq!(None, selected_code(&registry, &[" run"]));
    }

    // Matching indexes the raw tokens, so a leading named token shifts the
    // comparison even though it is not a positional token.
    #[test]
    fn matching_indexes_raw_tokens_including_named_ones() {
        let mut registry = Registry::new();
        registry.push(registration(1, &["run"]));

        assert_eq!(None, selected_code(&registry, &["--verbose", "run"]));
    }

    #[test]
    fn duplicate_named_arguments_are_rejected() {
        let output = Registration::new(
            handler(0),
            vec![
                NamedArgument::new("name").into(),
                NamedArgument::new("NAME").into(),
            ],
        );

        assert_eq!(
            Some(DefinitionError::DuplicateNamedArgument("NAME".to_owned())),
            output.err()
        );
    }

    #[test]
    fn definitions_are_partitioned_in_order() {
        let output = Registration::new(
            handler(0),
            vec![
                PositionalArgument::new("a").into(),
                NamedArgument::new("x").into(),
                PositionalArgument::new("b").into(),
            ],
        )
        .unwrap();

        assert_eq!(
            vec![PositionalArgument::new("a"), PositionalArgument::new("b")],
            output.positional
        );
        assert_eq!(vec![NamedArgument::new("x")], output.named);
    }
}
