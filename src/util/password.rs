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

//! Random passwords for freshly set up services

use rand::distributions::Distribution;
use rand::distributions::Uniform;
use rand::rngs::OsRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::Error;

/// Characters used if the caller does not restrict them
///
/// `I` and `O` are left out as they are easily confused with digits.
pub const DEFAULT_PASSWORD_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ0123456789+-*/!$%&#;:,.~^<>{}[]()";

/// Generate a password of `length` characters taken from `chars`
///
/// # Errors
///
/// A zero length or an empty alphabet is a
/// [CommandLineArgument](Error::CommandLineArgument) error. Failing to seed
/// the generator from the operating system is reported as [Io](Error::Io)
/// error.
pub fn generate_password(length: usize, chars: &str) -> Result<String, Error> {
    if length == 0 {
        return Err(Error::command_line_argument(
            "The password must have a positive length.",
        ));
    }

    let alphabet: Vec<char> = chars.chars().collect();
    if alphabet.is_empty() {
        return Err(Error::command_line_argument(
            "The password alphabet must not be empty.",
        ));
    }

    let mut rng = StdRng::from_rng(OsRng)
        .map_err(|e| Error::io(format!("Could not seed the random generator: {}", e)))?;
    let index = Uniform::from(0..alphabet.len());

    Ok((0..length)
        .map(|_| alphabet[index.sample(&mut rng)])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn password_has_requested_length() {
        let output = generate_password(32, DEFAULT_PASSWORD_CHARS).unwrap();

        assert_eq!(32, output.chars().count());
        assert!(output.chars().all(|c| DEFAULT_PASSWORD_CHARS.contains(c)));
    }

    #[test]
    fn password_uses_given_alphabet() {
        let output = generate_password(10, "x").unwrap();

        assert_eq!("xxxxxxxxxx", output);
    }

    #[test]
    fn characters_are_drawn_uniformly() {
        let alphabet: String = (0..200u32)
            .map(|i| char::from_u32(0x100 + i).unwrap())
            .collect();

        let output = generate_password(400_000, &alphabet).unwrap();

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in output.chars() {
            *counts.entry(c).or_default() += 1;
        }
        assert_eq!(200, counts.len());
        for (c, count) in counts {
            assert!(
                (1700..=2300).contains(&count),
                "{:?} drawn {} times",
                c,
                count
            );
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let output = generate_password(0, DEFAULT_PASSWORD_CHARS);

        assert!(matches!(output, Err(Error::CommandLineArgument(_))));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let output = generate_password(8, "");

        assert!(matches!(output, Err(Error::CommandLineArgument(_))));
    }
}
