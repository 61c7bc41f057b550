// Copyright 2025 Phuong Tran.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Environment variable interpolation for configuration text.
//!
//! Supported forms:
//! - `${NAME}` - replaced by the variable; an error when unset or empty
//! - `${NAME:-fallback}` - replaced by the variable, or `fallback` when unset
//!   or empty
//!
//! Names follow POSIX rules. Anything that does not match one of the forms
//! is left untouched, and substituted values are never expanded again.

use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};
use std::env;

/// Upper bound on the interpolated text.
const MAX_INTERPOLATED_LENGTH: usize = 10_000_000;

lazy_static! {
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{(?P<name>[A-Za-z_][A-Za-z0-9_]*)(?::-(?P<fallback>[^}]*))?\}")
            .expect("Invalid regex pattern");
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    MissingVariable { name: String },

    #[error("Interpolated result exceeds maximum allowed length of {MAX_INTERPOLATED_LENGTH} bytes")]
    ResultTooLarge,
}

/// Interpolate against the process environment.
///
/// Variables holding non-Unicode data are treated as unset.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    interpolate_with(input, |name| env::var(name).ok())
}

/// Interpolate using `lookup` to resolve variable names.
pub fn interpolate_with<F>(input: &str, lookup: F) -> Result<String, InterpolationError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut resolved: Vec<&str> = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = capture(&caps, "name");

        let value = match lookup(name).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => match caps.name("fallback") {
                Some(fallback) => fallback.as_str().to_string(),
                None => {
                    return Err(InterpolationError::MissingVariable {
                        name: name.to_string(),
                    })
                }
            },
        };

        output.push_str(&input[cursor..whole.start()]);
        output.push_str(&value);
        cursor = whole.end();
        resolved.push(name);

        if output.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::ResultTooLarge);
        }
    }
    output.push_str(&input[cursor..]);

    if !resolved.is_empty() {
        // Names only; values may be secrets.
        debug!("Interpolated environment variables: {}", resolved.join(", "));
    }
    Ok(output)
}

fn capture<'h>(caps: &Captures<'h>, group: &str) -> &'h str {
    caps.name(group).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_substitutes_set_variables() {
        let lookup = vars(&[("MONGODB_URI", "mongodb://db:27017"), ("PORT", "8080")]);
        let result = interpolate_with("uri: ${MONGODB_URI}\nport: ${PORT}", lookup).unwrap();
        assert_eq!(result, "uri: mongodb://db:27017\nport: 8080");
    }

    #[test]
    fn test_fallback_when_unset_or_empty() {
        let lookup = vars(&[("EMPTY", "")]);
        assert_eq!(
            interpolate_with("${UNSET:-3000} ${EMPTY:-info}", lookup).unwrap(),
            "3000 info"
        );
    }

    #[test]
    fn test_variable_wins_over_fallback() {
        let lookup = vars(&[("PORT", "4000")]);
        assert_eq!(
            interpolate_with("port: ${PORT:-3000}", lookup).unwrap(),
            "port: 4000"
        );
    }

    #[test]
    fn test_empty_fallback() {
        assert_eq!(
            interpolate_with("database: ${DB:-}", vars(&[])).unwrap(),
            "database: "
        );
    }

    #[test]
    fn test_fallback_may_contain_uri_punctuation() {
        let result = interpolate_with(
            "uri: ${MONGODB_URI:-mongodb+srv://user:pw@cluster0.example.net/?w=majority}",
            vars(&[]),
        )
        .unwrap();
        assert_eq!(
            result,
            "uri: mongodb+srv://user:pw@cluster0.example.net/?w=majority"
        );
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let result = interpolate_with("uri: ${MONGODB_URI}", vars(&[]));
        assert_eq!(
            result,
            Err(InterpolationError::MissingVariable {
                name: "MONGODB_URI".to_string()
            })
        );
    }

    #[test]
    fn test_non_matching_text_is_untouched() {
        let input = "plain: text\ndash: ${NOT-VALID}\ndollar: $PORT\nopen: ${";
        assert_eq!(interpolate_with(input, vars(&[])).unwrap(), input);
    }

    #[test]
    fn test_values_are_not_expanded_twice() {
        let lookup = vars(&[("OUTER", "${INNER}"), ("INNER", "nope")]);
        assert_eq!(interpolate_with("${OUTER}", lookup).unwrap(), "${INNER}");
    }

    #[test]
    fn test_result_size_is_bounded() {
        let huge = "x".repeat(MAX_INTERPOLATED_LENGTH + 1);
        let lookup = move |_: &str| Some(huge.clone());
        assert_eq!(
            interpolate_with("${BIG}", lookup),
            Err(InterpolationError::ResultTooLarge)
        );
    }

    #[test]
    #[serial]
    fn test_process_environment_lookup() {
        env::set_var("WEB420_INTERPOLATION_TEST", "from-env");
        let result = interpolate("value: ${WEB420_INTERPOLATION_TEST}").unwrap();
        env::remove_var("WEB420_INTERPOLATION_TEST");
        assert_eq!(result, "value: from-env");
    }
}
