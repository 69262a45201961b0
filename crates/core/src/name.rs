//! Name validation.
//!
//! Five rules, one canonical message each, shared by the fail-fast and the
//! accumulating validators:
//!
//! 1. not empty or whitespace-only
//! 2. (the name is trimmed)
//! 3. at least `min_length` characters
//! 4. at most `max_length` characters
//! 5. only ASCII letters, whitespace and hyphens (plus digits if allowed)
//!
//! A passing name is title-cased and wrapped in [`ValidatedName`], which can
//! only be built here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;
use crate::outcome::{Either, Maybe, Outcome, Validation};
use crate::result::ResultExt;
use crate::validation::ensure;

pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Which characters a name may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    Letters,
    LettersAndDigits,
}

impl CharacterSet {
    fn allows(self, c: char) -> bool {
        c.is_ascii_alphabetic()
            || c == '-'
            || c.is_whitespace()
            || (matches!(self, Self::LettersAndDigits) && c.is_ascii_digit())
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letters => write!(f, "letters, spaces, and hyphens"),
            Self::LettersAndDigits => write!(f, "letters, digits, spaces, and hyphens"),
        }
    }
}

/// A broken name rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RuleViolation {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Name cannot exceed {max} characters")]
    TooLong { max: usize },

    #[error("Name can only contain {allowed}")]
    InvalidCharacters { allowed: CharacterSet },
}

/// A trimmed, title-cased name that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ValidatedName(String);

impl ValidatedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ValidatedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ValidatedName> for String {
    fn from(name: ValidatedName) -> Self {
        name.0
    }
}

impl FromStr for ValidatedName {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameRules::default().check(s)
    }
}

impl TryFrom<&str> for ValidatedName {
    type Error = RuleViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Tunable limits for the name rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameRules {
    pub min_length: usize,
    pub max_length: usize,
    pub allow_digits: bool,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            allow_digits: false,
        }
    }
}

impl NameRules {
    /// Build rules, rejecting limits no name could satisfy.
    pub fn new(min_length: usize, max_length: usize, allow_digits: bool) -> crate::Result<Self> {
        Self {
            min_length,
            max_length,
            allow_digits,
        }
        .validated()
    }

    /// Check the limits are consistent.
    pub fn validated(self) -> crate::Result<Self> {
        if self.min_length == 0 {
            return Err(Error::invalid_rules("min_length must be at least 1"));
        }
        if self.min_length > self.max_length {
            return Err(Error::invalid_rules(format!(
                "min_length ({}) exceeds max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(self)
    }

    pub const fn character_set(&self) -> CharacterSet {
        if self.allow_digits {
            CharacterSet::LettersAndDigits
        } else {
            CharacterSet::Letters
        }
    }

    /// Fail-fast check: the first broken rule wins.
    pub fn check(&self, raw: &str) -> Result<ValidatedName, RuleViolation> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RuleViolation::Empty);
        }

        let length = trimmed.chars().count();
        if length < self.min_length {
            return Err(RuleViolation::TooShort {
                min: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(RuleViolation::TooLong {
                max: self.max_length,
            });
        }

        let allowed = self.character_set();
        if !trimmed.chars().all(|c| allowed.allows(c)) {
            return Err(RuleViolation::InvalidCharacters { allowed });
        }

        Ok(ValidatedName(title_case(trimmed)))
    }

    /// Accumulating check: every broken rule is reported.
    ///
    /// Rules are evaluated independently, so an empty input reports both
    /// the emptiness and the length rule. The character rule is vacuously
    /// satisfied by an empty name.
    pub fn check_all(&self, raw: &str) -> Result<ValidatedName, Vec<RuleViolation>> {
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        let allowed = self.character_set();

        ensure([
            (trimmed.is_empty(), RuleViolation::Empty),
            (
                length < self.min_length,
                RuleViolation::TooShort {
                    min: self.min_length,
                },
            ),
            (
                length > self.max_length,
                RuleViolation::TooLong {
                    max: self.max_length,
                },
            ),
            (
                trimmed.chars().any(|c| !allowed.allows(c)),
                RuleViolation::InvalidCharacters { allowed },
            ),
        ])
        .into_result()
        .map(|()| ValidatedName(title_case(trimmed)))
    }

    /// Fail-fast validation in the `Either` channel.
    pub fn validate(&self, raw: &str) -> Either<ValidatedName> {
        self.check(raw)
            .tap_err(|violation| tracing::debug!(%violation, "name rejected"))
            .into_either()
    }

    /// Fail-fast validation in the `Maybe` channel.
    pub fn validate_maybe(&self, raw: &str) -> Maybe<ValidatedName> {
        self.check(raw).into_maybe_logged()
    }

    /// Accumulating validation in the `Validation` channel.
    pub fn validate_all(&self, raw: &str) -> Validation<ValidatedName> {
        Outcome::from(self.check_all(raw))
            .map_failure(|violations| violations.iter().map(ToString::to_string).collect())
    }
}

/// Validate with the default rules, reporting the first broken rule.
///
/// ```
/// use greeter_core::{Outcome, validate_name};
///
/// let name = validate_name("  alice  ").map(|n| n.into_inner());
/// assert_eq!(name, Outcome::success("Alice".to_owned()));
///
/// let short = validate_name("a").map(|n| n.into_inner());
/// assert_eq!(short, Outcome::failure("Name must be at least 2 characters".to_owned()));
/// ```
pub fn validate_name(raw: &str) -> Either<ValidatedName> {
    NameRules::default().validate(raw)
}

/// Validate with the default rules, dropping the reason.
pub fn validate_name_maybe(raw: &str) -> Maybe<ValidatedName> {
    NameRules::default().validate_maybe(raw)
}

/// Validate with the default rules, reporting every broken rule.
pub fn validate_name_all(raw: &str) -> Validation<ValidatedName> {
    NameRules::default().validate_all(raw)
}

/// Uppercase each letter not preceded by a letter, lowercase the rest.
///
/// ```
/// use greeter_core::name::title_case;
///
/// assert_eq!(title_case("mary-jane o connor"), "Mary-Jane O Connor");
/// assert_eq!(title_case("bOB"), "Bob");
/// ```
pub fn title_case(text: &str) -> String {
    text.chars()
        .fold(
            (String::with_capacity(text.len()), false),
            |(mut out, after_letter), c| {
                if after_letter {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                (out, c.is_alphabetic())
            },
        )
        .0
}
