//! Greeting styles, languages and time-of-day phrases.
//!
//! Styles form a closed set. [`StyleRegistry`] maps each style to its
//! renderer once at construction and is read-only afterwards.

use std::fmt;

use chrono::Timelike;
use im::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::compose::kleisli;
use crate::name::{NameRules, ValidatedName};
use crate::outcome::Either;
use crate::result::OptionExt;

/// The plain welcome line.
pub fn welcome_message(name: &ValidatedName) -> String {
    format!("Welcome, {name}!")
}

/// Validate with default rules, then build the welcome line.
///
/// ```
/// use greeter_core::{Outcome, greeting::welcome_with_validation};
///
/// assert_eq!(welcome_with_validation("alice"), Outcome::success("Welcome, Alice!".to_owned()));
/// assert_eq!(welcome_with_validation(""), Outcome::failure("Name cannot be empty".to_owned()));
/// ```
pub fn welcome_with_validation(raw: &str) -> Either<String> {
    crate::name::validate_name(raw).map(|name| welcome_message(&name))
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GreetingStyle {
    Formal,
    #[default]
    Casual,
    Professional,
    Enthusiastic,
}

type Renderer = fn(&ValidatedName) -> String;

fn formal(name: &ValidatedName) -> String {
    format!("Dear {name}, it is our pleasure to welcome you.")
}

fn casual(name: &ValidatedName) -> String {
    format!("Hey {name}! Great to see you!")
}

fn professional(name: &ValidatedName) -> String {
    format!("Welcome {name}. We look forward to working with you.")
}

fn enthusiastic(name: &ValidatedName) -> String {
    format!("WOW! {name} is here! Let's get started!")
}

/// Immutable style-to-renderer table.
#[derive(Clone)]
pub struct StyleRegistry {
    renderers: HashMap<GreetingStyle, Renderer>,
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("styles", &self.styles())
            .finish()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    pub fn new() -> Self {
        let renderers: HashMap<GreetingStyle, Renderer> = [
            (GreetingStyle::Formal, formal as Renderer),
            (GreetingStyle::Casual, casual),
            (GreetingStyle::Professional, professional),
            (GreetingStyle::Enthusiastic, enthusiastic),
        ]
        .into_iter()
        .collect();
        tracing::debug!(styles = renderers.len(), "style registry built");
        Self { renderers }
    }

    /// Registered styles in declaration order.
    pub fn styles(&self) -> Vec<GreetingStyle> {
        GreetingStyle::iter()
            .filter(|style| self.renderers.contains_key(style))
            .collect()
    }

    /// Look a style up by name, case-insensitively.
    pub fn resolve(&self, name: &str) -> Either<GreetingStyle> {
        name.trim()
            .parse::<GreetingStyle>()
            .ok()
            .filter(|style| self.renderers.contains_key(style))
            .ok_or_describe(|| {
                format!(
                    "Unknown greeting style '{name}' (available: {})",
                    self.styles().iter().join(", ")
                )
            })
    }

    pub fn render(&self, style: GreetingStyle, name: &ValidatedName) -> Either<String> {
        self.renderers
            .get(&style)
            .map(|render| render(name))
            .ok_or_describe(|| format!("No renderer registered for style '{style}'"))
    }

    /// Validate `raw` against `rules` and render it in `style`.
    pub fn welcome(&self, rules: &NameRules, style: GreetingStyle, raw: &str) -> Either<String> {
        let greet = kleisli(
            |input: &str| rules.validate(input),
            |name: ValidatedName| self.render(style, &name),
        );
        greet(raw)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    pub const fn word(self) -> &'static str {
        match self {
            Self::English => "Welcome",
            Self::Spanish => "Bienvenido",
            Self::French => "Bienvenue",
            Self::German => "Willkommen",
            Self::Italian => "Benvenuto",
        }
    }

    pub fn greet(self, name: &ValidatedName) -> String {
        format!("{}, {name}!", self.word())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// 5..12 is morning, 12..18 afternoon, anything else evening.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Read the local clock.
    pub fn now() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }

    pub fn greet(self, name: &ValidatedName) -> String {
        format!("{}, {name}!", self.phrase())
    }
}
