//! Caller-owned feature flags.
//!
//! Unknown flags read as disabled. Updates return a new set.

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::outcome::{Either, Outcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags {
    flags: HashMap<String, bool>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(&self, feature: impl Into<String>, enabled: bool) -> Self {
        let feature = feature.into();
        tracing::debug!(%feature, enabled, "feature flag set");
        Self {
            flags: self.flags.update(feature, enabled),
        }
    }

    #[must_use]
    pub fn enable(&self, feature: impl Into<String>) -> Self {
        self.set(feature, true)
    }

    #[must_use]
    pub fn disable(&self, feature: impl Into<String>) -> Self {
        self.set(feature, false)
    }

    /// Layer `overrides` on top of `self`. Flags only in `self` keep their
    /// value; flags in both take the override.
    #[must_use]
    pub fn overlay(&self, overrides: &Self) -> Self {
        Self {
            flags: overrides.flags.clone().union(self.flags.clone()),
        }
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        self.flags.get(feature).copied().unwrap_or(false)
    }

    /// Enabled flag names, sorted.
    pub fn enabled(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Run `f` only when `feature` is enabled.
    ///
    /// ```
    /// use greeter_core::{FeatureFlags, Outcome};
    ///
    /// let flags = FeatureFlags::new().enable("shout");
    /// assert_eq!(flags.gate("shout", || "HI"), Outcome::success("HI"));
    /// assert_eq!(
    ///     flags.gate("whisper", || "hi"),
    ///     Outcome::failure("Feature 'whisper' is disabled".to_owned())
    /// );
    /// ```
    pub fn gate<T>(&self, feature: &str, f: impl FnOnce() -> T) -> Either<T> {
        if self.is_enabled(feature) {
            Outcome::success(()).map(|()| f())
        } else {
            Outcome::failure(format!("Feature '{feature}' is disabled"))
        }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(name, enabled)| (name.into(), enabled))
                .collect(),
        }
    }
}
