//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! Bridges the standard library `Result`/`Option` with the [`Outcome`]
//! convention so typed errors can be lowered into the `Either`/`Maybe`
//! channels at the edges.

use std::fmt::Display;

use crate::error::Error;
use crate::outcome::{Either, Maybe, Outcome};

/// The standard Result type for greeter operations.
///
/// All fallible I/O and configuration operations return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait lowering any displayable `Result` into Outcome channels.
pub trait ResultExt<T, E> {
    /// Keep the value, describing the error with its `Display` text.
    fn into_either(self) -> Either<T>;

    /// Keep the value, logging and dropping the error.
    fn into_maybe_logged(self) -> Maybe<T>;

    /// Perform a side effect on the error without consuming the Result.
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E: Display> ResultExt<T, E> for std::result::Result<T, E> {
    fn into_either(self) -> Either<T> {
        self.map_err(|e| e.to_string()).into()
    }

    fn into_maybe_logged(self) -> Maybe<T> {
        match self {
            Ok(value) => Outcome::just(value),
            Err(e) => {
                tracing::debug!("Operation failed: {}", e);
                Outcome::nothing()
            }
        }
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

/// Extension trait for Option types providing Railway-style operations.
pub trait OptionExt<T> {
    /// Lift into the `Either` channel with a lazily built description.
    fn ok_or_describe<F: FnOnce() -> String>(self, describe: F) -> Either<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_describe<F: FnOnce() -> String>(self, describe: F) -> Either<T> {
        self.map_or_else(|| Outcome::failure(describe()), Outcome::success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_either_uses_display_text() {
        let result: Result<i32> = Err(Error::invalid_rules("broken"));
        assert_eq!(
            result.into_either(),
            Outcome::failure("invalid name rules: broken".to_owned())
        );
    }

    #[test]
    fn into_either_keeps_success() {
        let result: std::result::Result<i32, String> = Ok(42);
        assert_eq!(result.into_either(), Outcome::success(42));
    }

    #[test]
    fn into_maybe_logged_drops_error() {
        let result: std::result::Result<i32, &str> = Err("gone");
        assert_eq!(result.into_maybe_logged(), Maybe::nothing());
        let result: std::result::Result<i32, &str> = Ok(1);
        assert_eq!(result.into_maybe_logged(), Maybe::just(1));
    }

    #[test]
    fn tap_err_observes_error() {
        let mut observed = String::new();
        let result: std::result::Result<i32, &str> = Err("error");
        let _ = result.tap_err(|e| observed = (*e).to_string());
        assert_eq!(observed, "error");
    }

    #[test]
    fn ok_or_describe_builds_failure_lazily() {
        let missing: Option<i32> = None;
        assert_eq!(
            missing.ok_or_describe(|| "missing value".into()),
            Outcome::failure("missing value".to_owned())
        );
        assert_eq!(Some(3).ok_or_describe(never_built), Outcome::success(3));
    }

    fn never_built() -> String {
        "never built".to_owned()
    }
}
