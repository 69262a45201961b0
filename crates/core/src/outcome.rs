//! The two-slot result convention.
//!
//! [`Outcome`] is a computation that either produced a value or failed.
//! Three flavors differ only in what the failure slot carries:
//!
//! - [`Maybe`]: `()`, absence with no detail
//! - [`Either`]: `String`, a single description
//! - [`Validation`]: `Vec<String>`, every failure that was found
//!
//! Outcomes are values. `map` and `bind` build new ones and never unwind:
//! a panicking transform is converted to the channel's failure through
//! [`Fault`].
//!
//! # Examples
//!
//! ```
//! use greeter_core::{Either, Outcome};
//!
//! let shout: Either<String> = Outcome::success("hi".to_owned()).map(|s| s.to_uppercase());
//! assert_eq!(shout, Outcome::success("HI".to_owned()));
//!
//! let failed: Either<String> = Outcome::failure("missing".to_owned());
//! assert_eq!(failed.map(|s| s.len()), Outcome::failure("missing".to_owned()));
//! ```

use serde::{Deserialize, Serialize};

use crate::fault::{Fault, Stage, guard};

/// Success with a value or failure with an error, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

/// Outcome whose failure carries no information.
pub type Maybe<T> = Outcome<T, ()>;

/// Outcome whose failure carries one description.
pub type Either<T> = Outcome<T, String>;

/// Outcome whose failure accumulates every description.
pub type Validation<T> = Outcome<T, Vec<String>>;

/// Wrap a value as a success.
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap an error as a failure.
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Wrap a value as a success.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap an error as a failure.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow both slots.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Drop the error, keeping the value if there was one.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert to the standard library result.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => op(error),
        }
    }

    /// Transform the success value.
    ///
    /// Failures pass through untouched. A panic inside `f` becomes a failure
    /// built by the channel's [`Fault`] impl, e.g. `"Mapping error: ..."`.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
        E: Fault,
    {
        match self {
            Self::Success(value) => match guard(Stage::Mapping, move || f(value)) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Sequence a dependent computation (monadic bind).
    ///
    /// The continuation's outcome is returned as is, not wrapped again. A
    /// panicking continuation becomes a `"Binding error: ..."` failure.
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        E: Fault,
    {
        match self {
            Self::Success(value) => {
                guard(Stage::Binding, move || f(value)).unwrap_or_else(Outcome::Failure)
            }
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias of [`Outcome::bind`].
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
        E: Fault,
    {
        self.bind(f)
    }

    /// Recover from a failure with a computation over the error.
    pub fn or_else<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
        E2: Fault,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => {
                guard(Stage::Recovery, move || f(error)).unwrap_or_else(Outcome::Failure)
            }
        }
    }

    /// Transform the error slot. Successes pass through.
    pub fn map_failure<E2, F: FnOnce(E) -> E2>(self, f: F) -> Outcome<T, E2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Run a side effect on the success value.
    pub fn tap_success<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Self::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Run a side effect on the failure value.
    pub fn tap_failure<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Self::Failure(ref error) = self {
            f(error);
        }
        self
    }
}

impl<T> Outcome<T, ()> {
    /// A present `Maybe` value.
    pub const fn just(value: T) -> Self {
        Self::Success(value)
    }

    /// An absent `Maybe` value.
    pub const fn nothing() -> Self {
        Self::Failure(())
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::nothing, Self::just)
    }
}

/// Build a function that tries `primary` and falls back to `secondary`
/// with the same input when `primary` fails.
///
/// ```
/// use greeter_core::{Either, Outcome, fallback};
///
/// let strict = |n: i32| -> Either<i32> {
///     if n > 0 { Outcome::success(n) } else { Outcome::failure("not positive".into()) }
/// };
/// let lenient = |_: i32| -> Either<i32> { Outcome::success(1) };
///
/// let checked = fallback(strict, lenient);
/// assert_eq!(checked(5), Outcome::success(5));
/// assert_eq!(checked(-3), Outcome::success(1));
/// ```
pub fn fallback<A, T, E, P, S>(primary: P, secondary: S) -> impl Fn(A) -> Outcome<T, E>
where
    A: Clone,
    P: Fn(A) -> Outcome<T, E>,
    S: Fn(A) -> Outcome<T, E>,
{
    move |input: A| match primary(input.clone()) {
        Outcome::Success(value) => Outcome::Success(value),
        Outcome::Failure(_) => {
            tracing::debug!("primary strategy failed, using fallback");
            secondary(input)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;

    fn half(n: i32) -> Either<i32> {
        if n % 2 == 0 {
            success(n / 2)
        } else {
            failure(format!("{n} is odd"))
        }
    }

    #[test]
    fn constructors_set_exactly_one_slot() {
        let ok: Either<i32> = Outcome::success(1);
        let err: Either<i32> = Outcome::failure("no".into());

        assert!(ok.is_success() && !ok.is_failure());
        assert!(err.is_failure() && !err.is_success());
        assert_eq!(ok.success_ref(), Some(&1));
        assert_eq!(err.failure_ref().map(String::as_str), Some("no"));
    }

    #[test]
    fn maybe_just_and_nothing() {
        assert_eq!(Maybe::just(3).into_option(), Some(3));
        assert_eq!(Maybe::<i32>::nothing().into_option(), None);
        assert_eq!(Maybe::from(Some("x")), Maybe::just("x"));
        assert_eq!(Maybe::<&str>::from(None), Maybe::nothing());
    }

    #[test]
    fn map_transforms_success() {
        let result: Either<String> = success("hello".to_owned());
        assert_eq!(result.map(|s| s.to_uppercase()), success("HELLO".to_owned()));
    }

    #[test]
    fn map_passes_failure_through() {
        let result: Either<i32> = failure("error".into());
        assert_eq!(result.map(|n| n + 1), failure("error".into()));
    }

    #[test]
    fn map_converts_panic_to_described_failure() {
        let result: Either<i32> = success(0);
        let mapped: Either<i32> = result.map(|_| panic!("division by zero"));
        assert_eq!(mapped, failure("Mapping error: division by zero".into()));
    }

    #[test]
    fn maybe_map_converts_panic_to_nothing() {
        let mapped: Maybe<i32> = Maybe::just(1).map(|_| panic!("nope"));
        assert_eq!(mapped, Maybe::nothing());
    }

    #[test]
    fn bind_returns_continuation_outcome_directly() {
        assert_eq!(success(8).bind(half), success(4));
        assert_eq!(success(3).bind(half), failure("3 is odd".into()));
        assert_eq!(
            failure::<i32, String>("earlier".into()).bind(half),
            failure("earlier".into())
        );
    }

    #[test]
    fn bind_converts_panic_to_failure() {
        let bound: Either<i32> = success(1).bind(|_| panic!("lost connection"));
        assert_eq!(bound, failure("Binding error: lost connection".into()));
    }

    #[test]
    fn maybe_bind_panic_becomes_nothing() {
        let bound: Maybe<i32> = Maybe::just(1).bind(|_| panic!("lost connection"));
        assert_eq!(bound, Maybe::nothing());
    }

    #[test]
    fn validation_bind_panic_becomes_single_message() {
        let bound: Validation<i32> = success(1).bind(|_| panic!("lost connection"));
        assert_eq!(
            bound,
            failure(vec!["Binding error: lost connection".to_owned()])
        );
    }

    #[test]
    fn validation_panic_becomes_single_message() {
        let mapped: Validation<i32> = success(1).map(|_| panic!("bad"));
        assert_eq!(mapped, failure(vec!["Mapping error: bad".to_owned()]));
    }

    #[test]
    fn or_else_recovers() {
        let recovered: Either<i32> =
            failure::<i32, String>("missing".into()).or_else(|_| success(0));
        assert_eq!(recovered, success(0));

        let untouched: Either<i32> = success(5).or_else(|_: String| success(0));
        assert_eq!(untouched, success(5));
    }

    #[test]
    fn map_failure_rewrites_error() {
        let result: Outcome<i32, usize> =
            failure::<i32, String>("four".into()).map_failure(|e| e.len());
        assert_eq!(result, failure(4));
    }

    #[test]
    fn taps_observe_without_changing() {
        let mut seen = 0;
        let result: Either<i32> = success(7);
        let result = result.tap_success(|v| seen = *v).tap_failure(|_| seen = -1);
        assert_eq!(seen, 7);
        assert_eq!(result, success(7));
    }

    #[test]
    fn result_round_trip() {
        let ok: Result<i32, String> = success(1).into_result();
        assert_eq!(ok, Ok(1));
        let outcome: Either<i32> = Err::<i32, String>("bad".into()).into();
        assert_eq!(outcome, failure("bad".into()));
    }

    #[test]
    fn unwrap_or_variants() {
        assert_eq!(failure::<i32, String>("x".into()).unwrap_or(9), 9);
        assert_eq!(
            failure::<usize, String>("four".into()).unwrap_or_else(|e| e.len()),
            4
        );
    }

    #[test]
    fn fallback_uses_secondary_only_on_failure() {
        let primary = |s: String| -> Either<String> {
            if s.is_empty() {
                failure("empty".into())
            } else {
                success(s.to_uppercase())
            }
        };
        let guest = |_: String| -> Either<String> { success("Guest".into()) };
        let strategy = fallback(primary, guest);

        assert_eq!(strategy("hello".into()), success("HELLO".into()));
        assert_eq!(strategy(String::new()), success("Guest".into()));
    }

    #[test]
    fn serializes_with_status_tag() {
        let ok: Either<String> = success("Alice".into());
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"status":"success","value":"Alice"}"#);

        let err: Either<String> = failure("Name cannot be empty".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"status":"failure","value":"Name cannot be empty"}"#);
    }
}
