//! Failure channels and panic capture.
//!
//! `map` and `bind` on [`crate::Outcome`] never let a panicking transform
//! unwind into the caller. The unwind is caught here and handed to the
//! channel's [`Fault`] impl, which decides what the failure looks like:
//! nothing for `Maybe`, a message for `Either`, a one-element list for
//! `Validation`.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// The combinator a caught panic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Mapping,
    Binding,
    Recovery,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping => write!(f, "Mapping"),
            Self::Binding => write!(f, "Binding"),
            Self::Recovery => write!(f, "Recovery"),
        }
    }
}

/// A failure slot that can absorb a panicking transform.
pub trait Fault: Sized {
    /// Build the failure value for a panic raised during `stage`.
    fn from_panic(stage: Stage, message: &str) -> Self;
}

impl Fault for () {
    fn from_panic(_stage: Stage, _message: &str) -> Self {}
}

impl Fault for String {
    fn from_panic(stage: Stage, message: &str) -> Self {
        format!("{stage} error: {message}")
    }
}

impl Fault for Vec<String> {
    fn from_panic(stage: Stage, message: &str) -> Self {
        vec![String::from_panic(stage, message)]
    }
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

/// Run `f`, turning an unwind into the channel's failure value.
pub(crate) fn guard<R, E: Fault>(stage: Stage, f: impl FnOnce() -> R) -> Result<R, E> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!(%stage, %message, "transform panicked, converted to failure");
        E::from_panic(stage, &message)
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn either_channel_describes_stage() {
        assert_eq!(
            String::from_panic(Stage::Mapping, "boom"),
            "Mapping error: boom"
        );
        assert_eq!(
            String::from_panic(Stage::Binding, "boom"),
            "Binding error: boom"
        );
    }

    #[test]
    fn validation_channel_wraps_single_message() {
        assert_eq!(
            Vec::<String>::from_panic(Stage::Recovery, "bad"),
            vec!["Recovery error: bad".to_owned()]
        );
    }

    #[test]
    fn guard_passes_values_through() {
        let result: Result<i32, String> = guard(Stage::Mapping, || 21 * 2);
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn guard_catches_str_and_string_payloads() {
        let literal: Result<(), String> = guard(Stage::Mapping, || panic!("literal"));
        assert_eq!(literal, Err("Mapping error: literal".to_owned()));

        let formatted: Result<(), String> =
            guard(Stage::Binding, || panic!("value was {}", 7));
        assert_eq!(formatted, Err("Binding error: value was 7".to_owned()));
    }
}
