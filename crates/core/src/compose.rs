//! Function composition.
//!
//! `pipe`/`compose` are plain function chaining and are not Outcome-aware:
//! a panicking stage unwinds to the caller and later stages never run.
//! `kleisli` chains Outcome-returning stages through `bind`.

use crate::fault::Fault;
use crate::outcome::Outcome;

/// Apply `f` to `value`.
pub fn pipe<A, B>(value: A, f: impl FnOnce(A) -> B) -> B {
    f(value)
}

/// Right-to-left composition: `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

/// Kleisli composition: `kleisli(f, g)(a) == f(a).bind(g)`.
///
/// ```
/// use greeter_core::{Either, Outcome, kleisli};
///
/// let parse = |s: &str| -> Either<i32> {
///     s.parse().map_err(|_| format!("'{s}' is not a number")).into()
/// };
/// let halve = |n: i32| -> Either<i32> {
///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure(format!("{n} is odd")) }
/// };
///
/// let parse_and_halve = kleisli(parse, halve);
/// assert_eq!(parse_and_halve("8"), Outcome::success(4));
/// assert_eq!(parse_and_halve("7"), Outcome::failure("7 is odd".to_owned()));
/// assert_eq!(parse_and_halve("x"), Outcome::failure("'x' is not a number".to_owned()));
/// ```
pub fn kleisli<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C, E>
where
    F: Fn(A) -> Outcome<B, E>,
    G: Fn(B) -> Outcome<C, E>,
    E: Fault,
{
    move |a| f(a).bind(&g)
}

/// Fold a value through a homogeneous list of transforms, left to right.
pub fn apply_all<T, F>(value: T, transforms: &[F]) -> T
where
    F: Fn(T) -> T,
{
    transforms.iter().fold(value, |acc, transform| transform(acc))
}

/// Apply functions left to right: `pipe!(x, f, g, h) == h(g(f(x)))`.
///
/// ```
/// use greeter_core::pipe;
///
/// let shout = pipe!("  ada ", str::trim, str::to_uppercase, |s: String| s + "!");
/// assert_eq!(shout, "ADA!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $($f:expr),+ $(,)?) => {{
        use $crate::__private::Pipe as _;
        $value$(.pipe($f))+
    }};
}

/// Compose functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// ```
/// use greeter_core::compose;
///
/// let describe = compose!(|n: usize| format!("{n} chars"), str::len, str::trim);
/// assert_eq!(describe("  hello "), "5 chars");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose($f, $crate::compose!($($rest),+))
    };
}

/// Kleisli-compose any number of Outcome-returning stages, left to right.
#[macro_export]
macro_rules! kleisli {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::kleisli($f, $crate::kleisli!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::Cell;

    use super::*;
    use crate::outcome::Either;

    fn double(n: i32) -> i32 {
        n * 2
    }

    fn increment(n: i32) -> i32 {
        n + 1
    }

    fn square(n: i32) -> i32 {
        n * n
    }

    fn positive(n: i32) -> Either<i32> {
        if n > 0 {
            Outcome::success(n)
        } else {
            Outcome::failure(format!("{n} is not positive"))
        }
    }

    fn below_hundred(n: i32) -> Either<i32> {
        if n < 100 {
            Outcome::success(n)
        } else {
            Outcome::failure(format!("{n} is too large"))
        }
    }

    fn doubled(n: i32) -> Either<i32> {
        Outcome::success(n * 2)
    }

    #[test]
    fn pipe_applies_left_to_right() {
        assert_eq!(pipe!(3, double, increment, square), 49);
        assert_eq!(pipe(3, double), 6);
        assert_eq!(pipe!(3), 3);
    }

    #[test]
    fn compose_applies_right_to_left() {
        let composed = compose!(double, increment, square);
        assert_eq!(composed(3), 20);
        assert_eq!(compose(double, increment)(3), 8);
    }

    #[test]
    fn compose_and_pipe_agree_when_reversed() {
        let composed = compose!(square, increment, double);
        assert_eq!(composed(5), pipe!(5, double, increment, square));
    }

    #[test]
    fn apply_all_folds_transforms() {
        let steps: [&dyn Fn(i32) -> i32; 3] = [&double, &increment, &square];
        assert_eq!(apply_all(2, &steps), 25);
        let none: [fn(i32) -> i32; 0] = [];
        assert_eq!(apply_all(2, &none), 2);
    }

    #[test]
    fn pipe_stops_at_panicking_stage() {
        let reached = Cell::new(false);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pipe!(
                1,
                |_: i32| -> i32 { panic!("stage failed") },
                |n: i32| {
                    reached.set(true);
                    n
                }
            )
        }));
        assert!(outcome.is_err());
        assert!(!reached.get());
    }

    #[test]
    fn compose_stops_at_panicking_stage() {
        let reached = Cell::new(false);
        let composed = compose!(
            |n: i32| {
                reached.set(true);
                n
            },
            |_: i32| -> i32 { panic!("stage failed") }
        );
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| composed(1)));
        assert!(outcome.is_err());
        assert!(!reached.get());
    }

    #[test]
    fn kleisli_short_circuits() {
        let checked = kleisli(positive, below_hundred);
        assert_eq!(checked(5), Outcome::success(5));
        assert_eq!(checked(-5), Outcome::failure("-5 is not positive".to_owned()));
        assert_eq!(checked(500), Outcome::failure("500 is too large".to_owned()));
    }

    #[test]
    fn kleisli_is_associative() {
        let left = kleisli(kleisli(positive, doubled), below_hundred);
        let right = kleisli(positive, kleisli(doubled, below_hundred));
        for input in [-3, 0, 1, 49, 50, 99] {
            assert_eq!(left(input), right(input));
        }
    }

    #[test]
    fn kleisli_macro_chains_many() {
        let chained = kleisli!(positive, doubled, doubled, below_hundred);
        assert_eq!(chained(10), Outcome::success(40));
        assert_eq!(chained(30), Outcome::failure("120 is too large".to_owned()));
    }
}
