//! Error accumulation for the `Validation` flavor.
//!
//! Fail-fast `bind` stops at the first failure. The helpers here keep going
//! and concatenate every error list instead.

use crate::outcome::Outcome;

impl<T, E> Outcome<T, Vec<E>> {
    /// A failure holding a single error.
    pub fn invalid(error: impl Into<E>) -> Self {
        Self::Failure(vec![error.into()])
    }

    /// The accumulated errors, empty on success.
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors,
        }
    }

    /// Combine two independent validations.
    ///
    /// Both succeed: the pair. Otherwise every error from both sides, left
    /// side first.
    pub fn zip<U>(self, other: Outcome<U, Vec<E>>) -> Outcome<(T, U), Vec<E>> {
        match (self, other) {
            (Self::Success(left), Outcome::Success(right)) => Outcome::Success((left, right)),
            (Self::Failure(mut left), Outcome::Failure(right)) => {
                left.extend(right);
                Outcome::Failure(left)
            }
            (Self::Failure(errors), Outcome::Success(_))
            | (Self::Success(_), Outcome::Failure(errors)) => Outcome::Failure(errors),
        }
    }
}

/// Run every check, collecting the errors of those that failed.
///
/// Each item is `(failed, error)`. Succeeds only when nothing failed.
pub fn ensure<E>(checks: impl IntoIterator<Item = (bool, E)>) -> Outcome<(), Vec<E>> {
    let errors: Vec<E> = checks
        .into_iter()
        .filter_map(|(failed, error)| failed.then_some(error))
        .collect();

    if errors.is_empty() {
        Outcome::Success(())
    } else {
        Outcome::Failure(errors)
    }
}

impl<T, E> FromIterator<Outcome<T, Vec<E>>> for Outcome<Vec<T>, Vec<E>> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, Vec<E>>>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::Success(Vec::new()), |acc, item| match (acc, item) {
                (Self::Success(mut values), Outcome::Success(value)) => {
                    values.push(value);
                    Self::Success(values)
                }
                (Self::Success(_), Outcome::Failure(errors)) => Self::Failure(errors),
                (Self::Failure(errors), Outcome::Success(_)) => Self::Failure(errors),
                (Self::Failure(mut errors), Outcome::Failure(more)) => {
                    errors.extend(more);
                    Self::Failure(errors)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;
    use crate::outcome::Validation;

    fn positive(n: i32) -> Validation<i32> {
        if n > 0 {
            Outcome::success(n)
        } else {
            Validation::invalid(format!("{n} must be positive"))
        }
    }

    fn even(n: i32) -> Validation<i32> {
        if n % 2 == 0 {
            Outcome::success(n)
        } else {
            Validation::invalid(format!("{n} must be even"))
        }
    }

    #[test]
    fn zip_pairs_successes() {
        assert_eq!(positive(2).zip(even(4)), Outcome::success((2, 4)));
    }

    #[test]
    fn zip_concatenates_both_failures() {
        assert_eq!(
            positive(-1).zip(even(-1)),
            Outcome::failure(vec![
                "-1 must be positive".to_owned(),
                "-1 must be even".to_owned(),
            ])
        );
    }

    #[test]
    fn zip_keeps_one_sided_failure() {
        assert_eq!(
            positive(2).zip(even(3)).errors(),
            ["3 must be even".to_owned()].as_slice()
        );
    }

    #[test]
    fn ensure_collects_only_failed_checks() {
        let result = ensure([(true, "a"), (false, "b"), (true, "c")]);
        assert_eq!(result, Outcome::failure(vec!["a", "c"]));
        assert_eq!(ensure([(false, "a")]), Outcome::success(()));
    }

    #[test]
    fn collect_gathers_values_or_all_errors() {
        let all_good: Validation<Vec<i32>> = [1, 2, 3].into_iter().map(positive).collect();
        assert_eq!(all_good, Outcome::success(vec![1, 2, 3]));

        let mixed: Validation<Vec<i32>> = [1, -2, 3, -4].into_iter().map(positive).collect();
        assert_eq!(
            mixed.errors(),
            [
                "-2 must be positive".to_owned(),
                "-4 must be positive".to_owned()
            ]
            .as_slice()
        );
    }

    #[test]
    fn success_has_no_errors() {
        assert!(positive(1).errors().is_empty());
    }
}
