//! Variant matching through an explicit handler table.
//!
//! [`Handlers`] is both arms of a `match` written as data, for call sites
//! that assemble the arms separately from the outcome they are applied to.
//! Both arms are mandatory: [`Outcome::match_with`] validates the table
//! before touching the outcome and panics on an incomplete one, naming every
//! missing arm. An incomplete table is a defect in the caller, not a
//! representable failure.

use std::fmt;

use crate::outcome::Outcome;

/// Handler table consumed by [`Outcome::match_with`].
///
/// Build with [`Handlers::new`], then attach both arms:
///
/// ```
/// use upshot::{success, Handlers};
///
/// let rendered = success::<_, String>(2).match_with(
///     Handlers::new()
///         .success(|n: i32| format!("got {}", n))
///         .failure(|e: String| e),
/// );
/// assert_eq!(rendered, "got 2");
/// ```
pub struct Handlers<'h, T, E, R> {
    success: Option<Box<dyn FnOnce(T) -> R + 'h>>,
    failure: Option<Box<dyn FnOnce(E) -> R + 'h>>,
}

impl<'h, T, E, R> Handlers<'h, T, E, R> {
    /// An empty table, with both arms still to attach.
    pub fn new() -> Self {
        Handlers {
            success: None,
            failure: None,
        }
    }

    /// Attach the arm invoked for success outcomes.
    pub fn success<F>(mut self, f: F) -> Self
    where
        F: FnOnce(T) -> R + 'h,
    {
        self.success = Some(Box::new(f));
        self
    }

    /// Attach the arm invoked for failure outcomes.
    pub fn failure<F>(mut self, f: F) -> Self
    where
        F: FnOnce(E) -> R + 'h,
    {
        self.failure = Some(Box::new(f));
        self
    }
}

impl<T, E, R> Default for Handlers<'_, T, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, R> fmt::Debug for Handlers<'_, T, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("success", &self.success.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

impl<T, E> Outcome<T, E> {
    /// Invoke the handler matching the active variant and return its result.
    ///
    /// # Panics
    ///
    /// Panics when any arm is missing, naming every missing one. The table
    /// is validated up front, so an incomplete table panics no matter which
    /// variant is active.
    ///
    /// ```should_panic
    /// use upshot::{success, Handlers};
    ///
    /// // Panics with "missing handlers: failure" although the outcome
    /// // is a success.
    /// success::<_, String>(2).match_with(Handlers::new().success(|n: i32| n));
    /// ```
    pub fn match_with<R>(self, handlers: Handlers<'_, T, E, R>) -> R {
        let (on_success, on_failure) = match (handlers.success, handlers.failure) {
            (Some(on_success), Some(on_failure)) => (on_success, on_failure),
            (success, failure) => {
                let mut missing = Vec::new();
                if success.is_none() {
                    missing.push("success");
                }
                if failure.is_none() {
                    missing.push("failure");
                }
                panic!("missing handlers: {}", missing.join(", "));
            }
        };
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};

    fn table<'h>() -> Handlers<'h, i32, &'static str, String> {
        Handlers::new()
            .success(|n| format!("value: {}", n))
            .failure(|e| format!("error: {}", e))
    }

    #[test]
    fn the_success_arm_sees_the_value() {
        assert_eq!(success::<_, &str>(3).match_with(table()), "value: 3");
    }

    #[test]
    fn the_failure_arm_sees_the_error() {
        assert_eq!(failure::<i32, _>("down").match_with(table()), "error: down");
    }

    #[test]
    fn only_the_matching_arm_runs() {
        let rendered = success::<_, &str>(1).match_with(
            Handlers::new()
                .success(|n: i32| n.to_string())
                .failure(|_| panic!("failure arm must not run")),
        );
        assert_eq!(rendered, "1");
    }

    #[test]
    #[should_panic(expected = "missing handlers: failure")]
    fn a_missing_failure_arm_is_reported_even_on_success() {
        let _ = success::<_, &str>(2).match_with(Handlers::<_, _, i32>::new().success(|n: i32| n));
    }

    #[test]
    #[should_panic(expected = "missing handlers: success")]
    fn a_missing_success_arm_is_reported_even_on_failure() {
        let _ = failure::<i32, _>("x").match_with(Handlers::<_, _, i32>::new().failure(|_| 0));
    }

    #[test]
    #[should_panic(expected = "missing handlers: success, failure")]
    fn an_empty_table_reports_both_arms() {
        let _ = success::<_, &str>(2).match_with(Handlers::<_, _, i32>::new());
    }
}
