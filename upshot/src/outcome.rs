//! The two-variant outcome type and its combinators.
//!
//! Combinators run their callbacks as-is: a panicking callback propagates to
//! the caller. Capturing panics is the job of the wrapping functions in
//! [`crate::catch`].

use std::any::Any;
use std::future::Future;
use std::panic::panic_any;

use crate::fault::Fault;

/// Construct a success outcome.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Construct a failure outcome.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// The result of a fallible computation: either a success carrying a value
/// or a failure carrying an error.
///
/// The default error type is [`Fault`], which is what the wrapping functions
/// in [`crate::catch`] produce; directly constructed outcomes may carry any
/// error type. An outcome is immutable once built: there are no mutating
/// accessors, and every combinator consumes its input and returns a fresh
/// outcome.
///
/// # Examples
///
/// ```
/// use upshot::{failure, success};
///
/// let doubled = success::<_, ()>(21).map(|n| n * 2);
/// assert_eq!(doubled, success(42));
///
/// let stuck = failure::<i32, &str>("no input").map(|n| n * 2);
/// assert_eq!(stuck, failure("no input"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = Fault> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// True iff this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True iff this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Consume into the success value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Consume into the failure error, if any.
    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Apply `f` to the success value; failures pass through untouched and
    /// `f` is never invoked for them.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{success, Outcome};
    ///
    /// let len: Outcome<usize, ()> = success("word").map(str::len);
    /// assert_eq!(len, success(4));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// As [`Outcome::map`], with an asynchronous mapping function.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{success, Outcome};
    ///
    /// futures::executor::block_on(async {
    ///     let out: Outcome<i32, ()> = success(20).map_async(|n| async move { n + 2 }).await;
    ///     assert_eq!(out, success(22));
    /// });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value).await),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a dependent fallible computation over the success value.
    ///
    /// Failures short-circuit: `f` is never invoked and the error passes
    /// through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{failure, success, Outcome};
    ///
    /// fn half(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         success(n / 2)
    ///     } else {
    ///         failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(success(8).and_then(half), success(4));
    /// assert_eq!(success(7).and_then(half), failure("odd"));
    /// assert_eq!(failure("upstream").and_then(half), failure("upstream"));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// As [`Outcome::and_then`], with an asynchronous continuation.
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Success(value) => f(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Run `f` for its side effect on the success value and hand the outcome
    /// back unchanged. Does nothing on failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{success, Outcome};
    ///
    /// let mut seen = None;
    /// let out: Outcome<i32, ()> = success(5).tap(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(5));
    /// assert_eq!(out, success(5));
    /// ```
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// As [`Outcome::tap`], awaiting an asynchronous side effect.
    ///
    /// The returned future cannot borrow from the inspected value; the
    /// closure clones whatever the side effect needs.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Outcome::Success(value) = &self {
            f(value).await;
        }
        self
    }

    /// The success value, or `fallback` for failures.
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fallback,
        }
    }

    /// The success value, or the result of applying `f` to the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{failure, success, Outcome};
    ///
    /// let ok: Outcome<usize, &str> = success(3);
    /// assert_eq!(ok.get_or_else(|_| 0), 3);
    ///
    /// let bad: Outcome<usize, &str> = failure("nope");
    /// assert_eq!(bad.get_or_else(str::len), 4);
    /// ```
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// The success value; re-raises the error for failures.
    ///
    /// The error is raised exactly as stored, via [`std::panic::panic_any`],
    /// so an unwinding observer recovers the very same value by downcasting
    /// the payload.
    ///
    /// # Panics
    ///
    /// Panics when this outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::{failure, success};
    ///
    /// assert_eq!(success::<_, String>(5).get_or_panic(), 5);
    ///
    /// let raised = std::panic::catch_unwind(|| {
    ///     failure::<i32, _>(String::from("bad input")).get_or_panic()
    /// });
    /// let payload = raised.unwrap_err();
    /// assert_eq!(*payload.downcast::<String>().unwrap(), "bad input");
    /// ```
    pub fn get_or_panic(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic_any(error),
        }
    }

    /// Convert into a std [`Result`].
    pub fn into_result(self) -> Result<T, E> {
        self.into()
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
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn predicates_track_the_active_variant() {
        let ok: Outcome<i32, &str> = success(1);
        assert!(ok.is_success());
        assert!(!ok.is_failure());

        let bad: Outcome<i32, &str> = failure("x");
        assert!(bad.is_failure());
        assert!(!bad.is_success());
    }

    #[test]
    fn value_and_error_are_mutually_exclusive() {
        assert_eq!(success::<_, &str>(9).value(), Some(9));
        assert_eq!(success::<_, &str>(9).error(), None);
        assert_eq!(failure::<i32, _>("x").value(), None);
        assert_eq!(failure::<i32, _>("x").error(), Some("x"));
    }

    #[test]
    fn map_skips_the_callback_on_failure() {
        let ran = Cell::new(false);
        let out: Outcome<i32, &str> = failure("nope").map(|n: i32| {
            ran.set(true);
            n + 1
        });
        assert_eq!(out, failure("nope"));
        assert!(!ran.get());
    }

    #[test]
    fn and_then_is_associative() {
        let f = |n: i32| success::<_, &str>(n + 1);
        let g = |n: i32| success::<_, &str>(n * 2);
        let left = success::<_, &str>(7).and_then(f).and_then(g);
        let right = success::<_, &str>(7).and_then(|n| f(n).and_then(g));
        assert_eq!(left, right);
        assert_eq!(left, success(16));
    }

    #[test]
    fn and_then_short_circuits_on_failure() {
        let ran = Cell::new(false);
        let out: Outcome<i32, &str> = failure("upstream").and_then(|n: i32| {
            ran.set(true);
            success(n)
        });
        assert_eq!(out, failure("upstream"));
        assert!(!ran.get());
    }

    #[test]
    fn tap_passes_the_outcome_through() {
        let seen = Cell::new(0);
        let out: Outcome<i32, &str> = success(5).tap(|n| seen.set(*n));
        assert_eq!(out, success(5));
        assert_eq!(seen.get(), 5);

        let out: Outcome<i32, &str> = failure("x").tap(|n| seen.set(*n + 100));
        assert_eq!(out, failure("x"));
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn fallback_accessors_pick_the_right_side() {
        assert_eq!(success::<_, &str>(3).get_or(0), 3);
        assert_eq!(failure::<i32, _>("x").get_or(0), 0);
        assert_eq!(success::<_, &str>(3).get_or_else(|_| 0), 3);
        assert_eq!(failure::<usize, _>("four").get_or_else(str::len), 4);
    }

    #[test]
    fn get_or_panic_returns_the_success_value() {
        assert_eq!(success::<_, String>(11).get_or_panic(), 11);
    }

    #[test]
    fn outcomes_round_trip_through_results() {
        let ok: Result<i32, &str> = success(1).into_result();
        assert_eq!(ok, Ok(1));
        let bad: Result<i32, &str> = failure("x").into();
        assert_eq!(bad, Err("x"));

        assert_eq!(Outcome::from(Ok::<_, &str>(1)), success(1));
        assert_eq!(Outcome::from(Err::<i32, _>("x")), failure("x"));
    }

    #[test]
    fn async_combinators_follow_the_sync_ones() {
        futures::executor::block_on(async {
            let mapped: Outcome<i32, &str> =
                success(20).map_async(|n| async move { n + 2 }).await;
            assert_eq!(mapped, success(22));

            let chained: Outcome<i32, &str> = success(4)
                .and_then_async(|n| async move { success(n * 10) })
                .await;
            assert_eq!(chained, success(40));

            let skipped: Outcome<i32, &str> = failure("stop")
                .and_then_async(|n: i32| async move { success(n) })
                .await;
            assert_eq!(skipped, failure("stop"));
        });
    }

    #[test]
    fn map_async_skips_the_callback_on_failure() {
        futures::executor::block_on(async {
            let ran = Cell::new(false);
            let out: Outcome<i32, &str> = failure("nope")
                .map_async(|n: i32| {
                    ran.set(true);
                    async move { n + 1 }
                })
                .await;
            assert_eq!(out, failure("nope"));
            assert!(!ran.get());
        });
    }

    #[test]
    fn tap_async_awaits_the_side_effect() {
        futures::executor::block_on(async {
            let seen = Cell::new(0);
            let out: Outcome<i32, &str> = success(7)
                .tap_async(|n| {
                    let n = *n;
                    let seen = &seen;
                    async move { seen.set(n) }
                })
                .await;
            assert_eq!(out, success(7));
            assert_eq!(seen.get(), 7);

            let skipped: Outcome<i32, &str> = failure("untapped")
                .tap_async(|n| {
                    let n = *n;
                    let seen = &seen;
                    async move { seen.set(n) }
                })
                .await;
            assert_eq!(skipped, failure("untapped"));
            assert_eq!(seen.get(), 7);
        });
    }
}
