//! Wrapping fallible computations into outcomes.
//!
//! Four entry points cover the sync/async and `Result`/plain-value matrix:
//! [`wrap`], [`wrap_value`], [`wrap_async`], and [`wrap_value_async`]. All
//! four uphold the same guarantee: nothing escapes the wrapper. `Err`
//! returns are normalized into failures, panics raised by the computation
//! are trapped and normalized too, and the wrapping call itself neither
//! panics nor returns early.
//!
//! The computation is asserted unwind-safe. A computation that panics after
//! mutating shared state it borrowed may leave that state torn; callers
//! sharing mutable state across a wrap boundary carry that risk themselves.

use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::FutureExt;
use log::debug;

use crate::fault::{normalize, Fault};
use crate::outcome::{failure, success, Outcome};

/// Run a fallible computation and capture the result as an outcome.
///
/// `Err` returns become failures via [`normalize`]; a panic inside the
/// computation is trapped and recorded as a [`CaughtPanic`] fault. The
/// original error always survives as the cause of the failure.
///
/// [`CaughtPanic`]: crate::CaughtPanic
///
/// # Examples
///
/// ```
/// use upshot::wrap;
///
/// let parsed = wrap(|| "17".parse::<i32>());
/// assert_eq!(parsed.value(), Some(17));
///
/// let broken = wrap(|| "seventeen".parse::<i32>());
/// assert!(broken.is_failure());
/// ```
pub fn wrap<T, E, F>(computation: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(Ok(value)) => success(value),
        Ok(Err(error)) => failure(normalize(error)),
        Err(payload) => failure(trapped(payload)),
    }
}

/// As [`wrap`], for computations that produce a plain value and can fail
/// only by panicking.
///
/// # Examples
///
/// ```
/// use upshot::wrap_value;
///
/// assert_eq!(wrap_value(|| 21 * 2).value(), Some(42));
///
/// let out = wrap_value(|| {
///     let empty: Vec<i32> = Vec::new();
///     empty[3]
/// });
/// assert!(out.is_failure());
/// ```
pub fn wrap_value<T, F>(computation: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(value) => success(value),
        Err(payload) => failure(trapped(payload)),
    }
}

/// Run an asynchronous fallible computation and capture the result as an
/// outcome.
///
/// The computation is invoked right away; the returned future resolves once
/// the inner future does. Three failure paths are all captured: a panic
/// while invoking the computation, a panic while polling its future, and an
/// `Err` resolution. The returned future itself always resolves to an
/// outcome.
///
/// # Examples
///
/// ```
/// use upshot::wrap_async;
///
/// futures::executor::block_on(async {
///     let ok = wrap_async(|| async { "5".parse::<u8>() }).await;
///     assert_eq!(ok.value(), Some(5));
///
///     let bad = wrap_async(|| async { "x".parse::<u8>() }).await;
///     assert!(bad.is_failure());
/// });
/// ```
pub async fn wrap_async<T, E, F, Fut>(computation: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    let fut = match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(fut) => fut,
        Err(payload) => return failure(trapped(payload)),
    };
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(value)) => success(value),
        Ok(Err(error)) => failure(normalize(error)),
        Err(payload) => failure(trapped(payload)),
    }
}

/// As [`wrap_async`], for futures that produce a plain value.
pub async fn wrap_value_async<T, F, Fut>(computation: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let fut = match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(fut) => fut,
        Err(payload) => return failure(trapped(payload)),
    };
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => success(value),
        Err(payload) => failure(trapped(payload)),
    }
}

fn trapped(payload: Box<dyn std::any::Any + Send>) -> Fault {
    let fault = Fault::from_panic(payload);
    debug!("trapped panic in wrapped computation: {}", fault);
    fault
}

/// Try-block sugar over [`wrap`]: evaluate a block that may use `?` and
/// capture the result as an outcome.
///
/// The block must evaluate to an [`anyhow::Result`], so `?` works on any
/// error convertible to [`anyhow::Error`].
///
/// # Examples
///
/// ```
/// use upshot::capture;
///
/// let out = capture!({
///     let n: i32 = "20".parse()?;
///     Ok(n + 1)
/// });
/// assert_eq!(out.value(), Some(21));
///
/// let out = capture!({
///     let n: i32 = "twenty".parse()?;
///     Ok(n + 1)
/// });
/// assert!(out.is_failure());
/// ```
#[macro_export]
macro_rules! capture {
    ($block:expr) => {
        $crate::wrap(|| -> ::anyhow::Result<_> { $block })
    };
}
