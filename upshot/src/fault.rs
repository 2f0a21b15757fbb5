//! Normalized error payloads for the failure side of an [`Outcome`].
//!
//! Every error captured by the wrapping functions in [`crate::catch`] passes
//! through [`normalize`] before it is stored, so a [`Fault`] holding an
//! un-normalized payload cannot be constructed. Normalization never discards
//! the original error: it survives as the cause and can be recovered through
//! [`Fault::downcast_ref`] or inspected via [`Fault::chain`].
//!
//! [`Outcome`]: crate::Outcome

use std::any::Any;
use std::fmt;

/// A normalized error carried by the failure variant of an outcome.
///
/// `Fault` is a newtype over [`anyhow::Error`] whose only public
/// constructors are [`normalize`], [`Fault::msg`], and [`Fault::from_panic`].
/// Like `anyhow::Error` itself, `Fault` does not implement
/// [`std::error::Error`]; it converts into `anyhow::Error` losslessly
/// instead.
///
/// # Examples
///
/// ```
/// use upshot::normalize;
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
/// let fault = normalize(io);
/// assert_eq!(fault.to_string(), "gone");
/// assert!(fault.downcast_ref::<std::io::Error>().is_some());
/// ```
pub struct Fault(anyhow::Error);

/// Normalize an arbitrary error into a [`Fault`].
///
/// Accepts any [`std::error::Error`] that is `Send + Sync + 'static`, a bare
/// [`anyhow::Error`], or an existing [`Fault`]. Normalization is idempotent:
/// feeding a `Fault` back in hands back a fault wrapping the same underlying
/// error, never a double-wrapped one.
///
/// # Examples
///
/// ```
/// use upshot::normalize;
///
/// let first = normalize(std::io::Error::other("boom"));
/// let again = normalize(first);
/// assert_eq!(again.to_string(), "boom");
/// assert!(again.downcast_ref::<std::io::Error>().is_some());
/// ```
pub fn normalize<E>(source: E) -> Fault
where
    E: Into<anyhow::Error>,
{
    Fault(source.into())
}

impl Fault {
    /// Build a fault from a bare message, for failures that never were a
    /// typed error.
    ///
    /// # Examples
    ///
    /// ```
    /// use upshot::Fault;
    ///
    /// let fault = Fault::msg("config file is empty");
    /// assert_eq!(fault.to_string(), "config file is empty");
    /// ```
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Fault(anyhow::Error::msg(message))
    }

    /// Convert a panic payload, as produced by [`std::panic::catch_unwind`],
    /// into a fault whose cause is a [`CaughtPanic`].
    ///
    /// `String` and `&str` payloads keep their message text. Payloads of any
    /// other type carry no portable description, so they are recorded as
    /// opaque.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(text) => *text,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(text) => (*text).to_owned(),
                Err(_) => String::from("opaque panic payload"),
            },
        };
        normalize(CaughtPanic { message })
    }

    /// A reference to the underlying error, if it has type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Iterator over the cause chain, outermost error first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
        self.0.chain()
    }

    /// The lowest-level cause of this fault.
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        self.0.root_cause()
    }

    /// Unwrap into the underlying [`anyhow::Error`].
    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl From<Fault> for anyhow::Error {
    fn from(fault: Fault) -> Self {
        fault.0
    }
}

/// The error recorded when a wrapped computation panicked instead of
/// returning.
#[derive(Debug, thiserror::Error)]
#[error("caught panic: {message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// The panic message, when the payload carried one.
    pub fn message(&self) -> &str {
        &self.message
    }
}
