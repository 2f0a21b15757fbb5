#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod catch;
pub mod fault;
pub mod matching;
pub mod outcome;

pub use crate::catch::{wrap, wrap_async, wrap_value, wrap_value_async};
pub use crate::fault::{normalize, CaughtPanic, Fault};
pub use crate::matching::Handlers;
pub use crate::outcome::{failure, success, Outcome};
