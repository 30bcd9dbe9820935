//! Function-level utilities: composition and memoization
//!
//! [`compose`] chains same-typed transforms assembled at runtime, while
//! the [`compose!`](crate::compose) macro chains statically typed stages.
//! [`Memoized`] caches a function's results by argument value, with an
//! optional time-to-live on the monotonic clock.

pub mod compose;
pub mod memo;

pub use compose::{BoxedTransform, compose};
pub use memo::Memoized;
