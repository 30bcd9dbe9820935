//! Function composition, rightmost first.
//!
//! Two flavors are provided. [`compose`] folds a runtime list of boxed
//! transforms over a single type, useful when the pipeline is assembled
//! dynamically. The [`compose!`](crate::compose) macro builds a statically
//! typed chain whose stages may change type from step to step.

use crate::error::SundryError;
use anyhow::Result;

/// A boxed single-type transform, the element type accepted by [`compose`].
pub type BoxedTransform<T> = Box<dyn Fn(T) -> T>;

/// Composes a runtime list of transforms into one function.
///
/// The rightmost function runs first, mirroring mathematical composition:
/// `compose(vec![f, g, h])` behaves as `f(g(h(input)))`. All stages share
/// one type `T`, which is what makes a runtime-sized list possible.
///
/// # Errors
///
/// Returns [`SundryError::EmptyCompose`] for an empty list. An empty
/// composition is rejected rather than treated as identity so that a
/// pipeline accidentally assembled with no stages fails loudly.
///
/// # Examples
///
/// ```rust
/// use sundry::func::{BoxedTransform, compose};
///
/// let stages: Vec<BoxedTransform<i32>> = vec![
///     Box::new(|x| x * 2),
///     Box::new(|x| x + 1),
/// ];
/// let double_after_increment = compose(stages)?;
///
/// // Rightmost first: (3 + 1) * 2
/// assert_eq!(double_after_increment(3), 8);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn compose<T>(funcs: Vec<BoxedTransform<T>>) -> Result<impl Fn(T) -> T> {
    if funcs.is_empty() {
        return Err(SundryError::EmptyCompose.into());
    }

    Ok(move |input: T| funcs.iter().rev().fold(input, |value, func| func(value)))
}

/// Composes functions right to left into a single closure.
///
/// Unlike [`compose`](crate::func::compose), the stages may each have a
/// different input and output type; the only requirement is that adjacent
/// stages line up. Invoking the macro with no arguments does not compile,
/// the static counterpart of the empty-list error on the runtime version.
///
/// # Examples
///
/// ```rust
/// let describe = sundry::compose!(
///     |n: i32| format!("result={n}"),
///     |n: i32| n * 2,
///     |n: i32| n + 1,
/// );
///
/// // Rightmost first: format(double(increment(3)))
/// assert_eq!(describe(3), "result=8");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => { $f };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        move |value| ($f)($crate::compose!($($rest),+)(value))
    };
}
