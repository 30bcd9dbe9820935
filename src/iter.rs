//! Iterator adapters for grouping and order-preserving deduplication.
//!
//! All adapters here are lazy: they pull from the source iterator only as
//! the caller consumes them, so they compose with unbounded or expensive
//! sources. Grouping sizes are validated up front, before any element is
//! drawn.

use crate::error::SundryError;
use anyhow::Result;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Splits an iterable into non-overlapping groups of `size` elements.
///
/// Every group is full except possibly the last, which holds whatever
/// remains. An empty input yields no groups at all.
///
/// # Errors
///
/// Returns [`SundryError::InvalidSize`] when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use sundry::iter::chunked;
///
/// let groups: Vec<Vec<i32>> = chunked(0..7, 3)?.collect();
/// assert_eq!(groups, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn chunked<I>(iterable: I, size: usize) -> Result<Chunked<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(SundryError::InvalidSize {
            operation: "chunked".to_string(),
        }
        .into());
    }

    Ok(Chunked {
        iter: iterable.into_iter(),
        size,
    })
}

/// Lazy iterator of non-overlapping groups, created by [`chunked`].
pub struct Chunked<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // Preallocation is capped by what the source can still deliver;
        // the group size itself may be arbitrarily large.
        let (_, upper) = self.iter.size_hint();
        let mut chunk = Vec::with_capacity(self.size.min(upper.unwrap_or(0)));
        while chunk.len() < self.size {
            match self.iter.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }

        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Slides a window of `size` elements across an iterable, one step at a time.
///
/// Each yielded window is a fresh `Vec` of the current `size` consecutive
/// elements. An input shorter than `size` yields no windows. Elements must
/// be `Clone` because consecutive windows share all but one element.
///
/// # Errors
///
/// Returns [`SundryError::InvalidSize`] when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use sundry::iter::windowed;
///
/// let windows: Vec<Vec<i32>> = windowed(1..=4, 2)?.collect();
/// assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn windowed<I>(iterable: I, size: usize) -> Result<Windowed<I::IntoIter>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(SundryError::InvalidSize {
            operation: "windowed".to_string(),
        }
        .into());
    }

    let iter = iterable.into_iter();

    // Same capping as in `Chunked::next`: a window size far beyond the
    // source length must not turn into an allocation of that size.
    let (_, upper) = iter.size_hint();
    let window = VecDeque::with_capacity(size.min(upper.unwrap_or(0)));

    Ok(Windowed { iter, size, window })
}

/// Lazy sliding-window iterator, created by [`windowed`].
pub struct Windowed<I: Iterator> {
    iter: I,
    size: usize,
    window: VecDeque<I::Item>,
}

impl<I> Iterator for Windowed<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.window.len() < self.size {
            match self.iter.next() {
                Some(item) => self.window.push_back(item),
                None => return None,
            }
        }

        let out: Vec<I::Item> = self.window.iter().cloned().collect();
        self.window.pop_front();
        Some(out)
    }
}

/// Filters an iterable down to first occurrences, preserving order.
///
/// Every element ever seen is remembered, so duplicates are dropped no
/// matter how far apart they appear. Memory grows with the number of
/// distinct elements.
///
/// # Examples
///
/// ```rust
/// use sundry::iter::unique_everseen;
///
/// let first_seen: Vec<i32> = unique_everseen(vec![1, 2, 1, 3, 2, 4]).collect();
/// assert_eq!(first_seen, vec![1, 2, 3, 4]);
/// ```
pub fn unique_everseen<I>(iterable: I) -> UniqueEverseen<I::IntoIter>
where
    I: IntoIterator,
{
    UniqueEverseen {
        iter: iterable.into_iter(),
        seen: HashSet::new(),
    }
}

/// Lazy first-occurrence filter, created by [`unique_everseen`].
pub struct UniqueEverseen<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for UniqueEverseen<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}
