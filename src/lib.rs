//! Merge-insertion sort, also known as the Ford-Johnson algorithm.
//!
//! A comparison sort that gets within reach of the information theoretic minimum number of
//! comparisons, `ceil(log2(n!))`, and for `n <= 11` and `20 <= n <= 21` reaches it. It is meant for
//! cases where a single comparison is expensive, eg. when it asks a human, runs a model or does a
//! network round trip, and trades wall-clock throughput for fewer comparator calls.
//!
//! All functions borrow the input and return a newly allocated result, the input is never
//! reordered. The sort is not stable, elements that compare equal may come out in any order.
//!
//! # Algorithm
//!
//! 1. Split the input into adjacent pairs plus an optional straggler, and order each pair with one
//!    comparison.
//! 2. Sort the pairs by their greater element, recursively with this same algorithm.
//! 3. The greater elements form the sorted main chain. The partner of the smallest one goes in
//!    front of it for free.
//! 4. Insert the remaining partners, followed by the straggler, with binary searches bounded by
//!    the group scheme described in [`groups`].

use std::cmp::Ordering;
use std::convert::Infallible;

mod chain;
pub mod groups;
mod insert;
mod pairs;

pub use groups::{InsertionGroup, InsertionGroups, MAX_GROUPS};

/// Sorts the slice into a new `Vec`, but might not preserve the order of equal elements.
///
/// Performs at most [`max_comparisons`]`(v.len())` comparisons.
///
/// # Examples
///
/// ```
/// let v = [6, 2, 4, 9];
///
/// let sorted = merge_insertion::sort(&v);
/// assert_eq!(sorted, [2, 4, 6, 9]);
/// assert_eq!(v, [6, 2, 4, 9]);
/// ```
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_by(v, T::cmp)
}

/// Sorts the slice into a new `Vec` with a comparator function, but might not preserve the order
/// of equal elements.
///
/// The comparator function should define a total ordering for the elements in the slice. If it
/// does not, the order of the elements in the result is unspecified, but the result still holds
/// every input element exactly once and the call terminates. If the comparator panics the panic
/// propagates and `v` is left as it was.
///
/// # Examples
///
/// ```
/// let animals = ["rhinoceros", "cat", "giraffe", "koala", "kangaroo"];
///
/// let by_len = merge_insertion::sort_by(&animals, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(by_len, ["cat", "koala", "giraffe", "kangaroo", "rhinoceros"]);
/// ```
pub fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_refs_by(v, compare).into_iter().cloned().collect()
}

/// Sorts the slice into a new `Vec` with a key extraction function, but might not preserve the
/// order of equal elements.
///
/// The key function is called twice per comparison.
pub fn sort_by_key<T, K, F>(v: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| f(a).cmp(&f(b)))
}

/// Like [`sort_by`] with a fallible comparator.
///
/// The first `Err` returned by `compare` aborts the sort and is returned as is. No comparisons are
/// made after it.
///
/// # Examples
///
/// ```
/// let v = ["3", "1", "x", "2"];
///
/// let res = merge_insertion::try_sort_by(&v, |a, b| {
///     Ok::<_, std::num::ParseIntError>(a.parse::<i32>()?.cmp(&b.parse::<i32>()?))
/// });
/// assert!(res.is_err());
///
/// let res = merge_insertion::try_sort_by(&v[..2], |a, b| {
///     Ok::<_, std::num::ParseIntError>(a.parse::<i32>()?.cmp(&b.parse::<i32>()?))
/// });
/// assert_eq!(res, Ok(vec!["1", "3"]));
/// ```
pub fn try_sort_by<T, E, F>(v: &[T], compare: F) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let ids = try_argsort_by(v, compare)?;

    Ok(ids.into_iter().map(|id| v[id].clone()).collect())
}

/// Sorts references to the elements of `v`, for element types that can't or shouldn't be cloned.
pub fn sort_refs_by<T, F>(v: &[T], compare: F) -> Vec<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    argsort_by(v, compare).into_iter().map(|id| &v[id]).collect()
}

/// Returns the permutation of indices that sorts `v`.
///
/// ```
/// let v = ['c', 'a', 'b'];
/// assert_eq!(merge_insertion::argsort_by(&v, |a, b| a.cmp(b)), [1, 2, 0]);
/// ```
pub fn argsort_by<T, F>(v: &[T], mut compare: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match try_argsort_by(v, |a, b| Ok::<_, Infallible>(compare(a, b))) {
        Ok(ids) => ids,
        Err(never) => match never {},
    }
}

/// Like [`argsort_by`] with a fallible comparator, see [`try_sort_by`].
pub fn try_argsort_by<T, E, F>(v: &[T], mut compare: F) -> Result<Vec<usize>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    merge_insertion((0..v.len()).collect(), &mut |a: usize, b: usize| {
        compare(&v[a], &v[b])
    })
}

/// Worst case number of comparisons needed to sort `len` elements, `sum(ceil(log2(3k / 4)))` for
/// `k` in `1..=len`.
///
/// ```
/// let table = (0..=11).map(merge_insertion::max_comparisons).collect::<Vec<_>>();
/// assert_eq!(table, [0, 0, 1, 3, 5, 7, 10, 13, 16, 19, 22, 26]);
/// ```
pub fn max_comparisons(len: usize) -> u64 {
    // ceil(log2(3k / 4)) == max(0, ceil(log2(3k)) - 2)
    (1..=len as u64)
        .map(|k| ceil_log2(3 * k).saturating_sub(2) as u64)
        .sum()
}

// --- IMPL ---

/// Sorts `ids`, the comparator looks up the elements the ids stand for.
///
/// Every recursion level works on ids into the same slice, which keeps the element type out of
/// the recursion.
fn merge_insertion<E, F>(ids: Vec<usize>, compare: &mut F) -> Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    if ids.len() <= 1 {
        return Ok(ids);
    }

    let (mut pairs, straggler) = pairs::split(&ids);
    pairs::normalize(&mut pairs, compare)?;

    let greater = pairs.iter().map(|pair| pair.greater).collect();
    let sorted_greater = merge_insertion(greater, compare)?;

    let chain::Chains { mut main, pend } = chain::assemble(&pairs, &sorted_greater, straggler);
    insert::insert_pend_chain(&mut main, &pend, compare)?;

    debug_assert_eq!(main.len(), ids.len());

    Ok(main)
}

fn ceil_log2(val: u64) -> u32 {
    if val <= 1 {
        0
    } else {
        u64::BITS - (val - 1).leading_zeros()
    }
}
