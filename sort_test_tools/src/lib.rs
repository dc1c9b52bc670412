use std::cmp::Ordering;

/// A non-destructive sort under test. Every function borrows its input and returns the sorted
/// elements as a new `Vec`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    fn try_sort_by<T, E, F>(v: &[T], compare: F) -> Result<Vec<T>, E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Result<Ordering, E>;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
