use std::cmp::Ordering;

pub mod patterns;
pub mod tests;

// Re-exported so `instantiate_sort_tests!` works without the caller depending on paste.
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}
