//! Bubble sort as a pull-based iterator, yielding a snapshot after every swap.
//!
//! Performs exactly the comparisons and swaps of [`rust_bubble`](super::rust_bubble), so a
//! fully drained trace ends with the same permutation and the same counters.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::rust_bubble::SortStats;

/// Starts tracing a bubble sort of a copy of `data`.
///
/// Nothing is compared until the first call to [`Iterator::next`].
pub fn trace<T>(data: &[T], reverse: bool) -> SortTrace<T, impl FnMut(&T, &T) -> bool>
where
    T: Ord + Clone,
{
    // Under `reverse` the greater element counts as the lesser one.
    SortTrace::new(data.to_vec(), move |a: &T, b: &T| {
        if reverse {
            b.lt(a)
        } else {
            a.lt(b)
        }
    })
}

/// Like [`trace`], ordered by `compare`.
pub fn trace_by<T, F>(data: &[T], mut compare: F) -> SortTrace<T, impl FnMut(&T, &T) -> bool>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    SortTrace::new(data.to_vec(), move |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    })
}

/// Snapshot of the working sequence taken right after a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceStep<T> {
    pub state: Vec<T>,
    pub comparisons: u64,
    pub swaps: u64,
}

/// Terminal value of a trace that was driven to exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceResult<T> {
    pub sorted_data: Vec<T>,
    pub stats: SortStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning {
        pass: usize,
        index: usize,
        swapped: bool,
    },
    Done,
}

/// Lazily running bubble sort, see [`trace`] and [`trace_by`].
pub struct SortTrace<T, F> {
    v: Vec<T>,
    is_less: F,
    stats: SortStats,
    state: State,
}

impl<T, F> SortTrace<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    fn new(v: Vec<T>, is_less: F) -> Self {
        Self {
            v,
            is_less,
            stats: SortStats::default(),
            state: State::Scanning {
                pass: 0,
                index: 0,
                swapped: false,
            },
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Done
    }

    /// Returns the sorted sequence and final counters, or `None` if the trace was not drained.
    ///
    /// Dropping a partially consumed trace abandons the remaining passes.
    pub fn finish(self) -> Option<TraceResult<T>> {
        self.is_finished().then(|| TraceResult {
            sorted_data: self.v,
            stats: self.stats,
        })
    }

    /// Drains the remaining steps and returns the terminal value.
    pub fn run_to_end(mut self) -> TraceResult<T> {
        while self.advance() {}

        TraceResult {
            sorted_data: self.v,
            stats: self.stats,
        }
    }

    /// Runs the sort until the next swap or until it is done. Returns `true` if a swap happened.
    fn advance(&mut self) -> bool {
        let len = self.v.len();

        while let State::Scanning {
            pass,
            index,
            swapped,
        } = self.state
        {
            if pass >= len {
                self.state = State::Done;
                break;
            }

            // End of pass. The last `pass + 1` elements are final.
            if index + 1 + pass >= len {
                self.state = if swapped {
                    State::Scanning {
                        pass: pass + 1,
                        index: 0,
                        swapped: false,
                    }
                } else {
                    State::Done
                };
                continue;
            }

            self.stats.comparisons += 1;
            let is_swap = (self.is_less)(&self.v[index + 1], &self.v[index]);

            self.state = State::Scanning {
                pass,
                index: index + 1,
                swapped: swapped || is_swap,
            };

            if is_swap {
                self.v.swap(index, index + 1);
                self.stats.swaps += 1;
                return true;
            }
        }

        false
    }
}

impl<T, F> Iterator for SortTrace<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    type Item = TraceStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }

        Some(TraceStep {
            state: self.v.clone(),
            comparisons: self.stats.comparisons,
            swaps: self.stats.swaps,
        })
    }
}

impl<T, F> FusedIterator for SortTrace<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
}
