use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

sort_impl!("rust_bubble_instrumented");

/// Sorts the slice in place.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and *O*(*n*^2)
/// worst-case. Already sorted input is detected after a single pass, making that case *O*(*n*).
///
/// # Current implementation
///
/// Classic adjacent-pair [bubble sort](https://en.wikipedia.org/wiki/Bubble_sort). Every pass
/// bubbles the largest remaining element to the end of the unsorted prefix. A pass without any
/// swap ends the sort early.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort(arr, &mut |a: &T, b: &T| a.lt(b));
}

/// Sorts the slice in place with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original
/// elements remain in the slice.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(arr, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Sorts a copy of `data` and reports how much work that took.
///
/// `reverse` selects descending order. `data` itself is left untouched.
pub fn sort_instrumented<T>(data: &[T], reverse: bool) -> SortResult<T>
where
    T: Ord + Clone,
{
    if reverse {
        sort_instrumented_by(data, |a, b| b.cmp(a))
    } else {
        sort_instrumented_by(data, |a, b| a.cmp(b))
    }
}

/// Like [`sort_instrumented`], ordered by `compare`.
///
/// One comparison is counted per call of `compare`.
pub fn sort_instrumented_by<T, F>(data: &[T], mut compare: F) -> SortResult<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted_data = data.to_vec();

    let start = Instant::now();
    let stats = bubble_sort(&mut sorted_data, &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
    let elapsed = start.elapsed();

    SortResult {
        sorted_data,
        stats,
        elapsed,
    }
}

/// Work counters of one sort invocation.
///
/// `comparisons >= swaps` always holds, every swap is preceded by the comparison that
/// triggered it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Outcome of [`sort_instrumented`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortResult<T> {
    sorted_data: Vec<T>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    stats: SortStats,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "time_elapsed", serialize_with = "serialize_secs")
    )]
    elapsed: Duration,
}

impl<T> SortResult<T> {
    pub fn sorted_data(&self) -> &[T] {
        &self.sorted_data
    }

    pub fn into_sorted_data(self) -> Vec<T> {
        self.sorted_data
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    pub fn comparisons(&self) -> u64 {
        self.stats.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.stats.swaps
    }

    /// Wall-clock time of the sort loop, excluding the copy of the input.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn time_elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl<T: fmt::Debug> fmt::Display for SortResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sort finished:")?;
        writeln!(f, "  data: {:?}", self.sorted_data)?;
        writeln!(f, "  comparisons: {}", self.stats.comparisons)?;
        writeln!(f, "  swaps: {}", self.stats.swaps)?;
        write!(f, "  elapsed: {:.6}s", self.time_elapsed_secs())
    }
}

#[cfg(feature = "serde")]
fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Bubble sorts `v` and returns the number of comparisons and swaps performed.
///
/// A pair is swapped only if `is_less(right, left)`, so equal elements never move past each
/// other.
fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F) -> SortStats
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut stats = SortStats::default();

    for i in 0..len {
        let mut swapped = false;

        // After pass `i` the last `i + 1` elements are in their final position.
        for j in 0..(len - 1 - i) {
            stats.comparisons += 1;

            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    stats
}
