// Adjacent-swap bubble sort with early exit, returns the sorted copy and its statistics.
pub mod rust_bubble;

// The same algorithm as a pull-based iterator, one step per swap.
pub mod rust_bubble_trace;

pub use rust_bubble::{SortResult, SortStats};
pub use rust_bubble_trace::{SortTrace, TraceResult, TraceStep};
