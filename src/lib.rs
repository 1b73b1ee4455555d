//! Array-backed binary max-heap with sift-down repair and in-place heap sort.

pub mod error;
pub mod heap;

pub use error::{HeapError, Result};
pub use heap::{heap_sort, is_max_heap, Heap};
