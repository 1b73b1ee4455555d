use tracing::{debug, trace};

use crate::error::{HeapError, Result};

// Indices in a heap, 0-based
//           0
//     1            2
//  3     4      5     6
//
// parent = (child - 1) / 2, left = 2 * parent + 1, right = 2 * parent + 2

fn parent(index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    (index - 1) >> 1
}

fn left(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(1)
}

fn right(index: usize) -> usize {
    index.saturating_mul(2).saturating_add(2)
}

/// Binary max-heap packed into a `Vec`.
///
/// The heap property only holds after [`Heap::max_heapify_all`]; a heap built
/// with [`Heap::new`] keeps the caller's order until then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Heap<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the root, which is the maximum once the heap is heapified.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Index of the parent of `index`. The root is its own parent.
    pub fn parent(index: usize) -> usize {
        parent(index)
    }

    /// Index of the left child of `index`. May lie past the end of the heap.
    pub fn left(index: usize) -> usize {
        left(index)
    }

    /// Index of the right child of `index`. May lie past the end of the heap.
    pub fn right(index: usize) -> usize {
        right(index)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(HeapError::OutOfBounds {
            index,
            len: self.data.len(),
        })
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for the first invalid index; the heap is left
    /// unchanged.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.data.len();
        if let Some(index) = [i, j].into_iter().find(|&index| index >= len) {
            debug!(i, j, len, "rejected out of bounds swap");
            return Err(HeapError::OutOfBounds { index, len });
        }
        self.data.swap(i, j);
        Ok(())
    }

    pub fn is_max_heap(&self) -> bool {
        is_max_heap(&self.data)
    }

    /// Sifts the element at `index` down until the subtree rooted there is a
    /// max-heap. Both child subtrees must already be max-heaps.
    ///
    /// Out of range indices are ignored.
    pub fn max_heapify(&mut self, index: usize) {
        let end = self.data.len();
        sift_down(&mut self.data, index, end);
    }

    /// Rearranges the whole heap so that the max-heap property holds.
    pub fn max_heapify_all(&mut self) {
        trace!(len = self.data.len(), "building max-heap");
        build_max_heap(&mut self.data);
    }

    /// Sorts the elements in ascending order. The heap property is lost.
    pub fn sort(&mut self) {
        heap_sort(&mut self.data);
    }

    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.sort();
        self.data
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Checks that no element is greater than its parent.
pub fn is_max_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|i| data[i] <= data[parent(i)])
}

/// Sorts `data` in ascending order in place.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    debug!(len, "heap sort");
    build_max_heap(data);
    // data[..end] is a max-heap, data[end..] is sorted
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

fn build_max_heap<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for i in (0..len / 2).rev() {
        sift_down(data, i, len);
    }
}

// Only data[..end] is treated as the heap.
fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) {
    let end = end.min(data.len());
    let mut i = start;
    while i < end {
        let mut largest = i;
        let l = left(i);
        if l < end && data[l] > data[largest] {
            largest = l;
        }
        let r = right(i);
        if r < end && data[r] > data[largest] {
            largest = r;
        }
        if largest == i {
            return;
        }
        data.swap(largest, i);
        i = largest;
    }
}
