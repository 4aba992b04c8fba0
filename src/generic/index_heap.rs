/*!
A max heap over a subset of elements with fixed indices.

In other words, a heap backed by a vector of values indexed by `usize`, with a companion vector tracking the position of each index on the heap.
The backing vector stays constant as indices move on and off the heap, so the structure doubles as a store of values.

The [decision-order heap](crate::db::atom) is the motivating use: every atom has an activity, and any atom without a value is *active* on the heap so the most active such atom may be taken in constant time.

```rust
# use tern_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();
heap.expand_to(3);

heap.revalue(0, 1.0);
heap.revalue(2, 3.0);

heap.activate(0);
heap.activate(2);

assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), None);
```
*/

/// A max heap over a subset of elements with fixed indices.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index, whether active or not.
    values: Vec<V>,

    /// Active indices, in heap order.
    heap: Vec<usize>,

    /// The position of each index on the heap, if active.
    position: Vec<Option<usize>>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            heap: Vec::default(),
            position: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Grows the structure so indices up to (excluding) `count` may be used.
    pub fn expand_to(&mut self, count: usize) {
        while self.values.len() < count {
            self.values.push(V::default());
            self.position.push(None);
        }
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indices active on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is active on the heap.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// True if `index` is active on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position[index].is_some()
    }

    /// The active index stored at `heap_position` on the heap, without regard to heap order.
    ///
    /// Useful for sampling a uniformly random active index.
    pub fn active_entry(&self, heap_position: usize) -> usize {
        self.heap[heap_position]
    }

    /// The value of `index`.
    pub fn value_of(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value of `index` without adjusting the heap.
    ///
    /// If `index` may be active, call [reposition](IndexHeap::reposition) after.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Applies `f` to every value, active or not.
    ///
    /// The heap is left untouched, so `f` should preserve the relative order of values.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value);
        }
    }

    /// Activates `index` on the heap, if not already active.
    /// Returns true if the index was activated.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position[index] {
            Some(_) => false,
            None => {
                let heap_position = self.heap.len();
                self.heap.push(index);
                self.position[index] = Some(heap_position);
                self.sift_up(heap_position);
                true
            }
        }
    }

    /// Removes `index` from the heap, if active.
    /// Returns true if the index was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.position[index] {
            None => false,
            Some(heap_position) => {
                let last = self.heap.len() - 1;
                self.heap.swap(heap_position, last);
                self.position[self.heap[heap_position]] = Some(heap_position);
                self.heap.pop();
                self.position[index] = None;
                if heap_position < self.heap.len() {
                    self.sift_down(heap_position);
                    self.sift_up(heap_position);
                }
                true
            }
        }
    }

    /// Restores heap order around `index` after its value has changed, if active.
    pub fn reposition(&mut self, index: usize) {
        if let Some(heap_position) = self.position[index] {
            self.sift_up(heap_position);
            self.sift_down(heap_position);
        }
    }

    /// The active index with maximum value, if any.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index with maximum value, if any.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Clears the heap and activates exactly the given indices.
    pub fn rebuild(&mut self, active: impl Iterator<Item = usize>) {
        for &index in &self.heap {
            self.position[index] = None;
        }
        self.heap.clear();
        for index in active {
            self.position[index] = Some(self.heap.len());
            self.heap.push(index);
        }
        for heap_position in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_position);
        }
    }

    fn sift_up(&mut self, mut heap_position: usize) {
        while heap_position > 0 {
            let parent = (heap_position - 1) / 2;
            if self.values[self.heap[parent]] >= self.values[self.heap[heap_position]] {
                break;
            }
            self.swap_positions(heap_position, parent);
            heap_position = parent;
        }
    }

    fn sift_down(&mut self, mut heap_position: usize) {
        loop {
            let left = 2 * heap_position + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;

            let mut largest = heap_position;
            if self.values[self.heap[left]] > self.values[self.heap[largest]] {
                largest = left;
            }
            if right < self.heap.len() && self.values[self.heap[right]] > self.values[self.heap[largest]] {
                largest = right;
            }

            if largest == heap_position {
                break;
            }
            self.swap_positions(heap_position, largest);
            heap_position = largest;
        }
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }
}

#[cfg(test)]
mod heap_tests {
    use super::*;

    fn heap_from(pairs: &[(usize, i32)]) -> IndexHeap<i32> {
        let mut heap = IndexHeap::default();
        for &(index, value) in pairs {
            heap.expand_to(index + 1);
            heap.revalue(index, value);
            heap.activate(index);
        }
        heap
    }

    #[test]
    fn pops_in_order() {
        let mut heap = heap_from(&[(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)]);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(4));
        assert_eq!(heap.pop_max(), Some(5));
        assert_eq!(heap.pop_max(), Some(6));
        assert_eq!(heap.pop_max(), None);
    }

    #[test]
    fn reposition_after_revalue() {
        let mut heap = heap_from(&[(0, 0), (1, 10), (2, 20)]);

        heap.revalue(0, 30);
        heap.reposition(0);

        assert_eq!(heap.pop_max(), Some(0));
        assert_eq!(heap.pop_max(), Some(2));
    }

    #[test]
    fn removal() {
        let mut heap = heap_from(&[(0, 0), (1, 1), (2, 2), (3, 3)]);

        assert!(heap.remove(2));
        assert!(!heap.remove(2));

        assert_eq!(heap.pop_max(), Some(3));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), Some(0));
    }

    #[test]
    fn rebuilds() {
        let mut heap = heap_from(&[(0, 5), (1, 1), (2, 9), (3, 3)]);

        heap.rebuild([1, 3].into_iter());

        assert_eq!(heap.active_count(), 2);
        assert!(!heap.is_active(2));
        assert_eq!(heap.pop_max(), Some(3));
        assert_eq!(heap.pop_max(), Some(1));
        assert_eq!(heap.pop_max(), None);
    }
}
