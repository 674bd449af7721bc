//! Bounded Heap
//!
//! A fixed-capacity binary min-heap ordered by a caller-supplied comparator.
//! It tracks the `capacity` greatest items offered so far: once full, a
//! candidate only gets in by being strictly greater than the current
//! minimum, which it then evicts.
//!
//! `std::collections::BinaryHeap` needs `T: Ord`; selection helpers take
//! arbitrary comparators, so the sift operations are done by hand.

use std::cmp::Ordering;

/// Fixed-capacity min-heap over a comparator
pub struct BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items: Vec<T>,
    capacity: usize,
    cmp: F,
    evictions: usize,
}

impl<T: Ord> BoundedHeap<T, fn(&T, &T) -> Ordering> {
    /// Create a heap ordered by `T`'s natural ordering
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, T::cmp)
    }
}

impl<T, F> BoundedHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Create a heap ordered by `cmp`
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of retained items
    /// * `cmp` - Comparator; the smallest item under it sits at the root
    ///
    /// Storage grows with the items offered, not with `capacity`, so a
    /// capacity far beyond the input length costs nothing.
    pub fn with_comparator(capacity: usize, cmp: F) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            cmp,
            evictions: 0,
        }
    }

    /// Offer a candidate to the heap
    ///
    /// # Arguments
    /// * `item` - Candidate
    ///
    /// # Returns
    /// `true` if the candidate was retained
    ///
    /// # Examples
    /// ```
    /// use infrastructure_selection::BoundedHeap;
    ///
    /// let mut heap = BoundedHeap::new(2);
    /// assert!(heap.offer(5));
    /// assert!(heap.offer(2));
    /// assert!(heap.offer(8));  // evicts 2
    /// assert!(!heap.offer(5)); // equal to the minimum, rejected
    /// assert_eq!(heap.into_sorted_vec(), vec![5, 8]);
    /// ```
    pub fn offer(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.items.len() < self.capacity {
            self.items.push(item);
            self.sift_up(self.items.len() - 1);
            return true;
        }
        if (self.cmp)(&item, &self.items[0]) == Ordering::Greater {
            self.items[0] = item;
            self.sift_down(0);
            self.evictions += 1;
            return true;
        }
        false
    }

    /// The smallest retained item
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Remove and return the smallest retained item
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of times a retained item was displaced by a greater candidate
    pub fn evictions(&self) -> usize {
        self.evictions
    }

    /// Consume the heap, returning items in internal (unspecified) order
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Consume the heap, returning items in pop order (ascending)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if (self.cmp)(&self.items[pos], &self.items[parent]) != Ordering::Less {
                break;
            }
            self.items.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && (self.cmp)(&self.items[right], &self.items[left]) == Ordering::Less {
                child = right;
            }
            if (self.cmp)(&self.items[child], &self.items[pos]) != Ordering::Less {
                break;
            }
            self.items.swap(pos, child);
            pos = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_heap_basic() {
        let mut heap = BoundedHeap::new(3);
        heap.offer(5);
        heap.offer(2);
        heap.offer(8);
        assert_eq!(heap.peek(), Some(&2));
        assert_eq!(heap.into_sorted_vec(), vec![2, 5, 8]);
    }

    #[test]
    fn test_bounded_heap_eviction() {
        let mut heap = BoundedHeap::new(3);
        for x in [5, 2, 8, 10] {
            heap.offer(x);
        }
        assert_eq!(heap.evictions(), 1);
        assert_eq!(heap.into_sorted_vec(), vec![5, 8, 10]);
    }

    #[test]
    fn test_bounded_heap_rejects_smaller() {
        let mut heap = BoundedHeap::new(3);
        for x in [5, 8, 10] {
            heap.offer(x);
        }
        assert!(!heap.offer(1));
        assert_eq!(heap.evictions(), 0);
        assert_eq!(heap.len(), 3);
        assert!(heap.is_full());
    }

    #[test]
    fn test_bounded_heap_huge_capacity_does_not_allocate_up_front() {
        let mut heap = BoundedHeap::new(usize::MAX);
        for x in [3, 1, 2] {
            assert!(heap.offer(x));
        }
        assert_eq!(heap.capacity(), usize::MAX);
        assert!(!heap.is_full());
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bounded_heap_capacity_bound() {
        let mut heap = BoundedHeap::new(5);
        for i in 0..100 {
            heap.offer(i);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.into_sorted_vec(), vec![95, 96, 97, 98, 99]);
    }

    #[test]
    fn test_bounded_heap_zero_capacity() {
        let mut heap = BoundedHeap::new(0);
        assert!(!heap.offer(1));
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_bounded_heap_reverse_comparator() {
        // Reversed ordering keeps the smallest items, root is the largest.
        let mut heap = BoundedHeap::with_comparator(2, |a: &i32, b: &i32| b.cmp(a));
        for x in [7, 3, 9, 1, 4] {
            heap.offer(x);
        }
        assert_eq!(heap.peek(), Some(&3));
        assert_eq!(heap.into_sorted_vec(), vec![3, 1]);
    }

    #[test]
    fn test_bounded_heap_pop_order() {
        let mut heap = BoundedHeap::new(10);
        for x in [4, 1, 7, 3, 9, 2, 8] {
            heap.offer(x);
        }
        let mut popped = Vec::new();
        while let Some(x) = heap.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![1, 2, 3, 4, 7, 8, 9]);
    }
}
