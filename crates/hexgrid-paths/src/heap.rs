//! Array-backed binary min-heap keyed by a separate score.
//!
//! Unlike [`std::collections::BinaryHeap`] the score only needs
//! [`PartialOrd`], so floating-point f-scores work directly. Items with
//! equal scores come out in no particular order.

/// A binary min-heap of `T` ordered by score `S`.
#[derive(Debug, Clone)]
pub struct MinHeap<T, S> {
    data: Vec<(S, T)>,
}

impl<T, S> Default for MinHeap<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> MinHeap<T, S> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create an empty heap with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove every entry, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, S: PartialOrd> MinHeap<T, S> {
    /// Insert `item` with `score`. O(log n).
    pub fn push(&mut self, item: T, score: S) {
        self.data.push((score, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the entry with the lowest score. O(log n).
    pub fn pop(&mut self) -> Option<(T, S)> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let (score, item) = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((item, score))
    }

    /// The entry with the lowest score, without removing it.
    pub fn peek(&self) -> Option<(&T, &S)> {
        self.data.first().map(|(s, t)| (t, s))
    }

    /// Drain the heap into a vector ordered by ascending score.
    pub fn into_sorted_vec(mut self) -> Vec<(T, S)> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(e) = self.pop() {
            out.push(e);
        }
        out
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[i].0 < self.data[parent].0 {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if l < n && self.data[l].0 < self.data[smallest].0 {
                smallest = l;
            }
            if r < n && self.data[r].0 < self.data[smallest].0 {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.data.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T, S: PartialOrd> Extend<(T, S)> for MinHeap<T, S> {
    fn extend<I: IntoIterator<Item = (T, S)>>(&mut self, iter: I) {
        for (item, score) in iter {
            self.push(item, score);
        }
    }
}

impl<T, S: PartialOrd> FromIterator<(T, S)> for MinHeap<T, S> {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn pops_in_ascending_order() {
        let mut heap = MinHeap::new();
        for (item, score) in [("c", 3.5), ("a", 1.0), ("d", 9.0), ("b", 2.25)] {
            heap.push(item, score);
        }
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.peek(), Some((&"a", &1.0)));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|(t, _)| t).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn duplicate_scores_are_all_returned() {
        let heap: MinHeap<u32, i32> = [(1, 5), (2, 5), (3, 1), (4, 5)].into_iter().collect();
        let sorted = heap.into_sorted_vec();
        assert_eq!(sorted.len(), 4);
        assert_eq!(sorted[0], (3, 1));
        assert!(sorted[1..].iter().all(|&(_, s)| s == 5));
    }

    #[test]
    fn matches_a_sort_under_interleaved_operations() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut heap = MinHeap::with_capacity(64);
        let mut shadow: Vec<i64> = Vec::new();
        for _ in 0..2000 {
            if rng.random_range(0..3) > 0 || shadow.is_empty() {
                let v = rng.random_range(-1000..1000);
                heap.push(v, v);
                shadow.push(v);
            } else {
                shadow.sort_unstable();
                let expected = shadow.remove(0);
                let (item, score) = heap.pop().unwrap();
                assert_eq!(score, expected);
                assert_eq!(item, expected);
            }
            assert_eq!(heap.len(), shadow.len());
        }
    }

    #[test]
    fn clear_keeps_heap_usable() {
        let mut heap = MinHeap::new();
        heap.push('x', 1);
        heap.clear();
        assert!(heap.is_empty());
        heap.push('y', 2);
        assert_eq!(heap.pop(), Some(('y', 2)));
    }
}
