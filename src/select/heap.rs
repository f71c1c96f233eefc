// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A small binary heap with caller-supplied ordering.
//!
//! The ordering is a closure passed to each operation instead of an `Ord`
//! bound, because the selectors order items by search state that lives
//! outside the heap (blocked-color counts, degrees). There is deliberately
//! no decrease-key: when the underlying priorities change, callers rebuild
//! the whole heap. The active set is small relative to the total search
//! work, so the O(n) rebuild is a good simplicity trade-off.

/// Binary heap over `T`. `before(a, b)` must return true when `a` should
/// be extracted before `b`.
#[derive(Debug)]
pub struct Heap<T> {
    items: Vec<T>,
}

impl<T: Copy> Heap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert an item, restoring the heap property by sifting up.
    pub fn push(&mut self, item: T, before: impl Fn(&T, &T) -> bool) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1, &before);
    }

    /// Remove and return the highest-priority item.
    pub fn pop(&mut self, before: impl Fn(&T, &T) -> bool) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0, &before);
        }
        top
    }

    /// Re-establish the heap property over all items (Floyd heapify).
    ///
    /// Used after external state changes invalidate the ordering.
    pub fn rebuild(&mut self, before: impl Fn(&T, &T) -> bool) {
        for i in (0..self.items.len() / 2).rev() {
            self.sift_down(i, &before);
        }
    }

    fn sift_up(&mut self, mut idx: usize, before: &impl Fn(&T, &T) -> bool) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !before(&self.items[idx], &self.items[parent]) {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize, before: &impl Fn(&T, &T) -> bool) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let mut best = left;
            let right = left + 1;
            if right < len && before(&self.items[right], &self.items[left]) {
                best = right;
            }
            if !before(&self.items[best], &self.items[idx]) {
                break;
            }
            self.items.swap(idx, best);
            idx = best;
        }
    }
}
