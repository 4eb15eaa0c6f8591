use crate::errors::HeapError;

use std::{cmp::Ordering, fmt, num::NonZeroUsize, slice};
use serde::{Deserialize, Serialize};


/// Orders heap elements
/// The element that compares `Less` than every other element sits at the root
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural ordering, smallest element first (min-heap)
#[derive(Clone, Copy, Debug, Default)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed natural ordering, largest element first (max-heap)
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}


/// How the backing storage grows once it is full
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Growth {
    #[default]
    Double,
    Fixed(NonZeroUsize), // grow by a fixed number of slots, useful when memory is tight
}


/// Array-backed binary heap ordered by an injected comparator
///
/// The comparator is consulted on every internal comparison, so it may read
/// priorities that live outside the heap. The heap does not notice when such a
/// priority changes: callers that mutate it must call [`Heap::refresh`] for the
/// affected element, otherwise the heap order is only guaranteed for elements
/// whose priority stayed fixed since insertion.
///
/// Elements that compare `Equal` come out in no particular order.
pub struct Heap<T, C = MinFirst> {
    data: Vec<T>,
    comparator: C,
    growth: Growth,
    initial_capacity: usize,
}

impl<T: Ord> Heap<T, MinFirst> {

    /// Min-heap over the natural ordering of `T`
    pub fn new() -> Self {
        Self::with_comparator(MinFirst)
    }
}

impl<T: Ord> Default for Heap<T, MinFirst> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {

    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            comparator,
            growth: Growth::Double,
            initial_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Create an empty heap with room for `capacity` elements
    /// A zero capacity is rejected
    pub fn with_capacity(capacity: usize, comparator: C) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            comparator,
            growth: Growth::Double,
            initial_capacity: capacity,
        })
    }

    /// Build a heap out of an unordered list in O(n)
    pub fn from_vec(items: Vec<T>, comparator: C) -> Self {
        let initial_capacity = items.len().max(1);
        let mut heap = Self {
            data: items,
            comparator,
            growth: Growth::Double,
            initial_capacity,
        };
        heap.rebuild();
        heap
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

    pub fn growth(&self) -> Growth {
        self.growth
    }

    pub fn set_growth(&mut self, growth: Growth) {
        self.growth = growth;
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Elements in storage order (not priority order)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Append the item and restore the heap property upwards
    pub fn insert(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            self.grow();
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Root element without removing it
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Remove and return the root element
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        // last element takes the root slot
        let root = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(root)
    }

    /// Remove the first element that compares `Equal` to `item`
    /// Returns false when there is no such element
    pub fn remove(&mut self, item: &T) -> bool {
        match self.position(|other| self.comparator.compare(item, other) == Ordering::Equal) {
            Some(index) => {
                self.data.swap_remove(index);
                self.restore(index);
                true
            }
            None => false,
        }
    }

    /// True if an element compares `Equal` to `item`
    pub fn contains(&self, item: &T) -> bool {
        self.position(|other| self.comparator.compare(item, other) == Ordering::Equal).is_some()
    }

    /// Re-sift the element equal (by identity, not priority) to `item`
    /// Call this after the priority the comparator reads for `item` has changed
    pub fn refresh(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.data.iter().position(|other| other == item) {
            Some(index) => {
                self.restore(index);
                true
            }
            None => false,
        }
    }

    /// Drop every element and go back to the initial capacity
    pub fn clear(&mut self) {
        self.data = Vec::with_capacity(self.initial_capacity);
    }

    /// Set the storage capacity
    /// Refuses to go below the number of live elements
    pub fn resize(&mut self, capacity: usize) -> Result<(), HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity(capacity));
        }
        if capacity < self.data.len() {
            return Err(HeapError::CapacityBelowLength { capacity, len: self.data.len() });
        }
        if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        Ok(())
    }

    fn grow(&mut self) {
        let additional = match self.growth {
            Growth::Double => self.data.capacity().max(1),
            Growth::Fixed(step) => step.get(),
        };
        self.data.reserve_exact(additional);
    }

    fn position<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.data.iter().position(predicate)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    // Sift the element at `index` whichever way it needs to go
    fn restore(&mut self, index: usize) {
        if index < self.data.len() && self.sift_up(index) == index {
            self.sift_down(index);
        }
    }

    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `pos` towards the root, returns where it stopped
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;

            if left < len && self.less(left, best) {
                best = left;
            }
            if right < len && self.less(right, best) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.data.swap(pos, best);
            pos = best;
        }
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend_from_slice(&self.data);
        Self {
            data,
            comparator: self.comparator.clone(),
            growth: self.growth,
            initial_capacity: self.initial_capacity,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("data", &self.data)
            .field("growth", &self.growth)
            .finish_non_exhaustive()
    }
}
