//! # Growable Buffer
//!
//! An owned, contiguous array with an explicit logical capacity that doubles when full.
//!
//! `Vec` already amortizes growth, but it is free to over-allocate. The catalog and the
//! order item list promise a specific policy (start at a fixed capacity, double on the
//! insert that finds the buffer full, shrink back to the starting capacity on reset), so
//! the buffer tracks that capacity itself and only asks the allocator for exactly that much.
//!
//! Storage is reserved on the first push after construction or reset, never up front, so
//! every allocation goes through `try_reserve_exact` and a failure surfaces as
//! [`FrameworkError::AllocationFailed`] instead of an abort.

use super::core::{short_type_name, Entity, FrameworkError};
use tracing::{debug, warn};

/// Owned array with doubling growth and order-preserving removal.
///
/// `Clone` performs a deep copy: the clone owns an independent backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    initial_capacity: usize,
}

impl<T> GrowableBuffer<T> {
    /// Creates an empty buffer holding up to `capacity` items before the first resize.
    ///
    /// Nothing is allocated until the first push.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            initial_capacity: capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity. Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity the buffer was constructed with; `reset` returns to it.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Appends `item`, doubling the capacity first when the buffer is full.
    ///
    /// # Errors
    /// Returns [`FrameworkError::AllocationFailed`] if the larger store cannot be
    /// allocated. The buffer is left exactly as it was.
    pub fn push(&mut self, item: T) -> Result<(), FrameworkError> {
        if self.items.len() == self.capacity {
            self.grow()?;
        } else {
            self.reserve(self.capacity)?;
        }
        self.items.push(item);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), FrameworkError> {
        let requested = match self.capacity {
            0 => 1,
            current => current.checked_mul(2).unwrap_or(usize::MAX),
        };
        if requested == self.capacity {
            return Err(self.allocation_failed(requested));
        }
        self.reserve(requested)?;
        debug!(
            entity_type = short_type_name::<T>(),
            from = self.capacity,
            to = requested,
            "Resized"
        );
        self.capacity = requested;
        Ok(())
    }

    /// Makes the backing store hold at least `target` items.
    fn reserve(&mut self, target: usize) -> Result<(), FrameworkError> {
        if self.items.capacity() >= target {
            return Ok(());
        }
        let additional = target - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| self.allocation_failed(target))
    }

    fn allocation_failed(&self, requested: usize) -> FrameworkError {
        warn!(
            entity_type = short_type_name::<T>(),
            requested, "Memory allocation failed"
        );
        FrameworkError::AllocationFailed { requested }
    }

    /// Removes the element at `index`, shifting every later element one slot left.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every element and returns to the constructed capacity.
    pub fn reset(&mut self) {
        self.items = Vec::new();
        self.capacity = self.initial_capacity;
    }
}

impl<T: Entity> GrowableBuffer<T> {
    /// Index of the first element whose id equals `id` (linear scan).
    pub fn position_by_id(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// First element whose id equals `id`.
    pub fn find_by_id(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Removes the first element whose id equals `id`, preserving the order of the rest.
    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        let index = self.position_by_id(id)?;
        self.remove(index)
    }
}

impl<T> Default for GrowableBuffer<T> {
    fn default() -> Self {
        Self::with_capacity(crate::model::DEFAULT_CAPACITY)
    }
}

impl<'a, T> IntoIterator for &'a GrowableBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: i32,
        label: &'static str,
    }

    impl Entity for Dish {
        type Id = i32;

        fn id(&self) -> i32 {
            self.id
        }
    }

    fn dish(id: i32, label: &'static str) -> Dish {
        Dish { id, label }
    }

    #[test]
    fn test_capacity_doubles_only_when_full() {
        let mut buffer = GrowableBuffer::with_capacity(2);
        buffer.push(dish(1, "a")).unwrap();
        buffer.push(dish(2, "b")).unwrap();
        assert_eq!(buffer.capacity(), 2);

        buffer.push(dish(3, "c")).unwrap();
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.len(), 3);

        buffer.push(dish(4, "d")).unwrap();
        assert_eq!(buffer.capacity(), 4);
        buffer.push(dish(5, "e")).unwrap();
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn test_zero_capacity_grows_to_one() {
        let mut buffer = GrowableBuffer::with_capacity(0);
        buffer.push(dish(1, "a")).unwrap();
        assert_eq!(buffer.capacity(), 1);
        buffer.push(dish(2, "b")).unwrap();
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn test_remove_shifts_left_preserving_order() {
        let mut buffer = GrowableBuffer::with_capacity(4);
        for (id, label) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
            buffer.push(dish(id, label)).unwrap();
        }

        let removed = buffer.remove_by_id(2).unwrap();
        assert_eq!(removed.label, "b");

        let labels: Vec<_> = buffer.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["a", "c", "d"]);
        assert_eq!(buffer.capacity(), 4);
    }

    #[test]
    fn test_remove_by_id_takes_first_match_only() {
        let mut buffer = GrowableBuffer::with_capacity(4);
        buffer.push(dish(7, "first")).unwrap();
        buffer.push(dish(7, "second")).unwrap();

        assert_eq!(buffer.remove_by_id(7).unwrap().label, "first");
        assert_eq!(buffer.find_by_id(7).unwrap().label, "second");
        assert!(buffer.remove_by_id(99).is_none());
    }

    #[test]
    fn test_reset_restores_initial_capacity() {
        let mut buffer = GrowableBuffer::with_capacity(1);
        for id in 0..5 {
            buffer.push(dish(id, "x")).unwrap();
        }
        assert_eq!(buffer.capacity(), 8);

        buffer.reset();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.initial_capacity(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = GrowableBuffer::with_capacity(2);
        original.push(dish(1, "a")).unwrap();

        let mut copy = original.clone();
        copy.push(dish(2, "b")).unwrap();
        copy.push(dish(3, "c")).unwrap();

        assert_eq!(original.len(), 1);
        assert_eq!(original.capacity(), 2);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.capacity(), 4);
    }

    #[test]
    fn test_oversized_capacity_fails_on_push_instead_of_aborting() {
        let mut buffer: GrowableBuffer<Dish> = GrowableBuffer::with_capacity(usize::MAX);
        assert_eq!(buffer.capacity(), usize::MAX);

        assert_eq!(
            buffer.push(dish(1, "a")),
            Err(FrameworkError::AllocationFailed { requested: usize::MAX })
        );
        assert!(buffer.is_empty());

        buffer.reset();
        assert_eq!(buffer.capacity(), usize::MAX);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut buffer: GrowableBuffer<Dish> = GrowableBuffer::with_capacity(2);
        assert!(buffer.get(0).is_none());
        assert!(buffer.remove(0).is_none());
        assert!(buffer.last().is_none());
    }
}
