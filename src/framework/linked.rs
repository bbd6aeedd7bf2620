//! # Singly-Linked Containers
//!
//! Two linked structures back the order lifecycle:
//!
//! - [`LinkedQueue`]: FIFO with O(1) insert at the tail and O(1) removal at the head.
//!   Nodes live in an index arena so the tail can be reached without aliasing pointers.
//! - [`LinkedStack`]: LIFO built from boxed nodes. Only the top is ever mutated, so plain
//!   ownership is enough.
//!
//! Neither container caches its length; `len()` walks the links.

use super::core::{short_type_name, Entity, FrameworkError};
use tracing::warn;

// =============================================================================
// 1. ARENA-INDEXED FIFO
// =============================================================================

type NodeIndex = usize;

#[derive(Debug, Clone)]
struct QueueNode<T> {
    value: T,
    next: Option<NodeIndex>,
}

/// Singly-linked FIFO whose nodes are stored in a slot arena.
///
/// # Invariants
/// - `head.is_none() == tail.is_none()`
/// - following `next` from `head` reaches `tail`, and `tail.next` is `None`
/// - vacated slots are recorded in `free` and reused before the arena grows
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    slots: Vec<Option<QueueNode<T>>>,
    free: Vec<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// O(1): the queue is empty exactly when there is no head.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of linked nodes, counted by traversal.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    fn alloc(&mut self, value: T) -> Result<NodeIndex, FrameworkError> {
        let node = QueueNode { value, next: None };
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            return Ok(index);
        }
        if self.slots.try_reserve(1).is_err() {
            let requested = self.slots.len() + 1;
            warn!(
                entity_type = short_type_name::<T>(),
                requested, "Memory allocation failed"
            );
            return Err(FrameworkError::AllocationFailed { requested });
        }
        self.slots.push(Some(node));
        Ok(self.slots.len() - 1)
    }

    fn release(&mut self, index: NodeIndex) -> Option<QueueNode<T>> {
        let node = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        Some(node)
    }

    fn node(&self, index: NodeIndex) -> Option<&QueueNode<T>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, index: NodeIndex) -> Option<&mut QueueNode<T>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Appends `value` after the current tail.
    ///
    /// # Errors
    /// Returns [`FrameworkError::AllocationFailed`] if no node slot can be allocated;
    /// the queue is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), FrameworkError> {
        let index = self.alloc(value)?;
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        Ok(())
    }

    /// Unlinks and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.release(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.node(index)).map(|node| &node.value)
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            cursor: self.head,
        }
    }

    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Unlinks the first node matching `predicate`, repairing `tail` when it was last.
    pub fn remove_first(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let mut previous: Option<NodeIndex> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.node(index)?;
            let next = node.next;
            if predicate(&node.value) {
                match previous {
                    Some(prev) => {
                        if let Some(prev_node) = self.node_mut(prev) {
                            prev_node.next = next;
                        }
                    }
                    None => self.head = next,
                }
                if next.is_none() {
                    self.tail = previous;
                }
                return self.release(index).map(|node| node.value);
            }
            previous = Some(index);
            cursor = next;
        }
        None
    }
}

impl<T: Entity> LinkedQueue<T> {
    /// Unlinks the first value whose id equals `id`.
    pub fn remove_by_id(&mut self, id: T::Id) -> Option<T> {
        self.remove_first(|value| value.id() == id)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Head-to-tail iterator over a [`LinkedQueue`].
pub struct QueueIter<'a, T> {
    queue: &'a LinkedQueue<T>,
    cursor: Option<NodeIndex>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

// =============================================================================
// 2. BOXED LIFO
// =============================================================================

type Link<T> = Option<Box<StackNode<T>>>;

#[derive(Debug)]
struct StackNode<T> {
    value: T,
    next: Link<T>,
}

/// Singly-linked LIFO. `top` is the most recently pushed node, `None` when empty.
#[derive(Debug)]
pub struct LinkedStack<T> {
    top: Link<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self { top: None }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Number of nodes, counted by traversal from the top.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn push(&mut self, value: T) {
        let node = Box::new(StackNode {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            self.top = node.next;
            node.value
        })
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// Element `index` positions below the top (0 = most recently pushed).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            cursor: self.top.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the derived drop would recurse once per node.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Top-to-bottom iterator over a [`LinkedStack`].
pub struct StackIter<'a, T> {
    cursor: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.map(|node| {
            self.cursor = node.next.as_deref();
            &node.value
        })
    }
}
