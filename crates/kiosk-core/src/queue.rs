//! # Queue Module
//!
//! A sentinel-based singly-linked FIFO queue, plus the two bounded reports
//! the shell runs over it (bounded average, bounded order-preserving filter).
//!
//! ## Sentinel Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Queue node chain (arena slots)               │
//! │                                                                 │
//! │   front ──► [sentinel] ──► [item A] ──► [item B] ──► [item C]   │
//! │              (slot 0)                                  ▲        │
//! │                                                        │        │
//! │   tail ────────────────────────────────────────────────┘        │
//! │                                                                 │
//! │   empty queue:  front ──► [sentinel] ◄── tail                   │
//! │                 (front == tail is THE emptiness check)          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sentinel is allocated once at construction, never holds a payload,
//! and is never exposed to callers. Because it permanently anchors the
//! "before-front" position, enqueue/dequeue never special-case the first
//! real element.
//!
//! ## Why an Arena?
//! Nodes live in a `Vec` and link by slot index. Each container exclusively
//! owns its nodes (no `Rc`, no aliasing), and the sentinel-identity check is
//! a plain index comparison. Freed slots are recycled through a free list,
//! keeping allocation per-node.

use crate::error::{ContainerError, ContainerResult};
use crate::node::Node;

// =============================================================================
// Queue Type
// =============================================================================

/// A FIFO queue with a permanent sentinel node.
///
/// ## Invariants
/// - `front` always points at the sentinel slot; it never moves
/// - the queue is empty iff `front == tail`
/// - when non-empty, the logical first element is the payload of
///   `front.next` and the logical last is the payload at `tail`
/// - `len` always equals the number of real (non-sentinel) nodes
///
/// ## Complexity
/// `enqueue`, `dequeue`, `peek_front`, `len` and `is_empty` are all O(1);
/// the two reports are O(count).
#[derive(Debug)]
pub struct Queue<E> {
    /// Node arena. Slot 0 is the sentinel and is never freed.
    nodes: Vec<Node<E>>,
    /// Recycled arena slots, reused before the arena grows.
    free: Vec<usize>,
    /// Sentinel slot. Fixed for the container's lifetime.
    front: usize,
    /// Last real node, or the sentinel slot when empty.
    tail: usize,
    /// Maintained element count (unlike [`Stack`](crate::Stack), which
    /// deliberately counts by walking).
    len: usize,
}

impl<E> Queue<E> {
    /// Creates an empty queue holding only its sentinel.
    pub fn new() -> Self {
        Queue {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            front: 0,
            tail: 0,
            len: 0,
        }
    }

    /// True iff the queue holds no real elements.
    ///
    /// This is the sentinel-identity check: the queue is empty exactly when
    /// `tail` still rests on the sentinel slot `front` points at. Calling it
    /// never mutates state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.tail
    }

    /// Number of elements in the queue. O(1) maintained counter.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Appends an element at the back of the queue. O(1), cannot fail.
    pub fn enqueue(&mut self, item: E) {
        let slot = self.alloc(item);
        self.nodes[self.tail].next = Some(slot);
        self.tail = slot;
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// ## Errors
    /// [`ContainerError::Empty`] when the queue is empty. An empty queue
    /// always errors; it never yields a default value.
    pub fn dequeue(&mut self) -> ContainerResult<E> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }

        // Both lookups are guaranteed by the sentinel invariant; the error
        // arm guards against a corrupted chain rather than an empty queue.
        let first = self.nodes[self.front].next.ok_or(ContainerError::Empty)?;
        let item = self.nodes[first].item.take().ok_or(ContainerError::Empty)?;

        self.nodes[self.front].next = self.nodes[first].next;

        // Removing the last real node leaves the queue empty and well-formed:
        // tail returns to the sentinel.
        if self.tail == first {
            self.tail = self.front;
        }

        self.release(first);
        self.len -= 1;
        Ok(item)
    }

    /// Returns the element at the front of the queue without removing it.
    ///
    /// ## Errors
    /// [`ContainerError::Empty`] when the queue is empty.
    pub fn peek_front(&self) -> ContainerResult<&E> {
        let first = self.nodes[self.front].next.ok_or(ContainerError::Empty)?;
        self.nodes[first].item.as_ref().ok_or(ContainerError::Empty)
    }

    // =========================================================================
    // Bounded Reports
    // =========================================================================

    /// Averages `extractor` over the first `count` elements of the queue.
    ///
    /// Walks exactly `count` nodes from the front, summing the extracted
    /// values. An element whose extractor returns `None` contributes nothing
    /// to the sum but still counts toward the divisor: the divisor is the
    /// number of nodes visited, which equals `count` under the size check
    /// below. Returns `0.0` if no node was visited (unreachable under that
    /// check; kept as a guard against a corrupted chain).
    ///
    /// ## Errors
    /// - [`ContainerError::ZeroCount`] when `count == 0`
    /// - [`ContainerError::InvalidCount`] when `count > len()` - the caller
    ///   must have at least `count` elements; this is *not* clamped
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Queue;
    ///
    /// let mut q = Queue::new();
    /// q.enqueue(10.0);
    /// q.enqueue(20.0);
    /// q.enqueue(30.0);
    /// assert_eq!(q.average_of(|v| Some(*v), 3).unwrap(), 20.0);
    /// assert!(q.average_of(|v| Some(*v), 4).is_err());
    /// ```
    pub fn average_of<F>(&self, extractor: F, count: usize) -> ContainerResult<f64>
    where
        F: Fn(&E) -> Option<f64>,
    {
        if count == 0 {
            return Err(ContainerError::ZeroCount);
        }
        if count > self.len {
            return Err(ContainerError::InvalidCount {
                requested: count,
                available: self.len,
            });
        }

        let mut sum = 0.0;
        let mut visited = 0usize;
        let mut cursor = self.nodes[self.front].next;

        while let Some(slot) = cursor {
            if visited == count {
                break;
            }
            if let Some(item) = self.nodes[slot].item.as_ref() {
                if let Some(value) = extractor(item) {
                    sum += value;
                }
            }
            visited += 1;
            cursor = self.nodes[slot].next;
        }

        if visited == 0 {
            return Ok(0.0);
        }
        Ok(sum / visited as f64)
    }

    /// Collects the elements among the first `count` that satisfy
    /// `predicate` into a fresh queue, in encountered order.
    ///
    /// Walks the first `min(count, len())` nodes; elements beyond that
    /// position are never inspected. The receiver is never mutated.
    ///
    /// Unlike [`average_of`](Queue::average_of) and
    /// [`Stack::take_prefix`](crate::Stack::take_prefix), an oversized
    /// `count` is silently clamped to `len()` instead of rejected. The
    /// asymmetry is inherited behavior and is kept deliberately rather than
    /// unified; callers who need the strict contract should check `len()`
    /// first.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Queue;
    ///
    /// let mut q = Queue::new();
    /// for n in 1..=5 {
    ///     q.enqueue(n);
    /// }
    /// let mut even = q.filter_prefix(|n| n % 2 == 0, 3);
    /// assert_eq!(even.dequeue().unwrap(), 2);
    /// assert!(even.is_empty());
    /// assert_eq!(q.len(), 5); // receiver untouched
    /// ```
    pub fn filter_prefix<P>(&self, predicate: P, count: usize) -> Queue<E>
    where
        E: Clone,
        P: Fn(&E) -> bool,
    {
        let limit = count.min(self.len);

        let mut result = Queue::new();
        let mut visited = 0usize;
        let mut cursor = self.nodes[self.front].next;

        while let Some(slot) = cursor {
            if visited == limit {
                break;
            }
            if let Some(item) = self.nodes[slot].item.as_ref() {
                if predicate(item) {
                    result.enqueue(item.clone());
                }
            }
            visited += 1;
            cursor = self.nodes[slot].next;
        }

        result
    }

    // =========================================================================
    // Arena Plumbing
    // =========================================================================

    /// Places an item in a recycled slot, or grows the arena by one node.
    fn alloc(&mut self, item: E) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Node::new(item);
                slot
            }
            None => {
                self.nodes.push(Node::new(item));
                self.nodes.len() - 1
            }
        }
    }

    /// Marks an unlinked slot reusable. The payload has already been taken.
    fn release(&mut self, slot: usize) {
        self.nodes[slot].next = None;
        self.free.push(slot);
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue_is_empty() {
        let q: Queue<i32> = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_fifo_round_trip() {
        let mut q = Queue::new();
        for n in 0..50 {
            q.enqueue(n);
        }
        assert_eq!(q.len(), 50);

        for expected in 0..50 {
            assert_eq!(q.dequeue().unwrap(), expected);
        }
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_len_tracks_inserts_minus_removes() {
        let mut q = Queue::new();
        q.enqueue("a");
        q.enqueue("b");
        q.enqueue("c");
        q.dequeue().unwrap();
        assert_eq!(q.len(), 2);
        q.enqueue("d");
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn test_dequeue_empty_always_errors() {
        let mut q: Queue<i32> = Queue::new();
        assert_eq!(q.dequeue(), Err(ContainerError::Empty));
        // Repeated calls keep failing; nothing ever defaults.
        assert_eq!(q.dequeue(), Err(ContainerError::Empty));
    }

    #[test]
    fn test_drain_then_reuse_stays_well_formed() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.dequeue().unwrap();
        // Removing the tail node resets tail to the sentinel.
        assert!(q.is_empty());
        q.enqueue(2);
        assert_eq!(q.peek_front().unwrap(), &2);
        assert_eq!(q.dequeue().unwrap(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn test_peek_front_does_not_mutate() {
        let mut q = Queue::new();
        q.enqueue(7);
        assert_eq!(q.peek_front().unwrap(), &7);
        assert_eq!(q.peek_front().unwrap(), &7);
        assert_eq!(q.len(), 1);

        let empty: Queue<i32> = Queue::new();
        assert_eq!(empty.peek_front(), Err(ContainerError::Empty));
    }

    #[test]
    fn test_is_empty_is_idempotent() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        assert!(q.is_empty());
        q.enqueue(1);
        assert!(!q.is_empty());
        assert!(!q.is_empty());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_average_of_exact_mean() {
        let mut q = Queue::new();
        q.enqueue(10.0);
        q.enqueue(20.0);
        q.enqueue(30.0);
        assert_eq!(q.average_of(|v| Some(*v), 3).unwrap(), 20.0);
    }

    #[test]
    fn test_average_of_prefix_only() {
        let mut q = Queue::new();
        q.enqueue(10.0);
        q.enqueue(20.0);
        q.enqueue(1000.0); // must not be visited
        assert_eq!(q.average_of(|v| Some(*v), 2).unwrap(), 15.0);
    }

    #[test]
    fn test_average_of_rejects_bad_counts() {
        let mut q = Queue::new();
        q.enqueue(1.0);
        assert_eq!(
            q.average_of(|v| Some(*v), 0),
            Err(ContainerError::ZeroCount)
        );
        assert_eq!(
            q.average_of(|v| Some(*v), 2),
            Err(ContainerError::InvalidCount {
                requested: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn test_average_of_none_counts_toward_divisor() {
        // A None extraction adds nothing to the sum, but the node was
        // still visited: [10, None, 50] averages to 60/3 = 20.
        let mut q = Queue::new();
        q.enqueue(10.0);
        q.enqueue(-1.0);
        q.enqueue(50.0);
        let mean = q
            .average_of(|v| if *v < 0.0 { None } else { Some(*v) }, 3)
            .unwrap();
        assert_eq!(mean, 20.0);
    }

    #[test]
    fn test_filter_prefix_bounded_and_ordered() {
        let mut q = Queue::new();
        for n in 1..=5 {
            q.enqueue(n);
        }

        // k=3 inspects [1, 2, 3] only
        let mut even = q.filter_prefix(|n| n % 2 == 0, 3);
        assert_eq!(even.dequeue().unwrap(), 2);
        assert!(even.is_empty());

        // k=10 on 5 elements behaves as k=5
        let mut even = q.filter_prefix(|n| n % 2 == 0, 10);
        assert_eq!(even.dequeue().unwrap(), 2);
        assert_eq!(even.dequeue().unwrap(), 4);
        assert!(even.is_empty());
    }

    #[test]
    fn test_filter_prefix_never_mutates_receiver() {
        let mut q = Queue::new();
        for n in 1..=5 {
            q.enqueue(n);
        }
        let _ = q.filter_prefix(|_| true, 5);
        assert_eq!(q.len(), 5);
        for expected in 1..=5 {
            assert_eq!(q.dequeue().unwrap(), expected);
        }
    }

    #[test]
    fn test_filter_prefix_zero_and_empty() {
        let mut q = Queue::new();
        q.enqueue(1);
        assert!(q.filter_prefix(|_| true, 0).is_empty());

        let empty: Queue<i32> = Queue::new();
        assert!(empty.filter_prefix(|_| true, 3).is_empty());
    }

    #[test]
    fn test_slot_reuse_after_heavy_churn() {
        let mut q = Queue::new();
        for round in 0..10 {
            for n in 0..8 {
                q.enqueue(round * 8 + n);
            }
            for n in 0..8 {
                assert_eq!(q.dequeue().unwrap(), round * 8 + n);
            }
        }
        assert!(q.is_empty());
        // The arena recycles slots instead of growing per insert.
        assert!(q.nodes.len() <= 9);
    }
}
