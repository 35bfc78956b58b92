//! # Stack Module
//!
//! A sentinel-based singly-linked LIFO stack, plus the order-preserving
//! prefix copy (`take_prefix`) built on the double-reversal trick.
//!
//! ## Sentinel Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Stack node chain (arena slots)               │
//! │                                                                 │
//! │   top ──► [item C] ──► [item B] ──► [item A] ──► [sentinel]     │
//! │                                                    (slot 0) ▲   │
//! │                                                             │   │
//! │   bottom ───────────────────────────────────────────────────┘   │
//! │                                                                 │
//! │   empty stack:  top ──► [sentinel] ◄── bottom                   │
//! │                 (top == bottom is THE emptiness check)          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pushing links a new node in front of `top` (standard prepend); popping
//! advances `top` one link toward `bottom`. The sentinel anchors the bottom
//! of the chain for the container's whole lifetime.
//!
//! Unlike [`Queue`](crate::Queue), there is no maintained counter: `len`
//! walks the chain. That O(n) cost is a deliberate simplicity trade-off
//! kept from the container's original contract.

use crate::error::{ContainerError, ContainerResult};
use crate::node::Node;

// =============================================================================
// Stack Type
// =============================================================================

/// A LIFO stack with a permanent sentinel "bottom" anchor.
///
/// ## Invariants
/// - `bottom` always points at the sentinel slot; it never moves
/// - the stack is empty iff `top == bottom`
/// - every real node's link points one step toward `bottom`
#[derive(Debug)]
pub struct Stack<E> {
    /// Node arena. Slot 0 is the sentinel and is never freed.
    nodes: Vec<Node<E>>,
    /// Recycled arena slots, reused before the arena grows.
    free: Vec<usize>,
    /// Most recently pushed node, or the sentinel slot when empty.
    top: usize,
    /// Sentinel slot. Fixed for the container's lifetime.
    bottom: usize,
}

impl<E> Stack<E> {
    /// Creates an empty stack holding only its sentinel.
    pub fn new() -> Self {
        Stack {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            top: 0,
            bottom: 0,
        }
    }

    /// True iff the stack holds no real elements. Never mutates state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == self.bottom
    }

    /// Number of elements in the stack.
    ///
    /// O(n): walks from `top` to the sentinel counting nodes. There is no
    /// maintained counter; the walk is the contract, not an oversight.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.top;
        while cursor != self.bottom {
            count += 1;
            match self.nodes[cursor].next {
                Some(next) => cursor = next,
                // Unreachable in a well-formed stack: every real node links
                // toward the sentinel.
                None => break,
            }
        }
        count
    }

    /// Pushes an element onto the top of the stack. O(1) prepend.
    pub fn push(&mut self, item: E) {
        let slot = self.alloc(item);
        self.nodes[slot].next = Some(self.top);
        self.top = slot;
    }

    /// Removes and returns the element at the top of the stack.
    ///
    /// ## Errors
    /// [`ContainerError::Empty`] when the stack is empty. An empty stack
    /// always errors; it never yields a default value.
    pub fn pop(&mut self) -> ContainerResult<E> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }

        let popped = self.top;
        // Both lookups are guaranteed by the sentinel invariant; the error
        // arm guards against a corrupted chain rather than an empty stack.
        let item = self.nodes[popped].item.take().ok_or(ContainerError::Empty)?;
        self.top = self.nodes[popped].next.ok_or(ContainerError::Empty)?;

        self.release(popped);
        Ok(item)
    }

    /// Returns the element at the top of the stack without removing it.
    ///
    /// ## Errors
    /// [`ContainerError::Empty`] when the stack is empty.
    pub fn peek(&self) -> ContainerResult<&E> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        self.nodes[self.top].item.as_ref().ok_or(ContainerError::Empty)
    }

    // =========================================================================
    // Order-Preserving Prefix Copy
    // =========================================================================

    /// Copies the top `count` elements into a fresh stack, preserving their
    /// relative order. The receiver is never mutated - the walk only reads,
    /// and extraction clones payloads into new nodes.
    ///
    /// ## Double-Reversal Algorithm
    /// ```text
    /// receiver (top→bottom): [A, B, C, D]         take_prefix(2)
    ///
    /// pass 1: walk the top 2, pushing onto an auxiliary stack
    ///         aux (top→bottom): [B, A]            ← order reversed
    ///
    /// pass 2: pop aux, pushing onto the result stack
    ///         result (top→bottom): [A, B]         ← order restored
    /// ```
    ///
    /// ## Errors
    /// [`ContainerError::InvalidCount`] when the receiver holds fewer than
    /// `count` elements. `take_prefix(0)` returns an empty stack without
    /// error.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Stack;
    ///
    /// let mut s = Stack::new();
    /// for it in ["D", "C", "B", "A"] {
    ///     s.push(it);
    /// }
    /// let mut prefix = s.take_prefix(2).unwrap();
    /// assert_eq!(prefix.pop().unwrap(), "A");
    /// assert_eq!(prefix.pop().unwrap(), "B");
    /// assert_eq!(s.len(), 4); // receiver untouched
    /// ```
    pub fn take_prefix(&self, count: usize) -> ContainerResult<Stack<E>>
    where
        E: Clone,
    {
        let available = self.len();
        if count > available {
            return Err(ContainerError::InvalidCount {
                requested: count,
                available,
            });
        }

        // Pass 1: read the top `count` items into the auxiliary stack,
        // reversing their order - the item nearest the bottom of the
        // selected prefix ends up on top of `aux`.
        let mut aux = Stack::new();
        let mut cursor = self.top;
        for _ in 0..count {
            let item = self.nodes[cursor].item.as_ref().ok_or(ContainerError::Empty)?;
            aux.push(item.clone());
            cursor = self.nodes[cursor].next.ok_or(ContainerError::Empty)?;
        }

        // Pass 2: pop the auxiliary stack into the result, reversing again
        // and restoring the original relative order.
        let mut prefix = Stack::new();
        while !aux.is_empty() {
            prefix.push(aux.pop()?);
        }

        Ok(prefix)
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

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
