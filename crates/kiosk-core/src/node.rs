//! Forward-linked storage cell shared by [`Queue`](crate::Queue) and
//! [`Stack`](crate::Stack).
//!
//! Nodes live in a per-container arena (`Vec<Node<E>>`) and link to each
//! other by slot index, so ownership stays exclusive to one container and
//! the sentinel comparison (`front == tail`, `top == bottom`) is a plain
//! index equality check.

/// One storage cell: a payload slot and a forward link.
///
/// The payload is `None` only for the sentinel; the link is `None` for the
/// last node in the chain. Absence of a link is a value, never an error.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub(crate) item: Option<E>,
    pub(crate) next: Option<usize>,
}

impl<E> Node<E> {
    /// The permanent anchor cell. Carries no payload for its whole life.
    pub(crate) fn sentinel() -> Self {
        Node {
            item: None,
            next: None,
        }
    }

    pub(crate) fn new(item: E) -> Self {
        Node {
            item: Some(item),
            next: None,
        }
    }
}
