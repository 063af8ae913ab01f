//! Storage for the nodes of a [`Tree`][super::Tree].
//!
//! Nodes live in an [`Arena`] and refer to each other by [`NodeId`]. A child
//! slot is a [`Link`], which is either a real node or the empty leaf. The
//! parent pointer is a plain `Option<NodeId>` and owns nothing so there are no
//! ownership cycles to untangle when nodes are rotated or freed.

use std::ops::{Index, IndexMut};

/// The color of a node. Empty leaves don't store a color - they are always
/// [`Black`][Color::Black].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    pub(crate) fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }

    /// The suffix printed after a key when rendering.
    pub(crate) fn marker(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

/// Which child of its parent a node is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A handle to a node in an [`Arena`]. Only valid for the arena that handed it
/// out and only until that node is freed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// A child slot. Every real node has exactly two of these.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Link {
    /// The empty leaf at the bottom of a subtree. It has no key and is always
    /// black.
    #[default]
    Leaf,
    /// A real node.
    Node(NodeId),
}

impl Link {
    pub(crate) fn id(self) -> Option<NodeId> {
        match self {
            Self::Leaf => None,
            Self::Node(id) => Some(id),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) color: Color,
    pub(crate) left: Link,
    pub(crate) right: Link,
    /// `None` only for the root.
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// A freshly inserted node is red and has two empty leaves.
    fn new(key: i32, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            left: Link::Leaf,
            right: Link::Leaf,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Owns every node of a tree. Freed slots are recycled by later allocations.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
}

impl Arena {
    /// Allocates a new red node with two empty leaves.
    pub(crate) fn alloc(&mut self, key: i32, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(key, parent);
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Releases the node so its slot can be reused. Returns the node that was
    /// stored there.
    pub(crate) fn free(&mut self, id: NodeId) -> Node {
        let node = self.slots[id.0].take().expect("Freeing a live node");
        self.free.push(id);
        node
    }

    /// How many slots have ever been allocated, live or free.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("NodeId refers to a live node")
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("NodeId refers to a live node")
    }
}
