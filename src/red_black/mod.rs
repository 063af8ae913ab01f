//! A mutable Red-Black Tree over `i32` keys. Nodes are kept in an arena and
//! link to their parents so the fix-ups can walk back up the tree after an
//! insertion or deletion without recursion.
//!
//! # Examples
//!
//! ```
//! use rbtree::red_black::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.insert(1);
//! assert!(tree.contains(1));
//!
//! // Removing reports whether the key was there.
//! assert!(tree.remove(1));
//! assert!(!tree.remove(1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use log::{debug, trace};

mod insert;
mod node;
mod remove;
mod render;
mod validate;

use node::{Arena, Color, Link, NodeId, Side};
pub use validate::InvariantError;

/// A self-balancing Binary Search Tree (specifically, a Red-Black tree) of
/// `i32` keys. This can be used for inserting, finding, and removing keys.
///
/// Equal keys are not merged. A key equal to an existing key is placed in
/// that key's right subtree, so inserting the same key twice stores it twice
/// and it has to be removed twice.
#[derive(Clone, Default)]
pub struct Tree {
    root: Link,
    nodes: Arena,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if some node in the tree holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// The number of keys stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root == Link::Leaf
    }

    /// Removes every key, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} keys", self.len);
        *self = Self::new();
    }

    /// The number of levels of real nodes. An empty tree has a height of 0 and
    /// a tree with only a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// // Ascending inserts would build a linked list in an unbalanced tree.
    /// let tree: Tree = (1..=7).collect();
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// The number of black nodes on any path from the root down to an empty
    /// leaf, not counting the root but counting the leaf. An empty tree has a
    /// black-height of 0.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut link = self.root;
        while let Link::Node(id) = link {
            link = self.nodes[id].left;
            if self.color(link).is_black() {
                count += 1;
            }
        }
        count
    }

    /// Inserts each key yielded by the iterator, in order.
    fn insert_all(&mut self, keys: impl IntoIterator<Item = i32>) {
        for key in keys {
            self.insert(key);
        }
    }

    fn subtree_height(&self, link: Link) -> usize {
        match link {
            Link::Leaf => 0,
            Link::Node(id) => {
                let node = &self.nodes[id];
                self.subtree_height(node.left)
                    .max(self.subtree_height(node.right))
                    + 1
            }
        }
    }

    /// Finds the first node holding `key` on the search path from the root.
    fn find(&self, key: i32) -> Option<NodeId> {
        let mut link = self.root;
        while let Link::Node(id) = link {
            let node = &self.nodes[id];
            link = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The color of whatever is in a child slot. Empty leaves are black.
    fn color(&self, link: Link) -> Color {
        match link {
            Link::Leaf => Color::Black,
            Link::Node(id) => self.nodes[id].color,
        }
    }

    fn paint(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    /// Which child of its parent `id` is, or `None` for the root.
    fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.nodes[id].parent?;
        if self.nodes[parent].left == Link::Node(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Puts `child` in the `side` slot of `parent`, fixing up the child's
    /// parent pointer.
    fn set_child(&mut self, parent: NodeId, side: Side, child: Link) {
        *self.nodes[parent].child_mut(side) = child;
        if let Link::Node(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Makes whatever pointed at `old` (its parent or the tree's root) point at
    /// `new` instead. `old`'s own links are left untouched.
    fn replace_in_parent(&mut self, old: NodeId, new: Link) {
        let parent = self.nodes[old].parent;
        match (parent, self.side_of(old)) {
            (Some(parent), Some(side)) => *self.nodes[parent].child_mut(side) = new,
            _ => self.root = new,
        }
        if let Link::Node(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Rotates `pivot` up into its parent's position. The parent becomes
    /// `pivot`'s child on the opposite side and adopts `pivot`'s inner child.
    /// A right child rotates left and a left child rotates right.
    ///
    /// # Panics
    ///
    /// When called on the root.
    ///
    /// # Diagram
    ///
    /// Rotating `pivot` (a right child) to the left:
    ///
    /// ```text
    ///  Option<grandparent>     Option<grandparent>
    ///       /                       /
    ///    parent                   pivot
    ///    /    \                   /    \
    ///   x    pivot   rotate ->  parent  z
    ///        /   \              /   \
    ///       y     z            x     y
    /// ```
    fn rotate_up(&mut self, pivot: NodeId) {
        let parent = self.nodes[pivot]
            .parent
            .expect("Rotating a node requires a parent");
        let side = if self.nodes[parent].left == Link::Node(pivot) {
            Side::Left
        } else {
            Side::Right
        };
        trace!(
            "rotate {} {} over {}",
            self.nodes[pivot].key,
            match side {
                Side::Left => "right",
                Side::Right => "left",
            },
            self.nodes[parent].key
        );

        let inner = self.nodes[pivot].child(side.opposite());
        self.replace_in_parent(parent, Link::Node(pivot));
        self.set_child(parent, side, inner);
        self.set_child(pivot, side.opposite(), Link::Node(parent));
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        self.insert_all(keys);
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(keys);
        tree
    }
}

/// Writes the same picture as [`Tree::render`].
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field(
                "root",
                &DebugLink {
                    tree: self,
                    link: self.root,
                },
            )
            .finish()
    }
}

/// Borrows a tree to print the subtree hanging off a child slot.
struct DebugLink<'a> {
    tree: &'a Tree,
    link: Link,
}

impl fmt::Debug for DebugLink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.link {
            Link::Leaf => f.write_str("Leaf"),
            Link::Node(id) => {
                let node = &self.tree.nodes[id];
                let child = |link| DebugLink {
                    tree: self.tree,
                    link,
                };
                f.debug_struct("Node")
                    .field("key", &node.key)
                    .field("color", &node.color)
                    .field("left", &child(node.left))
                    .field("right", &child(node.right))
                    .finish()
            }
        }
    }
}
