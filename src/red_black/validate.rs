use thiserror::Error;

use super::node::{Link, NodeId, Side};
use super::Tree;

/// A broken Red-Black or BST invariant found by [`Tree::validate`]. None of
/// these should ever come out of a tree built through its public methods.
///
/// Empty leaves have no color of their own so "every empty leaf is black"
/// can't be broken and has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The root is red.
    #[error("root {key} is red")]
    RedRoot {
        /// The root's key.
        key: i32,
    },
    /// A red node has a red child.
    #[error("red node {key} has red child {child}")]
    RedChild {
        /// The parent's key.
        key: i32,
        /// The child's key.
        child: i32,
    },
    /// The two subtrees of a node have different black-heights.
    #[error("subtrees of {key} have black-heights {left} and {right}")]
    BlackHeight {
        /// The key of the node whose subtrees disagree.
        key: i32,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// An in-order walk found a key smaller than the one before it.
    #[error("key {next} follows larger key {previous}")]
    OutOfOrder {
        /// The earlier, larger key.
        previous: i32,
        /// The later, smaller key.
        next: i32,
    },
    /// A node's parent pointer doesn't point at the node holding it.
    #[error("node {key} has a stale parent pointer")]
    ParentLink {
        /// The key of the node with the bad pointer.
        key: i32,
    },
    /// The stored key count doesn't match the nodes reachable from the root.
    #[error("tree claims {expected} keys but holds {found}")]
    Length {
        /// The recorded count.
        expected: usize,
        /// The number of nodes reachable from the root.
        found: usize,
    },
}

impl Tree {
    /// Walks the whole tree and checks every Red-Black and BST invariant.
    /// Returns the tree's [black-height][Tree::black_height].
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let tree: Tree = (1..=15).collect();
    /// assert_eq!(tree.validate(), Ok(tree.black_height()));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantError> {
        if let Link::Node(root) = self.root {
            if self.nodes[root].color.is_red() {
                return Err(InvariantError::RedRoot {
                    key: self.nodes[root].key,
                });
            }
        }

        let mut walk = Walk {
            previous: None,
            count: 0,
        };
        let height = self.check(self.root, None, &mut walk)?;

        if walk.count != self.len {
            return Err(InvariantError::Length {
                expected: self.len,
                found: walk.count,
            });
        }
        // The root (or the lone empty leaf) is black and doesn't count.
        Ok(height - 1)
    }

    /// Checks the subtree in `link`, whose parent should be `parent`, and
    /// returns its black-height counting `link` itself.
    fn check(
        &self,
        link: Link,
        parent: Option<NodeId>,
        walk: &mut Walk,
    ) -> Result<usize, InvariantError> {
        let Link::Node(id) = link else {
            return Ok(1);
        };
        let node = &self.nodes[id];

        if node.parent != parent {
            return Err(InvariantError::ParentLink { key: node.key });
        }
        if node.color.is_red() {
            for child in [node.left, node.right] {
                if let Link::Node(child) = child {
                    if self.nodes[child].color.is_red() {
                        return Err(InvariantError::RedChild {
                            key: node.key,
                            child: self.nodes[child].key,
                        });
                    }
                }
            }
        }

        let left = self.check(node.left, Some(id), walk)?;

        if let Some(previous) = walk.previous {
            if previous > node.key {
                return Err(InvariantError::OutOfOrder {
                    previous,
                    next: node.key,
                });
            }
        }
        walk.previous = Some(node.key);
        walk.count += 1;

        let right = self.check(node.right, Some(id), walk)?;

        if left != right {
            return Err(InvariantError::BlackHeight {
                key: node.key,
                left,
                right,
            });
        }
        Ok(left + usize::from(node.color.is_black()))
    }
}

impl Tree {
    /// In debug builds, checks the invariants that can be seen from `id`, its
    /// parent and its grandparent, plus the root's color. Only looks at a
    /// fixed number of nodes, unlike [`Tree::validate`].
    pub(super) fn debug_check_around(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            if let Link::Node(root) = self.root {
                assert!(
                    self.nodes[root].color.is_black(),
                    "root {} is red",
                    self.nodes[root].key
                );
            }
            let mut next = Some(id);
            for _ in 0..3 {
                let Some(id) = next else { break };
                self.check_local(id);
                next = self.nodes[id].parent;
            }
        }
    }

    /// Checks the links, colors and key order between `id` and its children.
    fn check_local(&self, id: NodeId) {
        let node = &self.nodes[id];
        for side in [Side::Left, Side::Right] {
            let Link::Node(child) = node.child(side) else {
                continue;
            };
            let child = &self.nodes[child];
            assert_eq!(
                child.parent,
                Some(id),
                "child {} of {} has a stale parent pointer",
                child.key,
                node.key
            );
            assert!(
                node.color.is_black() || child.color.is_black(),
                "red node {} has red child {}",
                node.key,
                child.key
            );
            match side {
                Side::Left => assert!(
                    child.key <= node.key,
                    "{} is left of {}",
                    child.key,
                    node.key
                ),
                Side::Right => assert!(
                    child.key >= node.key,
                    "{} is right of {}",
                    child.key,
                    node.key
                ),
            }
        }
    }
}

/// State carried along an in-order walk.
struct Walk {
    previous: Option<i32>,
    count: usize,
}
