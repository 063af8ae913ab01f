use log::{debug, trace};

use super::node::{Color, Link, NodeId, Side};
use super::Tree;

impl Tree {
    /// Removes one node holding `key` from the tree. Returns `false`, leaving
    /// the tree untouched, if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(2));
    /// assert!(!tree.contains(2));
    /// assert!(tree.contains(1));
    /// assert!(tree.contains(3));
    ///
    /// assert!(!tree.remove(42));
    /// ```
    pub fn remove(&mut self, key: i32) -> bool {
        let Some(mut target) = self.find(key) else {
            debug!("remove {key}: not found");
            return false;
        };

        // With two real children, the in-order successor's key moves up into
        // this node and the successor (which has no left child) is removed
        // instead.
        if let (Link::Node(_), Link::Node(right)) =
            (self.nodes[target].left, self.nodes[target].right)
        {
            let successor = self.leftmost(right);
            trace!(
                "remove {key}: replacing with successor {}",
                self.nodes[successor].key
            );
            self.nodes[target].key = self.nodes[successor].key;
            target = successor;
        }

        let parent = self.nodes[target].parent;
        self.remove_node(target);
        self.len -= 1;
        debug!("removed {key}");

        if let Some(parent) = parent {
            self.debug_check_around(parent);
        }
        true
    }

    /// The node with the smallest key in the subtree rooted at `id`.
    pub(super) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Link::Node(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Unlinks and frees a node with at most one real child.
    fn remove_node(&mut self, target: NodeId) {
        let node = &self.nodes[target];
        let child = node.left.id().or(node.right.id());

        match (node.color, child) {
            // A red node with one real child would have unequal black-heights
            // so it must have two empty leaves.
            (Color::Red, _) => {
                debug_assert!(child.is_none(), "Red node with a single child");
                self.replace_in_parent(target, Link::Leaf);
            }
            // A black node's only child must be red. Taking its parent's place
            // and turning black keeps the black-height.
            (Color::Black, Some(child)) => {
                self.replace_in_parent(target, Link::Node(child));
                self.paint(child, Color::Black);
            }
            // Removing a black node with no children shortens every path
            // through it by one black node.
            (Color::Black, None) => {
                let position = node.parent.zip(self.side_of(target));
                self.replace_in_parent(target, Link::Leaf);
                if let Some((parent, side)) = position {
                    self.fix_after_remove(parent, side);
                }
            }
        }

        self.nodes.free(target);
    }

    /// Restores equal black-heights after the subtree in the `side` slot of
    /// `parent` lost a black node. Each pass either absorbs the missing black
    /// node or hands it to `parent`, one level up.
    fn fix_after_remove(&mut self, mut parent: NodeId, mut side: Side) {
        loop {
            // The short side has a black-height of at least 1 less than this
            // side so the sibling can't be an empty leaf.
            let mut sibling = self.nodes[parent]
                .child(side.opposite())
                .id()
                .expect("Short subtree => real sibling");

            if self.nodes[sibling].color.is_red() {
                trace!("remove fix-up: sibling {} is red", self.nodes[sibling].key);
                self.paint(sibling, Color::Black);
                self.paint(parent, Color::Red);
                self.rotate_up(sibling);
                // The sibling's near child is the new sibling. It was below a
                // red node so it is black.
                sibling = self.nodes[parent]
                    .child(side.opposite())
                    .id()
                    .expect("Short subtree => real sibling");
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(side.opposite());

            if self.color(near).is_black() && self.color(far).is_black() {
                self.paint(sibling, Color::Red);

                if self.nodes[parent].color.is_red() {
                    trace!("remove fix-up: red parent {} absorbs", self.nodes[parent].key);
                    self.paint(parent, Color::Black);
                    return;
                }

                trace!("remove fix-up: moving up to {}", self.nodes[parent].key);
                match self.nodes[parent].parent.zip(self.side_of(parent)) {
                    Some((grandparent, parent_side)) => {
                        parent = grandparent;
                        side = parent_side;
                        continue;
                    }
                    // Every path lost a black node, including the root's.
                    None => return,
                }
            }

            if self.color(far).is_black() {
                // Near is red. Turn it into the sibling so the red node ends up
                // on the far side.
                let near = near.id().expect("Red => real node");
                trace!("remove fix-up: near nephew {} is red", self.nodes[near].key);
                self.paint(near, Color::Black);
                self.paint(sibling, Color::Red);
                self.rotate_up(near);
                sibling = near;
            }

            let far = self.nodes[sibling]
                .child(side.opposite())
                .id()
                .expect("Red far nephew => real node");
            trace!("remove fix-up: far nephew {} is red", self.nodes[far].key);
            self.paint(sibling, self.nodes[parent].color);
            self.paint(parent, Color::Black);
            self.paint(far, Color::Black);
            self.rotate_up(sibling);
            return;
        }
    }
}
