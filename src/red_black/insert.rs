use log::{debug, trace};

use super::node::{Color, Link, NodeId, Side};
use super::Tree;

impl Tree {
    /// Inserts `key` into the tree. Keys equal to one already stored are
    /// placed to its right, so duplicates are kept rather than merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    ///
    /// // Each copy is removed separately.
    /// assert!(tree.remove(1));
    /// assert!(tree.contains(1));
    /// ```
    pub fn insert(&mut self, key: i32) {
        let inserted = self.insert_leaf(key);
        self.len += 1;
        debug!("inserted {key}");

        self.fix_after_insert(inserted);
        self.debug_check_around(inserted);
    }

    /// Walks down to the empty leaf where `key` belongs and puts a new red node
    /// there. Returns the new node.
    fn insert_leaf(&mut self, key: i32) -> NodeId {
        let mut parent = None;
        let mut link = self.root;
        while let Link::Node(id) = link {
            let side = if key < self.nodes[id].key {
                Side::Left
            } else {
                Side::Right
            };
            parent = Some((id, side));
            link = self.nodes[id].child(side);
        }

        let inserted = self.nodes.alloc(key, parent.map(|(id, _)| id));
        match parent {
            Some((parent, side)) => self.set_child(parent, side, Link::Node(inserted)),
            None => self.root = Link::Node(inserted),
        }
        inserted
    }

    /// Restores the coloring rules after `node` was inserted red. The only rule
    /// that can be broken is "no red node has a red child", between `node` and
    /// its parent. Each pass either fixes it or moves it two levels up.
    fn fix_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.nodes[node].parent else {
                trace!("insert fix-up: {} is the root", self.nodes[node].key);
                self.paint(node, Color::Black);
                return;
            };
            if self.nodes[parent].color.is_black() {
                return;
            }

            // A red parent is never the root so there is a grandparent.
            let grandparent = self.nodes[parent]
                .parent
                .expect("Red parent => grandparent");
            let parent_side = self.side_of(parent).expect("Red parent => grandparent");
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            if let Link::Node(uncle) = uncle {
                if self.nodes[uncle].color.is_red() {
                    trace!(
                        "insert fix-up: recolor around {}",
                        self.nodes[grandparent].key
                    );
                    self.paint(parent, Color::Black);
                    self.paint(uncle, Color::Black);
                    self.paint(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
            }

            // The uncle is black. If `node` is an inner grandchild, rotate it
            // above its parent so the two red nodes line up on the outside.
            let (node, parent) = if self.side_of(node) != Some(parent_side) {
                trace!("insert fix-up: {} is an inner grandchild", self.nodes[node].key);
                self.rotate_up(node);
                (parent, node)
            } else {
                (node, parent)
            };

            trace!(
                "insert fix-up: {} and {} in a line",
                self.nodes[parent].key,
                self.nodes[node].key
            );
            self.paint(grandparent, Color::Red);
            self.paint(parent, Color::Black);
            self.rotate_up(parent);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a tree by inserting `keys` in order and checks its rendering.
    macro_rules! assert_inserts_render {
        ([$($key:expr),* $(,)?], $expected:expr) => {{
            let mut tree = Tree::new();
            $(tree.insert($key);)*

            assert_eq!(tree.render(), $expected);
            assert!(tree.validate().is_ok());
        }};
    }

    #[test]
    fn test_root_is_painted_black() {
        assert_inserts_render!([5], " 5B   \n    \n");
    }

    #[test]
    fn test_black_parent() {
        assert_inserts_render!([5, 3], "   5B       \n 3R       \n        \n");
    }

    #[test]
    fn test_red_uncle_recolors() {
        assert_inserts_render!(
            [10, 5, 15, 1],
            "       10B               \n   5B       15B       \n 1R               \n                \n"
        );
    }

    #[test]
    fn test_inner_grandchild_left_right() {
        assert_inserts_render!([30, 10, 20], "   20B       \n 10R   30R   \n        \n");
    }

    #[test]
    fn test_inner_grandchild_right_left() {
        assert_inserts_render!([10, 30, 20], "   20B       \n 10R   30R   \n        \n");
    }

    #[test]
    fn test_outer_grandchild_rotates_left() {
        assert_inserts_render!([10, 20, 30], "   20B       \n 10R   30R   \n        \n");
    }

    #[test]
    fn test_outer_grandchild_rotates_right() {
        assert_inserts_render!([30, 20, 10], "   20B       \n 10R   30R   \n        \n");
    }

    #[test]
    fn test_equal_keys_go_right() {
        let mut tree = Tree::new();
        tree.insert(5);
        let root = tree.root.id().expect("one key => root");

        tree.insert(5);
        assert_eq!(tree.nodes[root].left, Link::Leaf);
        assert!(matches!(tree.nodes[root].right, Link::Node(_)));

        // A third copy lines up on the right and forces a rotation.
        tree.insert(5);
        assert_eq!(tree.render(), "   5B       \n 5R   5R   \n        \n");
    }

    #[test]
    fn test_recoloring_propagates_to_root() {
        let mut tree: Tree = (1..=15).collect();
        assert_eq!(tree.validate(), Ok(3));

        // 16 lands under 15 whose sibling 13 is red, pushing the violation up.
        tree.insert(16);
        assert!(tree.validate().is_ok());
        assert!(tree.contains(16));
    }

    #[test]
    fn test_negative_and_extreme_keys() {
        let mut tree = Tree::new();
        for key in [0, -1, i32::MIN, i32::MAX, -1] {
            tree.insert(key);
        }

        for key in [0, -1, i32::MIN, i32::MAX] {
            assert!(tree.contains(key));
        }
        assert_eq!(tree.len(), 5);
    }
}
