use super::node::{Link, Node};
use super::Tree;

impl Tree {
    /// Draws the tree level by level, one line per level. Each real node is
    /// written as its key followed by `B` (black) or `R` (red). Empty leaves,
    /// and the positions below them, are written as a single space. The row of
    /// empty leaves under the deepest nodes is drawn too, so an empty tree is
    /// one blank row.
    ///
    /// Level `l` of `L` (counting from 1) starts with `2^(L-l) - 1` spaces and
    /// every entry on it is followed by `2^(L-l+1) - 1` spaces. Keys with more
    /// than one digit push the rest of their line to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::red_black::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.render(), "   2B       \n 1R   3R   \n        \n");
    /// ```
    pub fn render(&self) -> String {
        let levels = self.height() + 1;

        // The tree laid out as a complete binary tree: the children of
        // position `i` are at `2i + 1` and `2i + 2`.
        let mut positions: Vec<Option<&Node>> = vec![None; (1 << levels) - 1];
        let mut stack = vec![(0, self.root)];
        while let Some((index, link)) = stack.pop() {
            if let Link::Node(id) = link {
                let node = &self.nodes[id];
                positions[index] = Some(node);
                stack.push((2 * index + 1, node.left));
                stack.push((2 * index + 2, node.right));
            }
        }

        let mut out = String::new();
        let mut positions = positions.into_iter();
        for level in 1..=levels {
            push_spaces(&mut out, (1 << (levels - level)) - 1);
            for _ in 0..1 << (level - 1) {
                match positions.next().flatten() {
                    Some(node) => {
                        out.push_str(&node.key.to_string());
                        out.push(node.color.marker());
                    }
                    None => out.push(' '),
                }
                push_spaces(&mut out, (1 << (levels - level + 1)) - 1);
            }
            out.push('\n');
        }
        out
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}
