//! This crate exposes a Red-Black Tree over `i32` keys, mostly for
//! educational purposes.
//!
//! ## Red-Black Tree
//!
//! A Red-Black Tree is a Binary Search Tree (BST) that keeps itself balanced
//! by painting every `Node` either red or black and restoring a handful of
//! coloring rules after every insertion and deletion. Every `Node` always has
//! two children; where there is no real child there is an empty leaf which
//! is always black. The rules are:
//!
//! 1. Every empty leaf is black.
//! 2. A red `Node` never has a red child.
//! 3. Every path from a `Node` down to an empty leaf passes through the same
//!    number of black `Node`s (the "black-height").
//! 4. The root is black.
//! 5. An in-order walk of the tree visits keys in non-decreasing order. This
//!    is the usual BST invariant and is independent of color.
//!
//! Rules 2 and 3 together mean the longest root-to-leaf path is at most twice
//! as long as the shortest, so the height of a tree holding `N` keys is at
//! most `2 * lg(N + 1)` and searching, inserting, and deleting are all
//! `O(lg N)`.
//!
//! The repairs run after a mutation are called "fix-ups". They only ever
//! recolor `Node`s and perform rotations, local restructurings which swap a
//! `Node` with one of its children without disturbing the in-order sequence.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod red_black;
pub mod text;

pub use red_black::{InvariantError, Tree};
pub use text::{parse_keys, ParseKeysError};
