//! Loading keys from free-form text, such as a line typed by a user or the
//! contents of a file.
//!
//! Every run of ASCII digits is one key and everything else separates keys,
//! so `"1, 2 3;4"` holds four keys. A `-` is a separator like any other
//! character, which means negative numbers can't be written this way.
//!
//! # Examples
//!
//! ```
//! use rbtree::red_black::Tree;
//!
//! let mut tree = Tree::new();
//! let inserted = tree.insert_text("50, 30 70\n20").unwrap();
//!
//! assert_eq!(inserted, 4);
//! assert!(tree.contains(70));
//! ```

use log::debug;
use thiserror::Error;

use crate::red_black::Tree;

/// A run of digits in the text couldn't be turned into a key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeysError {
    /// The digits describe a number larger than `i32::MAX`.
    #[error("{digits} is too large to be a key")]
    Overflow {
        /// The offending run of digits.
        digits: String,
    },
}

/// Yields every key in `text`, in the order they appear.
///
/// # Examples
///
/// ```
/// use rbtree::text::{parse_keys, ParseKeysError};
///
/// let keys: Result<Vec<_>, _> = parse_keys("7,8 , 9x10").collect();
/// assert_eq!(keys, Ok(vec![7, 8, 9, 10]));
///
/// let mut keys = parse_keys("1 99999999999");
/// assert_eq!(keys.next(), Some(Ok(1)));
/// assert!(matches!(keys.next(), Some(Err(ParseKeysError::Overflow { .. }))));
/// ```
pub fn parse_keys(text: &str) -> impl Iterator<Item = Result<i32, ParseKeysError>> + '_ {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|digits| !digits.is_empty())
        .map(|digits| {
            digits.parse::<i32>().map_err(|_| ParseKeysError::Overflow {
                digits: digits.to_string(),
            })
        })
}

impl Tree {
    /// Inserts every key found in `text` (see [`parse_keys`]) and returns how
    /// many were inserted. Stops at the first run of digits that isn't a valid
    /// key; the keys before it stay inserted.
    pub fn insert_text(&mut self, text: &str) -> Result<usize, ParseKeysError> {
        let mut inserted = 0;
        for key in parse_keys(text) {
            self.insert(key?);
            inserted += 1;
        }
        debug!("inserted {inserted} keys from text");
        Ok(inserted)
    }
}
