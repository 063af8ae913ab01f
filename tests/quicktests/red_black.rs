use rbtree::red_black::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and to a multiset of keys.
/// This way we can ensure that after a random smattering of inserts
/// and removes the tree holds exactly the keys in the multiset. Returns
/// `false` as soon as the tree disagrees with the model.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, model: &mut BTreeMap<i32, usize>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                let key = i32::from(k);
                tree.insert(key);
                *model.entry(key).or_default() += 1;
            }
            Op::Remove(k) => {
                let key = i32::from(k);
                let expected = match model.get(&key).copied() {
                    Some(1) => {
                        model.remove(&key);
                        true
                    }
                    Some(count) => {
                        model.insert(key, count - 1);
                        true
                    }
                    None => false,
                };
                if tree.remove(key) != expected {
                    return false;
                }
            }
            Op::Contains(k) => {
                let key = i32::from(k);
                if tree.contains(key) != model.contains_key(&key) {
                    return false;
                }
            }
        }
        if tree.validate().is_err() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = Tree::new();
    let mut model = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut model)
        && tree.len() == model.values().sum::<usize>()
        && (i8::MIN..=i8::MAX)
            .map(i32::from)
            .all(|k| tree.contains(k) == model.contains_key(&k))
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(*x))
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(*x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - each remove
        // only takes one of them.
        let removed = tree.remove((*delete).into());
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if !removed {
                    return false;
                }
            }
            None if removed => return false,
            None => {}
        }
    }

    still_present.iter().all(|x| tree.contains((*x).into()))
        && tree.len() == still_present.len()
        && tree.validate().is_ok()
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i32>) -> bool {
    let tree: Tree = xs.iter().copied().collect();
    let bound = 2.0 * ((xs.len() + 1) as f64).log2();

    tree.height() as f64 <= bound
}

#[quickcheck]
fn removing_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree = xs
        .iter()
        .filter(|&&x| x != missing)
        .map(|&x| i32::from(x))
        .collect();
    let before = format!("{tree:?}");

    !tree.remove(missing.into()) && format!("{tree:?}") == before
}

#[quickcheck]
fn black_height_matches_validation(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    for delete in deletes {
        tree.remove(delete.into());
    }

    tree.validate() == Ok(tree.black_height())
}

#[quickcheck]
fn render_has_a_line_per_level(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

    tree.render().lines().count() == tree.height() + 1
}

#[quickcheck]
fn insert_text_matches_parse(xs: Vec<u16>) -> bool {
    let text = xs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut tree = Tree::new();

    tree.insert_text(&text) == Ok(xs.len())
        && xs.iter().all(|&x| tree.contains(x.into()))
}
