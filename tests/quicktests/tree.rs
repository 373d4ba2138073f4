use iterbst::BinarySearchTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.contains(x)) && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = BinarySearchTree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    tree.in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let len = tree.len();
    let shape = tree.to_string_pre_order();

    tree.extend(xs.iter().copied());
    tree.len() == len && tree.to_string_pre_order() == shape
}

#[quickcheck]
fn clone_rebuilds_the_same_shape(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let cloned = tree.clone();

    cloned.to_string_pre_order() == tree.to_string_pre_order() && cloned.depth() == tree.depth()
}
