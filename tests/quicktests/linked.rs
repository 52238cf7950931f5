use linked_bst::error::Error;
use linked_bst::linked::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a plain sorted vector standing
/// in as a model multiset. This way we can ensure that after a random
/// smattering of adds, removes, and rebalances we hold the same items.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                model.push(*x);
            }
            Op::Remove(x) => {
                if let Some(pos) = model.iter().position(|m| m == x) {
                    model.remove(pos);
                    assert_eq!(tree.remove(x), Ok(*x));
                } else {
                    assert_eq!(tree.remove(x), Err(Error::NotFound));
                }
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    model.sort_unstable();
    let inorder: Vec<i8> = tree.inorder().into_iter().copied().collect();
    inorder == model && tree.len() == model.len()
}

#[quickcheck]
fn inorder_is_always_sorted(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.inorder().windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.add(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.add(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.add(*x);
    }
    for remove in &removes {
        // We may have added the same value multiple times - remove each one.
        while tree.remove(remove).is_ok() {}
    }

    let removed: HashSet<_> = removes.iter().copied().collect();
    let still_present: Vec<i8> = xs.into_iter().filter(|x| !removed.contains(x)).collect();

    removes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.len() == still_present.len()
}

#[quickcheck]
fn rebalance_preserves_contents(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.inorder().into_iter().copied().collect();

    tree.rebalance();

    let after: Vec<i8> = tree.inorder().into_iter().copied().collect();
    before == after && tree.len() == xs.len()
}

#[quickcheck]
fn rebalance_minimizes_height(xs: Vec<i8>) -> bool {
    // Distinct payloads only: equal items always route right, so a multiset
    // can rebuild taller than the distinct-key minimum.
    let distinct: HashSet<i8> = xs.into_iter().collect();
    let mut tree: Tree<i8> = distinct.iter().copied().collect();
    tree.rebalance();

    let bound = ((distinct.len() + 1) as f64).log2().ceil() as isize - 1;
    tree.height() <= bound
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    let mut expected: Vec<i8> = xs.into_iter().filter(|x| low <= *x && *x <= high).collect();
    expected.sort_unstable();

    let found: Vec<i8> = tree.range_find(&low, &high).into_iter().copied().collect();
    found == expected
}
