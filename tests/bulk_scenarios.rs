use avl_forest::{join_trees, AvlTree, Traversal};

fn tree(values: &[i32]) -> AvlTree<i32> {
    let mut t = AvlTree::new();
    for &v in values {
        t.insert(v);
    }
    t
}

fn in_order<C: Fn(&i32, &i32) -> i32>(t: &AvlTree<i32, C>) -> Vec<i32> {
    t.ordered(Traversal::InOrder).into_iter().copied().collect()
}

#[test]
fn split_around_a_present_key() {
    let split = tree(&[8, 5, 11, 6, 9, 4, 14]).split_at(&5);
    assert_eq!(in_order(&split.left), vec![4]);
    assert!(split.is_present);
    assert_eq!(in_order(&split.right), vec![6, 8, 9, 11, 14]);
}

#[test]
fn split_around_an_absent_key() {
    let split = tree(&[8, 5, 11]).split_at(&7);
    assert_eq!(in_order(&split.left), vec![5]);
    assert!(!split.is_present);
    assert_eq!(in_order(&split.right), vec![8, 11]);
}

#[test]
fn split_of_empty_tree_yields_two_empty_trees() {
    let split = tree(&[]).split_at(&3);
    assert!(split.left.is_empty());
    assert!(!split.is_present);
    assert!(split.right.is_empty());
}

#[test]
fn join_with_key_needs_a_rotation() {
    let a = tree(&[6, 4, 9, 8, 12]);
    let b = tree(&[16]);
    let joined = join_trees(a, Some(15), b).unwrap();
    let pre: Vec<i32> = joined
        .ordered(Traversal::PreOrder)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(pre, vec![9, 6, 4, 8, 15, 12, 16]);
    joined.assert_valid().unwrap();
}

#[test]
fn join_of_two_empty_trees_with_key_is_a_singleton() {
    let joined = join_trees(tree(&[]), Some(3), tree(&[])).unwrap();
    assert_eq!(in_order(&joined), vec![3]);
    assert_eq!(joined.len(), 1);
}

#[test]
fn overlap_error_carries_the_bounds() {
    let err = join_trees(tree(&[2, 10]), Some(8), tree(&[7])).unwrap_err();
    assert_eq!(err.key(), Some("8"));
    assert_eq!(err.lower_bound(), "10");
    assert_eq!(err.upper_bound(), "7");
    assert_eq!(
        err.to_string(),
        "Cannot join 2 overlapping trees. The key \"8\" must be greater than \"10\" and lower than \"7\" based on the comparator provided"
    );
}

#[test]
fn keyless_overlap_error_has_its_own_form() {
    let err = join_trees(tree(&[1, 9]), None, tree(&[4])).unwrap_err();
    assert_eq!(err.key(), None);
    assert_eq!(err.lower_bound(), "9");
    assert_eq!(err.upper_bound(), "4");
    assert_eq!(
        err.to_string(),
        "Cannot join 2 overlapping trees. The lowerbound of \"9\" must be less than the upperbound of \"4\""
    );
}

#[test]
fn empty_sides_waive_their_half_of_the_check() {
    let joined = join_trees(tree(&[]), Some(5), tree(&[9])).unwrap();
    assert_eq!(in_order(&joined), vec![5, 9]);
    let joined = join_trees(tree(&[1]), Some(5), tree(&[])).unwrap();
    assert_eq!(in_order(&joined), vec![1, 5]);
    let joined = join_trees(tree(&[]), None, tree(&[2, 4])).unwrap();
    assert_eq!(in_order(&joined), vec![2, 4]);
}

#[test]
fn split_then_join_with_key_restores_union_with_key() {
    let values = [10, 4, 16, 2, 7, 12, 20, 1, 5];
    for k in [0, 1, 6, 7, 13, 25] {
        let split = tree(&values).split_at(&k);
        let joined = join_trees(split.left, Some(k), split.right).unwrap();
        let mut expected: Vec<i32> = values.to_vec();
        if !expected.contains(&k) {
            expected.push(k);
        }
        expected.sort_unstable();
        assert_eq!(in_order(&joined), expected, "key {k}");
        joined.assert_valid().unwrap();
    }
}

#[test]
fn split_then_join2_drops_the_key() {
    let values = [10, 4, 16, 2, 7, 12, 20, 1, 5];
    for k in [0, 4, 7, 10, 20, 25] {
        let split = tree(&values).split_at(&k);
        let joined = join_trees(split.left, None, split.right).unwrap();
        let mut expected: Vec<i32> = values.iter().copied().filter(|v| *v != k).collect();
        expected.sort_unstable();
        assert_eq!(in_order(&joined), expected, "key {k}");
        joined.assert_valid().unwrap();
    }
}

#[test]
fn union_intersection_difference_on_overlapping_sets() {
    let a = [1, 2, 3, 4];
    let b = [3, 4, 5, 6];
    assert_eq!(in_order(&tree(&a).union(tree(&b))), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(in_order(&tree(&a).intersection(tree(&b))), vec![3, 4]);
    assert_eq!(in_order(&tree(&a).difference(tree(&b))), vec![1, 2]);
}

#[test]
fn set_operations_are_idempotent() {
    let base = [2, 9, 4, 11, 7];
    let sorted = {
        let mut v = base.to_vec();
        v.sort_unstable();
        v
    };
    assert_eq!(in_order(&tree(&base).union(tree(&base))), sorted);
    assert_eq!(in_order(&tree(&base).intersection(tree(&base))), sorted);
    assert!(tree(&base).difference(tree(&base)).is_empty());
}

#[test]
fn result_uses_the_left_comparator() {
    let rev = |a: &i32, b: &i32| {
        if a == b {
            0
        } else if a > b {
            -1
        } else {
            1
        }
    };
    let mut a = AvlTree::with_comparator(rev);
    let mut b = AvlTree::with_comparator(rev);
    for v in [3, 1, 2] {
        a.insert(v);
    }
    for v in [4, 2] {
        b.insert(v);
    }
    let u = a.union(b);
    assert_eq!(in_order(&u), vec![4, 3, 2, 1]);
    u.assert_valid().unwrap();
}

#[test]
fn joined_trees_stay_balanced_at_scale() {
    let left: Vec<i32> = (0..512).collect();
    let right: Vec<i32> = (600..620).collect();
    let joined = join_trees(tree(&left), Some(550), tree(&right)).unwrap();
    assert_eq!(joined.len(), 533);
    assert!(joined.height() <= 12);
    joined.assert_valid().unwrap();
}
