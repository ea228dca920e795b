use avl_forest::{AvlTree, Traversal};

fn tree(values: &[i32]) -> AvlTree<i32> {
    let mut t = AvlTree::new();
    for &v in values {
        t.insert(v);
    }
    t
}

fn collected<C: Fn(&i32, &i32) -> i32>(t: &AvlTree<i32, C>, order: Traversal) -> Vec<i32> {
    t.ordered(order).into_iter().copied().collect()
}

#[test]
fn left_rotation_on_ascending_run() {
    let t = tree(&[1, 2, 3]);
    assert_eq!(collected(&t, Traversal::PreOrder), vec![2, 1, 3]);
    t.assert_valid().unwrap();
}

#[test]
fn right_rotation_on_descending_run() {
    let t = tree(&[0, -1, -2]);
    assert_eq!(collected(&t, Traversal::PreOrder), vec![-1, -2, 0]);
    t.assert_valid().unwrap();
}

#[test]
fn left_right_double_rotation() {
    let t = tree(&[5, 3, 4]);
    assert_eq!(collected(&t, Traversal::PreOrder), vec![4, 3, 5]);
    t.assert_valid().unwrap();
}

#[test]
fn right_left_double_rotation() {
    let t = tree(&[5, 8, 7]);
    assert_eq!(collected(&t, Traversal::PreOrder), vec![7, 5, 8]);
    t.assert_valid().unwrap();
}

#[test]
fn remove_triggers_rebalance() {
    let mut t = tree(&[6, 4, 9, 1, 5]);
    assert!(t.remove(&9));
    assert_eq!(collected(&t, Traversal::PreOrder), vec![4, 1, 6, 5]);
    t.assert_valid().unwrap();
}

#[test]
fn insert_then_remove_round_trip() {
    let mut t = tree(&[10, 5, 15, 3, 8, 12, 20]);
    let before = collected(&t, Traversal::InOrder);
    t.insert(9);
    assert!(t.remove(&9));
    assert_eq!(collected(&t, Traversal::InOrder), before);
    t.assert_valid().unwrap();
}

#[test]
fn traversal_orders_agree_on_membership() {
    let t = tree(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(collected(&t, Traversal::InOrder), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(collected(&t, Traversal::PreOrder), vec![4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(collected(&t, Traversal::PostOrder), vec![1, 3, 2, 5, 7, 6, 4]);
    assert_eq!(
        collected(&t, Traversal::BreadthFirst),
        vec![4, 2, 6, 1, 3, 5, 7]
    );
    for v in 1..=7 {
        assert!(t.contains(&v));
    }
    assert!(!t.contains(&0));
}

#[test]
fn length_tracks_ordered_len() {
    let mut t = tree(&[3, 1, 4, 1, 5, 9, 2, 6]);
    assert_eq!(t.len(), t.ordered(Traversal::InOrder).len());
    t.remove(&4);
    assert_eq!(t.len(), t.ordered(Traversal::InOrder).len());
}

#[test]
fn bounds_follow_the_ordered_extremes() {
    let mut t = tree(&[8, 3, 11, 1, 6]);
    assert_eq!(t.lowest(), Some(&1));
    assert_eq!(t.highest(), Some(&11));
    assert!(t.remove(&1));
    assert!(t.remove(&11));
    assert_eq!(t.lowest(), Some(&3));
    assert_eq!(t.highest(), Some(&8));
    t.clear();
    assert_eq!(t.lowest(), None);
    assert_eq!(t.highest(), None);
    assert!(t.is_empty());
}

#[test]
fn first_where_requires_a_directing_predicate() {
    let t = tree(&[10, 5, 15, 3, 8, 12, 20]);
    assert_eq!(t.first_where(|v| 15 - *v), Some(&15));
    assert_eq!(t.first_where(|v| 4 - *v), None);
}

#[test]
fn remove_first_where_returns_the_value() {
    let mut t = tree(&[10, 5, 15]);
    assert_eq!(t.remove_first_where(|v| 5 - *v), Some(5));
    assert_eq!(t.len(), 2);
    assert!(!t.contains(&5));
    t.assert_valid().unwrap();
}
