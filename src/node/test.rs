use compare::{Compare, Natural, natural};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use std::cmp::Ordering;
use super::{Arena, Link};
use crate::Map;

type Tree = Arena<u32, char, Natural<u32>>;

/// Builds a tree by plain insertion, without rebalancing.
fn build(keys: &[u32]) -> (Tree, Link) {
    let mut arena = Arena::new();
    let mut root = None;

    for &key in keys {
        let value = char::from_digit(key % 36, 36).unwrap_or('?');
        let (top, _) = super::add(&mut arena, None, root, key, value, &natural(), false);
        root = Some(top);
    }

    (arena, root)
}

/// Renders a subtree as `key(left,right)`, leaving out the parentheses for leaves.
fn render<V, C>(arena: &Arena<u32, V, C>, node: Link) -> String {
    match node {
        None => String::new(),
        Some(index) => {
            let n = &arena[index];
            if n.left.is_none() && n.right.is_none() {
                n.key.to_string()
            } else {
                format!("{}({},{})", n.key, render(arena, n.left), render(arena, n.right))
            }
        }
    }
}

fn index_of(arena: &Tree, root: Link, key: u32) -> usize {
    super::find(arena, root, &key).unwrap()
}

fn imbalance<V, C>(arena: &Arena<u32, V, C>, index: usize) -> isize {
    super::depth(arena, arena[index].left) as isize - super::depth(arena, arena[index].right) as isize
}

#[test]
fn test_iter() {
    let (arena, root) = build(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(super::keys(&arena, root).cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(super::keys(&arena, root).rev().cloned().collect::<Vec<_>>(),
               [7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(super::values(&arena, root).count(), 7);

    let mut it = super::entries(&arena, root);
    assert_eq!(it.len(), 7);
    assert_eq!(it.next(), Some((&1, &'1')));
    assert_eq!(it.next_back(), Some((&7, &'7')));
    assert_eq!(it.next(), Some((&2, &'2')));
    assert_eq!(it.next_back(), Some((&6, &'6')));
    assert_eq!(it.len(), 3);
    assert_eq!(it.map(|e| *e.0).collect::<Vec<_>>(), [3, 4, 5]);
}

#[test]
fn test_iter_subtree() {
    let (arena, root) = build(&[4, 2, 6, 1, 3, 5, 7]);
    let six = index_of(&arena, root, 6);
    assert_eq!(super::keys(&arena, Some(six)).cloned().collect::<Vec<_>>(), [5, 6, 7]);
    assert_eq!(super::iter(&arena, None).next().map(|node| node.index()), None);
}

#[test]
fn test_iter_restartable() {
    let (arena, root) = build(&[3, 1, 2]);
    let it = super::keys(&arena, root);
    let first: Vec<_> = it.clone().collect();
    let second: Vec<_> = it.collect();
    assert_eq!(first, second);
}

#[test]
fn test_up_links() {
    let (arena, root) = build(&[2, 1, 3]);
    let node = arena.node(root.unwrap()).unwrap();

    assert!(node.up().is_none());
    assert_eq!(node.left().and_then(|l| l.up()).map(|up| up.index()), root);
    assert_eq!(node.right().and_then(|r| r.up()).map(|up| up.index()), root);
    assert_eq!(node.left().map(|l| l.root().index()), root);
}

#[test]
fn test_min_max() {
    let (arena, root) = build(&[4, 2, 6, 1, 3, 5, 7]);
    let root = root.unwrap();
    assert_eq!(arena[super::min(&arena, root)].key, 1);
    assert_eq!(arena[super::max(&arena, root)].key, 7);

    let two = index_of(&arena, Some(root), 2);
    assert_eq!(arena[super::max(&arena, two)].key, 3);
}

#[test]
fn test_measures() {
    let (arena, root) = build(&[1, 2, 3, 4]);
    assert_eq!(render(&arena, root), "1(,2(,3(,4)))");
    assert_eq!(super::depth(&arena, root), 4);
    assert_eq!(super::size(&arena, root), 4);
    assert_eq!(super::level(&arena, root), 1);
    assert_eq!(super::level(&arena, Some(index_of(&arena, root, 4))), 4);

    assert_eq!(super::depth(&arena, None), 0);
    assert_eq!(super::size(&arena, None), 0);
    assert_eq!(super::level(&arena, None), 0);
}

#[test]
fn test_find() {
    let (arena, root) = build(&[4, 2, 6]);
    assert_eq!(super::find(&arena, root, &6).map(|index| arena[index].value), Some('6'));
    assert_eq!(super::find(&arena, root, &5), None);
    assert_eq!(super::find(&arena, None, &4), None);
}

#[test]
fn test_add_existing() {
    let (mut arena, root) = build(&[2, 1]);

    let (top, displaced) = super::add(&mut arena, None, root, 1, 'x', &natural(), false);
    assert_eq!(Some(top), root);
    assert_eq!(displaced, Some((1, 'x')));
    assert_eq!(arena[index_of(&arena, root, 1)].value, '1');

    let (_, displaced) = super::add(&mut arena, None, root, 1, 'y', &natural(), true);
    assert_eq!(displaced, Some((1, '1')));
    assert_eq!(arena[index_of(&arena, root, 1)].value, 'y');
    assert_eq!(arena.len(), 2);
}

#[derive(Clone, Debug, PartialEq)]
struct Tagged(u8);

impl Compare<u32> for Tagged {
    fn compare(&self, l: &u32, r: &u32) -> Ordering { l.cmp(r) }
}

#[test]
fn test_add_inherits_relation() {
    let mut arena = Arena::new();
    let (root, _) = super::add(&mut arena, None, None, 2, (), &Tagged(1), false);
    super::add(&mut arena, None, Some(root), 1, (), &Tagged(2), false);
    super::add(&mut arena, None, Some(root), 3, (), &Tagged(3), false);

    for node in super::iter(&arena, Some(root)) {
        assert_eq!(arena[node.index()].less(), &Tagged(1));
    }
}

#[test]
fn test_remove_leaf() {
    let _ = pretty_env_logger::try_init();

    let (mut arena, root) = build(&[2, 1, 3]);
    let one = index_of(&arena, root, 1);

    assert_eq!(super::remove(&mut arena, one), (None, 1, '1'));
    assert_eq!(render(&arena, root), "2(,3)");
    assert_eq!(arena.len(), 2);
    assert!(arena.get(one).is_none());
}

#[test]
fn test_remove_one_child() {
    let (mut arena, root) = build(&[2, 1, 3, 4]);
    let three = index_of(&arena, root, 3);
    let four = index_of(&arena, root, 4);

    assert_eq!(super::remove(&mut arena, three), (Some(four), 3, '3'));
    assert_eq!(render(&arena, root), "2(1,4)");
    assert_eq!(arena[four].up, root);
    assert!(super::verify(&arena, root, None, None));
}

#[test]
fn test_remove_two_children() {
    let (mut arena, root) = build(&[4, 2, 6, 5, 7]);
    let four = root.unwrap();

    assert_eq!(super::remove(&mut arena, four), (Some(four), 4, '4'));
    assert_eq!(render(&arena, root), "5(2,6(,7))");
    assert_eq!(arena.len(), 4);
    assert!(super::verify(&arena, root, None, None));
}

#[test]
fn test_remove_successor_with_right_child() {
    let (mut arena, root) = build(&[2, 1, 5, 3, 6, 4]);
    assert_eq!(render(&arena, root), "2(1,5(3(,4),6))");

    super::remove(&mut arena, root.unwrap());
    assert_eq!(render(&arena, root), "3(1,5(4,6))");
    assert!(super::verify(&arena, root, None, None));
    assert_eq!(super::size(&arena, root), 5);
}

#[test]
fn test_remove_reuses_slot() {
    let (mut arena, root) = build(&[2, 1, 3]);
    let one = index_of(&arena, root, 1);
    super::remove(&mut arena, one);

    super::add(&mut arena, None, root, 0, 'z', &natural(), false);
    assert_eq!(index_of(&arena, root, 0), one);
}

#[test]
fn test_rotate() {
    let (mut arena, root) = build(&[2, 1, 3]);
    let two = root.unwrap();
    let three = index_of(&arena, root, 3);

    let top = super::rotate_left(&mut arena, two);
    assert_eq!(top, three);
    assert_eq!(render(&arena, Some(top)), "3(2(1,),)");
    assert_eq!(arena[three].up, None);
    assert_eq!(arena[two].up, Some(three));
    assert!(super::verify(&arena, Some(top), None, None));

    let top = super::rotate_right(&mut arena, top);
    assert_eq!(top, two);
    assert_eq!(render(&arena, Some(top)), "2(1,3)");
    assert_eq!(arena[two].up, None);
    assert_eq!(arena[three].up, Some(two));
}

#[test]
fn test_rotate_inner_subtree() {
    let (mut arena, root) = build(&[2, 1, 4, 3, 5]);
    let four = index_of(&arena, root, 4);
    let three = index_of(&arena, root, 3);

    super::rotate_left(&mut arena, root.unwrap());
    assert_eq!(render(&arena, Some(four)), "4(2(1,3),5)");
    assert_eq!(arena[three].up, root);
}

#[test]
fn test_rotate_without_pivot() {
    let (mut arena, root) = build(&[2, 1]);
    let two = root.unwrap();
    assert_eq!(super::rotate_left(&mut arena, two), two);
    assert_eq!(render(&arena, root), "2(1,)");
}

#[test]
fn test_balance_chain() {
    let (mut arena, root) = build(&[1, 2, 3, 4]);
    let root = super::balance(&mut arena, root);

    assert_eq!(render(&arena, root), "2(1,3(,4))");
    assert_eq!(root.map(|index| arena[index].up), Some(None));
    assert!(super::verify(&arena, root, None, None));

    for node in super::iter(&arena, root) {
        assert!(imbalance(&arena, node.index()).abs() <= 1);
    }
}

#[test]
fn test_balance_single_rotation() {
    let (mut arena, root) = build(&[4, 2, 3]);
    assert_eq!(render(&arena, root), "4(2(,3),)");

    let root = super::balance(&mut arena, root);
    assert_eq!(render(&arena, root), "2(,4(3,))");
    assert_eq!(imbalance(&arena, root.unwrap()), -2);
    assert!(super::verify(&arena, root, None, None));
}

#[test]
fn test_balance_empty() {
    let mut arena = Tree::new();
    assert_eq!(super::balance(&mut arena, None), None);
}

#[test]
fn test_verify_invalid() {
    let (mut arena, root) = build(&[2, 1, 3]);
    assert!(super::verify(&arena, root, None, None));

    let three = index_of(&arena, root, 3);
    arena[three].key = 0;
    assert!(!super::verify(&arena, root, None, None));
}

#[test]
fn test_verify_invalid_complex() {
    let (mut arena, root) = build(&[5, 3, 7, 4]);
    let four = index_of(&arena, root, 4);

    // Still greater than its parent, but no longer less than the root.
    arena[four].key = 6;
    assert!(!super::verify(&arena, root, None, None));
}

#[test]
fn test_verify_duplicate() {
    let (mut arena, root) = build(&[2, 1]);
    let one = index_of(&arena, root, 1);
    arena[one].key = 2;
    assert!(!super::verify(&arena, root, None, None));
}

#[test]
fn test_verify_bounds() {
    let (arena, root) = build(&[2, 1, 3]);
    assert!(super::verify(&arena, root, Some(&0), Some(&4)));
    assert!(!super::verify(&arena, root, Some(&1), None));
    assert!(!super::verify(&arena, root, None, Some(&3)));
}

#[test]
fn test_verify_broken_up_link() {
    let (mut arena, root) = build(&[2, 1, 3]);
    let one = index_of(&arena, root, 1);
    arena[one].up = None;
    assert!(!super::verify(&arena, root, None, None));
}

#[test]
fn test_clone() {
    let (mut arena, root) = build(&[4, 2, 6, 1, 3, 5, 7]);
    let six = index_of(&arena, root, 6);

    let (copy, copy_root) = super::clone(&arena, Some(six));
    assert_eq!(render(&copy, copy_root), "6(5,7)");
    assert_eq!(copy.len(), 3);
    assert_eq!(copy_root.map(|index| copy[index].up), Some(None));
    assert!(super::verify(&copy, copy_root, None, None));

    super::remove(&mut arena, six);
    assert_eq!(render(&copy, copy_root), "6(5,7)");
    assert_eq!(super::values(&copy, copy_root).cloned().collect::<String>(), "567");
}

/// An operation on a `Map`.
#[derive(Clone, Debug)]
enum Op<K> {
    /// Insert a key into the map.
    Insert(K),
    /// Remove the key at index `n % map.len()` from the map.
    Remove(usize),
}

impl<K> Arbitrary for Op<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Op<K> {
        if bool::arbitrary(gen) {
            Op::Insert(K::arbitrary(gen))
        } else {
            Op::Remove(usize::arbitrary(gen))
        }
    }
}

impl<K> Op<K> where K: Clone + Ord {
    /// Perform the operation on the given map.
    fn exec(self, map: &mut Map<K, ()>) {
        match self {
            Op::Insert(key) => { map.add(key, ()); }
            Op::Remove(index) => if !map.is_empty() {
                let key = map.keys().nth(index % map.len()).unwrap().clone();
                map.remove(&key);
            },
        }
    }
}

#[test]
fn test_structure() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut map = Map::new();
        for op in ops { op.exec(&mut map); }

        let it = map.iter();
        TestResult::from_bool(
            map.verify() &&
            map.root().map_or(true, |root| root.up().is_none() && root.level() == 1) &&
            it.len() == it.count() &&
            map.depth() == map.root().map_or(0, |root| root.depth())
        )
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn test_insert_balances_ascending() {
    let mut map = Map::new();
    for key in 1..8u32 { map.add(key, ()); }

    let root = map.root().unwrap();
    assert_eq!(*root.key(), 3);
    assert_eq!(render(root.arena, Some(root.index())), "3(2(1,),5(4,6(,7)))");

    for node in root.iter() {
        assert!(imbalance(root.arena, node.index()).abs() <= 1);
    }
}
