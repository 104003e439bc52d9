//! An ordered map based on a parent-linked binary search tree.

use compare::{Compare, Natural};
use log::{debug, trace};
use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::ops;
use std::vec;
use super::node::{self, Link, NodeRef, Walk};

/// An ordered map based on a binary search tree.
///
/// Every insertion through [`add`](#method.add) or [`set`](#method.set) is followed by a
/// rebalancing pass over the whole tree. Removals do not rebalance.
///
/// The behavior of this map is unspecified if a key's ordering relative to any other key changes
/// while the key is in the map, or if the comparator is not a total order. The tree is then no
/// longer a valid search tree, which [`verify`](#method.verify) detects.
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    arena: node::Arena<K, V, C>,
    root: Link,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// The comparator becomes the ordering relation of the first node inserted, and every later
    /// node inherits the relation of the node it is attached to.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = ordtree::Map::with_cmp(natural().rev());
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { arena: node::Arena::new(), root: None, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.add(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// The count is not cached: every call walks the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.add(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { node::size(&self.arena, self.root) }

    /// Returns a reference to the map's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing map of {} nodes", self.arena.len());
        self.root = None;
        self.arena.clear();
    }

    /// Inserts an entry into the map unless it already contains the key, then rebalances the
    /// tree. Returns `true` if the entry was inserted.
    ///
    /// An existing entry keeps both its key and its value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert!(map.add(1, "a"));
    /// assert!(!map.add(1, "b"));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn add(&mut self, key: K, value: V) -> bool where C: Clone {
        self.put(key, value, false).is_none()
    }

    /// Inserts an entry into the map, replacing the key and value of an existing entry with an
    /// equal key, then rebalances the tree. Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert_eq!(map.set(1, "a"), None);
    /// assert_eq!(map.set(1, "b"), Some("a"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> where C: Clone {
        self.put(key, value, true).map(|e| e.1)
    }

    /// Inserts an entry into the map, returning the previous value, if any, associated
    /// with the key.
    ///
    /// This is the same as [`set`](#method.set).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> where C: Clone {
        self.set(key, value)
    }

    // Returns the displaced entry: the old one if `replace` is set, the given one otherwise.
    pub(crate) fn put(&mut self, key: K, value: V, replace: bool) -> Option<(K, V)>
        where C: Clone {

        let (root, displaced) =
            node::add(&mut self.arena, None, self.root, key, value, &self.cmp, replace);
        self.root = node::balance(&mut self.arena, Some(root));
        trace!("rebalanced to root {:?}, depth {}", self.root, self.depth());
        displaced
    }

    /// Removes and returns the entry whose key is equal to the given key, returning
    /// `None` if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        let found = node::find(&self.arena, self.root, key)?;
        let (replacement, key, value) = node::remove(&mut self.arena, found);
        if self.root == Some(found) { self.root = replacement; }
        Some((key, value))
    }

    /// Removes the entry whose key is equal to the given key, returning `true` if the map
    /// contained the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert!(!map.delete(&"x"));
    ///
    /// map.add("x", 1);
    /// assert!(map.delete(&"x"));
    /// assert!(map.is_empty());
    /// ```
    pub fn delete<Q: ?Sized>(&mut self, key: &Q) -> bool where C: Compare<Q, K> {
        self.remove(key).is_some()
    }

    /// Returns a handle to the node holding the given key, or `None` if the map does not contain
    /// the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add('b', 2);
    /// map.add('a', 1);
    /// map.add('c', 3);
    ///
    /// let node = map.find(&'a').unwrap();
    /// assert_eq!(node.value(), &1);
    /// assert_eq!(node.up().map(|up| *up.key()), Some('b'));
    /// assert!(map.find(&'d').is_none());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<NodeRef<K, V, C>> where C: Compare<Q, K> {
        node::find(&self.arena, self.root, key).and_then(|index| self.arena.node(index))
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert!(!map.has(&1));
    /// map.add(1, "a");
    /// assert!(map.has(&1));
    /// ```
    pub fn has<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::find(&self.arena, self.root, key).is_some()
    }

    /// Checks if the map contains the given key.
    ///
    /// This is the same as [`has`](#method.has).
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.has(key)
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.add(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.find(key).map(|node| node.value())
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// map.add(1, "a");
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let index = node::find(&self.arena, self.root, key)?;
        self.arena.get_mut(index).map(|node| node.value_mut())
    }

    /// Returns a reference to the map's minimum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// When `V: Ord` the map implements `Ord`, and `map.min()` on an owned map resolves to
    /// `Ord::min`. Call this through a reference or as `Map::min(&map)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert_eq!(ordtree::Map::min(&map), None);
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// assert_eq!(ordtree::Map::min(&map), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        self.root().map(|root| root.min()).map(|node| (node.key(), node.value()))
    }

    /// Returns a reference to the map's maximum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// Like [`min`](#method.min), call this through a reference.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    /// assert_eq!((&map).max(), None);
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// assert_eq!((&map).max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        self.root().map(|root| root.max()).map(|node| (node.key(), node.value()))
    }

    /// Returns a handle to the tree's root node, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(1, "a");
    /// map.add(2, "b");
    /// map.add(3, "c");
    ///
    /// let root = map.root().unwrap();
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(3));
    /// ```
    pub fn root(&self) -> Option<NodeRef<K, V, C>> {
        self.root.and_then(|index| self.arena.node(index))
    }

    /// Returns the number of levels in the tree.
    pub fn depth(&self) -> usize { node::depth(&self.arena, self.root) }

    /// Checks that the tree is a well-formed binary search tree under its nodes' ordering
    /// relations, with consistent parent links.
    ///
    /// Mutations never call this themselves. A `false` result means a comparator broke its
    /// contract.
    pub fn verify(&self) -> bool {
        self.root().map_or(true, |root| root.up().is_none())
            && node::verify(&self.arena, self.root, None, None)
    }

    /// Calls the given function with each value, its key and the map, in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    ///
    /// let mut seen = vec![];
    /// map.for_each(|value, key, map| seen.push((*key, *value, map.len())));
    /// assert_eq!(seen, [(1, "a", 2), (2, "b", 2)]);
    /// ```
    pub fn for_each<F>(&self, mut f: F) where F: FnMut(&V, &K, &Self) {
        for (key, value) in self.iter() { f(value, key, self); }
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    /// map.add(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V, C> {
        Iter(node::Entries(node::Iter::new(&self.arena, self.root, self.arena.len())))
    }

    /// Returns an iterator over the map's entries.
    ///
    /// This is the same as [`iter`](#method.iter).
    pub fn entries(&self) -> Iter<K, V, C> { self.iter() }

    /// Returns an iterator over the map's keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn keys(&self) -> Keys<K, V, C> {
        Keys(node::Keys(node::Iter::new(&self.arena, self.root, self.arena.len())))
    }

    /// Returns an iterator over the map's values in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add(2, "b");
    /// map.add(1, "a");
    ///
    /// assert_eq!(map.values().collect::<Vec<_>>(), [&"a", &"b"]);
    /// ```
    pub fn values(&self) -> Values<K, V, C> {
        Values(node::Values(node::Iter::new(&self.arena, self.root, self.arena.len())))
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = ordtree::Map::new();
    ///
    /// map.add("b", 2);
    /// map.add("a", 1);
    /// map.add("c", 3);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 2;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        IterMut(self.arena.entries_mut(self.root).into_iter())
    }

    /// Returns an iterator over mutable references to the map's values in ascending key order.
    pub fn values_mut(&mut self) -> ValuesMut<K, V> { ValuesMut(self.iter_mut()) }
}

impl<K, V, C> Clone for Map<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        let (arena, root) = node::clone(&self.arena, self.root);
        Map { arena: arena, root: root, cmp: self.cmp.clone() }
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> + Clone {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.set(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C>
    where C: Compare<K> + Clone + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;
    fn into_iter(self) -> Iter<'a, K, V, C> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        let walk = Walk::new(self.root, self.arena.len());
        let (links, entries) = self.arena.into_parts();
        IntoIter { links: links, entries: entries, walk: walk }
    }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp.compares_eq(&l.0, &r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp.compare(&l.0, &r.0) {
                    Equal => match l.1.partial_cmp(&r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C> Ord for Map<K, V, C> where V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp.compare(&l.0, &r.0) {
                    Equal => match l.1.cmp(&r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = ordtree::Map::new();
///
/// map.add(2, "b");
/// map.add(1, "a");
/// map.add(3, "c");
///
/// let entries: Vec<_> = map.into_iter().collect();
/// assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
/// ```
pub struct IntoIter<K, V> {
    links: Vec<(Link, Link)>,
    entries: Vec<Option<(K, V)>>,
    walk: Walk,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let index = self.walk.next(&self.links[..])?;
        self.entries[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.walk.len(), Some(self.walk.len())) }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        let index = self.walk.next_back(&self.links[..])?;
        self.entries[index].take()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a, C: 'a>(node::Entries<'a, K, V, C>);

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Iter<'a, K, V, C> { Iter(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back() }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> {}

/// An iterator over the map's keys in ascending order.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a, C: 'a>(node::Keys<'a, K, V, C>);

impl<'a, K, V, C> Clone for Keys<'a, K, V, C> {
    fn clone(&self) -> Keys<'a, K, V, C> { Keys(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Keys<'a, K, V, C> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back() }
}

impl<'a, K, V, C> ExactSizeIterator for Keys<'a, K, V, C> {}

/// An iterator over the map's values in ascending key order.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a, C: 'a>(node::Values<'a, K, V, C>);

impl<'a, K, V, C> Clone for Values<'a, K, V, C> {
    fn clone(&self) -> Values<'a, K, V, C> { Values(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Values<'a, K, V, C> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back() }
}

impl<'a, K, V, C> ExactSizeIterator for Values<'a, K, V, C> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait.
pub struct IterMut<'a, K: 'a, V: 'a>(vec::IntoIter<(&'a K, &'a mut V)>);

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator over mutable references to the map's values in ascending key order.
///
/// Acquire through [`Map::values_mut`](struct.Map.html#method.values_mut).
pub struct ValuesMut<'a, K: 'a, V: 'a>(IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;
    fn next(&mut self) -> Option<&'a mut V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a mut V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}
