//! An ordered set based on a parent-linked binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use super::map::{self, Map};
use super::node::NodeRef;

/// An ordered set based on a binary search tree.
///
/// Each item is stored as the key of a tree node and serves as its own value.
///
/// The behavior of this set is unspecified if an item's ordering relative to any other item
/// changes while the item is in the set.
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    map: Map<T, (), C>,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    ///
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set { map: Map::new() } }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = ordtree::Set::with_cmp(natural().rev());
    ///
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { map: Map::with_cmp(cmp) } }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the number of items in the set.
    ///
    /// The count is not cached: every call walks the whole tree.
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C { self.map.cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.map.clear(); }

    /// Inserts an item into the set unless it already contains an equal item, then rebalances the
    /// tree. Returns `true` if the item was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    /// assert!(!set.has(&1));
    /// assert!(set.add(1));
    /// assert!(set.has(&1));
    /// assert!(!set.add(1));
    /// ```
    pub fn add(&mut self, item: T) -> bool where C: Clone { self.map.add(item, ()) }

    /// Inserts an item into the set, returning `true` if the set did not already contain the item.
    ///
    /// This is the same as [`add`](#method.add).
    pub fn insert(&mut self, item: T) -> bool where C: Clone { self.add(item) }

    /// Inserts an item into the set, replacing an equal item if there is one, then rebalances the
    /// tree. Returns the replaced item, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::with_cmp(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
    /// set.add((1, "a"));
    ///
    /// assert_eq!(set.replace((1, "b")), Some((1, "a")));
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [&(1, "b")]);
    /// ```
    pub fn replace(&mut self, item: T) -> Option<T> where C: Clone {
        self.map.put(item, (), true).map(|e| e.0)
    }

    /// Removes the given item from the set, returning `true` if the set contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    ///
    /// set.add(2);
    /// set.add(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.has(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.delete(item)
    }

    /// Removes and returns the item equal to the given one, or `None` if the set does not contain
    /// it.
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        self.map.remove(item).map(|e| e.0)
    }

    /// Checks if the set contains the given item.
    pub fn has<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.has(item)
    }

    /// Checks if the set contains the given item.
    ///
    /// This is the same as [`has`](#method.has).
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.map.has(item)
    }

    /// Returns a reference to the stored item equal to the given one, or `None` if the set does
    /// not contain it.
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.map.find(item).map(|node| node.key())
    }

    /// Returns a handle to the node holding the given item, or `None` if the set does not contain
    /// it.
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Option<NodeRef<T, (), C>>
        where C: Compare<Q, T> {

        self.map.find(item)
    }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    ///
    /// `Set` implements `Ord`, so on an owned set `set.min()` resolves to `Ord::min`. Call this
    /// through a reference or as `Set::min(&set)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    /// assert_eq!(ordtree::Set::min(&set), None);
    ///
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// assert_eq!(ordtree::Set::min(&set), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> { Map::min(&self.map).map(|e| e.0) }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    ///
    /// Like [`min`](#method.min), call this through a reference.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    /// assert_eq!((&set).max(), None);
    ///
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// assert_eq!((&set).max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> { Map::max(&self.map).map(|e| e.0) }

    /// Returns a handle to the tree's root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<NodeRef<T, (), C>> { self.map.root() }

    /// Returns the number of levels in the tree.
    pub fn depth(&self) -> usize { self.map.depth() }

    /// Checks that the tree is a well-formed binary search tree with consistent parent links.
    pub fn verify(&self) -> bool { self.map.verify() }

    /// Calls the given function with each item, passed as both value and key, and the set, in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    ///
    /// set.add(3);
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut seen = vec![];
    /// set.for_each(|value, key, _| seen.push(value + key));
    /// assert_eq!(seen, [2, 4, 6]);
    /// ```
    pub fn for_each<F>(&self, mut f: F) where F: FnMut(&T, &T, &Self) {
        for item in self.iter() { f(item, item, self); }
    }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    pub fn iter(&self) -> Iter<T, C> { Iter(self.map.keys()) }

    /// Returns an iterator over the set.
    ///
    /// This is the same as [`iter`](#method.iter).
    pub fn values(&self) -> Iter<T, C> { self.iter() }
}

impl<T, C> Clone for Set<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { Set { map: self.map.clone() } }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set { map: Map::default() } }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> + Clone {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.add(item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Clone + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;
    fn into_iter(self) -> Iter<'a, T, C> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = ordtree::Set::new();
    ///
    /// set.add(2);
    /// set.add(1);
    /// set.add(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.map.into_iter()) }
}

impl<T, C> PartialEq for Set<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.map == other.map }
}

impl<T, C> Eq for Set<T, C> where C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.map.partial_cmp(&other.map)
    }
}

impl<T, C> Ord for Set<T, C> where C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { Ord::cmp(&self.map, &other.map) }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// Acquire through the `IntoIterator` trait.
pub struct IntoIter<T>(map::IntoIter<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back().map(|e| e.0) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator over the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = ordtree::Set::new();
///
/// set.add(2);
/// set.add(1);
/// set.add(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a, C: 'a>(map::Keys<'a, T, (), C>);

impl<'a, T, C> Clone for Iter<'a, T, C> {
    fn clone(&self) -> Iter<'a, T, C> { Iter(self.0.clone()) }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> {}
