//! The node algorithm set.
//!
//! Nodes live in an [`Arena`] and refer to each other by index. Every node owns its `left` and
//! `right` subtrees and keeps a non-owning `up` index pointing at the node whose child slot holds
//! it. Each node also carries its own ordering relation, inherited from its parent when it is
//! created.
//!
//! The functions in this module are free operations over an arena and a node handle. None of them
//! rebalance on their own: [`balance`] is an explicit whole-subtree pass that callers run after a
//! mutation.

mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::fmt::{self, Debug};
use std::mem;
use std::ops;

pub use self::iter::{Entries, Iter, Keys, Links, Values, Walk};

/// A node handle that may be absent.
pub type Link = Option<usize>;

/// A binary search tree node.
#[derive(Clone)]
pub struct Node<K, V, C> {
    key: K,
    value: V,
    left: Link,
    right: Link,
    up: Link,
    less: C,
}

impl<K, V, C> Node<K, V, C> {
    fn new(up: Link, key: K, value: V, less: C) -> Self {
        Node { key: key, value: value, left: None, right: None, up: up, less: less }
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &V { &self.value }

    /// Returns a mutable reference to the node's value.
    pub fn value_mut(&mut self) -> &mut V { &mut self.value }

    /// Returns the node's left child, if any.
    pub fn left(&self) -> Link { self.left }

    /// Returns the node's right child, if any.
    pub fn right(&self) -> Link { self.right }

    /// Returns the node's parent, if any.
    pub fn up(&self) -> Link { self.up }

    /// Returns a reference to the ordering relation in effect for the node.
    pub fn less(&self) -> &C { &self.less }
}

/// Backing store for the nodes of one or more trees.
///
/// Removed nodes leave a vacant slot that the next allocation reuses, so the handles of live nodes
/// never change.
pub struct Arena<K, V, C> {
    slots: Vec<Option<Node<K, V, C>>>,
    free: Vec<usize>,
}

impl<K, V, C> Arena<K, V, C> {
    /// Creates an empty arena.
    pub fn new() -> Self { Arena { slots: vec![], free: vec![] } }

    /// Returns the number of live nodes in the arena.
    pub fn len(&self) -> usize { self.slots.len() - self.free.len() }

    /// Checks if the arena holds no live nodes.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the node at the given index, or `None` if the slot is vacant or out of bounds.
    pub fn get(&self, index: usize) -> Option<&Node<K, V, C>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the node at the given index, or `None` if the slot is vacant
    /// or out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node<K, V, C>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Returns a handle to the node at the given index, or `None` if the slot is vacant or out of
    /// bounds.
    pub fn node(&self, index: usize) -> Option<NodeRef<K, V, C>> {
        self.get(index).map(|_| NodeRef { arena: self, index: index })
    }

    /// Removes every node from the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    fn alloc(&mut self, node: Node<K, V, C>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn dealloc(&mut self, index: usize) -> Node<K, V, C> {
        match self.slots.get_mut(index).and_then(Option::take) {
            Some(node) => {
                self.free.push(index);
                node
            }
            None => panic!("no node at index {}", index),
        }
    }

    /// Returns the in-order entries of the tree rooted at `root` with mutable references to the
    /// values.
    pub(crate) fn entries_mut(&mut self, root: Link) -> Vec<(&K, &mut V)> {
        let order: Vec<usize> = Iter::new(self, root, self.len()).map(|node| node.index()).collect();

        let mut slots: Vec<Option<(&K, &mut V)>> = self.slots.iter_mut()
            .map(|slot| slot.as_mut().map(|node| (&node.key, &mut node.value)))
            .collect();

        order.into_iter().filter_map(|index| slots[index].take()).collect()
    }

    /// Splits the arena into its child links and its entries, both indexed by node handle.
    pub(crate) fn into_parts(self) -> (Vec<(Link, Link)>, Vec<Option<(K, V)>>) {
        self.slots.into_iter()
            .map(|slot| match slot {
                Some(node) => ((node.left, node.right), Some((node.key, node.value))),
                None => ((None, None), None),
            })
            .unzip()
    }
}

impl<K, V, C> Default for Arena<K, V, C> {
    fn default() -> Self { Arena::new() }
}

impl<K, V, C> ops::Index<usize> for Arena<K, V, C> {
    type Output = Node<K, V, C>;

    fn index(&self, index: usize) -> &Node<K, V, C> {
        match self.get(index) {
            Some(node) => node,
            None => panic!("no node at index {}", index),
        }
    }
}

impl<K, V, C> ops::IndexMut<usize> for Arena<K, V, C> {
    fn index_mut(&mut self, index: usize) -> &mut Node<K, V, C> {
        match self.get_mut(index) {
            Some(node) => node,
            None => panic!("no node at index {}", index),
        }
    }
}

impl<K, V, C> Links for Arena<K, V, C> {
    fn left(&self, node: usize) -> Link { self[node].left }
    fn right(&self, node: usize) -> Link { self[node].right }
}

/// A shared handle to a node in an arena.
pub struct NodeRef<'a, K: 'a, V: 'a, C: 'a> {
    arena: &'a Arena<K, V, C>,
    index: usize,
}

impl<'a, K, V, C> Clone for NodeRef<'a, K, V, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V, C> Copy for NodeRef<'a, K, V, C> {}

impl<'a, K, V, C> NodeRef<'a, K, V, C> {
    fn at(&self, link: Link) -> Option<Self> {
        link.map(|index| NodeRef { arena: self.arena, index: index })
    }

    fn node(&self) -> &'a Node<K, V, C> { &self.arena[self.index] }

    /// Returns the node's index in its arena.
    pub fn index(&self) -> usize { self.index }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &'a K { &self.node().key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &'a V { &self.node().value }

    /// Returns the node's left child, if any.
    pub fn left(&self) -> Option<Self> { self.at(self.node().left) }

    /// Returns the node's right child, if any.
    pub fn right(&self) -> Option<Self> { self.at(self.node().right) }

    /// Returns the node's parent, if any.
    pub fn up(&self) -> Option<Self> { self.at(self.node().up) }

    /// Returns the leftmost node of the subtree rooted at this node.
    pub fn min(&self) -> Self { NodeRef { arena: self.arena, index: min(self.arena, self.index) } }

    /// Returns the rightmost node of the subtree rooted at this node.
    pub fn max(&self) -> Self { NodeRef { arena: self.arena, index: max(self.arena, self.index) } }

    /// Returns the root of the tree containing this node.
    pub fn root(&self) -> Self { NodeRef { arena: self.arena, index: root(self.arena, self.index) } }

    /// Returns the node's distance from the root, counting the root as 1.
    pub fn level(&self) -> usize { level(self.arena, Some(self.index)) }

    /// Returns the number of levels in the subtree rooted at this node.
    pub fn depth(&self) -> usize { depth(self.arena, Some(self.index)) }

    /// Returns the number of nodes in the subtree rooted at this node.
    pub fn size(&self) -> usize { size(self.arena, Some(self.index)) }

    /// Finds the node with the given key in the subtree rooted at this node.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<Self> where C: Compare<Q, K> {
        self.at(find(self.arena, Some(self.index), key))
    }

    /// Returns an iterator over the subtree's nodes in ascending order.
    pub fn iter(&self) -> Iter<'a, K, V, C> { iter(self.arena, Some(self.index)) }

    /// Returns an iterator over the subtree's keys in ascending order.
    pub fn keys(&self) -> iter::Keys<'a, K, V, C> { iter::Keys(self.iter()) }

    /// Returns an iterator over the subtree's values in ascending order.
    pub fn values(&self) -> iter::Values<'a, K, V, C> { iter::Values(self.iter()) }

    /// Returns an iterator over the subtree's entries in ascending order.
    pub fn entries(&self) -> iter::Entries<'a, K, V, C> { iter::Entries(self.iter()) }

    /// Checks that the subtree rooted at this node is a well-formed binary search tree.
    pub fn verify(&self) -> bool where C: Compare<K> {
        verify(self.arena, Some(self.index), None, None)
    }
}

impl<'a, K, V, C> Debug for NodeRef<'a, K, V, C> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node")
            .field("index", &self.index)
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}

trait Dir {
    type Opposite: Dir<Opposite = Self>;

    fn forward<K, V, C>(node: &Node<K, V, C>) -> Link;
    fn forward_mut<K, V, C>(node: &mut Node<K, V, C>) -> &mut Link;

    fn extremum<K, V, C>(arena: &Arena<K, V, C>, mut node: usize) -> usize {
        while let Some(next) = Self::forward(&arena[node]) { node = next; }
        node
    }

    // The child on this side becomes the new local root.
    fn rotate<K, V, C>(arena: &mut Arena<K, V, C>, node: usize) -> usize {
        let pivot = match Self::forward(&arena[node]) {
            None => return node,
            Some(pivot) => pivot,
        };

        let inner = Self::Opposite::forward(&arena[pivot]);
        *Self::forward_mut(&mut arena[node]) = inner;
        if let Some(inner) = inner { arena[inner].up = Some(node); }

        let up = arena[node].up;
        relink(arena, up, node, Some(pivot));
        arena[pivot].up = up;

        *Self::Opposite::forward_mut(&mut arena[pivot]) = Some(node);
        arena[node].up = Some(pivot);

        pivot
    }
}

enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V, C>(node: &Node<K, V, C>) -> Link { node.left }
    fn forward_mut<K, V, C>(node: &mut Node<K, V, C>) -> &mut Link { &mut node.left }
}

enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V, C>(node: &Node<K, V, C>) -> Link { node.right }
    fn forward_mut<K, V, C>(node: &mut Node<K, V, C>) -> &mut Link { &mut node.right }
}

// Point `up`'s child slot that holds `old` at `new` instead.
fn relink<K, V, C>(arena: &mut Arena<K, V, C>, up: Link, old: usize, new: Link) {
    if let Some(up) = up {
        let parent = &mut arena[up];
        if parent.left == Some(old) {
            parent.left = new;
        } else if parent.right == Some(old) {
            parent.right = new;
        }
    }
}

/// Returns an iterator over the nodes of the subtree rooted at `node` in ascending order.
pub fn iter<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> Iter<K, V, C> {
    Iter::new(arena, node, size(arena, node))
}

/// Returns an iterator over the keys of the subtree rooted at `node` in ascending order.
pub fn keys<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> iter::Keys<K, V, C> {
    iter::Keys(iter(arena, node))
}

/// Returns an iterator over the values of the subtree rooted at `node` in ascending order.
pub fn values<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> iter::Values<K, V, C> {
    iter::Values(iter(arena, node))
}

/// Returns an iterator over the entries of the subtree rooted at `node` in ascending order.
pub fn entries<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> iter::Entries<K, V, C> {
    iter::Entries(iter(arena, node))
}

/// Returns the leftmost descendant of `node`.
pub fn min<K, V, C>(arena: &Arena<K, V, C>, node: usize) -> usize { Left::extremum(arena, node) }

/// Returns the rightmost descendant of `node`.
pub fn max<K, V, C>(arena: &Arena<K, V, C>, node: usize) -> usize { Right::extremum(arena, node) }

/// Returns the root of the tree containing `node`.
pub fn root<K, V, C>(arena: &Arena<K, V, C>, mut node: usize) -> usize {
    while let Some(up) = arena[node].up { node = up; }
    node
}

/// Returns the distance of `node` from its root, counting the root as 1 and an absent node as 0.
pub fn level<K, V, C>(arena: &Arena<K, V, C>, mut node: Link) -> usize {
    let mut level = 0;

    while let Some(index) = node {
        level += 1;
        node = arena[index].up;
    }

    level
}

/// Returns the number of levels in the subtree rooted at `node`, or 0 if it is absent.
pub fn depth<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> usize {
    let mut depth = 0;
    let mut frontier: Vec<usize> = node.into_iter().collect();

    while !frontier.is_empty() {
        depth += 1;
        frontier = frontier.into_iter()
            .flat_map(|index| arena[index].left.into_iter().chain(arena[index].right))
            .collect();
    }

    depth
}

/// Returns the number of nodes in the subtree rooted at `node`, or 0 if it is absent.
pub fn size<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> usize {
    let mut size = 0;
    let mut stack: Vec<usize> = node.into_iter().collect();

    while let Some(index) = stack.pop() {
        size += 1;
        stack.extend(arena[index].left);
        stack.extend(arena[index].right);
    }

    size
}

/// Finds the node with the given key in the subtree rooted at `node`.
///
/// Each visited node is compared using its own ordering relation.
pub fn find<K, V, C, Q: ?Sized>(arena: &Arena<K, V, C>, mut node: Link, key: &Q) -> Link
    where C: Compare<Q, K> {

    while let Some(index) = node {
        let n = &arena[index];

        node = match n.less.compare(key, &n.key) {
            Less => n.left,
            Greater => n.right,
            Equal => return node,
        };
    }

    None
}

/// Inserts an entry into the subtree rooted at `node`, which hangs from `up`.
///
/// If `node` is absent, a new node with parent `up` and ordering relation `less` becomes the
/// subtree. Otherwise the entry is placed below `node`, and the new node inherits the ordering
/// relation of the node it is attached to.
///
/// If the subtree already contains an equal key, the entry replaces the stored key and value when
/// `replace` is `true` and the old key and value are returned. When `replace` is `false` the
/// subtree is left unchanged and the given key and value are handed back.
///
/// Returns the subtree's root, which differs from `node` only if `node` was absent.
pub fn add<K, V, C>(arena: &mut Arena<K, V, C>, up: Link, node: Link, key: K, value: V, less: &C,
                    replace: bool) -> (usize, Option<(K, V)>)
    where C: Compare<K> + Clone {

    let top = match node {
        None => {
            let index = arena.alloc(Node::new(up, key, value, less.clone()));
            trace!("added node {} below {:?}", index, up);
            return (index, None);
        }
        Some(top) => top,
    };

    let mut index = top;

    loop {
        let (order, child) = {
            let n = &arena[index];
            let order = n.less.compare(&key, &n.key);
            (order, match order { Less => n.left, Greater => n.right, Equal => None })
        };

        match (order, child) {
            (Equal, _) => {
                if !replace { return (top, Some((key, value))); }

                let n = &mut arena[index];
                let old = (mem::replace(&mut n.key, key), mem::replace(&mut n.value, value));
                trace!("replaced entry of node {}", index);
                return (top, Some(old));
            }
            (_, Some(child)) => index = child,
            (order, None) => {
                let less = arena[index].less.clone();
                let child = arena.alloc(Node::new(Some(index), key, value, less));

                if order == Less {
                    arena[index].left = Some(child);
                } else {
                    arena[index].right = Some(child);
                }

                trace!("added node {} below {}", child, index);
                return (top, None);
            }
        }
    }
}

/// Removes the entry held by `node` and returns the node that takes its place, along with the
/// removed key and value.
///
/// If `node` has two children, the in-order successor is removed instead and its entry moves into
/// `node`, which stays in place and is returned as its own replacement. Otherwise `node` is
/// unlinked and its only child, if any, is spliced into its position.
///
/// The caller is responsible for updating its root if `node` was the root.
pub fn remove<K, V, C>(arena: &mut Arena<K, V, C>, node: usize) -> (Link, K, V) {
    let replacement = match (arena[node].left, arena[node].right) {
        (Some(_), Some(right)) => {
            let successor = min(arena, right);
            let (_, key, value) = remove(arena, successor);

            let n = &mut arena[node];
            let key = mem::replace(&mut n.key, key);
            let value = mem::replace(&mut n.value, value);
            trace!("moved successor {} into node {}", successor, node);
            return (Some(node), key, value);
        }
        (Some(child), None) | (None, Some(child)) => Some(child),
        (None, None) => None,
    };

    let replacement = splice(arena, node, replacement);
    let Node { key, value, .. } = arena.dealloc(node);
    trace!("removed node {}, replaced by {:?}", node, replacement);
    (replacement, key, value)
}

// Put `replacement` in `node`'s position under its parent.
fn splice<K, V, C>(arena: &mut Arena<K, V, C>, node: usize, replacement: Link) -> Link {
    let up = arena[node].up;
    relink(arena, up, node, replacement);
    if let Some(replacement) = replacement { arena[replacement].up = up; }
    replacement
}

/// Checks that every key in the subtree rooted at `node` lies strictly between `lower` and
/// `upper` (absent bounds are unbounded) and that the subtree is ordered under each node's
/// relation.
///
/// Also checks that every child's `up` refers to the node holding it. Performs no mutation.
pub fn verify<'a, K, V, C>(arena: &'a Arena<K, V, C>, node: Link, lower: Option<&'a K>,
                           upper: Option<&'a K>) -> bool where C: Compare<K> {

    let mut stack: Vec<(usize, Option<&K>, Option<&K>)> =
        node.into_iter().map(|index| (index, lower, upper)).collect();

    while let Some((index, lower, upper)) = stack.pop() {
        let n = &arena[index];

        if lower.map_or(false, |lower| !n.less.compares_gt(&n.key, lower)) { return false; }
        if upper.map_or(false, |upper| !n.less.compares_lt(&n.key, upper)) { return false; }

        for (child, lower, upper) in [(n.left, lower, Some(&n.key)), (n.right, Some(&n.key), upper)] {
            if let Some(child) = child {
                if arena[child].up != Some(index) { return false; }
                stack.push((child, lower, upper));
            }
        }
    }

    true
}

/// Rotates `node` to the left, making its right child the new local root, and returns that child.
///
/// Returns `node` unchanged if it has no right child.
pub fn rotate_left<K, V, C>(arena: &mut Arena<K, V, C>, node: usize) -> usize {
    let pivot = Right::rotate(arena, node);
    if pivot != node { trace!("rotated node {} left below {}", node, pivot); }
    pivot
}

/// Rotates `node` to the right, making its left child the new local root, and returns that child.
///
/// Returns `node` unchanged if it has no left child.
pub fn rotate_right<K, V, C>(arena: &mut Arena<K, V, C>, node: usize) -> usize {
    let pivot = Left::rotate(arena, node);
    if pivot != node { trace!("rotated node {} right below {}", node, pivot); }
    pivot
}

/// Rebalances the subtree rooted at `node` and returns its new root.
///
/// Visits the subtree top-down. At each position the depths of the two children are compared; if
/// the left is deeper by more than one the node is rotated right, if the right is deeper by more
/// than one it is rotated left. Each position is rotated at most once, after which the children of
/// whichever node now occupies it are visited.
///
/// This is a whole-subtree pass that recomputes depths at every node, not an incremental fix-up.
pub fn balance<K, V, C>(arena: &mut Arena<K, V, C>, node: Link) -> Link {
    let top = rebalance(arena, node?);
    let mut stack = vec![top];

    while let Some(index) = stack.pop() {
        let (left, right) = (arena[index].left, arena[index].right);
        for child in left.into_iter().chain(right) { stack.push(rebalance(arena, child)); }
    }

    Some(top)
}

fn rebalance<K, V, C>(arena: &mut Arena<K, V, C>, node: usize) -> usize {
    let left = depth(arena, arena[node].left) as isize;
    let right = depth(arena, arena[node].right) as isize;

    match left - right {
        factor if factor > 1 => rotate_right(arena, node),
        factor if factor < -1 => rotate_left(arena, node),
        _ => node,
    }
}

/// Returns a deep copy of the subtree rooted at `node` in a new arena, along with the copy's root.
///
/// The copy has the same shape, keys, values and ordering relations as the original and shares no
/// nodes with it. Its root has no parent.
pub fn clone<K, V, C>(arena: &Arena<K, V, C>, node: Link) -> (Arena<K, V, C>, Link)
    where K: Clone, V: Clone, C: Clone {

    let mut copy = Arena::new();
    let mut root = None;
    let mut stack: Vec<(usize, Option<(usize, bool)>)> =
        node.into_iter().map(|index| (index, None)).collect();

    while let Some((index, parent)) = stack.pop() {
        let n = &arena[index];
        let up = parent.map(|(up, _)| up);
        let cloned = copy.alloc(Node::new(up, n.key.clone(), n.value.clone(), n.less.clone()));

        match parent {
            None => root = Some(cloned),
            Some((up, true)) => copy[up].left = Some(cloned),
            Some((up, false)) => copy[up].right = Some(cloned),
        }

        if let Some(right) = n.right { stack.push((right, Some((cloned, false)))); }
        if let Some(left) = n.left { stack.push((left, Some((cloned, true)))); }
    }

    (copy, root)
}
