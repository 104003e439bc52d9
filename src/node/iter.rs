use std::collections::VecDeque;
use self::visit::{Seen, Visit};
use super::{Arena, Link, NodeRef};

/// Child links of the nodes a [`Walk`] traverses.
pub trait Links {
    /// Returns the left child of the given node.
    fn left(&self, node: usize) -> Link;

    /// Returns the right child of the given node.
    fn right(&self, node: usize) -> Link;
}

impl Links for [(Link, Link)] {
    fn left(&self, node: usize) -> Link { self[node].0 }
    fn right(&self, node: usize) -> Link { self[node].1 }
}

/// An in-order walk over a tree that can be advanced from either end.
///
/// The walk keeps an explicit stack of pending visits and does not borrow the tree, which is
/// passed to each step instead.
#[derive(Clone)]
pub struct Walk {
    visits: VecDeque<Visit>,
    size: usize,
}

impl Walk {
    /// Creates a walk over the tree rooted at `root`, which contains `size` nodes.
    pub fn new(root: Link, size: usize) -> Walk {
        Walk { visits: root.into_iter().map(Visit::new).collect(), size: size }
    }

    /// Returns the number of nodes not yet yielded.
    pub fn len(&self) -> usize { self.size }

    /// Checks if every node has been yielded.
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns the next node in ascending order.
    pub fn next<L: ?Sized>(&mut self, links: &L) -> Link where L: Links {
        loop {
            let op = match self.visits.back_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::R => Op::Push(visit.left(links)),
                    Seen::L => Op::PopPush(visit.right(links)),
                    Seen::B => Op::Pop,
                }
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.visits.push_back(Visit::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let visit = self.visits.pop_back();
                    if let Some(node) = node { self.visits.push_back(Visit::new(node)); }
                    return visit.map(Visit::node);
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_back().map(Visit::node);
                }
            }
        }
    }

    /// Returns the next node in descending order.
    pub fn next_back<L: ?Sized>(&mut self, links: &L) -> Link where L: Links {
        loop {
            let op = match self.visits.front_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::L => Op::Push(visit.right(links)),
                    Seen::R => Op::PopPush(visit.left(links)),
                    Seen::B => Op::Pop,
                }
            };

            match op {
                Op::Push(node) =>
                    if let Some(node) = node { self.visits.push_front(Visit::new(node)); },
                Op::PopPush(node) => {
                    self.size -= 1;
                    let visit = self.visits.pop_front();
                    if let Some(node) = node { self.visits.push_front(Visit::new(node)); }
                    return visit.map(Visit::node);
                }
                Op::Pop => {
                    self.size -= 1;
                    return self.visits.pop_front().map(Visit::node);
                }
            }
        }
    }
}

mod visit {
    use super::super::Link;
    use super::Links;

    #[derive(Clone, Copy)]
    pub struct Visit {
        node: usize,
        seen: Seen,
    }

    impl Visit {
        pub fn new(node: usize) -> Visit { Visit { node: node, seen: Seen::N } }

        pub fn left<L: ?Sized>(&mut self, links: &L) -> Link where L: Links {
            match self.seen {
                Seen::N => { self.seen = Seen::L; links.left(self.node) }
                Seen::R => { self.seen = Seen::B; links.left(self.node) }
                Seen::L | Seen::B => None,
            }
        }

        pub fn right<L: ?Sized>(&mut self, links: &L) -> Link where L: Links {
            match self.seen {
                Seen::N => { self.seen = Seen::R; links.right(self.node) }
                Seen::L => { self.seen = Seen::B; links.right(self.node) }
                Seen::R | Seen::B => None,
            }
        }

        pub fn node(self) -> usize { self.node }

        pub fn seen(&self) -> Seen { self.seen }
    }

    // Which of the node's subtrees have been entered: neither, left, right or both.
    #[derive(Clone, Copy)]
    pub enum Seen {
        N,
        L,
        R,
        B,
    }
}

enum Op {
    Push(Link),
    PopPush(Link),
    Pop,
}

/// An iterator over the nodes of a subtree in ascending order.
pub struct Iter<'a, K: 'a, V: 'a, C: 'a> {
    arena: &'a Arena<K, V, C>,
    walk: Walk,
}

impl<'a, K, V, C> Iter<'a, K, V, C> {
    /// Creates an iterator over the subtree rooted at `root`, which contains `size` nodes.
    pub fn new(arena: &'a Arena<K, V, C>, root: Link, size: usize) -> Self {
        Iter { arena: arena, walk: Walk::new(root, size) }
    }

    fn node_ref(&self, index: usize) -> NodeRef<'a, K, V, C> {
        NodeRef { arena: self.arena, index: index }
    }
}

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Self { Iter { arena: self.arena, walk: self.walk.clone() } }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = NodeRef<'a, K, V, C>;

    fn next(&mut self) -> Option<NodeRef<'a, K, V, C>> {
        self.walk.next(self.arena).map(|index| self.node_ref(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.walk.len(), Some(self.walk.len())) }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<NodeRef<'a, K, V, C>> {
        self.walk.next_back(self.arena).map(|index| self.node_ref(index))
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> {}

macro_rules! projection {
    ($(#[$attr:meta])* $name:ident, $item:ty, |$node:ident| $project:expr) => {
        $(#[$attr])*
        pub struct $name<'a, K: 'a, V: 'a, C: 'a>(pub Iter<'a, K, V, C>);

        impl<'a, K, V, C> Clone for $name<'a, K, V, C> {
            fn clone(&self) -> Self { $name(self.0.clone()) }
        }

        impl<'a, K, V, C> Iterator for $name<'a, K, V, C> {
            type Item = $item;

            fn next(&mut self) -> Option<$item> { self.0.next().map(|$node| $project) }

            fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
        }

        impl<'a, K, V, C> DoubleEndedIterator for $name<'a, K, V, C> {
            fn next_back(&mut self) -> Option<$item> { self.0.next_back().map(|$node| $project) }
        }

        impl<'a, K, V, C> ExactSizeIterator for $name<'a, K, V, C> {}
    }
}

projection!(
    /// An iterator over the keys of a subtree in ascending order.
    Keys, &'a K, |node| node.key());

projection!(
    /// An iterator over the values of a subtree in ascending order.
    Values, &'a V, |node| node.value());

projection!(
    /// An iterator over the entries of a subtree in ascending order.
    Entries, (&'a K, &'a V), |node| (node.key(), node.value()));
