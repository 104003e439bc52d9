//! Ordered maps and sets based on a binary search tree whose nodes link back to their parents.
//!
//! Every node carries its own copy of the ordering relation, and the whole tree is rebalanced by a
//! single top-down rotation pass after each insertion. Removal does not rebalance.
//!
//! The containers are [`Map`] and [`Set`]. The lower-level algorithms they are built on live in
//! [`node`] and operate on an arena of nodes addressed by index.

pub mod map;
pub mod node;
pub mod set;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use map::Map;
pub use set::Set;
