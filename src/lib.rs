//! Height balancing for owned AVL binary search trees.
//!
//! This crate provides:
//! - [`Balancer`]: stateless rotation logic restoring the AVL property at one node.
//! - [`AvlNode`]: the child/height capabilities a node type exposes to the balancer.
//! - [`Node`]: a ready-made keyed node with `Box`-owned children.
//!
//! Insertion, removal and lookup stay with the tree container. After every
//! structural change the container calls [`Balancer::balance`] on each slot
//! from the changed node up to the root.

pub mod balance;
pub mod error;
pub mod node;

pub use balance::{Balancer, Rotation};
pub use error::{BalanceError, BalanceResult};
pub use node::{AvlNode, Link, Node};
