use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::{BalanceError, BalanceResult};
use crate::node::{AvlNode, Link};

/// Restructuring applied by [`Balancer::balance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// The node was already within balance.
    None,
    /// Left-left case: one right rotation.
    Right,
    /// Right-right case: one left rotation.
    Left,
    /// Left-right case: left rotation on the left child, then right rotation.
    LeftRight,
    /// Right-left case: right rotation on the right child, then left rotation.
    RightLeft,
}

impl Rotation {
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LeftRight | Rotation::RightLeft)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rotation::None => "none",
            Rotation::Right => "right",
            Rotation::Left => "left",
            Rotation::LeftRight => "left-right",
            Rotation::RightLeft => "right-left",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless AVL rebalancing over any [`AvlNode`].
///
/// Callers drive it bottom-up: after inserting or removing below a node,
/// call [`Balancer::balance`] on the slot owning that node, then on its
/// parent's slot, up to the root.
#[derive(Debug, Default, Clone, Copy)]
pub struct Balancer;

impl Balancer {
    /// Cached height of `node`, or 0 when absent.
    pub fn height<N: AvlNode>(node: Option<&N>) -> usize {
        node.map_or(0, AvlNode::height)
    }

    pub(crate) fn balance_factor<N: AvlNode>(node: Option<&N>) -> isize {
        node.map_or(0, |node| {
            Self::height(node.left()) as isize - Self::height(node.right()) as isize
        })
    }

    /// Recomputes the cached height of `node` from its children's cached heights.
    pub fn refresh_height<N: AvlNode>(node: &mut N) {
        let height = 1 + Self::height(node.left()).max(Self::height(node.right()));
        node.set_height(height);
    }

    /// Chooses the rotation that restores balance at `node` without touching it.
    pub fn plan<N: AvlNode>(node: &N) -> BalanceResult<Rotation> {
        match Self::balance_factor(Some(node)) {
            -1..=1 => Ok(Rotation::None),
            2 if Self::balance_factor(node.left()) >= 0 => Ok(Rotation::Right),
            -2 if Self::balance_factor(node.right()) <= 0 => Ok(Rotation::Left),
            2 => Ok(Rotation::LeftRight),
            -2 => Ok(Rotation::RightLeft),
            factor => Err(BalanceError::ExcessiveImbalance { factor }),
        }
    }

    /// Restores the AVL property at the node owned by `slot`.
    ///
    /// Both children must already be valid AVL subtrees. The new subtree root
    /// is written back into `slot`. On error nothing has been moved.
    #[instrument(level = "trace", skip_all)]
    pub fn balance<N: AvlNode>(slot: &mut Link<N>) -> BalanceResult<Rotation> {
        let node = slot.as_deref_mut().ok_or(BalanceError::AbsentNode)?;
        Self::refresh_height(&mut *node);
        let rotation = Self::plan(&*node).inspect_err(|err| debug!(%err, "rejected node"))?;
        if rotation == Rotation::None {
            return Ok(rotation);
        }

        if let Some(node) = slot.take() {
            let root = Self::rotate(node, rotation);
            trace!(%rotation, height = root.height(), "rebalanced subtree");
            *slot = Some(root);
        }
        Ok(rotation)
    }

    fn rotate<N: AvlNode>(mut node: Box<N>, rotation: Rotation) -> Box<N> {
        match rotation {
            Rotation::None => node,
            Rotation::Right => Self::rotate_right(node),
            Rotation::Left => Self::rotate_left(node),
            Rotation::LeftRight => {
                let left = node.take_left().map(Self::rotate_left);
                node.set_left(left);
                Self::rotate_right(node)
            }
            Rotation::RightLeft => {
                let right = node.take_right().map(Self::rotate_right);
                node.set_right(right);
                Self::rotate_left(node)
            }
        }
    }

    fn rotate_right<N: AvlNode>(mut node: Box<N>) -> Box<N> {
        // a positive factor implies a left child
        let Some(mut pivot) = node.take_left() else {
            return node;
        };
        node.set_left(pivot.take_right());
        Self::refresh_height(&mut *node);
        pivot.set_right(Some(node));
        Self::refresh_height(&mut *pivot);
        pivot
    }

    fn rotate_left<N: AvlNode>(mut node: Box<N>) -> Box<N> {
        // a negative factor implies a right child
        let Some(mut pivot) = node.take_right() else {
            return node;
        };
        node.set_right(pivot.take_left());
        Self::refresh_height(&mut *node);
        pivot.set_left(Some(node));
        Self::refresh_height(&mut *pivot);
        pivot
    }
}
