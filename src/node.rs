use crate::balance::Balancer;

/// Owning link to a child subtree.
pub type Link<N> = Option<Box<N>>;

/// Capabilities a tree node has to expose so it can be rebalanced.
///
/// Children are owned exclusively by their parent. Rotations move boxes from
/// one slot to another with `take_*`/`set_*` and never share them.
pub trait AvlNode: Sized {
    /// Borrows the left child, if any.
    fn left(&self) -> Option<&Self>;
    /// Borrows the right child, if any.
    fn right(&self) -> Option<&Self>;

    /// Moves the left child out, leaving the slot empty.
    fn take_left(&mut self) -> Link<Self>;
    /// Moves the right child out, leaving the slot empty.
    fn take_right(&mut self) -> Link<Self>;

    /// Replaces the left child, dropping whatever was there.
    fn set_left(&mut self, child: Link<Self>);
    /// Replaces the right child, dropping whatever was there.
    fn set_right(&mut self, child: Link<Self>);

    /// Cached height of the subtree rooted here; a leaf has height 1.
    fn height(&self) -> usize;
    fn set_height(&mut self, height: usize);
}

/// Binary search tree vertex carrying a key and a cached height.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    height: usize,
    left: Link<Node<K>>,
    right: Link<Node<K>>,
}

impl<K> Node<K> {
    /// Creates a leaf holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Creates a node that owns `left` and `right`, with its height computed
    /// from their cached heights.
    pub fn with_children(key: K, left: Link<Self>, right: Link<Self>) -> Self {
        let mut node = Self {
            key,
            height: 1,
            left,
            right,
        };
        Balancer::refresh_height(&mut node);
        node
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the node and returns its key. Children are dropped.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K> AvlNode for Node<K> {
    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_left(&mut self) -> Link<Self> {
        self.left.take()
    }

    fn take_right(&mut self) -> Link<Self> {
        self.right.take()
    }

    fn set_left(&mut self, child: Link<Self>) {
        self.left = child;
    }

    fn set_right(&mut self, child: Link<Self>) {
        self.right = child;
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_height(&mut self, height: usize) {
        self.height = height;
    }
}
