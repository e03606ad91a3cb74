use std::iter::FusedIterator;

use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::rbtree::RbTree;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, Ix>(tree: &RbTree<K, Ix>, mut x: NodeIndex<Ix>, stack: &mut Vec<NodeIndex<Ix>>)
where
    Ix: IndexType,
{
    while !x.is_sentinel() {
        stack.push(x);
        x = tree.node_ref(x, Node::left);
    }
}

/// An iterator over the keys of a `RbTree`, in ascending order.
#[derive(Debug)]
pub struct Iter<'a, K, Ix> {
    /// Reference to the tree
    tree: &'a RbTree<K, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
    /// Keys not yet yielded
    remaining: usize,
}

impl<'a, K, Ix> Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(tree: &'a RbTree<K, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(tree, tree.root, &mut stack);
        Iter {
            tree,
            stack,
            remaining: tree.len(),
        }
    }
}

impl<'a, K, Ix> Iterator for Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(self.tree, self.tree.node_ref(x, Node::right), &mut self.stack);
        self.remaining -= 1;
        Some(self.tree.node_ref(x, Node::key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for Iter<'_, K, Ix> {}

impl<K, Ix: IndexType> FusedIterator for Iter<'_, K, Ix> {}

/// An owning iterator over the keys of a `RbTree`, in ascending order.
#[derive(Debug)]
pub struct IntoIter<K, Ix> {
    tree: RbTree<K, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<K, Ix> IntoIter<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn new(tree: RbTree<K, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(&tree, tree.root, &mut stack);
        IntoIter { tree, stack }
    }
}

impl<K, Ix> Iterator for IntoIter<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(&self.tree, self.tree.node_ref(x, Node::right), &mut self.stack);
        self.tree.len -= 1;
        self.tree.node_mut(x, Node::take_key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len, Some(self.tree.len))
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for IntoIter<K, Ix> {}

impl<K, Ix: IndexType> FusedIterator for IntoIter<K, Ix> {}
