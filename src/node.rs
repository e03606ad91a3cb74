#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::index::{IndexType, NodeIndex};

/// Node of the red-black tree
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<K, Ix> {
    /// Left children
    pub left: NodeIndex<Ix>,
    /// Right children
    pub right: NodeIndex<Ix>,
    /// Parent
    pub parent: NodeIndex<Ix>,
    /// Color of the node
    pub color: Color,
    /// Key of the node, `None` for the sentinel and for vacant slots
    pub key: Option<K>,
}

impl<K, Ix> Node<K, Ix>
where
    Ix: IndexType,
{
    /// The nil sentinel, black and keyless, with every link pointing at itself.
    pub fn new_sentinel() -> Self {
        Node {
            left: NodeIndex::SENTINEL,
            right: NodeIndex::SENTINEL,
            parent: NodeIndex::SENTINEL,
            color: Color::Black,
            key: None,
        }
    }

    /// A fresh red leaf.
    pub fn new_leaf(key: K) -> Self {
        Node {
            left: NodeIndex::SENTINEL,
            right: NodeIndex::SENTINEL,
            parent: NodeIndex::SENTINEL,
            color: Color::Red,
            key: Some(key),
        }
    }
}

// Convenient getter/setter methods
impl<K, Ix> Node<K, Ix>
where
    Ix: IndexType,
{
    pub fn color(&self) -> Color {
        self.color
    }

    /// # Panics
    ///
    /// Panics on the sentinel or a vacant slot.
    pub fn key(&self) -> &K {
        self.key.as_ref().expect("sentinel or vacant slot has no key")
    }

    pub fn left(&self) -> NodeIndex<Ix> {
        self.left
    }

    pub fn right(&self) -> NodeIndex<Ix> {
        self.right
    }

    pub fn parent(&self) -> NodeIndex<Ix> {
        self.parent
    }

    pub fn is_occupied(&self) -> bool {
        self.key.is_some()
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn take_key(&mut self) -> Option<K> {
        self.key.take()
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.right = right;
        }
    }

    pub fn set_parent(parent: NodeIndex<Ix>) -> impl FnOnce(&mut Node<K, Ix>) {
        move |node: &mut Node<K, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
