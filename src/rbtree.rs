use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter};
use crate::node::{Color, Node};

/// An ordered collection of keys, which supports operations on dynamic sets.
///
/// Equal keys may be stored more than once; a newly inserted duplicate is
/// placed after the keys already equal to it in iteration order. Rotations may
/// leave an equal key in a left subtree, so the order kept is
/// `left <= node <= right`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RbTree<K, Ix = DefaultIx> {
    /// Vector that stores nodes, slot 0 is the nil sentinel
    pub(crate) nodes: Vec<Node<K, Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Slots vacated by erase, reused by insert
    pub(crate) free: Vec<NodeIndex<Ix>>,
    /// Number of keys in the tree
    pub(crate) len: usize,
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Creates a new `RbTree` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Node::new_sentinel()];
        nodes.reserve(capacity);
        RbTree {
            nodes,
            root: NodeIndex::SENTINEL,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Insert a key into the tree and return the root after rebalancing.
    ///
    /// Keys equal to one already stored are kept side by side.
    ///
    /// # Panics
    ///
    /// This method panics when the tree is at the maximum number of nodes for its index
    /// or when the node arena cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// let root = tree.insert(2);
    /// assert_eq!(tree.key(root), Some(&2));
    /// tree.insert(1);
    /// let root = tree.insert(3);
    /// assert_eq!(tree.key(root), Some(&2));
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K) -> NodeIndex<Ix> {
        self.try_insert(key).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Insert a key into the tree and return the root after rebalancing, or
    /// an error if no node could be allocated for it.
    ///
    /// The tree is unmodified when an error is returned.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::{Error, RbTree};
    ///
    /// let mut tree = RbTree::<u32, u16>::with_capacity(0);
    /// for key in 0..u32::from(u16::MAX) - 1 {
    ///     assert!(tree.try_insert(key).is_ok());
    /// }
    /// assert_eq!(tree.try_insert(0), Err(Error::IndexExhausted));
    /// ```
    pub fn try_insert(&mut self, key: K) -> Result<NodeIndex<Ix>, Error> {
        let node_idx = self.alloc(key)?;
        Ok(self.insert_inner(node_idx))
    }

    /// Insert a key only if no equal key is stored yet, returning the root
    /// after rebalancing.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::{Error, RbTree};
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.insert_unique(7).is_ok());
    /// assert_eq!(tree.insert_unique(7), Err(Error::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert_unique(&mut self, key: K) -> Result<NodeIndex<Ix>, Error> {
        if self.find(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        self.try_insert(key)
    }

    /// Remove the node `node_idx` from the tree and return its key.
    ///
    /// The handle, and any copy of it, must not be used afterwards: its slot
    /// may be handed to a later insert. Handles of other nodes stay valid.
    ///
    /// # Panics
    ///
    /// This method panics when `node_idx` does not name a node stored in this tree.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = [5, 3, 8].into_iter().collect();
    /// let node = tree.find(&3).unwrap();
    /// assert_eq!(tree.erase(node), 3);
    /// assert_eq!(tree.find(&3), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn erase(&mut self, node_idx: NodeIndex<Ix>) -> K {
        let key = if node_idx.is_sentinel() {
            None
        } else {
            self.nodes.get_mut(node_idx.index()).and_then(Node::take_key)
        };
        let Some(key) = key else {
            panic!("erase of a node not owned by this tree: {node_idx:?}");
        };
        self.remove_inner(node_idx);
        self.release(node_idx);
        key
    }

    /// Remove one key equal to `key` from the tree, returning it if it was present.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.find(key).map(|node_idx| self.erase(node_idx))
    }

    /// Find a node holding a key equal to `key`.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = [4, 1, 9].into_iter().collect();
    /// let node = tree.find(&9).unwrap();
    /// assert_eq!(tree.key(node), Some(&9));
    /// assert_eq!(tree.find(&5), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<NodeIndex<Ix>> {
        let mut x = self.root;
        while !x.is_sentinel() {
            let x_key = self.node_ref(x, Node::key);
            if key == x_key {
                return Some(x);
            }
            if key < x_key {
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        None
    }

    /// Return `true` if a key equal to `key` is stored in the tree.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Find the node with the smallest key.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.min(), None);
    /// tree.extend([6, 2, 8]);
    /// assert_eq!(tree.min().and_then(|n| tree.key(n)), Some(&2));
    /// ```
    pub fn min(&self) -> Option<NodeIndex<Ix>> {
        (!self.root.is_sentinel()).then(|| self.tree_minimum(self.root))
    }

    /// Find the node with the largest key.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert_eq!(tree.max(), None);
    /// tree.extend([6, 2, 8]);
    /// assert_eq!(tree.max().and_then(|n| tree.key(n)), Some(&8));
    /// ```
    pub fn max(&self) -> Option<NodeIndex<Ix>> {
        (!self.root.is_sentinel()).then(|| self.tree_maximum(self.root))
    }

    /// Collect at most `capacity` keys in ascending order.
    ///
    /// Keys past `capacity` are silently left out; compare the result length
    /// with [`len`](Self::len) to detect truncation.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.to_sorted_vec(10), vec![1, 3, 4, 5, 8]);
    /// assert_eq!(tree.to_sorted_vec(2), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self, capacity: usize) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().take(capacity).cloned().collect()
    }

    /// Write keys in ascending order into `buf` until either the tree or the
    /// buffer is exhausted, returning the number of keys written.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::RbTree;
    ///
    /// let tree: RbTree<i32> = [5, 3, 8].into_iter().collect();
    /// let mut buf = [0; 2];
    /// assert_eq!(tree.write_sorted(&mut buf), 2);
    /// assert_eq!(buf, [3, 5]);
    /// ```
    pub fn write_sorted(&self, buf: &mut [K]) -> usize
    where
        K: Clone,
    {
        let mut written = 0;
        for (slot, key) in buf.iter_mut().zip(self.iter()) {
            slot.clone_from(key);
            written += 1;
        }
        written
    }

    /// Get an iterator over the keys of the tree, in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, Ix> {
        Iter::new(self)
    }

    /// Remove all keys from the tree
    #[inline]
    pub fn clear(&mut self) {
        debug!("clearing tree of {} keys", self.len);
        self.nodes.clear();
        self.nodes.push(Node::new_sentinel());
        self.free.clear();
        self.root = NodeIndex::SENTINEL;
        self.len = 0;
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    /// Return the key stored at `node_idx`, or `None` if the handle does not
    /// name a node of this tree.
    #[inline]
    pub fn key(&self, node_idx: NodeIndex<Ix>) -> Option<&K> {
        self.nodes.get(node_idx.index()).and_then(|n| n.key.as_ref())
    }

    /// Return the color of the node at `node_idx`, or `None` if the handle
    /// does not name a node of this tree.
    ///
    /// # Example
    /// ```rust
    /// use rb_tree::{Color, RbTree};
    ///
    /// let tree: RbTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.root().and_then(|n| tree.color(n)), Some(Color::Black));
    /// assert_eq!(tree.min().and_then(|n| tree.color(n)), Some(Color::Red));
    /// ```
    #[inline]
    pub fn color(&self, node_idx: NodeIndex<Ix>) -> Option<Color> {
        self.nodes
            .get(node_idx.index())
            .filter(|n| n.is_occupied())
            .map(Node::color)
    }

    /// Return the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeIndex<Ix>> {
        (!self.root.is_sentinel()).then_some(self.root)
    }

    /// Return the number of keys in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> RbTree<K>
where
    K: Ord,
{
    /// Create an empty `RbTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<K> Default for RbTree<K>
where
    K: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, Ix> FromIterator<K> for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

impl<K, Ix> Extend<K> for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            let _ignore = self.insert(key);
        }
    }
}

impl<'a, K, Ix> IntoIterator for &'a RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Ix> IntoIterator for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    type Item = K;
    type IntoIter = IntoIter<K, Ix>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Take a slot for a new red leaf.
    ///
    /// Slots vacated by erase are reused first, so the arena only grows when
    /// the free list is empty and no live handle ever changes slot.
    fn alloc(&mut self, key: K) -> Result<NodeIndex<Ix>, Error> {
        if let Some(node_idx) = self.free.pop() {
            self.nodes[node_idx.index()] = Node::new_leaf(key);
            return Ok(node_idx);
        }
        let node_idx = self.nodes.len();
        // check for max capacity, except if we use usize
        if <Ix as IndexType>::max().index() != !0 && node_idx >= NodeIndex::<Ix>::end().index() {
            return Err(Error::IndexExhausted);
        }
        self.nodes.try_reserve(1)?;
        self.nodes.push(Node::new_leaf(key));
        Ok(NodeIndex::new(node_idx))
    }

    /// Insert a node into the tree.
    fn insert_inner(&mut self, z: NodeIndex<Ix>) -> NodeIndex<Ix> {
        let mut y = NodeIndex::SENTINEL;
        let mut x = self.root;

        while !x.is_sentinel() {
            y = x;
            if self.node_ref(z, Node::key) < self.node_ref(x, Node::key) {
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        self.node_mut(z, Node::set_parent(y));
        if y.is_sentinel() {
            self.root = z;
        } else if self.node_ref(z, Node::key) < self.node_ref(y, Node::key) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }

        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
        self.root
    }

    /// Unlink a node from the tree. Its slot is left for the caller to release.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        if self.node_ref(z, Node::left).is_sentinel() {
            x = self.node_ref(z, Node::right);
            self.transplant(z, x);
        } else if self.node_ref(z, Node::right).is_sentinel() {
            x = self.node_ref(z, Node::left);
            self.transplant(z, x);
        } else {
            let y = self.tree_minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            if self.node_ref(y, Node::parent) == z {
                self.node_mut(x, Node::set_parent(y));
            } else {
                self.transplant(y, x);
                self.node_mut(y, Node::set_right(self.node_ref(z, Node::right)));
                self.right_mut(y, Node::set_parent(y));
            }
            self.transplant(z, y);
            self.node_mut(y, Node::set_left(self.node_ref(z, Node::left)));
            self.left_mut(y, Node::set_parent(y));
            self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
        }

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x);
        }
        self.reset_sentinel();

        self.len = self.len.wrapping_sub(1);
    }

    /// Return an unlinked slot to the free list as a vacant, keyless node.
    fn release(&mut self, node_idx: NodeIndex<Ix>) {
        self.nodes[node_idx.index()] = Node::new_sentinel();
        self.free.push(node_idx);
    }

    /// Point the sentinel's parent back at itself.
    ///
    /// Transplant writes the parent of a nil `x` so that the remove fixup can
    /// climb from it; outside of a remove the link is always nil.
    fn reset_sentinel(&mut self) {
        self.node_mut(NodeIndex::SENTINEL, Node::set_parent(NodeIndex::SENTINEL));
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while self.parent_ref(z, Node::is_red) {
            if self.is_left_child(self.node_ref(z, Node::parent)) {
                let y = self.grand_parent_ref(z, Node::right);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup at {z:?}: red uncle, recolor");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_right_child(z) {
                        trace!("insert fixup at {z:?}: inner grandchild, rotate parent left");
                        z = self.node_ref(z, Node::parent);
                        self.left_rotate(z);
                    }
                    trace!("insert fixup at {z:?}: outer grandchild, rotate grandparent right");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.right_rotate(self.parent_ref(z, Node::parent));
                }
            } else {
                let y = self.grand_parent_ref(z, Node::left);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup at {z:?}: red uncle, recolor");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_left_child(z) {
                        trace!("insert fixup at {z:?}: inner grandchild, rotate parent right");
                        z = self.node_ref(z, Node::parent);
                        self.right_rotate(z);
                    }
                    trace!("insert fixup at {z:?}: outer grandchild, rotate grandparent left");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.left_rotate(self.parent_ref(z, Node::parent));
                }
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Restore red-black tree properties after a remove.
    ///
    /// `x` may be the sentinel, in which case its parent link was set by the
    /// preceding transplant.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let mut w;
            if self.is_left_child(x) {
                w = self.parent_ref(x, Node::right);
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup at {x:?}: red sibling, rotate parent left");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::right);
                }
                if self.left_ref(w, Node::is_black) && self.right_ref(w, Node::is_black) {
                    trace!("remove fixup at {x:?}: black nephews, move up");
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.right_ref(w, Node::is_black) {
                        trace!("remove fixup at {x:?}: red near nephew, rotate sibling right");
                        self.left_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.right_rotate(w);
                        w = self.parent_ref(x, Node::right);
                    }
                    trace!("remove fixup at {x:?}: red far nephew, rotate parent left");
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.left_rotate(self.node_ref(x, Node::parent));
                    x = self.root;
                }
            } else {
                w = self.parent_ref(x, Node::left);
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup at {x:?}: red sibling, rotate parent right");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.parent_mut(x, Node::set_color(Color::Red));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    w = self.parent_ref(x, Node::left);
                }
                if self.right_ref(w, Node::is_black) && self.left_ref(w, Node::is_black) {
                    trace!("remove fixup at {x:?}: black nephews, move up");
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = self.node_ref(x, Node::parent);
                } else {
                    if self.left_ref(w, Node::is_black) {
                        trace!("remove fixup at {x:?}: red near nephew, rotate sibling left");
                        self.right_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.left_rotate(w);
                        w = self.parent_ref(x, Node::left);
                    }
                    trace!("remove fixup at {x:?}: red far nephew, rotate parent right");
                    self.node_mut(w, Node::set_color(self.parent_ref(x, Node::color)));
                    self.parent_mut(x, Node::set_color(Color::Black));
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.right_rotate(self.node_ref(x, Node::parent));
                    x = self.root;
                }
            }
        }
        self.node_mut(x, Node::set_color(Color::Black));
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        debug_assert!(
            !self.node_ref(x, Node::right).is_sentinel(),
            "left rotation around {x:?} without a right child"
        );
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.node_ref(y, Node::left).is_sentinel() {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        debug_assert!(
            !self.node_ref(x, Node::left).is_sentinel(),
            "right rotation around {x:?} without a left child"
        );
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.node_ref(y, Node::right).is_sentinel() {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.node_ref(x, Node::parent).is_sentinel() {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Replace one subtree as a child of its parent with another subtree.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        if self.node_ref(u, Node::parent).is_sentinel() {
            self.root = v;
        } else if self.is_left_child(u) {
            self.parent_mut(u, Node::set_left(v));
        } else {
            self.parent_mut(u, Node::set_right(v));
        }
        self.node_mut(v, Node::set_parent(self.node_ref(u, Node::parent)));
    }
}

// Navigation shared by the queries, the iterators and the checks in tests
impl<K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    /// Find the leftmost node of the subtree rooted at `x`.
    pub(crate) fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.node_ref(x, Node::left).is_sentinel() {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Find the rightmost node of the subtree rooted at `x`.
    pub(crate) fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.node_ref(x, Node::right).is_sentinel() {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// Check if a node is a left child of its parent.
    pub(crate) fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Check if a node is a right child of its parent.
    pub(crate) fn is_right_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::right) == node
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}
