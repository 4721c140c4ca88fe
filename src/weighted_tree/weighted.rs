use crate::error::{Result, TreeError};
use crate::weighted_tree::node::Node;
use crate::weighted_tree::tree;
use rand::{Rng, SeedableRng, XorShiftRng};

/// An ordered tree of integer weights implemented using a randomized binary search tree.
///
/// Every node stores a weight and the number of nodes in its subtree. Weights are not required to
/// be unique: a weight equal to the weight of a node is always routed into that node's right
/// subtree.
///
/// Weights can be inserted in two ways. Ordered insertion descends to a leaf position and performs
/// no rebalancing, so inserting a sorted sequence yields a tree whose height equals its size.
/// Randomized insertion gives the new weight a `1 / (n + 1)` chance of becoming the root of each
/// subtree of size `n` on its search path, which it does by being inserted at the bottom of that
/// subtree and rotated up to its root. The resulting tree has the shape of a random binary search
/// tree regardless of insertion order, so its expected height is proportional to the logarithm of
/// the number of weights.
///
/// The tree owns its source of randomness, so a seeded tree is fully reproducible. The tree is not
/// synchronized: it may be shared between threads for reading, but mutation requires exclusive
/// access.
///
/// # Examples
///
/// ```
/// use weighted_bst::weighted_tree::WeightedTree;
///
/// let mut tree = WeightedTree::new();
/// for weight in &[5, 3, 8, 1, 4] {
///     tree.insert(*weight);
/// }
///
/// assert_eq!(tree.find(4).map(|node| node.weight()), Some(4));
/// assert!(tree.find(99).is_none());
/// assert_eq!(tree.total_weight(), 21);
/// assert_eq!(tree.len(), 5);
/// ```
pub struct WeightedTree<R = XorShiftRng> {
    root: tree::Tree,
    rng: R,
}

impl WeightedTree<XorShiftRng> {
    /// Constructs a new, empty `WeightedTree` backed by an unseeded `XorShiftRng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let tree = WeightedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_rng(XorShiftRng::new_unseeded())
    }

    /// Constructs a new, empty `WeightedTree` backed by an `XorShiftRng` with a specific seed.
    ///
    /// # Panics
    ///
    /// Panics if the seed is all zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::with_seed([1, 1, 1, 1]);
    /// tree.random_insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_seed(seed: [u32; 4]) -> Self {
        Self::with_rng(SeedableRng::from_seed(seed))
    }
}

impl<R> WeightedTree<R>
where
    R: Rng,
{
    /// Constructs a new, empty `WeightedTree` that draws from a specific random number generator
    /// during randomized insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::with_rng(rand::thread_rng());
    /// tree.random_insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        WeightedTree { root: None, rng }
    }

    /// Inserts a weight into the tree without any rebalancing.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.root().map(|node| node.weight()), Some(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, weight: i32) {
        tree::insert(&mut self.root, weight);
    }

    /// Inserts a weight into the tree, promoting it to the root of each subtree it passes with
    /// probability inversely proportional to the size of that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// for weight in 0..100 {
    ///     tree.random_insert(weight);
    /// }
    /// assert_eq!(tree.len(), 100);
    /// assert!(tree.height() < 100);
    /// ```
    pub fn random_insert(&mut self, weight: i32) {
        let WeightedTree {
            ref mut root,
            ref mut rng,
        } = self;
        tree::random_insert(root, weight, rng);
    }

    /// Inserts a weight into the tree and rotates it up to become the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert_root(2);
    /// assert_eq!(tree.root().map(|node| node.weight()), Some(2));
    /// ```
    pub fn insert_root(&mut self, weight: i32) {
        tree::insert_root(&mut self.root, weight);
    }

    /// Rotates the tree left around the root, making the right child of the root the new root.
    /// Leaves the tree unchanged if the root has no right child.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::EmptySubtree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.rotate_left().unwrap();
    /// assert_eq!(tree.root().map(|node| node.weight()), Some(2));
    /// ```
    pub fn rotate_left(&mut self) -> Result<()> {
        match self.root.take() {
            Some(node) => {
                self.root = Some(tree::rotate_left(node));
                Ok(())
            },
            None => Err(TreeError::EmptySubtree { operation: "rotate_left" }),
        }
    }

    /// Rotates the tree right around the root, making the left child of the root the new root.
    /// Leaves the tree unchanged if the root has no left child.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::EmptySubtree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(3);
    /// tree.insert(2);
    /// tree.rotate_right().unwrap();
    /// assert_eq!(tree.root().map(|node| node.weight()), Some(2));
    /// ```
    pub fn rotate_right(&mut self) -> Result<()> {
        match self.root.take() {
            Some(node) => {
                self.root = Some(tree::rotate_right(node));
                Ok(())
            },
            None => Err(TreeError::EmptySubtree { operation: "rotate_right" }),
        }
    }
}

impl<R> WeightedTree<R> {
    /// Returns the first node on the search path of a weight. Returns `None` if no node on the
    /// path has that weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.find(1).map(|node| node.weight()), Some(1));
    /// assert!(tree.find(2).is_none());
    /// ```
    pub fn find(&self, weight: i32) -> Option<&Node> {
        tree::find(&self.root, weight)
    }

    /// Returns the sum of all weights in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// tree.insert(-3);
    /// assert_eq!(tree.total_weight(), -2);
    /// ```
    pub fn total_weight(&self) -> i64 {
        tree::total_weight(&self.root)
    }

    /// Returns whichever child of the root heads the subtree with the greater total weight,
    /// favouring the right child on ties. Only the two children of the root are compared; deeper
    /// subtrees are not considered. Returns `None` if the tree is empty or the chosen child is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(4);
    /// tree.insert(6);
    /// assert_eq!(tree.largest_child_subtree().map(|node| node.weight()), Some(3));
    /// ```
    pub fn largest_child_subtree(&self) -> Option<&Node> {
        tree::largest_child_subtree(&self.root)
    }

    /// Returns the root of the tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the number of weights in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.root)
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let tree = WeightedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Clears the tree, removing all weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_bst::weighted_tree::WeightedTree;
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl Default for WeightedTree<XorShiftRng> {
    fn default() -> Self {
        Self::new()
    }
}
