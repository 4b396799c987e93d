//! Height-balanced (AVL) binary search tree of distinct words
//!
//! Every recursive step takes ownership of a subtree root and hands back the
//! (possibly different) root, which the caller stores into its child slot.
//! Words are ordered by ordinal `str` comparison.

use std::cmp::Ordering;

use termtree::Tree;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{balance_factor, height, Link, Node};

#[derive(Debug, Default, Clone)]
pub struct AvlTree {
    root: Link,
    len: usize,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` unless already present.
    ///
    /// Returns `true` if a new node was created, `false` for a duplicate.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: &str) -> bool {
        let mut created = false;
        self.root = Some(insert_node(self.root.take(), value, &mut created));
        if created {
            self.len += 1;
        }
        created
    }

    /// Remove `value` if present.
    ///
    /// Returns `true` if a node was removed, `false` if the value was absent.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, value: &str) -> bool {
        let mut removed = false;
        self.root = remove_node(self.root.take(), value, &mut removed);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, value: &str) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            current = match value.cmp(node.value.as_str()) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// All words whose lowercase form starts with the lowercase `prefix`, ascending.
    ///
    /// An empty prefix matches every word.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .map(String::from)
            .collect()
    }

    /// All words in ascending order.
    pub fn in_order(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }

    /// In-order iterator over the stored words.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Height of the whole tree (empty = 0).
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Check ordering, balance, cached heights and the node count.
    pub fn verify(&self) -> DomainResult<()> {
        let (_, found) = verify_node(&self.root, None, None)?;
        if found != self.len {
            return Err(DomainError::CountMismatch {
                tracked: self.len,
                found,
            });
        }
        Ok(())
    }

    /// Render the tree shape, one line per node: `word (h=height, bf=factor)`.
    pub fn to_display_tree(&self) -> Tree<String> {
        match &self.root {
            Some(root) => display_node(root),
            None => Tree::new("(empty)".to_string()),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for AvlTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for AvlTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending in-order traversal using an explicit stack of pending ancestors.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Link) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.value.as_str())
    }
}

fn insert_node(link: Link, value: &str, created: &mut bool) -> Box<Node> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *created = true;
            return Node::leaf(value);
        }
    };

    match value.cmp(node.value.as_str()) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), value, created)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), value, created)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        // the new value landed in the right-right or right-left subtree
        let right_right = node
            .right
            .as_ref()
            .is_some_and(|right| value > right.value.as_str());
        if !right_right {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    if factor < -1 {
        let left_left = node
            .left
            .as_ref()
            .is_some_and(|left| value < left.value.as_str());
        if !left_left {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    node
}

fn remove_node(link: Link, value: &str, removed: &mut bool) -> Link {
    let mut node = link?;

    match value.cmp(node.value.as_str()) {
        Ordering::Less => node.left = remove_node(node.left.take(), value, removed),
        Ordering::Greater => node.right = remove_node(node.right.take(), value, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    let successor = min_value(&right).to_string();
                    trace!(successor = %successor, "replacing two-child node");
                    let mut spliced = false;
                    node.left = Some(left);
                    node.right = remove_node(Some(right), &successor, &mut spliced);
                    node.value = successor;
                }
            }
        }
    }

    Some(rebalance_after_remove(node))
}

/// Rebalance choosing single vs. double rotation from the heavy child's factor.
fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        if balance_factor(&node.right) < 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    if factor < -1 {
        if balance_factor(&node.left) > 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    node
}

fn min_value(mut node: &Node) -> &str {
    while let Some(left) = &node.left {
        node = left;
    }
    &node.value
}

/// Promote the right child. A node without a right child is returned unchanged.
pub(crate) fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = node.right.take() else {
        return node;
    };
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

/// Promote the left child. A node without a left child is returned unchanged.
pub(crate) fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = node.left.take() else {
        return node;
    };
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}

/// Returns (height, node count) of a verified subtree.
fn verify_node(link: &Link, lower: Option<&str>, upper: Option<&str>) -> DomainResult<(usize, usize)> {
    let Some(node) = link else {
        return Ok((0, 0));
    };

    let value = node.value.as_str();
    let above_lower = lower.map_or(true, |lower| value > lower);
    let below_upper = upper.map_or(true, |upper| value < upper);
    if !above_lower || !below_upper {
        return Err(DomainError::OrderViolation {
            value: node.value.clone(),
            lower: lower.map(String::from),
            upper: upper.map(String::from),
        });
    }

    let (left_height, left_count) = verify_node(&node.left, lower, Some(value))?;
    let (right_height, right_count) = verify_node(&node.right, Some(value), upper)?;

    let actual = 1 + left_height.max(right_height);
    if node.height != actual {
        return Err(DomainError::HeightMismatch {
            value: node.value.clone(),
            cached: node.height,
            actual,
        });
    }

    let factor = right_height as isize - left_height as isize;
    if factor.abs() > 1 {
        return Err(DomainError::Unbalanced {
            value: node.value.clone(),
            factor,
        });
    }

    Ok((actual, 1 + left_count + right_count))
}

fn display_node(node: &Node) -> Tree<String> {
    let label = format!(
        "{} (h={}, bf={:+})",
        node.value,
        node.height,
        node.balance_factor()
    );
    let mut tree = Tree::new(label);
    if node.is_leaf() {
        return tree;
    }
    for child in [&node.left, &node.right] {
        match child {
            Some(child) => tree.push(display_node(child)),
            None => tree.push(Tree::new("·".to_string())),
        };
    }
    tree
}
