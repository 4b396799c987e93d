//! Tree vertex with cached subtree height

/// Owned, nullable child slot.
pub type Link = Option<Box<Node>>;

/// A single word in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub value: String,
    pub left: Link,
    pub right: Link,
    /// Height of the subtree rooted here (leaf = 1)
    pub height: usize,
}

impl Node {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn leaf(value: impl Into<String>) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// Recompute `height` from the children's cached heights.
    pub fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(right) - height(left)`.
    pub fn balance_factor(&self) -> isize {
        height(&self.right) as isize - height(&self.left) as isize
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Height of a possibly absent subtree (absent = 0).
pub fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a possibly absent subtree (absent = 0).
pub fn balance_factor(link: &Link) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_node_when_created_then_is_leaf_with_height_one() {
        let node = Node::new("apple");
        assert!(node.is_leaf());
        assert_eq!(node.height, 1);
        assert_eq!(node.balance_factor(), 0);
    }

    #[test]
    fn given_absent_link_when_height_then_zero() {
        assert_eq!(height(&None), 0);
        assert_eq!(balance_factor(&None), 0);
    }

    #[test]
    fn given_right_child_when_update_height_then_right_heavy() {
        let mut node = Node::new("a");
        node.right = Some(Node::leaf("b"));
        node.update_height();

        assert_eq!(node.height, 2);
        assert_eq!(node.balance_factor(), 1);
    }
}
