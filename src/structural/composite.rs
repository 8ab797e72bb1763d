//! Composite: leaves and branches expose one operation; a branch combines
//! its children's results, recursing to any depth.

use itertools::Itertools;

/// A node in the part-whole tree.
#[derive(Debug)]
pub enum Node {
    Leaf(String),
    Branch(Vec<Node>),
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Node::Leaf(label.into())
    }

    pub fn branch() -> Self {
        Node::Branch(Vec::new())
    }

    /// Adds a child. Leaves have no children, so this is a no-op on them.
    pub fn add(&mut self, child: Node) {
        if let Node::Branch(children) = self {
            children.push(child);
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Branch(_))
    }

    /// A leaf reports its label; a branch wraps its children's results,
    /// `+`-joined, in `Branch(...)`.
    pub fn operation(&self) -> String {
        match self {
            Node::Leaf(label) => label.clone(),
            Node::Branch(children) => format!(
                "Branch({})",
                children.iter().map(Node::operation).join("+")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn a_leaf_is_its_own_result() {
        assert_eq!(Node::leaf("Leaf").operation(), "Leaf");
    }

    #[test]
    fn a_branch_joins_and_wraps_its_children() {
        let mut branch = Node::branch();
        branch.add(Node::leaf("Leaf"));
        branch.add(Node::leaf("Leaf"));
        assert_eq!(branch.operation(), "Branch(Leaf+Leaf)");
    }

    #[test]
    fn nesting_recurses_regardless_of_depth() {
        let mut inner = Node::branch();
        inner.add(Node::leaf("X"));
        inner.add(Node::leaf("Y"));
        let mut middle = Node::branch();
        middle.add(inner);
        let mut tree = Node::branch();
        tree.add(middle);
        tree.add(Node::leaf("X"));
        assert_eq!(tree.operation(), "Branch(Branch(Branch(X+Y))+X)");
    }

    #[test]
    fn empty_branch_renders_empty_parens() {
        assert_eq!(Node::branch().operation(), "Branch()");
    }

    #[test]
    fn add_on_a_leaf_is_a_noop() {
        let mut leaf = Node::leaf("Leaf");
        leaf.add(Node::leaf("ignored"));
        assert_eq!(leaf.operation(), "Leaf");
        assert!(!leaf.is_composite());
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = "[A-Z]{1,3}".prop_map(Node::Leaf);
        leaf.prop_recursive(4, 24, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Node::Branch)
        })
    }

    fn count(node: &Node) -> (usize, usize) {
        // (branches, total children across branches)
        match node {
            Node::Leaf(_) => (0, 0),
            Node::Branch(children) => children.iter().map(count).fold(
                (1, children.len()),
                |(b, c), (cb, cc)| (b + cb, c + cc),
            ),
        }
    }

    proptest! {
        #[test]
        fn rendering_is_a_pure_function_of_structure(node in arb_node()) {
            prop_assert_eq!(node.operation(), node.operation());
        }

        #[test]
        fn every_branch_contributes_one_wrapper_and_its_joins(node in arb_node()) {
            let rendered = node.operation();
            let (branches, children) = count(&node);
            prop_assert_eq!(rendered.matches("Branch(").count(), branches);
            // A branch with n children contributes n-1 separators; leaf
            // labels never contain '+' by construction.
            prop_assert_eq!(
                rendered.matches('+').count(),
                children - branches_with_children(&node)
            );
        }
    }

    fn branches_with_children(node: &Node) -> usize {
        match node {
            Node::Leaf(_) => 0,
            Node::Branch(children) => {
                let own = usize::from(!children.is_empty());
                own + children.iter().map(branches_with_children).sum::<usize>()
            }
        }
    }
}
