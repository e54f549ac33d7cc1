use super::Node;

/// An iterator that iteratively traverses an expression tree in left-to-right post-order (i.e.
/// depth-first, operands before their operator).
///
/// The traversal uses an explicit stack instead of recursion, so it is safe to use on arbitrarily
/// deep trees.
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
    last_visited: Option<&'a Node>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator that traverses the tree in left-to-right post-order.
    pub fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node is the last visited node.
    fn is_last_visited(&self, node: &'a Node) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            match node {
                Node::Number(_) | Node::Variable(_) => return self.visit(),
                Node::Operator(binary) => {
                    // both operands are done once the right one has been visited
                    if self.is_last_visited(&*binary.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&*binary.rhs);
                    self.stack.push(&*binary.lhs);
                },
            }
        }
    }
}

impl Node {
    /// Returns an iterator over the nodes of the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> NodeIter<'_> {
        NodeIter::new(self)
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Node::Operator(binary) = node {
                stack.push((&*binary.lhs, depth + 1));
                stack.push((&*binary.rhs, depth + 1));
            }
        }
        max_depth
    }
}
