//! Depth-first traversal and lookup over a module forest.
//!
//! Lookups always cover the whole forest. Expansion state plays no part here,
//! so collapsed modules stay findable by id.

use crate::models::ModuleNode;

/// Pre-order iterator yielding `(depth, node)` pairs.
///
/// Parents come before their children and siblings keep declaration order.
/// Roots have depth 0.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a ModuleNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a ModuleNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push in reverse so the first child is popped next
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Walks the forest in pre-order.
#[must_use]
pub fn preorder(forest: &[ModuleNode]) -> PreOrder<'_> {
    PreOrder {
        stack: forest.iter().rev().map(|root| (0, root)).collect(),
    }
}

/// Finds the first module (in pre-order) whose id matches.
///
/// Returns `None` when `id` is `None`, empty, or not present in the forest.
#[must_use]
pub fn find_node<'a>(forest: &'a [ModuleNode], id: Option<&str>) -> Option<&'a ModuleNode> {
    let id = id.filter(|id| !id.is_empty())?;
    preorder(forest)
        .map(|(_, node)| node)
        .find(|node| node.id == id)
}

/// Returns the chain of modules from a root down to the module with `id`.
///
/// The last element is the module itself. `None` when the id is unknown.
#[must_use]
pub fn path_to<'a>(forest: &'a [ModuleNode], id: &str) -> Option<Vec<&'a ModuleNode>> {
    fn walk<'a>(nodes: &'a [ModuleNode], id: &str, path: &mut Vec<&'a ModuleNode>) -> bool {
        for node in nodes {
            path.push(node);
            if node.id == id || walk(&node.children, id, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    if id.is_empty() {
        return None;
    }
    let mut path = Vec::new();
    walk(forest, id, &mut path).then_some(path)
}
