//! Example demonstrating custom visitors that carry context values.
//!
//! Run with: cargo run --example node_counter

use astwalk::{NodeCounter, NodeId, NodeKind, NodeVisitor, Tree};
use bumpalo::Bump;

/// Sum every integer literal in the tree, carrying the running total as
/// the context value.
struct IntegerSum;

impl<'t> NodeVisitor<'t> for IntegerSum {
    type Data = i64;

    fn visit_integer(&mut self, tree: &Tree<'t>, node: NodeId, total: i64) -> i64 {
        let total = total + tree.value(node).unwrap_or(0);
        tree.children_accept(node, self, total)
    }
}

fn main() {
    println!("=== Visitor Context Example ===\n");

    let bump = Bump::new();
    let mut tree = Tree::new(&bump);

    let root = tree.push(NodeKind::Start);
    let add = tree.push(NodeKind::Add);
    tree.add_child(root, add);
    for value in [10, 20, 12] {
        let leaf = tree.push(NodeKind::Integer);
        tree.set_value(leaf, value);
        tree.add_child(add, leaf);
    }

    let count = tree.accept(root, &mut NodeCounter, 0);
    println!("Tree has {count} nodes");

    let total = tree.accept(root, &mut IntegerSum, 0);
    println!("Integer literals sum to {total}");

    // The same visitor instance can walk again with no reset: all state
    // lives in the context value.
    let again = tree.accept(root, &mut NodeCounter, 0);
    println!("Second walk agrees: {again} nodes");

    println!("\n=== Done ===");
}
