//! Example demonstrating the dump visitor.
//!
//! Run with: cargo run --example dump_tree

use astwalk::{DumpVisitor, NodeKind, Tree};
use bumpalo::Bump;

fn main() {
    println!("=== DumpVisitor Example ===\n");

    let bump = Bump::new();
    let mut tree = Tree::new(&bump);

    // Build the tree for `x + 2 * y`:
    //
    //   Start
    //     Add
    //       Identifier:x
    //       Mult
    //         Integer:2
    //         Identifier:y
    let root = tree.push(NodeKind::Start);
    let add = tree.push(NodeKind::Add);
    let x = tree.push(NodeKind::Identifier);
    tree.set_label(x, "x");
    let mult = tree.push(NodeKind::Mult);
    let two = tree.push(NodeKind::Integer);
    tree.set_value(two, 2);
    let y = tree.push(NodeKind::Identifier);
    tree.set_label(y, "y");

    tree.add_child(mult, two);
    tree.add_child(mult, y);
    tree.add_child(add, x);
    tree.add_child(add, mult);
    tree.add_child(root, add);

    println!("Default two-space unit:");
    print!("{}", DumpVisitor::dump(&tree, root));

    println!("\nCustom unit \"| \":");
    let mut out = String::new();
    let mut dump = DumpVisitor::with_unit(&mut out, "| ");
    tree.accept(root, &mut dump, 0);
    print!("{out}");

    println!("\n=== Done ===");
}
