//! Integration tests for astwalk.
//!
//! These exercise the accept/visit pairing, the dump policy, and the
//! arena's construction API together.

use astwalk::{DumpVisitor, NodeCounter, NodeId, NodeKind, NodeVisitor, Tree};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

/// Start node with two integer children (values 1 and 2).
fn two_integers(tree: &mut Tree<'_>) -> NodeId {
    let root = tree.push(NodeKind::Start);
    for value in [1, 2] {
        let leaf = tree.push(NodeKind::Integer);
        tree.set_value(leaf, value);
        tree.add_child(root, leaf);
        tree.close(leaf);
    }
    tree.close(root);
    root
}

/// Right-nested chain of `n` Add nodes, each with one integer leaf.
fn add_chain(tree: &mut Tree<'_>, n: usize) -> NodeId {
    let root = tree.push(NodeKind::Add);
    let mut current = root;
    for i in 1..=n {
        let leaf = tree.push(NodeKind::Integer);
        tree.set_value(leaf, i as i64);
        tree.add_child(current, leaf);
        if i < n {
            let next = tree.push(NodeKind::Add);
            tree.add_child(current, next);
            current = next;
        }
    }
    root
}

#[test]
fn test_dump_start_with_two_integers() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = two_integers(&mut tree);

    assert_eq!(
        DumpVisitor::dump(&tree, root),
        "Start\n  Integer:1\n  Integer:2\n"
    );
}

#[test]
fn test_dump_nested_add_chain() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = add_chain(&mut tree, 3);

    assert_eq!(
        DumpVisitor::dump(&tree, root),
        "Add\n  Integer:1\n  Add\n    Integer:2\n    Add\n      Integer:3\n"
    );
}

#[test]
fn test_dump_childless_root() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = tree.push(NodeKind::Start);

    let out = DumpVisitor::dump(&tree, root);
    assert_eq!(out, "Start\n");
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_dump_one_line_per_node() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = add_chain(&mut tree, 5);

    let out = DumpVisitor::dump(&tree, root);
    let count = tree.accept(root, &mut NodeCounter, 0);
    assert_eq!(out.lines().count(), count);
    assert_eq!(count, tree.len());
}

#[test]
fn test_dump_indentation_matches_depth() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = add_chain(&mut tree, 4);

    // Each node's line indentation equals its edge distance from the
    // root, in preorder.
    let out = DumpVisitor::dump(&tree, root);
    let depths: Vec<usize> = out
        .lines()
        .map(|line| (line.len() - line.trim_start().len()) / 2)
        .collect();
    let expected = preorder_depths(&tree, root);
    assert_eq!(depths, expected);
}

fn preorder_depths(tree: &Tree<'_>, root: NodeId) -> Vec<usize> {
    fn walk(tree: &Tree<'_>, node: NodeId, depth: usize, out: &mut Vec<usize>) {
        out.push(depth);
        for &child in tree.children(node) {
            walk(tree, child, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(tree, root, 0, &mut out);
    out
}

#[test]
fn test_dump_idempotent_with_fresh_and_reused_visitor() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = add_chain(&mut tree, 3);

    // Fresh visitor per walk.
    let first = DumpVisitor::dump(&tree, root);
    let second = DumpVisitor::dump(&tree, root);
    assert_eq!(first, second);

    // Same visitor instance across walks, no reset in between.
    let mut out = String::new();
    let mut dump = DumpVisitor::new(&mut out);
    tree.accept(root, &mut dump, 0);
    tree.accept(root, &mut dump, 0);
    let mut doubled = first.clone();
    doubled.push_str(&first);
    assert_eq!(out, doubled);
}

#[test]
fn test_fallback_routes_unhandled_kinds() {
    // Handles Integer specially; every other kind must land in
    // default_visit.
    struct Partial {
        integers: usize,
        fallbacks: usize,
    }

    impl<'t> NodeVisitor<'t> for Partial {
        type Data = ();

        fn default_visit(&mut self, tree: &Tree<'t>, node: NodeId, data: ()) {
            self.fallbacks += 1;
            tree.children_accept(node, self, data)
        }

        fn visit_integer(&mut self, tree: &Tree<'t>, node: NodeId, data: ()) {
            self.integers += 1;
            tree.children_accept(node, self, data)
        }
    }

    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = tree.push(NodeKind::Start);
    let mult = tree.push(NodeKind::Mult);
    let base = tree.push(NodeKind::Node);
    let leaf = tree.push(NodeKind::Integer);
    tree.add_child(root, mult);
    tree.add_child(mult, base);
    tree.add_child(mult, leaf);

    let mut partial = Partial {
        integers: 0,
        fallbacks: 0,
    };
    tree.accept(root, &mut partial, ());

    assert_eq!(partial.integers, 1);
    // Start, Mult, and the base-kind node all fall back.
    assert_eq!(partial.fallbacks, 3);
}

#[test]
fn test_children_accept_order_and_context_threading() {
    // Collect integer values in visit order; the growing vector is the
    // context value itself.
    struct Collect;

    impl<'t> NodeVisitor<'t> for Collect {
        type Data = Vec<i64>;

        fn visit_integer(&mut self, tree: &Tree<'t>, node: NodeId, mut seen: Vec<i64>) -> Vec<i64> {
            if let Some(value) = tree.value(node) {
                seen.push(value);
            }
            tree.children_accept(node, self, seen)
        }
    }

    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = tree.push(NodeKind::Start);
    for value in [3, 1, 2] {
        let leaf = tree.push(NodeKind::Integer);
        tree.set_value(leaf, value);
        tree.add_child(root, leaf);
    }

    let seen = tree.accept(root, &mut Collect, Vec::new());
    assert_eq!(seen, vec![3, 1, 2]);
}

#[test]
fn test_parent_back_references() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = two_integers(&mut tree);

    assert_eq!(tree.parent(root), None);
    for &child in tree.children(root) {
        assert_eq!(tree.parent(child), Some(root));
    }
    assert_eq!(tree.child(root, 0), Some(tree.children(root)[0]));
    assert_eq!(tree.child(root, 2), None);
}

#[test]
fn test_remove_child_detaches() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = two_integers(&mut tree);
    let first = tree.child(root, 0).unwrap();

    let removed = tree.remove_child(root, 0);
    assert_eq!(removed, Some(first));
    assert_eq!(tree.num_children(root), 1);
    assert_eq!(tree.parent(first), None);
    assert_eq!(tree.remove_child(root, 5), None);

    // The remaining child is still walked; the detached one is not.
    assert_eq!(DumpVisitor::dump(&tree, root), "Start\n  Integer:2\n");
}

#[test]
fn test_label_interning_shares_storage() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let a = tree.push(NodeKind::Identifier);
    let b = tree.push(NodeKind::Identifier);
    tree.set_label(a, "shared");
    tree.set_label(b, "shared");

    let la = tree.label(a).unwrap();
    let lb = tree.label(b).unwrap();
    assert_eq!(la, "shared");
    assert!(std::ptr::eq(la, lb));
}

#[test]
fn test_open_close_lifecycle() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let node = tree.push(NodeKind::Start);

    assert!(tree.node(node).is_open());
    tree.close(node);
    assert!(!tree.node(node).is_open());
}

#[test]
fn test_production_tags() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let defaulted = tree.push(NodeKind::Mult);
    let explicit = tree.push_with_production(NodeKind::Mult, 42);

    assert_eq!(tree.production(defaulted), NodeKind::Mult.production());
    assert_eq!(tree.production(explicit), 42);
    assert_eq!(tree.kind(explicit), NodeKind::Mult);
}

#[test]
fn test_node_counter_reuse() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);
    let root = add_chain(&mut tree, 2);

    let mut counter = NodeCounter;
    let first = tree.accept(root, &mut counter, 0);
    let second = tree.accept(root, &mut counter, 0);
    assert_eq!(first, second);
    assert_eq!(first, 4);
}

#[test]
fn test_deep_chain_depth_equals_height() {
    let bump = Bump::new();
    let mut tree = Tree::new(&bump);

    // 100-node straight line; max indentation must equal the height.
    let root = tree.push(NodeKind::Node);
    let mut current = root;
    for _ in 0..99 {
        let next = tree.push(NodeKind::Node);
        tree.add_child(current, next);
        current = next;
    }

    let out = DumpVisitor::dump(&tree, root);
    assert_eq!(out.lines().count(), 100);
    let max_depth = out
        .lines()
        .map(|line| (line.len() - line.trim_start().len()) / 2)
        .max()
        .unwrap();
    assert_eq!(max_depth, 99);
}
