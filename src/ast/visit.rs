use crate::Tree;
use crate::ast::NodeId;

/// Trait for visiting tree nodes.
///
/// A visitor has one method per concrete node kind plus `default_visit`,
/// the fallback. Every per-kind method defaults to the fallback, so the
/// kind/method pairing is total by construction: adding a node kind
/// without a dedicated method degrades to generic handling instead of
/// failing. `default_visit` itself recurses into all children, so an
/// empty `impl` walks the whole tree and does nothing.
///
/// `Data` is the context value threaded through the walk: each method
/// receives it by value and returns the value to hand to the next call.
/// Depth counters, accumulators, and similar per-visit state belong there
/// rather than in visitor fields, so reuse and reentrancy need no reset.
///
/// # Example
///
/// ```
/// use astwalk::{NodeKind, NodeId, NodeVisitor, Tree};
/// use bumpalo::Bump;
///
/// struct AddCounter {
///     adds: usize,
/// }
///
/// impl<'t> NodeVisitor<'t> for AddCounter {
///     type Data = ();
///
///     fn visit_add(&mut self, tree: &Tree<'t>, node: NodeId, data: ()) {
///         self.adds += 1;
///         tree.children_accept(node, self, data)
///     }
/// }
///
/// let bump = Bump::new();
/// let mut tree = Tree::new(&bump);
/// let root = tree.push(NodeKind::Start);
/// let add = tree.push(NodeKind::Add);
/// tree.add_child(root, add);
///
/// let mut counter = AddCounter { adds: 0 };
/// tree.accept(root, &mut counter, ());
/// assert_eq!(counter.adds, 1);
/// ```
pub trait NodeVisitor<'t> {
    /// Context value threaded through the walk.
    type Data;

    /// Fallback for the base kind and for kinds without a dedicated
    /// override. Recurses into all children in declaration order.
    fn default_visit(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        tree.children_accept(node, self, data)
    }

    /// Visit a `Start` node.
    fn visit_start(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        self.default_visit(tree, node, data)
    }

    /// Visit an `Add` node.
    fn visit_add(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        self.default_visit(tree, node, data)
    }

    /// Visit a `Mult` node.
    fn visit_mult(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        self.default_visit(tree, node, data)
    }

    /// Visit an `Identifier` node.
    fn visit_identifier(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        self.default_visit(tree, node, data)
    }

    /// Visit an `OtherIdentifier` node.
    fn visit_other_identifier(
        &mut self,
        tree: &Tree<'t>,
        node: NodeId,
        data: Self::Data,
    ) -> Self::Data {
        self.default_visit(tree, node, data)
    }

    /// Visit an `Integer` node.
    fn visit_integer(&mut self, tree: &Tree<'t>, node: NodeId, data: Self::Data) -> Self::Data {
        self.default_visit(tree, node, data)
    }
}

/// Example visitor: count every node reachable from the start of a walk.
///
/// The count is carried in the context value, so the same instance can be
/// reused across walks without accumulating stale state.
///
/// # Example
///
/// ```
/// use astwalk::{NodeCounter, NodeKind, Tree};
/// use bumpalo::Bump;
///
/// let bump = Bump::new();
/// let mut tree = Tree::new(&bump);
/// let root = tree.push(NodeKind::Start);
/// let leaf = tree.push(NodeKind::Integer);
/// tree.add_child(root, leaf);
///
/// let count = tree.accept(root, &mut NodeCounter, 0);
/// assert_eq!(count, 2);
/// ```
pub struct NodeCounter;

impl<'t> NodeVisitor<'t> for NodeCounter {
    type Data = usize;

    fn default_visit(&mut self, tree: &Tree<'t>, node: NodeId, count: usize) -> usize {
        tree.children_accept(node, self, count + 1)
    }
}
