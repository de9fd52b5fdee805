use alloc::vec::Vec;
use bumpalo::Bump;
use hashbrown::HashSet;

use crate::ast::{NodeData, NodeFlags, NodeId, NodeKind, NodeVisitor, Payload};

/// Arena of tree nodes addressed by stable [`NodeId`]s.
///
/// The tree owns every node exclusively: dropping the tree drops all
/// subtrees. Parent links are non-owning back-references. Label strings
/// are allocated in a caller-supplied `Bump` and deduplicated, so equal
/// labels share one allocation.
///
/// # Example
///
/// ```
/// use astwalk::{NodeKind, Tree};
/// use bumpalo::Bump;
///
/// let bump = Bump::new();
/// let mut tree = Tree::new(&bump);
///
/// let root = tree.push(NodeKind::Start);
/// let id = tree.push(NodeKind::Identifier);
/// tree.set_label(id, "x");
/// tree.add_child(root, id);
///
/// assert_eq!(tree.num_children(root), 1);
/// assert_eq!(tree.parent(id), Some(root));
/// assert_eq!(tree.label(id), Some("x"));
/// ```
pub struct Tree<'t> {
    bump: &'t Bump,
    nodes: Vec<NodeData<'t>>,
    labels: HashSet<&'t str>,
}

impl<'t> Tree<'t> {
    /// Create an empty tree backed by the given arena.
    pub fn new(bump: &'t Bump) -> Self {
        Self {
            bump,
            nodes: Vec::new(),
            labels: HashSet::new(),
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a detached node of the given kind.
    ///
    /// The node starts open (see [`NodeFlags::OPEN`]) with no parent, no
    /// children, and no payload. Its production tag is the kind's default.
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        self.push_with_production(kind, kind.production())
    }

    /// Create a detached node with an explicit production tag.
    pub fn push_with_production(&mut self, kind: NodeKind, production: u16) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(NodeData::new(kind, production));
        id
    }

    /// Mark a node as fully constructed.
    pub fn close(&mut self, node: NodeId) {
        self.nodes[node.index()].flags.remove(NodeFlags::OPEN);
    }

    /// Append `child` to `parent`'s children, setting the back-reference.
    ///
    /// Children keep their append order for traversal.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.index()].parent.is_none(),
            "child already attached"
        );
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Detach the `index`-th child of `parent`, clearing its back-reference.
    ///
    /// Returns the detached child's id, or `None` if `index` is out of
    /// range. The detached subtree stays owned by the tree (arena storage
    /// is only reclaimed when the tree drops).
    pub fn remove_child(&mut self, parent: NodeId, index: usize) -> Option<NodeId> {
        if index >= self.nodes[parent.index()].children.len() {
            return None;
        }
        let child = self.nodes[parent.index()].children.remove(index);
        self.nodes[child.index()].parent = None;
        Some(child)
    }

    /// Set a node's text label, interning it in the arena.
    pub fn set_label(&mut self, node: NodeId, label: &str) {
        let label = self.intern(label);
        self.nodes[node.index()].payload = Payload::Label(label);
    }

    /// Set a node's integer value.
    pub fn set_value(&mut self, node: NodeId, value: i64) {
        self.nodes[node.index()].payload = Payload::Int(value);
    }

    fn intern(&mut self, label: &str) -> &'t str {
        if let Some(&interned) = self.labels.get(label) {
            return interned;
        }
        let interned: &'t str = self.bump.alloc_str(label);
        self.labels.insert(interned);
        interned
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Full data for a node.
    pub fn node(&self, node: NodeId) -> &NodeData<'t> {
        &self.nodes[node.index()]
    }

    /// The node's concrete kind.
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.index()].kind
    }

    /// The node's production tag.
    pub fn production(&self, node: NodeId) -> u16 {
        self.nodes[node.index()].production
    }

    /// The node's parent, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// The node's children in declaration order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    /// The `index`-th child, if present.
    pub fn child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[node.index()].children.get(index).copied()
    }

    /// Number of direct children.
    pub fn num_children(&self, node: NodeId) -> usize {
        self.nodes[node.index()].children.len()
    }

    /// The node's text label, if set.
    pub fn label(&self, node: NodeId) -> Option<&'t str> {
        match self.nodes[node.index()].payload {
            Payload::Label(label) => Some(label),
            _ => None,
        }
    }

    /// The node's integer value, if set.
    pub fn value(&self, node: NodeId) -> Option<i64> {
        match self.nodes[node.index()].payload {
            Payload::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Total number of nodes ever created in this tree, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Present `node` to the visitor, routing by concrete kind.
    ///
    /// This is the dispatch half of the accept/visit pairing: each kind
    /// maps to exactly one visitor method, and the base kind maps to the
    /// visitor's `default_visit`. The context value `data` is handed to
    /// the chosen method and its return value handed back to the caller.
    ///
    /// Traversal is recursive and call-stack-bound: a walk nests one
    /// stack frame per level of tree height, so degenerate chain-shaped
    /// trees with depth close to node count can exhaust the stack.
    pub fn accept<V>(&self, node: NodeId, visitor: &mut V, data: V::Data) -> V::Data
    where
        V: NodeVisitor<'t> + ?Sized,
    {
        match self.kind(node) {
            NodeKind::Node => visitor.default_visit(self, node, data),
            NodeKind::Start => visitor.visit_start(self, node, data),
            NodeKind::Add => visitor.visit_add(self, node, data),
            NodeKind::Mult => visitor.visit_mult(self, node, data),
            NodeKind::Identifier => visitor.visit_identifier(self, node, data),
            NodeKind::OtherIdentifier => visitor.visit_other_identifier(self, node, data),
            NodeKind::Integer => visitor.visit_integer(self, node, data),
        }
    }

    /// Invoke [`Tree::accept`] on every child of `node` in declaration
    /// order, threading the context value through each call.
    ///
    /// Generic preorder and postorder policies are written against this
    /// helper instead of hand-rolling the child loop per method.
    pub fn children_accept<V>(&self, node: NodeId, visitor: &mut V, mut data: V::Data) -> V::Data
    where
        V: NodeVisitor<'t> + ?Sized,
    {
        for &child in self.children(node) {
            data = self.accept(child, visitor, data);
        }
        data
    }
}
