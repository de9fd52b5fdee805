use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags tracking per-node construction state.
    ///
    /// Flags are set by the tree builder while the tree is assembled and
    /// are metadata only - traversal never depends on them.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct NodeFlags: u8 {
        /// The node is still being built: the producing parser has created
        /// it but has not yet attached all of its children.
        const OPEN = 1;
    }
}

/// The closed set of concrete node kinds.
///
/// `Node` is the base kind: a node of this kind (and any kind a visitor
/// does not handle specially) is routed to the visitor's `default_visit`.
/// The numeric discriminant doubles as the default production tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// Base kind with no dedicated visitor method.
    Node,
    /// Grammar start production.
    Start,
    /// Addition expression.
    Add,
    /// Multiplication expression.
    Mult,
    /// Named identifier.
    Identifier,
    /// Alternate identifier production.
    OtherIdentifier,
    /// Integer literal.
    Integer,
}

impl NodeKind {
    /// Display name of this kind, as printed by the dump visitor.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Node => "Node",
            NodeKind::Start => "Start",
            NodeKind::Add => "Add",
            NodeKind::Mult => "Mult",
            NodeKind::Identifier => "Identifier",
            NodeKind::OtherIdentifier => "OtherIdentifier",
            NodeKind::Integer => "Integer",
        }
    }

    /// Default production tag for nodes of this kind.
    ///
    /// A generator that numbers its productions differently can override
    /// the tag per node via [`crate::Tree::push_with_production`].
    pub fn production(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific payload carried by a node.
///
/// Labels are interned in the tree's arena, so the payload stays `Copy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Payload<'t> {
    /// No payload (e.g. `Start`, `Add`).
    None,
    /// Text label (identifiers).
    Label(&'t str),
    /// Numeric value (integer literals).
    Int(i64),
}

/// Stable handle to a node within its [`crate::Tree`].
///
/// Ids index into the owning tree's node storage; they stay valid for the
/// lifetime of the tree and never imply ownership. Using an id with a tree
/// other than the one that issued it is a caller contract violation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Data for one node: kind, production tag, links, and payload.
///
/// Children are exclusively owned by the tree and kept in declaration
/// order. The parent link is a non-owning back-reference for lookup only.
#[derive(Clone, Debug)]
pub struct NodeData<'t> {
    /// The concrete kind of this node.
    pub kind: NodeKind,

    /// Small integer tag identifying the grammar production that built
    /// this node.
    pub production: u16,

    /// Construction bookkeeping flags.
    pub flags: NodeFlags,

    /// Non-owning back-reference to the parent, if attached.
    pub parent: Option<NodeId>,

    /// Ordered child ids.
    pub children: Vec<NodeId>,

    /// Kind-specific payload.
    pub payload: Payload<'t>,
}

impl<'t> NodeData<'t> {
    pub(crate) fn new(kind: NodeKind, production: u16) -> Self {
        Self {
            kind,
            production,
            flags: NodeFlags::OPEN,
            parent: None,
            children: Vec::new(),
            payload: Payload::None,
        }
    }

    /// Check whether the node is still open for construction.
    pub fn is_open(&self) -> bool {
        self.flags.contains(NodeFlags::OPEN)
    }
}
