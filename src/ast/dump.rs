use alloc::string::String;
use core::fmt::Write;

use crate::Tree;
use crate::ast::{NodeId, NodeVisitor, Payload};

/// Visitor that dumps a tree as indented text, one line per node.
///
/// Each line is the indentation unit repeated once per level of depth,
/// then the node's kind name, then `:payload` when the node carries one.
/// The depth is the context value of the walk: children are visited at
/// `depth + 1` and each method returns its incoming depth, so siblings
/// stay level and nothing needs restoring between subtrees. Start a walk
/// with `0` to anchor the root at the left margin.
///
/// # Example
///
/// ```
/// use astwalk::{DumpVisitor, NodeKind, Tree};
/// use bumpalo::Bump;
///
/// let bump = Bump::new();
/// let mut tree = Tree::new(&bump);
/// let root = tree.push(NodeKind::Start);
/// let id = tree.push(NodeKind::Identifier);
/// tree.set_label(id, "x");
/// tree.add_child(root, id);
///
/// let mut out = String::new();
/// let mut dump = DumpVisitor::new(&mut out);
/// tree.accept(root, &mut dump, 0);
/// assert_eq!(out, "Start\n  Identifier:x\n");
/// ```
pub struct DumpVisitor<'w, W: Write> {
    out: &'w mut W,
    unit: &'static str,
}

impl<'w, W: Write> DumpVisitor<'w, W> {
    /// Create a dump visitor writing to `out` with a two-space unit.
    pub fn new(out: &'w mut W) -> Self {
        Self::with_unit(out, "  ")
    }

    /// Create a dump visitor with a custom indentation unit.
    pub fn with_unit(out: &'w mut W, unit: &'static str) -> Self {
        Self { out, unit }
    }
}

impl DumpVisitor<'_, String> {
    /// Dump the subtree rooted at `root` into a fresh string.
    pub fn dump(tree: &Tree<'_>, root: NodeId) -> String {
        let mut out = String::new();
        let mut dump = DumpVisitor::new(&mut out);
        tree.accept(root, &mut dump, 0);
        out
    }
}

impl<'t, W: Write> NodeVisitor<'t> for DumpVisitor<'_, W> {
    type Data = usize;

    fn default_visit(&mut self, tree: &Tree<'t>, node: NodeId, depth: usize) -> usize {
        for _ in 0..depth {
            let _ = self.out.write_str(self.unit);
        }
        let data = tree.node(node);
        match data.payload {
            Payload::None => {
                let _ = write!(self.out, "{}", data.kind);
            }
            Payload::Label(label) => {
                let _ = write!(self.out, "{}:{}", data.kind, label);
            }
            Payload::Int(value) => {
                let _ = write!(self.out, "{}:{}", data.kind, value);
            }
        }
        let _ = self.out.write_char('\n');
        tree.children_accept(node, self, depth + 1);
        depth
    }
}
