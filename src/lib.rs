//! Arena-backed AST nodes with visitor-based traversal.
//!
//! This crate provides a small syntax-tree representation in which every
//! node carries a kind tag, ordered children, and an optional payload, and
//! traversal policies are written as visitors. A node presents itself to a
//! visitor through [`Tree::accept`], which routes to the visitor method for
//! the node's concrete kind; visitors recurse through
//! [`Tree::children_accept`], threading an opaque context value through the
//! walk.
//!
//! # Example
//!
//! ```
//! use astwalk::{DumpVisitor, NodeKind, Tree};
//! use bumpalo::Bump;
//!
//! let bump = Bump::new();
//! let mut tree = Tree::new(&bump);
//!
//! let root = tree.push(NodeKind::Start);
//! let one = tree.push(NodeKind::Integer);
//! tree.set_value(one, 1);
//! tree.add_child(root, one);
//!
//! assert_eq!(DumpVisitor::dump(&tree, root), "Start\n  Integer:1\n");
//! ```

#![no_std]
extern crate alloc;

// Generic node/visitor machinery
pub mod ast;

// Arena storage for trees
pub mod arena;

// Re-export AST types for convenience
pub use ast::{DumpVisitor, NodeCounter, NodeData, NodeFlags, NodeId, NodeKind, NodeVisitor, Payload};

// Re-export the arena
pub use arena::Tree;
