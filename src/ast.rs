//! Node and visitor machinery for the syntax tree.
//!
//! This module contains the storage-agnostic parts of the tree:
//!
//! - **Core types**: `NodeKind`, `NodeData`, `NodeId`, `Payload` - the
//!   logical structure of a node
//! - **NodeVisitor trait**: One method per concrete node kind, each falling
//!   back to `default_visit`
//! - **Dump**: Indented textual dump of a whole tree

pub mod dump;
pub mod node;
pub mod visit;

pub use dump::DumpVisitor;
pub use node::{NodeData, NodeFlags, NodeId, NodeKind, Payload};
pub use visit::{NodeCounter, NodeVisitor};
