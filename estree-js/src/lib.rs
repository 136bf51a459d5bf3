//! Strongly typed [ESTree](https://github.com/estree/estree) syntax trees.
//!
//! The tree is deserialized from the JSON produced by any ESTree-conforming parser
//! (Esprima, Acorn, Espree, ...). Node families are closed enums, so a node type the
//! crate doesn't model is a deserialization error rather than something silently
//! skipped by later passes.
//!
//! Every node carries a [`NodeId`] that is unique within its tree once
//! [`assign_node_ids`] has run; [`parse_json`] and [`from_value`] do this already.

use derive_visitor::VisitorMut;
use serde::de::Error as _;
use serde_json::Value;

pub mod class;
pub mod expr;
pub mod func;
pub mod loc;
pub mod module;
pub mod node;
pub mod pat;
pub mod stmt;

pub use loc::Loc;
pub use node::Node;
pub use node::NodeId;
pub use stmt::Program;

#[derive(VisitorMut)]
#[visitor(NodeId(enter))]
struct NodeIdAssigner {
  next: u32,
}

impl NodeIdAssigner {
  fn enter_node_id(&mut self, id: &mut NodeId) {
    *id = NodeId::from_raw(self.next);
    self.next += 1;
  }
}

/// Numbers every node of the tree in pre-order, starting from zero at the root.
/// Returns how many ids were handed out.
pub fn assign_node_ids<T: derive_visitor::DriveMut>(root: &mut T) -> u32 {
  let mut assigner = NodeIdAssigner { next: 0 };
  root.drive_mut(&mut assigner);
  assigner.next
}

/// Converts an already parsed JSON value holding an ESTree `Program`.
pub fn from_value(value: Value) -> Result<Node<Program>, serde_json::Error> {
  match node::node_type(&value) {
    Some("Program") => {}
    Some(other) => {
      return Err(serde_json::Error::custom(format!(
        "expected a Program node, found {other}"
      )))
    }
    None => return Err(serde_json::Error::custom("ESTree node is missing its `type` tag")),
  };
  let mut program: Node<Program> = serde_json::from_value(value)?;
  assign_node_ids(&mut program);
  Ok(program)
}

/// Parses ESTree JSON text holding a `Program`.
pub fn parse_json(source: &str) -> Result<Node<Program>, serde_json::Error> {
  from_value(serde_json::from_str(source)?)
}
