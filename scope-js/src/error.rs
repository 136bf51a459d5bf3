use crate::scope::ScopeId;
use estree_js::{Loc, NodeId};

/// Errors produced while building the scope tree.
///
/// Only [`AnalyzeError::ImportOutsideModule`] is caused by the input; the rest
/// indicate the walk left the scope stack in an impossible state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
  /// An `import` declaration was found while not analyzing an ES6+ module.
  #[error("import declaration at {}..{} is only allowed in modules with ecmaVersion >= 6", .loc.0, .loc.1)]
  ImportOutsideModule { loc: Loc },

  /// A scope operation ran with no scope open.
  #[error("no scope is open")]
  NoOpenScope,

  /// A reference was delegated into a scope that has already been closed.
  #[error("scope {0:?} is already closed")]
  ScopeClosed(ScopeId),

  /// The walk finished with a scope still open.
  #[error("scope {scope:?} opened for node {block:?} was never closed")]
  UnclosedScope { scope: ScopeId, block: NodeId },
}
