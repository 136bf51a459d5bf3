//! Scope analysis for JavaScript programs given as ESTree syntax trees.
//!
//! [`analyze`] walks a [`Program`] once and produces a [`ScopeManager`] describing:
//! - every lexical scope, as a tree rooted at the global scope;
//! - every variable each scope declares, with the syntax that defined it;
//! - every identifier use, and the variable it statically resolves to (if any);
//! - which scopes are dynamic because of `with` or a direct `eval`;
//! - which names are assigned without being declared.
//!
//! ```
//! use scope_js::{analyze, AnalyzeOptions, ScopeType};
//!
//! // function f(a) { return a + b; }
//! let program = estree_js::parse_json(r#"{
//!   "type": "Program",
//!   "body": [{
//!     "type": "FunctionDeclaration",
//!     "id": {"type": "Identifier", "name": "f"},
//!     "params": [{"type": "Identifier", "name": "a"}],
//!     "body": {"type": "BlockStatement", "body": [{
//!       "type": "ReturnStatement",
//!       "argument": {
//!         "type": "BinaryExpression",
//!         "operator": "+",
//!         "left": {"type": "Identifier", "name": "a"},
//!         "right": {"type": "Identifier", "name": "b"}
//!       }
//!     }]}
//!   }]
//! }"#).unwrap();
//!
//! let sm = analyze(&program, AnalyzeOptions::default()).unwrap();
//! let func = sm.scope(sm.scope(sm.global_scope()).child_scopes[0]);
//! assert_eq!(func.typ, ScopeType::Function);
//! // `arguments` and `a`.
//! assert_eq!(func.variables.len(), 2);
//! // `b` is unresolved and passes through to the global scope.
//! assert_eq!(func.through.len(), 1);
//! ```
//!
//! The analysis follows the classic `escope` model. Global references are left
//! unresolved unless [`AnalyzeOptions::optimistic`] is set, and references in
//! dynamic scopes are never resolved.

use estree_js::{Node, Program};
use tracing::debug;
use tracing::debug_span;

pub mod definition;
pub mod error;
pub mod manager;
pub mod node_ref;
pub mod options;
mod pattern;
pub mod reference;
mod referencer;
pub mod scope;
pub mod variable;

#[cfg(test)]
mod tests;

pub use definition::Definition;
pub use definition::DefinitionKind;
pub use error::AnalyzeError;
pub use manager::ScopeManager;
pub use node_ref::NodeRef;
pub use options::AnalyzeOptions;
pub use options::SourceType;
pub use reference::Reference;
pub use reference::ReferenceFlag;
pub use reference::ReferenceId;
pub use scope::Scope;
pub use scope::ScopeId;
pub use scope::ScopeType;
pub use variable::Variable;
pub use variable::VariableId;

/// Builds the scope tree of `program`.
///
/// Node ids must be unique within the tree, which holds for trees obtained from
/// [`estree_js::parse_json`] or [`estree_js::from_value`].
pub fn analyze<'a>(
  program: &'a Node<Program>,
  options: AnalyzeOptions,
) -> Result<ScopeManager<'a>, AnalyzeError> {
  let span = debug_span!(
    "scope_js.analyze",
    ecma_version = options.ecma_version,
    source_type = %options.source_type,
  );
  let _enter = span.enter();

  let mut sm = ScopeManager::new(options);
  referencer::Referencer::new(&mut sm).visit_program(program)?;
  if let Some(open) = sm.open_scope() {
    return Err(AnalyzeError::UnclosedScope {
      scope: open,
      block: sm.scope(open).block.id(),
    });
  }
  debug!(
    scopes = sm.scopes().len(),
    variables = sm.variables().len(),
    references = sm.references().len(),
    "analyzed"
  );
  Ok(sm)
}
