use crate::definition::Definition;
use crate::reference::ReferenceId;
use crate::scope::ScopeId;
use estree_js::expr::Identifier;
use estree_js::Node;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VariableId(u32);

impl VariableId {
  pub(crate) fn from_index(index: usize) -> VariableId {
    VariableId(index as u32)
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// A named binding owned by exactly one scope.
#[derive(Debug)]
pub struct Variable<'a> {
  pub name: String,
  /// Defining identifier occurrences, in discovery order.
  pub identifiers: Vec<&'a Node<Identifier>>,
  /// References statically resolved to this variable.
  pub references: Vec<ReferenceId>,
  pub defs: Vec<Definition<'a>>,
  /// Whether a reference that may be shadowed at runtime (inside `with`) resolved
  /// here.
  pub tainted: bool,
  /// Whether every resolved reference comes from the same function as the
  /// declaration, so the variable could live on the stack.
  pub stack: bool,
  pub scope: ScopeId,
}

impl<'a> Variable<'a> {
  pub(crate) fn new(name: String, scope: ScopeId) -> Self {
    Variable {
      name,
      identifiers: Vec::new(),
      references: Vec::new(),
      defs: Vec::new(),
      tainted: false,
      stack: true,
      scope,
    }
  }
}
