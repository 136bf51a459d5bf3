use crate::node_ref::NodeRef;
use estree_js::expr::Identifier;
use estree_js::stmt::VariableKind;
use estree_js::Node;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DefinitionKind {
  CatchClause,
  ClassName,
  FunctionName,
  ImplicitGlobalVariable,
  ImportBinding,
  Parameter,
  /// A `let`/`const` binding of a `for-in`/`for-of` head, as seen while evaluating
  /// the iterated expression.
  Tdz,
  Variable,
}

impl fmt::Display for DefinitionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      DefinitionKind::CatchClause => "CatchClause",
      DefinitionKind::ClassName => "ClassName",
      DefinitionKind::FunctionName => "FunctionName",
      DefinitionKind::ImplicitGlobalVariable => "ImplicitGlobalVariable",
      DefinitionKind::ImportBinding => "ImportBinding",
      DefinitionKind::Parameter => "Parameter",
      DefinitionKind::Tdz => "TDZ",
      DefinitionKind::Variable => "Variable",
    })
  }
}

/// One syntactic occurrence that introduces a binding.
#[derive(Clone, Debug)]
pub struct Definition<'a> {
  pub kind: DefinitionKind,
  /// The identifier being bound.
  pub name: &'a Node<Identifier>,
  /// The declaring construct: the declarator, function, class, catch clause, import
  /// specifier, or (for implicit globals) the assignment or loop.
  pub node: NodeRef<'a>,
  /// The enclosing declaration statement, for variables and imports.
  pub parent: Option<NodeRef<'a>>,
  /// Position of the declarator within its declaration, or of the parameter within
  /// the parameter list.
  pub index: Option<usize>,
  /// The keyword of the declaration, for `Variable` and `Tdz` definitions.
  pub decl_kind: Option<VariableKind>,
  /// Whether this parameter is bound by a rest element.
  pub rest: bool,
}

impl<'a> Definition<'a> {
  pub(crate) fn new(kind: DefinitionKind, name: &'a Node<Identifier>, node: NodeRef<'a>) -> Self {
    Definition {
      kind,
      name,
      node,
      parent: None,
      index: None,
      decl_kind: None,
      rest: false,
    }
  }

  pub(crate) fn with_parent(mut self, parent: NodeRef<'a>) -> Self {
    self.parent = Some(parent);
    self
  }

  pub(crate) fn with_index(mut self, index: usize) -> Self {
    self.index = Some(index);
    self
  }

  pub(crate) fn with_decl_kind(mut self, kind: VariableKind) -> Self {
    self.decl_kind = Some(kind);
    self
  }

  pub(crate) fn with_rest(mut self, rest: bool) -> Self {
    self.rest = rest;
    self
  }
}
