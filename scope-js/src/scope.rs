use crate::node_ref::NodeRef;
use crate::reference::ReferenceId;
use crate::variable::VariableId;
use ahash::HashMap;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
  pub(crate) fn from_index(index: usize) -> ScopeId {
    ScopeId(index as u32)
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ScopeType {
  Global,
  Module,
  Function,
  /// Holds only the name of a named function expression, between the function and
  /// the scope the expression appears in.
  FunctionExpressionName,
  Block,
  Switch,
  Catch,
  With,
  Class,
  /// The per-iteration bindings of a `for`/`for-in`/`for-of` with a lexical head.
  For,
  /// The lexical bindings of a `for-in`/`for-of` head while its iterated expression
  /// is evaluated.
  Tdz,
}

impl ScopeType {
  /// Whether declarations with `var` (and parameters) land in scopes of this type.
  pub fn is_variable_scope(self) -> bool {
    matches!(
      self,
      ScopeType::Global | ScopeType::Module | ScopeType::Function
    )
  }
}

impl fmt::Display for ScopeType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ScopeType::Global => "global",
      ScopeType::Module => "module",
      ScopeType::Function => "function",
      ScopeType::FunctionExpressionName => "function-expression-name",
      ScopeType::Block => "block",
      ScopeType::Switch => "switch",
      ScopeType::Catch => "catch",
      ScopeType::With => "with",
      ScopeType::Class => "class",
      ScopeType::For => "for",
      ScopeType::Tdz => "TDZ",
    })
  }
}

/// Names that were assigned without ever being declared, which a non-strict
/// program creates on the global object. Only the global scope has these.
#[derive(Debug, Default)]
pub struct ImplicitGlobals {
  pub set: HashMap<String, VariableId>,
  pub variables: Vec<VariableId>,
  /// References left unresolved at the global scope.
  pub left: Vec<ReferenceId>,
}

#[derive(Debug)]
pub struct Scope<'a> {
  pub typ: ScopeType,
  /// The node that introduced this scope.
  pub block: NodeRef<'a>,
  pub is_strict: bool,
  pub upper: Option<ScopeId>,
  pub child_scopes: Vec<ScopeId>,
  /// The nearest enclosing function, module, or global scope, which may be this
  /// scope itself.
  pub variable_scope: ScopeId,
  pub set: HashMap<String, VariableId>,
  /// Declared variables in declaration order.
  pub variables: Vec<VariableId>,
  /// References created directly in this scope.
  pub references: Vec<ReferenceId>,
  /// References that could not be resolved in this scope, including those passed up
  /// from inner scopes.
  pub through: Vec<ReferenceId>,
  pub taints: HashMap<String, bool>,
  pub this_found: bool,
  /// Whether this scope contains a direct call to `eval`.
  pub direct_call_to_eval_scope: bool,
  /// Whether this is the scope holding a named function expression's own name.
  pub function_expression_scope: bool,
  pub implicit: Option<ImplicitGlobals>,
  pub(crate) dynamic: bool,
  // `Some` while open.
  pub(crate) left: Option<Vec<ReferenceId>>,
}

impl<'a> Scope<'a> {
  pub(crate) fn new(
    typ: ScopeType,
    block: NodeRef<'a>,
    is_strict: bool,
    upper: Option<ScopeId>,
    variable_scope: ScopeId,
  ) -> Self {
    Scope {
      typ,
      block,
      is_strict,
      upper,
      child_scopes: Vec::new(),
      variable_scope,
      set: HashMap::default(),
      variables: Vec::new(),
      references: Vec::new(),
      through: Vec::new(),
      taints: HashMap::default(),
      this_found: false,
      direct_call_to_eval_scope: false,
      function_expression_scope: typ == ScopeType::FunctionExpressionName,
      implicit: (typ == ScopeType::Global).then(ImplicitGlobals::default),
      dynamic: matches!(typ, ScopeType::Global | ScopeType::With),
      left: Some(Vec::new()),
    }
  }

  /// Whether name resolution in this scope can be done statically. Global and `with`
  /// scopes never can; other scopes lose it when they (or an inner function scope)
  /// contain a direct `eval`.
  pub fn is_static(&self) -> bool {
    !self.dynamic
  }

  pub fn is_closed(&self) -> bool {
    self.left.is_none()
  }

  /// Whether `this` needs to be bound for this scope. Only function scopes can prove
  /// they don't need it.
  pub fn is_this_materialized(&self) -> bool {
    if self.typ != ScopeType::Function || !self.is_static() {
      return true;
    }
    self.this_found
  }

  pub fn variable(&self, name: &str) -> Option<VariableId> {
    self.set.get(name).copied()
  }
}
