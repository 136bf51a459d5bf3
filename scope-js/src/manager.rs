use crate::definition::Definition;
use crate::definition::DefinitionKind;
use crate::error::AnalyzeError;
use crate::node_ref::NodeRef;
use crate::options::AnalyzeOptions;
use crate::reference::ImplicitGlobalCandidate;
use crate::reference::Reference;
use crate::reference::ReferenceFlag;
use crate::reference::ReferenceId;
use crate::scope::Scope;
use crate::scope::ScopeId;
use crate::scope::ScopeType;
use crate::variable::Variable;
use crate::variable::VariableId;
use ahash::HashMap;
use estree_js::expr::{Expr, Identifier};
use estree_js::func::FunctionBody;
use estree_js::stmt::Stmt;
use estree_js::{Node, NodeId};
use tracing::trace;

#[derive(Clone, Copy)]
enum DefineTarget {
  Scope,
  Implicit,
}

/// The result of analyzing one program: every scope, variable, and reference, plus
/// the side tables mapping tree nodes to them.
///
/// Scopes, variables, and references live in arenas owned by the manager and point
/// at each other with ids. Everything borrows the analyzed tree, which must outlive
/// the manager.
#[derive(Debug)]
pub struct ScopeManager<'a> {
  options: AnalyzeOptions,
  scopes: Vec<Scope<'a>>,
  variables: Vec<Variable<'a>>,
  references: Vec<Reference<'a>>,
  node_to_scope: HashMap<NodeId, Vec<ScopeId>>,
  declared_variables: HashMap<NodeId, Vec<VariableId>>,
  current_scope: Option<ScopeId>,
}

impl<'a> ScopeManager<'a> {
  pub(crate) fn new(options: AnalyzeOptions) -> Self {
    ScopeManager {
      options,
      scopes: Vec::new(),
      variables: Vec::new(),
      references: Vec::new(),
      node_to_scope: HashMap::default(),
      declared_variables: HashMap::default(),
      current_scope: None,
    }
  }

  pub fn options(&self) -> &AnalyzeOptions {
    &self.options
  }

  pub fn is_es6(&self) -> bool {
    self.options.is_es6()
  }

  pub fn is_module(&self) -> bool {
    self.options.is_module()
  }

  pub fn is_strict_mode_supported(&self) -> bool {
    self.options.ecma_version >= 5
  }

  pub fn is_implied_strict(&self) -> bool {
    self.options.implied_strict && self.is_strict_mode_supported()
  }

  /// The program-wide scope. It is always the first scope created.
  pub fn global_scope(&self) -> ScopeId {
    ScopeId::from_index(0)
  }

  /// All scopes in creation order, which is a pre-order of the scope tree.
  pub fn scopes(&self) -> &[Scope<'a>] {
    &self.scopes
  }

  pub fn scope_ids(&self) -> impl Iterator<Item = ScopeId> {
    (0..self.scopes.len()).map(ScopeId::from_index)
  }

  pub fn scope(&self, id: ScopeId) -> &Scope<'a> {
    &self.scopes[id.index()]
  }

  pub fn variables(&self) -> &[Variable<'a>] {
    &self.variables
  }

  pub fn variable(&self, id: VariableId) -> &Variable<'a> {
    &self.variables[id.index()]
  }

  pub fn references(&self) -> &[Reference<'a>] {
    &self.references
  }

  pub fn reference(&self, id: ReferenceId) -> &Reference<'a> {
    &self.references[id.index()]
  }

  /// Every scope whose block is `node`, outermost first. A named function expression
  /// has two: its name scope and its function scope.
  pub fn acquire_all(&self, node: NodeId) -> &[ScopeId] {
    self
      .node_to_scope
      .get(&node)
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// The scope introduced by `node`. Name scopes of function expressions and TDZ
  /// scopes are skipped when there is a choice; `inner` picks the innermost candidate instead of the
  /// outermost.
  pub fn acquire(&self, node: NodeId, inner: bool) -> Option<ScopeId> {
    let scopes = self.acquire_all(node);
    if scopes.len() == 1 {
      return Some(scopes[0]);
    }
    let candidate = |id: &&ScopeId| {
      let scope = &self.scopes[id.index()];
      !scope.function_expression_scope && scope.typ != ScopeType::Tdz
    };
    if inner {
      scopes.iter().rev().find(candidate).copied()
    } else {
      scopes.iter().find(candidate).copied()
    }
  }

  /// The scope enclosing the one introduced by `node`.
  pub fn release(&self, node: NodeId, inner: bool) -> Option<ScopeId> {
    let first = *self.acquire_all(node).first()?;
    let upper = self.scopes[first.index()].upper?;
    self.acquire(self.scopes[upper.index()].block.id(), inner)
  }

  /// Variables whose definition node or definition parent is `node`.
  pub fn declared_variables(&self, node: NodeId) -> &[VariableId] {
    self
      .declared_variables
      .get(&node)
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// The reference created for the identifier `ident` directly in `scope`.
  pub fn resolve(&self, scope: ScopeId, ident: NodeId) -> Option<ReferenceId> {
    self.scopes[scope.index()]
      .references
      .iter()
      .copied()
      .find(|r| self.references[r.index()].identifier.id == ident)
  }

  /// Whether the implicit `arguments` object of a function scope must exist because
  /// something observes it. Scopes other than non-arrow function scopes answer
  /// conservatively.
  pub fn is_arguments_materialized(&self, scope: ScopeId) -> bool {
    let scope = &self.scopes[scope.index()];
    if scope.typ != ScopeType::Function {
      return true;
    }
    if scope.block.is_arrow_function() {
      return false;
    }
    if !scope.is_static() {
      return true;
    }
    match scope.set.get("arguments") {
      Some(var) => {
        let var = &self.variables[var.index()];
        var.tainted || !var.references.is_empty()
      }
      None => true,
    }
  }

  pub fn is_this_materialized(&self, scope: ScopeId) -> bool {
    self.scopes[scope.index()].is_this_materialized()
  }

  /// Whether `name` is declared in `scope` or referenced through it unresolved.
  pub fn is_used_name(&self, scope: ScopeId, name: &str) -> bool {
    let scope = &self.scopes[scope.index()];
    scope.set.contains_key(name)
      || scope
        .through
        .iter()
        .any(|r| self.references[r.index()].name() == name)
  }

  /// Whether the reference resolved to a variable of a statically resolvable scope
  /// without passing through a `with`.
  pub fn is_static_reference(&self, reference: ReferenceId) -> bool {
    let reference = &self.references[reference.index()];
    !reference.tainted
      && reference
        .resolved
        .is_some_and(|v| self.scopes[self.variables[v.index()].scope.index()].is_static())
  }

  /// Looks `name` up from `scope` outwards through declared variables only.
  pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<VariableId> {
    let mut cur = Some(scope);
    while let Some(id) = cur {
      let scope = &self.scopes[id.index()];
      if let Some(var) = scope.variable(name) {
        return Some(var);
      }
      cur = scope.upper;
    }
    None
  }

  pub(crate) fn current(&self) -> Result<ScopeId, AnalyzeError> {
    self.current_scope.ok_or(AnalyzeError::NoOpenScope)
  }

  pub(crate) fn open_scope(&self) -> Option<ScopeId> {
    self.current_scope
  }

  pub(crate) fn scope_mut(&mut self, id: ScopeId) -> &mut Scope<'a> {
    &mut self.scopes[id.index()]
  }

  pub(crate) fn nest(
    &mut self,
    typ: ScopeType,
    block: NodeRef<'a>,
    is_method_definition: bool,
  ) -> Result<ScopeId, AnalyzeError> {
    let upper = self.current_scope;
    let id = ScopeId::from_index(self.scopes.len());
    let variable_scope = if typ.is_variable_scope() {
      id
    } else {
      let upper = upper.ok_or(AnalyzeError::NoOpenScope)?;
      self.scopes[upper.index()].variable_scope
    };
    let is_strict = self.is_strict_mode_supported()
      && self.is_strict_scope(typ, block, upper, is_method_definition);
    self
      .scopes
      .push(Scope::new(typ, block, is_strict, upper, variable_scope));
    if let Some(upper) = upper {
      self.scopes[upper.index()].child_scopes.push(id);
    }
    self.node_to_scope.entry(block.id()).or_default().push(id);
    self.current_scope = Some(id);
    trace!(target: "scope_js::scope", scope = id.index(), %typ, block = block.node_type(), is_strict, "nest");

    if typ == ScopeType::Function && !block.is_arrow_function() {
      self.define_generic(id, DefineTarget::Scope, "arguments", None, None);
      self.scopes[id.index()]
        .taints
        .insert("arguments".to_string(), true);
    }
    Ok(id)
  }

  fn is_strict_scope(
    &self,
    typ: ScopeType,
    block: NodeRef<'a>,
    upper: Option<ScopeId>,
    is_method_definition: bool,
  ) -> bool {
    if upper.is_some_and(|u| self.scopes[u.index()].is_strict) {
      return true;
    }
    if block.is_arrow_function() || is_method_definition {
      return true;
    }
    let body: &[Stmt] = match (typ, block) {
      (ScopeType::Class | ScopeType::Module, _) => return true,
      (ScopeType::Global | ScopeType::Function, NodeRef::Program(program)) => &program.stx.body,
      (ScopeType::Function, _) => match block.as_function().map(|f| &f.stx.body) {
        Some(FunctionBody::Block(body)) => &body.stx.body,
        _ => return false,
      },
      _ => return false,
    };
    has_use_strict_directive(body, self.options.directive)
  }

  /// Adds a definition of `ident` to the variable of that name in `scope`, creating
  /// the variable on first sight.
  pub(crate) fn define(
    &mut self,
    scope: ScopeId,
    ident: &'a Node<Identifier>,
    def: Definition<'a>,
  ) -> VariableId {
    self.define_generic(scope, DefineTarget::Scope, &ident.stx.name, Some(ident), Some(def))
  }

  fn define_generic(
    &mut self,
    scope: ScopeId,
    target: DefineTarget,
    name: &str,
    ident: Option<&'a Node<Identifier>>,
    def: Option<Definition<'a>>,
  ) -> VariableId {
    let existing = match target {
      DefineTarget::Scope => self.scopes[scope.index()].set.get(name).copied(),
      DefineTarget::Implicit => self.scopes[scope.index()]
        .implicit
        .as_ref()
        .and_then(|implicit| implicit.set.get(name).copied()),
    };
    let var = match existing {
      Some(var) => var,
      None => {
        let var = VariableId::from_index(self.variables.len());
        self.variables.push(Variable::new(name.to_string(), scope));
        let scope = &mut self.scopes[scope.index()];
        match target {
          DefineTarget::Scope => {
            scope.set.insert(name.to_string(), var);
            scope.variables.push(var);
          }
          DefineTarget::Implicit => {
            if let Some(implicit) = scope.implicit.as_mut() {
              implicit.set.insert(name.to_string(), var);
              implicit.variables.push(var);
            }
          }
        }
        var
      }
    };
    if let Some(def) = def {
      self.add_declared_variable(def.node.id(), var);
      if let Some(parent) = def.parent {
        self.add_declared_variable(parent.id(), var);
      }
      self.variables[var.index()].defs.push(def);
    }
    if let Some(ident) = ident {
      self.variables[var.index()].identifiers.push(ident);
    }
    var
  }

  fn add_declared_variable(&mut self, node: NodeId, var: VariableId) {
    let vars = self.declared_variables.entry(node).or_default();
    if !vars.contains(&var) {
      vars.push(var);
    }
  }

  /// Records a use of `ident` in the current scope.
  pub(crate) fn referencing(
    &mut self,
    ident: &'a Node<Identifier>,
    flag: ReferenceFlag,
    write_expr: Option<&'a Expr>,
    maybe_implicit_global: Option<ImplicitGlobalCandidate<'a>>,
    partial: bool,
    init: bool,
  ) -> Result<ReferenceId, AnalyzeError> {
    let scope = self.current()?;
    let id = ReferenceId::from_index(self.references.len());
    let writes = flag.writes();
    self.references.push(Reference {
      identifier: ident,
      from: scope,
      tainted: false,
      resolved: None,
      flag,
      write_expr: write_expr.filter(|_| writes),
      partial: writes && partial,
      init: writes && init,
      maybe_implicit_global,
    });
    let scope_data = &mut self.scopes[scope.index()];
    scope_data.references.push(id);
    scope_data
      .left
      .as_mut()
      .ok_or(AnalyzeError::ScopeClosed(scope))?
      .push(id);
    Ok(id)
  }

  /// Marks `scope` as containing a direct `eval`, which makes it and every enclosing
  /// scope dynamic.
  pub(crate) fn detect_eval(&mut self, scope: ScopeId) {
    self.scopes[scope.index()].direct_call_to_eval_scope = true;
    let mut cur = Some(scope);
    while let Some(id) = cur {
      let scope = &mut self.scopes[id.index()];
      scope.dynamic = true;
      cur = scope.upper;
    }
  }

  pub(crate) fn detect_this(&mut self, scope: ScopeId) {
    self.scopes[scope.index()].this_found = true;
  }

  /// Closes every open scope whose block is `node`, innermost first. Nodes that
  /// didn't introduce a scope are ignored.
  pub(crate) fn close(&mut self, node: NodeId) -> Result<(), AnalyzeError> {
    while let Some(current) = self.current_scope {
      if self.scopes[current.index()].block.id() != node {
        break;
      }
      self.close_scope(current)?;
    }
    Ok(())
  }

  fn close_scope(&mut self, id: ScopeId) -> Result<(), AnalyzeError> {
    let scope = &mut self.scopes[id.index()];
    let left = scope.left.take().ok_or(AnalyzeError::ScopeClosed(id))?;
    let typ = scope.typ;
    let upper = scope.upper;

    if scope.is_static() || self.options.optimistic {
      for &r in &left {
        if !self.resolve_reference(id, r) {
          self.delegate_to_upper(id, r)?;
        }
      }
    } else if typ == ScopeType::With {
      for &r in &left {
        self.references[r.index()].tainted = true;
        self.delegate_to_upper(id, r)?;
      }
    } else {
      // Nothing can be proven here, so every enclosing scope sees the reference as
      // unresolved without resolving it.
      for &r in &left {
        let mut cur = Some(id);
        while let Some(s) = cur {
          let scope = &mut self.scopes[s.index()];
          scope.through.push(r);
          cur = scope.upper;
        }
      }
    }

    if typ == ScopeType::Global {
      self.collect_implicit_globals(id, left);
    }

    trace!(
      target: "scope_js::scope",
      scope = id.index(),
      %typ,
      variables = self.scopes[id.index()].variables.len(),
      through = self.scopes[id.index()].through.len(),
      "close"
    );
    self.current_scope = upper;
    Ok(())
  }

  fn resolve_reference(&mut self, scope: ScopeId, r: ReferenceId) -> bool {
    let reference = &self.references[r.index()];
    let Some(var) = self.scopes[scope.index()].variable(reference.name()) else {
      return false;
    };
    let same_function =
      self.scopes[reference.from.index()].variable_scope == self.scopes[scope.index()].variable_scope;
    let tainted = reference.tainted;

    let variable = &mut self.variables[var.index()];
    variable.references.push(r);
    variable.stack = variable.stack && same_function;
    if tainted {
      variable.tainted = true;
      let name = variable.name.clone();
      self.scopes[scope.index()].taints.insert(name, true);
    }
    self.references[r.index()].resolved = Some(var);
    true
  }

  fn delegate_to_upper(&mut self, scope: ScopeId, r: ReferenceId) -> Result<(), AnalyzeError> {
    if let Some(upper) = self.scopes[scope.index()].upper {
      self.scopes[upper.index()]
        .left
        .as_mut()
        .ok_or(AnalyzeError::ScopeClosed(upper))?
        .push(r);
    }
    self.scopes[scope.index()].through.push(r);
    Ok(())
  }

  fn collect_implicit_globals(&mut self, global: ScopeId, left: Vec<ReferenceId>) {
    for &r in &left {
      let Some(ImplicitGlobalCandidate { pattern, node }) =
        self.references[r.index()].maybe_implicit_global
      else {
        continue;
      };
      if self.scopes[global.index()].set.contains_key(&pattern.stx.name) {
        continue;
      }
      trace!(target: "scope_js::scope", name = %pattern.stx.name, "implicit global");
      self.define_generic(
        global,
        DefineTarget::Implicit,
        &pattern.stx.name,
        Some(pattern),
        Some(Definition::new(
          DefinitionKind::ImplicitGlobalVariable,
          pattern,
          node,
        )),
      );
    }
    if let Some(implicit) = self.scopes[global.index()].implicit.as_mut() {
      implicit.left = left;
    }
  }
}

/// Scans a directive prologue for `"use strict"`.
///
/// With `use_directive`, prologue entries are recognized from the parser's
/// `directive` annotations. Otherwise leading string literal statements are
/// inspected, and only the exact source text `"use strict"` or `'use strict'`
/// counts; escapes do not.
fn has_use_strict_directive(body: &[Stmt], use_directive: bool) -> bool {
  for stmt in body {
    if use_directive {
      match stmt {
        Stmt::DirectiveStatement(d) => {
          let strict = match &d.stx.raw {
            Some(raw) => is_use_strict_raw(raw),
            None => d.stx.directive == "use strict",
          };
          if strict {
            return true;
          }
        }
        Stmt::ExpressionStatement(e) => match &e.stx.directive {
          Some(directive) if directive == "use strict" => return true,
          Some(_) => {}
          None => break,
        },
        _ => break,
      };
      continue;
    }

    let Stmt::ExpressionStatement(e) = stmt else {
      break;
    };
    let Expr::Literal(lit) = &e.stx.expression else {
      break;
    };
    let Some(value) = lit.stx.as_str() else {
      break;
    };
    let strict = match &lit.stx.raw {
      Some(raw) => is_use_strict_raw(raw),
      None => value == "use strict",
    };
    if strict {
      return true;
    }
  }
  false
}

fn is_use_strict_raw(raw: &str) -> bool {
  raw == "\"use strict\"" || raw == "'use strict'"
}
