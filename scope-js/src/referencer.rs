use crate::definition::Definition;
use crate::definition::DefinitionKind;
use crate::error::AnalyzeError;
use crate::manager::ScopeManager;
use crate::node_ref::NodeRef;
use crate::pattern::walk_pattern;
use crate::pattern::PatternParts;
use crate::pattern::PatternTarget;
use crate::reference::ImplicitGlobalCandidate;
use crate::reference::ReferenceFlag;
use crate::scope::ScopeId;
use crate::scope::ScopeType;
use estree_js::class::{Class, ClassMember, MethodDefinition};
use estree_js::expr::{
  AssignmentExpression, AssignmentOperator, CallExpression, Expr, MemberExpression,
  ObjectMember, Property,
};
use estree_js::func::{Function, FunctionBody};
use estree_js::module::{
  ExportDefaultKind, ExportNamedDeclaration, ImportDeclaration, ImportSpecifierKind,
};
use estree_js::pat::Pat;
use estree_js::stmt::{
  BlockStatement, CatchClause, ForInLeft, ForInStatement, ForInit, ForStatement, Program, Stmt,
  SwitchStatement, VariableDeclaration, VariableKind, WithStatement,
};
use estree_js::Node;
use tracing::debug;

/// Walks the tree once, opening and closing scopes around the constructs that
/// introduce them and recording every definition and reference in the scope that is
/// open at that point.
///
/// The walk is an explicit recursion rather than a visitor, as many children are
/// visited out of source order (default values after their parameters, a `for-in`
/// head before its bindings) or in a different scope than their parent.
pub(crate) struct Referencer<'m, 'a> {
  sm: &'m mut ScopeManager<'a>,
  // Set while visiting the function that is the value of a method.
  is_inner_method_definition: bool,
}

impl<'m, 'a> Referencer<'m, 'a> {
  pub fn new(sm: &'m mut ScopeManager<'a>) -> Self {
    Referencer {
      sm,
      is_inner_method_definition: false,
    }
  }

  fn current(&self) -> Result<ScopeId, AnalyzeError> {
    self.sm.current()
  }

  fn is_strict(&self) -> Result<bool, AnalyzeError> {
    Ok(self.sm.scope(self.current()?).is_strict)
  }

  pub fn visit_program(&mut self, program: &'a Node<Program>) -> Result<(), AnalyzeError> {
    let block = NodeRef::Program(program);
    let global = self.sm.nest(ScopeType::Global, block, false)?;
    if self.sm.options().nodejs_scope {
      // The module wrapper function decides strictness, not the global scope.
      self.sm.scope_mut(global).is_strict = false;
      self.sm.nest(ScopeType::Function, block, false)?;
    }
    if self.sm.is_es6() && self.sm.is_module() {
      self.sm.nest(ScopeType::Module, block, false)?;
    }
    if self.sm.is_implied_strict() {
      let current = self.current()?;
      self.sm.scope_mut(current).is_strict = true;
    }
    for stmt in program.stx.body.iter() {
      self.visit_stmt(stmt)?;
    }
    self.sm.close(program.id)
  }

  fn visit_stmts(&mut self, stmts: &'a [Stmt]) -> Result<(), AnalyzeError> {
    for stmt in stmts {
      self.visit_stmt(stmt)?;
    }
    Ok(())
  }

  fn visit_stmt(&mut self, stmt: &'a Stmt) -> Result<(), AnalyzeError> {
    match stmt {
      Stmt::BlockStatement(n) => self.visit_block(n),
      Stmt::BreakStatement(_)
      | Stmt::ContinueStatement(_)
      | Stmt::DebuggerStatement(_)
      | Stmt::DirectiveStatement(_)
      | Stmt::EmptyStatement(_)
      | Stmt::ExportAllDeclaration(_) => Ok(()),
      Stmt::ClassDeclaration(n) => self.visit_class(n, NodeRef::ClassDeclaration(n)),
      Stmt::DoWhileStatement(n) => {
        self.visit_stmt(&n.stx.body)?;
        self.visit_expr(&n.stx.test)
      }
      Stmt::ExportDefaultDeclaration(n) => match &n.stx.declaration {
        ExportDefaultKind::FunctionDeclaration(f) => {
          self.visit_function(f, NodeRef::FunctionDeclaration(f))
        }
        ExportDefaultKind::ClassDeclaration(c) => self.visit_class(c, NodeRef::ClassDeclaration(c)),
        ExportDefaultKind::Expression(e) => self.visit_expr(e),
      },
      Stmt::ExportNamedDeclaration(n) => self.visit_export_named(n),
      Stmt::ExpressionStatement(n) => self.visit_expr(&n.stx.expression),
      Stmt::ForInStatement(n) => self.visit_for_in(n, NodeRef::ForInStatement(n)),
      Stmt::ForOfStatement(n) => self.visit_for_in(n, NodeRef::ForOfStatement(n)),
      Stmt::ForStatement(n) => self.visit_for(n),
      Stmt::FunctionDeclaration(n) => self.visit_function(n, NodeRef::FunctionDeclaration(n)),
      Stmt::IfStatement(n) => {
        self.visit_expr(&n.stx.test)?;
        self.visit_stmt(&n.stx.consequent)?;
        if let Some(alternate) = &n.stx.alternate {
          self.visit_stmt(alternate)?;
        }
        Ok(())
      }
      Stmt::ImportDeclaration(n) => self.visit_import(n),
      // Labels live in their own namespace and are never references.
      Stmt::LabeledStatement(n) => self.visit_stmt(&n.stx.body),
      Stmt::ReturnStatement(n) => match &n.stx.argument {
        Some(arg) => self.visit_expr(arg),
        None => Ok(()),
      },
      Stmt::SwitchStatement(n) => self.visit_switch(n),
      Stmt::ThrowStatement(n) => self.visit_expr(&n.stx.argument),
      Stmt::TryStatement(n) => {
        self.visit_block(&n.stx.block)?;
        if let Some(handler) = &n.stx.handler {
          self.visit_catch(handler)?;
        }
        if let Some(finalizer) = &n.stx.finalizer {
          self.visit_block(finalizer)?;
        }
        Ok(())
      }
      Stmt::VariableDeclaration(n) => self.visit_variable_declaration(n),
      Stmt::WhileStatement(n) => {
        self.visit_expr(&n.stx.test)?;
        self.visit_stmt(&n.stx.body)
      }
      Stmt::WithStatement(n) => self.visit_with(n),
    }
  }

  fn visit_expr(&mut self, expr: &'a Expr) -> Result<(), AnalyzeError> {
    match expr {
      Expr::ArrayExpression(n) => {
        for element in n.stx.elements.iter().flatten() {
          self.visit_expr(element)?;
        }
        Ok(())
      }
      Expr::ArrowFunctionExpression(n) => {
        self.visit_function(n, NodeRef::ArrowFunctionExpression(n))
      }
      Expr::AssignmentExpression(n) => self.visit_assignment(n),
      Expr::AwaitExpression(n) => self.visit_expr(&n.stx.argument),
      Expr::BinaryExpression(n) | Expr::LogicalExpression(n) => {
        self.visit_expr(&n.stx.left)?;
        self.visit_expr(&n.stx.right)
      }
      Expr::CallExpression(n) => self.visit_call(n),
      Expr::ChainExpression(n) => self.visit_expr(&n.stx.expression),
      Expr::ClassExpression(n) => self.visit_class(n, NodeRef::ClassExpression(n)),
      Expr::ConditionalExpression(n) => {
        self.visit_expr(&n.stx.test)?;
        self.visit_expr(&n.stx.consequent)?;
        self.visit_expr(&n.stx.alternate)
      }
      Expr::FunctionExpression(n) => self.visit_function(n, NodeRef::FunctionExpression(n)),
      Expr::Identifier(n) => {
        self
          .sm
          .referencing(n, ReferenceFlag::Read, None, None, false, false)?;
        Ok(())
      }
      Expr::ImportExpression(n) => self.visit_expr(&n.stx.source),
      Expr::Literal(_) | Expr::MetaProperty(_) | Expr::Super(_) => Ok(()),
      Expr::MemberExpression(n) => self.visit_member(n),
      Expr::NewExpression(n) => {
        self.visit_expr(&n.stx.callee)?;
        self.visit_exprs(&n.stx.arguments)
      }
      Expr::ObjectExpression(n) => {
        for member in n.stx.properties.iter() {
          match member {
            ObjectMember::Property(prop) => self.visit_property(prop)?,
            ObjectMember::SpreadElement(spread) => self.visit_expr(&spread.stx.argument)?,
          }
        }
        Ok(())
      }
      Expr::SequenceExpression(n) => self.visit_exprs(&n.stx.expressions),
      Expr::SpreadElement(n) => self.visit_expr(&n.stx.argument),
      Expr::TaggedTemplateExpression(n) => {
        self.visit_expr(&n.stx.tag)?;
        self.visit_exprs(&n.stx.quasi.stx.expressions)
      }
      Expr::TemplateLiteral(n) => self.visit_exprs(&n.stx.expressions),
      Expr::ThisExpression(_) => {
        let variable_scope = self.sm.scope(self.current()?).variable_scope;
        self.sm.detect_this(variable_scope);
        Ok(())
      }
      Expr::UnaryExpression(n) => self.visit_expr(&n.stx.argument),
      Expr::UpdateExpression(n) => match n.stx.argument.as_identifier() {
        Some(ident) => {
          self
            .sm
            .referencing(ident, ReferenceFlag::ReadWrite, None, None, false, false)?;
          Ok(())
        }
        None => self.visit_expr(&n.stx.argument),
      },
      Expr::YieldExpression(n) => match &n.stx.argument {
        Some(arg) => self.visit_expr(arg),
        None => Ok(()),
      },
    }
  }

  fn visit_exprs(&mut self, exprs: &'a [Expr]) -> Result<(), AnalyzeError> {
    for expr in exprs {
      self.visit_expr(expr)?;
    }
    Ok(())
  }

  fn visit_right_hand_nodes(&mut self, parts: &PatternParts<'a>) -> Result<(), AnalyzeError> {
    for expr in parts.right_hand_nodes.iter() {
      self.visit_expr(expr)?;
    }
    Ok(())
  }

  /// Writes each default value enclosing `target` into it.
  fn referencing_default_value(
    &mut self,
    target: &PatternTarget<'a>,
    maybe_implicit_global: Option<ImplicitGlobalCandidate<'a>>,
    init: bool,
  ) -> Result<(), AnalyzeError> {
    for assignment in target.assignments.iter() {
      let partial = assignment
        .stx
        .left
        .as_identifier()
        .map_or(true, |left| left.id != target.ident.id);
      self.sm.referencing(
        target.ident,
        ReferenceFlag::Write,
        Some(&assignment.stx.right),
        maybe_implicit_global,
        partial,
        init,
      )?;
    }
    Ok(())
  }

  fn visit_block(&mut self, node: &'a Node<BlockStatement>) -> Result<(), AnalyzeError> {
    if self.sm.is_es6() {
      self
        .sm
        .nest(ScopeType::Block, NodeRef::BlockStatement(node), false)?;
    }
    self.visit_stmts(&node.stx.body)?;
    self.sm.close(node.id)
  }

  fn visit_function(
    &mut self,
    node: &'a Node<Function>,
    block: NodeRef<'a>,
  ) -> Result<(), AnalyzeError> {
    let func = &node.stx;
    if let Some(id) = &func.id {
      match block {
        NodeRef::FunctionDeclaration(_) => {
          let current = self.current()?;
          self.sm.define(
            current,
            id,
            Definition::new(DefinitionKind::FunctionName, id, block),
          );
        }
        NodeRef::FunctionExpression(_) => {
          let scope = self
            .sm
            .nest(ScopeType::FunctionExpressionName, block, false)?;
          self.sm.define(
            scope,
            id,
            Definition::new(DefinitionKind::FunctionName, id, block),
          );
        }
        _ => {}
      };
    }

    let is_method = std::mem::replace(&mut self.is_inner_method_definition, false);
    let scope = self.sm.nest(ScopeType::Function, block, is_method)?;
    for (i, param) in func.params.iter().enumerate() {
      let parts = walk_pattern(param);
      for target in parts.targets.iter() {
        self.sm.define(
          scope,
          target.ident,
          Definition::new(DefinitionKind::Parameter, target.ident, block)
            .with_index(i)
            .with_rest(target.rest),
        );
        self.referencing_default_value(target, None, true)?;
      }
      self.visit_right_hand_nodes(&parts)?;
    }

    // The body block shares the function's scope.
    match &func.body {
      FunctionBody::Block(body) => self.visit_stmts(&body.stx.body)?,
      FunctionBody::Expression(expr) => self.visit_expr(expr)?,
    };
    self.is_inner_method_definition = is_method;
    self.sm.close(node.id)
  }

  fn visit_class(&mut self, node: &'a Node<Class>, block: NodeRef<'a>) -> Result<(), AnalyzeError> {
    let class = &node.stx;
    if let (NodeRef::ClassDeclaration(_), Some(id)) = (block, &class.id) {
      let current = self.current()?;
      self.sm.define(
        current,
        id,
        Definition::new(DefinitionKind::ClassName, id, block),
      );
    }
    if let Some(super_class) = &class.super_class {
      self.visit_expr(super_class)?;
    }
    if self.sm.is_es6() {
      let scope = self.sm.nest(ScopeType::Class, block, false)?;
      if let Some(id) = &class.id {
        self.sm.define(
          scope,
          id,
          Definition::new(DefinitionKind::ClassName, id, block),
        );
      }
    }
    for member in class.body.stx.body.iter() {
      match member {
        ClassMember::MethodDefinition(method) => self.visit_method_definition(method)?,
      }
    }
    self.sm.close(node.id)
  }

  fn visit_method_definition(
    &mut self,
    node: &'a Node<MethodDefinition>,
  ) -> Result<(), AnalyzeError> {
    if node.stx.computed {
      self.visit_expr(&node.stx.key)?;
    }
    let previous = std::mem::replace(&mut self.is_inner_method_definition, true);
    let value = &node.stx.value;
    self.visit_function(value, NodeRef::FunctionExpression(value))?;
    self.is_inner_method_definition = previous;
    Ok(())
  }

  fn visit_property(&mut self, node: &'a Node<Property>) -> Result<(), AnalyzeError> {
    let prop = &node.stx;
    if prop.computed {
      self.visit_expr(&prop.key)?;
    }
    if !prop.method {
      return self.visit_expr(&prop.value);
    }
    let previous = std::mem::replace(&mut self.is_inner_method_definition, true);
    self.visit_expr(&prop.value)?;
    self.is_inner_method_definition = previous;
    Ok(())
  }

  fn visit_member(&mut self, node: &'a Node<MemberExpression>) -> Result<(), AnalyzeError> {
    self.visit_expr(&node.stx.object)?;
    // A non-computed property is a name on the object, not a variable.
    if node.stx.computed {
      self.visit_expr(&node.stx.property)?;
    }
    Ok(())
  }

  fn visit_call(&mut self, node: &'a Node<CallExpression>) -> Result<(), AnalyzeError> {
    let call = &node.stx;
    let is_eval = !self.sm.options().ignore_eval
      && !call.optional
      && call
        .callee
        .as_identifier()
        .is_some_and(|callee| callee.stx.name == "eval");
    // Bindings named `eval` are not consulted: declarations are hoisted past the
    // call, and a global `var eval` still leaves the builtin callable directly.
    if is_eval {
      let variable_scope = self.sm.scope(self.current()?).variable_scope;
      debug!(
        target: "scope_js::referencer",
        scope = variable_scope.index(),
        at = node.loc.start(),
        "direct eval"
      );
      self.sm.detect_eval(variable_scope);
    }
    self.visit_expr(&call.callee)?;
    self.visit_exprs(&call.arguments)
  }

  fn visit_assignment(&mut self, node: &'a Node<AssignmentExpression>) -> Result<(), AnalyzeError> {
    let assign = &node.stx;
    match &assign.left {
      Pat::MemberExpression(member) => self.visit_member(member)?,
      left if assign.operator == AssignmentOperator::Assign => {
        let strict = self.is_strict()?;
        let parts = walk_pattern(left);
        for target in parts.targets.iter() {
          let maybe_implicit_global = (!strict).then_some(ImplicitGlobalCandidate {
            pattern: target.ident,
            node: NodeRef::AssignmentExpression(node),
          });
          self.referencing_default_value(target, maybe_implicit_global, false)?;
          self.sm.referencing(
            target.ident,
            ReferenceFlag::Write,
            Some(&assign.right),
            maybe_implicit_global,
            !target.top_level,
            false,
          )?;
        }
        self.visit_right_hand_nodes(&parts)?;
      }
      left => {
        // Compound assignment can only target a plain name or a member.
        if let Some(ident) = left.as_identifier() {
          self.sm.referencing(
            ident,
            ReferenceFlag::ReadWrite,
            Some(&assign.right),
            None,
            false,
            false,
          )?;
        }
      }
    };
    self.visit_expr(&assign.right)
  }

  fn visit_catch(&mut self, node: &'a Node<CatchClause>) -> Result<(), AnalyzeError> {
    let block = NodeRef::CatchClause(node);
    let scope = self.sm.nest(ScopeType::Catch, block, false)?;
    if let Some(param) = &node.stx.param {
      let parts = walk_pattern(param);
      for target in parts.targets.iter() {
        self.sm.define(
          scope,
          target.ident,
          Definition::new(DefinitionKind::CatchClause, target.ident, block),
        );
        self.referencing_default_value(target, None, true)?;
      }
      self.visit_right_hand_nodes(&parts)?;
    }
    self.visit_block(&node.stx.body)?;
    self.sm.close(node.id)
  }

  fn visit_with(&mut self, node: &'a Node<WithStatement>) -> Result<(), AnalyzeError> {
    self.visit_expr(&node.stx.object)?;
    self
      .sm
      .nest(ScopeType::With, NodeRef::WithStatement(node), false)?;
    self.visit_stmt(&node.stx.body)?;
    self.sm.close(node.id)
  }

  fn visit_switch(&mut self, node: &'a Node<SwitchStatement>) -> Result<(), AnalyzeError> {
    self.visit_expr(&node.stx.discriminant)?;
    if self.sm.is_es6() {
      self
        .sm
        .nest(ScopeType::Switch, NodeRef::SwitchStatement(node), false)?;
    }
    for case in node.stx.cases.iter() {
      if let Some(test) = &case.stx.test {
        self.visit_expr(test)?;
      }
      self.visit_stmts(&case.stx.consequent)?;
    }
    self.sm.close(node.id)
  }

  /// Defines and initializes the bindings of one declarator into `target_scope`.
  /// References to them are recorded in the current scope. Inside a TDZ scope the
  /// bindings are only defined.
  fn visit_declarator(
    &mut self,
    target_scope: ScopeId,
    kind: DefinitionKind,
    decl: &'a Node<VariableDeclaration>,
    index: usize,
  ) -> Result<(), AnalyzeError> {
    let Some(declarator) = decl.stx.declarations.get(index) else {
      return Ok(());
    };
    let from_tdz = kind == DefinitionKind::Tdz;
    let init = declarator.stx.init.as_ref();
    let parts = walk_pattern(&declarator.stx.id);
    for target in parts.targets.iter() {
      self.sm.define(
        target_scope,
        target.ident,
        Definition::new(kind, target.ident, NodeRef::VariableDeclarator(declarator))
          .with_parent(NodeRef::VariableDeclaration(decl))
          .with_index(index)
          .with_decl_kind(decl.stx.kind),
      );
      if !from_tdz {
        self.referencing_default_value(target, None, true)?;
      }
      if let Some(init) = init {
        self.sm.referencing(
          target.ident,
          ReferenceFlag::Write,
          Some(init),
          None,
          !target.top_level,
          true,
        )?;
      }
    }
    if !from_tdz {
      self.visit_right_hand_nodes(&parts)?;
    }
    Ok(())
  }

  fn visit_variable_declaration(
    &mut self,
    node: &'a Node<VariableDeclaration>,
  ) -> Result<(), AnalyzeError> {
    let current = self.current()?;
    let target_scope = match node.stx.kind {
      VariableKind::Var => self.sm.scope(current).variable_scope,
      VariableKind::Let | VariableKind::Const => current,
    };
    for (i, declarator) in node.stx.declarations.iter().enumerate() {
      self.visit_declarator(target_scope, DefinitionKind::Variable, node, i)?;
      if let Some(init) = &declarator.stx.init {
        self.visit_expr(init)?;
      }
    }
    Ok(())
  }

  fn visit_for(&mut self, node: &'a Node<ForStatement>) -> Result<(), AnalyzeError> {
    let for_stmt = &node.stx;
    match &for_stmt.init {
      Some(ForInit::VariableDeclaration(decl)) => {
        if decl.stx.kind != VariableKind::Var && self.sm.is_es6() {
          self
            .sm
            .nest(ScopeType::For, NodeRef::ForStatement(node), false)?;
        }
        self.visit_variable_declaration(decl)?;
      }
      Some(ForInit::Expression(init)) => self.visit_expr(init)?,
      None => {}
    };
    if let Some(test) = &for_stmt.test {
      self.visit_expr(test)?;
    }
    if let Some(update) = &for_stmt.update {
      self.visit_expr(update)?;
    }
    self.visit_stmt(&for_stmt.body)?;
    self.sm.close(node.id)
  }

  /// Each binding of the head's first declarator is written with the iterated value.
  fn reference_loop_bindings(
    &mut self,
    decl: &'a Node<VariableDeclaration>,
    right: &'a Expr,
  ) -> Result<(), AnalyzeError> {
    let Some(first) = decl.stx.declarations.first() else {
      return Ok(());
    };
    for target in walk_pattern(&first.stx.id).targets.iter() {
      self.sm.referencing(
        target.ident,
        ReferenceFlag::Write,
        Some(right),
        None,
        true,
        true,
      )?;
    }
    Ok(())
  }

  fn visit_for_in(
    &mut self,
    node: &'a Node<ForInStatement>,
    block: NodeRef<'a>,
  ) -> Result<(), AnalyzeError> {
    let for_in = &node.stx;
    match &for_in.left {
      ForInLeft::VariableDeclaration(decl)
        if decl.stx.kind != VariableKind::Var && self.sm.is_es6() =>
      {
        // The head's bindings already exist (uninitialized) while the iterated
        // expression runs.
        let tdz = self
          .sm
          .nest(ScopeType::Tdz, NodeRef::Expression(&for_in.right), false)?;
        self.visit_declarator(tdz, DefinitionKind::Tdz, decl, 0)?;
        self.visit_expr(&for_in.right)?;
        self.sm.close(for_in.right.id())?;

        let iteration = self.sm.nest(ScopeType::For, block, false)?;
        self.visit_declarator(iteration, DefinitionKind::Variable, decl, 0)?;
        self.reference_loop_bindings(decl, &for_in.right)?;
        self.visit_stmt(&for_in.body)?;
        return self.sm.close(node.id);
      }
      ForInLeft::VariableDeclaration(decl) => {
        self.visit_variable_declaration(decl)?;
        self.reference_loop_bindings(decl, &for_in.right)?;
      }
      ForInLeft::Pattern(Pat::MemberExpression(member)) => self.visit_member(member)?,
      ForInLeft::Pattern(pat) => {
        let strict = self.is_strict()?;
        let parts = walk_pattern(pat);
        for target in parts.targets.iter() {
          let maybe_implicit_global = (!strict).then_some(ImplicitGlobalCandidate {
            pattern: target.ident,
            node: block,
          });
          self.referencing_default_value(target, maybe_implicit_global, false)?;
          self.sm.referencing(
            target.ident,
            ReferenceFlag::Write,
            Some(&for_in.right),
            maybe_implicit_global,
            true,
            false,
          )?;
        }
        self.visit_right_hand_nodes(&parts)?;
      }
    };
    self.visit_expr(&for_in.right)?;
    self.visit_stmt(&for_in.body)
  }

  fn visit_import(&mut self, node: &'a Node<ImportDeclaration>) -> Result<(), AnalyzeError> {
    if !(self.sm.is_es6() && self.sm.is_module()) {
      return Err(AnalyzeError::ImportOutsideModule { loc: node.loc });
    }
    let current = self.current()?;
    for specifier in node.stx.specifiers.iter() {
      let local = specifier.local();
      let specifier_ref = match specifier {
        ImportSpecifierKind::ImportDefaultSpecifier(s) => NodeRef::ImportDefaultSpecifier(s),
        ImportSpecifierKind::ImportNamespaceSpecifier(s) => NodeRef::ImportNamespaceSpecifier(s),
        ImportSpecifierKind::ImportSpecifier(s) => NodeRef::ImportSpecifier(s),
      };
      self.sm.define(
        current,
        local,
        Definition::new(DefinitionKind::ImportBinding, local, specifier_ref)
          .with_parent(NodeRef::ImportDeclaration(node)),
      );
    }
    Ok(())
  }

  fn visit_export_named(
    &mut self,
    node: &'a Node<ExportNamedDeclaration>,
  ) -> Result<(), AnalyzeError> {
    let export = &node.stx;
    // Re-exports name bindings of another module.
    if export.source.is_some() {
      return Ok(());
    }
    if let Some(decl) = &export.declaration {
      return self.visit_stmt(decl);
    }
    for specifier in export.specifiers.iter() {
      self.visit_expr(&specifier.stx.local)?;
    }
    Ok(())
  }
}
