use estree_js::class::Class;
use estree_js::expr::{AssignmentExpression, Expr};
use estree_js::func::Function;
use estree_js::module::{
  ImportDeclaration, ImportDefaultSpecifier, ImportNamespaceSpecifier, ImportSpecifier,
};
use estree_js::stmt::{
  BlockStatement, CatchClause, ForInStatement, ForStatement, Program, SwitchStatement,
  VariableDeclaration, VariableDeclarator, WithStatement,
};
use estree_js::{Loc, Node, NodeId};

/// A borrowed handle to a node of the analyzed tree that a scope, definition, or
/// implicit global points back at.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'a> {
  Program(&'a Node<Program>),
  FunctionDeclaration(&'a Node<Function>),
  FunctionExpression(&'a Node<Function>),
  ArrowFunctionExpression(&'a Node<Function>),
  ClassDeclaration(&'a Node<Class>),
  ClassExpression(&'a Node<Class>),
  BlockStatement(&'a Node<BlockStatement>),
  SwitchStatement(&'a Node<SwitchStatement>),
  CatchClause(&'a Node<CatchClause>),
  WithStatement(&'a Node<WithStatement>),
  ForStatement(&'a Node<ForStatement>),
  ForInStatement(&'a Node<ForInStatement>),
  ForOfStatement(&'a Node<ForInStatement>),
  /// The iterated expression of a `for-in`/`for-of` head, which owns the TDZ scope.
  Expression(&'a Expr),
  VariableDeclaration(&'a Node<VariableDeclaration>),
  VariableDeclarator(&'a Node<VariableDeclarator>),
  AssignmentExpression(&'a Node<AssignmentExpression>),
  ImportDeclaration(&'a Node<ImportDeclaration>),
  ImportSpecifier(&'a Node<ImportSpecifier>),
  ImportDefaultSpecifier(&'a Node<ImportDefaultSpecifier>),
  ImportNamespaceSpecifier(&'a Node<ImportNamespaceSpecifier>),
}

impl<'a> NodeRef<'a> {
  pub fn id(&self) -> NodeId {
    match self {
      NodeRef::Program(n) => n.id,
      NodeRef::FunctionDeclaration(n)
      | NodeRef::FunctionExpression(n)
      | NodeRef::ArrowFunctionExpression(n) => n.id,
      NodeRef::ClassDeclaration(n) | NodeRef::ClassExpression(n) => n.id,
      NodeRef::BlockStatement(n) => n.id,
      NodeRef::SwitchStatement(n) => n.id,
      NodeRef::CatchClause(n) => n.id,
      NodeRef::WithStatement(n) => n.id,
      NodeRef::ForStatement(n) => n.id,
      NodeRef::ForInStatement(n) | NodeRef::ForOfStatement(n) => n.id,
      NodeRef::Expression(e) => e.id(),
      NodeRef::VariableDeclaration(n) => n.id,
      NodeRef::VariableDeclarator(n) => n.id,
      NodeRef::AssignmentExpression(n) => n.id,
      NodeRef::ImportDeclaration(n) => n.id,
      NodeRef::ImportSpecifier(n) => n.id,
      NodeRef::ImportDefaultSpecifier(n) => n.id,
      NodeRef::ImportNamespaceSpecifier(n) => n.id,
    }
  }

  pub fn loc(&self) -> Loc {
    match self {
      NodeRef::Program(n) => n.loc,
      NodeRef::FunctionDeclaration(n)
      | NodeRef::FunctionExpression(n)
      | NodeRef::ArrowFunctionExpression(n) => n.loc,
      NodeRef::ClassDeclaration(n) | NodeRef::ClassExpression(n) => n.loc,
      NodeRef::BlockStatement(n) => n.loc,
      NodeRef::SwitchStatement(n) => n.loc,
      NodeRef::CatchClause(n) => n.loc,
      NodeRef::WithStatement(n) => n.loc,
      NodeRef::ForStatement(n) => n.loc,
      NodeRef::ForInStatement(n) | NodeRef::ForOfStatement(n) => n.loc,
      NodeRef::Expression(e) => e.loc(),
      NodeRef::VariableDeclaration(n) => n.loc,
      NodeRef::VariableDeclarator(n) => n.loc,
      NodeRef::AssignmentExpression(n) => n.loc,
      NodeRef::ImportDeclaration(n) => n.loc,
      NodeRef::ImportSpecifier(n) => n.loc,
      NodeRef::ImportDefaultSpecifier(n) => n.loc,
      NodeRef::ImportNamespaceSpecifier(n) => n.loc,
    }
  }

  /// The ESTree `type` of the referenced node.
  pub fn node_type(&self) -> &'static str {
    match self {
      NodeRef::Program(_) => "Program",
      NodeRef::FunctionDeclaration(_) => "FunctionDeclaration",
      NodeRef::FunctionExpression(_) => "FunctionExpression",
      NodeRef::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
      NodeRef::ClassDeclaration(_) => "ClassDeclaration",
      NodeRef::ClassExpression(_) => "ClassExpression",
      NodeRef::BlockStatement(_) => "BlockStatement",
      NodeRef::SwitchStatement(_) => "SwitchStatement",
      NodeRef::CatchClause(_) => "CatchClause",
      NodeRef::WithStatement(_) => "WithStatement",
      NodeRef::ForStatement(_) => "ForStatement",
      NodeRef::ForInStatement(_) => "ForInStatement",
      NodeRef::ForOfStatement(_) => "ForOfStatement",
      NodeRef::Expression(e) => e.type_name(),
      NodeRef::VariableDeclaration(_) => "VariableDeclaration",
      NodeRef::VariableDeclarator(_) => "VariableDeclarator",
      NodeRef::AssignmentExpression(_) => "AssignmentExpression",
      NodeRef::ImportDeclaration(_) => "ImportDeclaration",
      NodeRef::ImportSpecifier(_) => "ImportSpecifier",
      NodeRef::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
      NodeRef::ImportNamespaceSpecifier(_) => "ImportNamespaceSpecifier",
    }
  }

  pub fn as_function(&self) -> Option<&'a Node<Function>> {
    match *self {
      NodeRef::FunctionDeclaration(n)
      | NodeRef::FunctionExpression(n)
      | NodeRef::ArrowFunctionExpression(n) => Some(n),
      _ => None,
    }
  }

  pub fn is_arrow_function(&self) -> bool {
    matches!(self, NodeRef::ArrowFunctionExpression(_))
  }
}
