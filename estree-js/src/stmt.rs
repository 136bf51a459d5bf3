use crate::class::Class;
use crate::expr::{Expr, Identifier};
use crate::func::Function;
use crate::module::{
  ExportAllDeclaration, ExportDefaultDeclaration, ExportNamedDeclaration, ImportDeclaration,
};
use crate::node::{deserialize_either, node_family, Node};
use crate::pat::Pat;
use derive_visitor::{Drive, DriveMut};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Program {
  pub body: Vec<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum Stmt {
  BlockStatement(Node<BlockStatement>),
  BreakStatement(Node<BreakStatement>),
  ClassDeclaration(Node<Class>),
  ContinueStatement(Node<ContinueStatement>),
  DebuggerStatement(Node<DebuggerStatement>),
  // Produced by older Esprima releases for directive prologues.
  DirectiveStatement(Node<DirectiveStatement>),
  DoWhileStatement(Node<DoWhileStatement>),
  EmptyStatement(Node<EmptyStatement>),
  ExportAllDeclaration(Node<ExportAllDeclaration>),
  ExportDefaultDeclaration(Node<ExportDefaultDeclaration>),
  ExportNamedDeclaration(Node<ExportNamedDeclaration>),
  ExpressionStatement(Node<ExpressionStatement>),
  ForInStatement(Node<ForInStatement>),
  ForOfStatement(Node<ForInStatement>),
  ForStatement(Node<ForStatement>),
  FunctionDeclaration(Node<Function>),
  IfStatement(Node<IfStatement>),
  ImportDeclaration(Node<ImportDeclaration>),
  LabeledStatement(Node<LabeledStatement>),
  ReturnStatement(Node<ReturnStatement>),
  SwitchStatement(Node<SwitchStatement>),
  ThrowStatement(Node<ThrowStatement>),
  TryStatement(Node<TryStatement>),
  VariableDeclaration(Node<VariableDeclaration>),
  WhileStatement(Node<WhileStatement>),
  WithStatement(Node<WithStatement>),
}

node_family!(Stmt {
  BlockStatement,
  BreakStatement,
  ClassDeclaration,
  ContinueStatement,
  DebuggerStatement,
  DirectiveStatement,
  DoWhileStatement,
  EmptyStatement,
  ExportAllDeclaration,
  ExportDefaultDeclaration,
  ExportNamedDeclaration,
  ExpressionStatement,
  ForInStatement,
  ForOfStatement,
  ForStatement,
  FunctionDeclaration,
  IfStatement,
  ImportDeclaration,
  LabeledStatement,
  ReturnStatement,
  SwitchStatement,
  ThrowStatement,
  TryStatement,
  VariableDeclaration,
  WhileStatement,
  WithStatement,
});

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct BlockStatement {
  pub body: Vec<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct BreakStatement {
  #[serde(default)]
  pub label: Option<Node<Identifier>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ContinueStatement {
  #[serde(default)]
  pub label: Option<Node<Identifier>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct DebuggerStatement {}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct DirectiveStatement {
  #[drive(skip)]
  #[serde(default)]
  pub directive: String,
  #[drive(skip)]
  #[serde(default)]
  pub raw: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct DoWhileStatement {
  pub body: Stmt,
  pub test: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct EmptyStatement {}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ExpressionStatement {
  pub expression: Expr,
  /// Raw directive text without quotes, present on directive prologue entries.
  #[drive(skip)]
  #[serde(default)]
  pub directive: Option<String>,
}

#[derive(Debug, Drive, DriveMut)]
pub enum ForInit {
  VariableDeclaration(Node<VariableDeclaration>),
  Expression(Expr),
}

impl<'de> Deserialize<'de> for ForInit {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_either(deserializer, |typ, value| match typ {
      "VariableDeclaration" => serde_json::from_value(value).map(ForInit::VariableDeclaration),
      _ => serde_json::from_value(value).map(ForInit::Expression),
    })
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ForStatement {
  #[serde(default)]
  pub init: Option<ForInit>,
  #[serde(default)]
  pub test: Option<Expr>,
  #[serde(default)]
  pub update: Option<Expr>,
  pub body: Stmt,
}

#[derive(Debug, Drive, DriveMut)]
pub enum ForInLeft {
  VariableDeclaration(Node<VariableDeclaration>),
  Pattern(Pat),
}

impl<'de> Deserialize<'de> for ForInLeft {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_either(deserializer, |typ, value| match typ {
      "VariableDeclaration" => serde_json::from_value(value).map(ForInLeft::VariableDeclaration),
      _ => serde_json::from_value(value).map(ForInLeft::Pattern),
    })
  }
}

/// Shared by `ForInStatement` and `ForOfStatement`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ForInStatement {
  pub left: ForInLeft,
  pub right: Expr,
  pub body: Stmt,
  #[drive(skip)]
  #[serde(default, rename = "await")]
  pub await_: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct IfStatement {
  pub test: Expr,
  pub consequent: Stmt,
  #[serde(default)]
  pub alternate: Option<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct LabeledStatement {
  pub label: Node<Identifier>,
  pub body: Stmt,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ReturnStatement {
  #[serde(default)]
  pub argument: Option<Expr>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct SwitchCase {
  // `None` for `default`.
  #[serde(default)]
  pub test: Option<Expr>,
  pub consequent: Vec<Stmt>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct SwitchStatement {
  pub discriminant: Expr,
  pub cases: Vec<Node<SwitchCase>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ThrowStatement {
  pub argument: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct CatchClause {
  // Optional catch binding (`catch {}`).
  #[serde(default)]
  pub param: Option<Pat>,
  pub body: Node<BlockStatement>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct TryStatement {
  pub block: Node<BlockStatement>,
  #[serde(default)]
  pub handler: Option<Node<CatchClause>>,
  #[serde(default)]
  pub finalizer: Option<Node<BlockStatement>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
  Var,
  Let,
  Const,
}

impl VariableKind {
  pub fn as_str(self) -> &'static str {
    match self {
      VariableKind::Var => "var",
      VariableKind::Let => "let",
      VariableKind::Const => "const",
    }
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct VariableDeclarator {
  pub id: Pat,
  #[serde(default)]
  pub init: Option<Expr>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct VariableDeclaration {
  #[drive(skip)]
  pub kind: VariableKind,
  pub declarations: Vec<Node<VariableDeclarator>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct WhileStatement {
  pub test: Expr,
  pub body: Stmt,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct WithStatement {
  pub object: Expr,
  pub body: Stmt,
}
