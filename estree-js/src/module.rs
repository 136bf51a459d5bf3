use crate::class::Class;
use crate::expr::{Expr, Identifier, Literal};
use crate::func::Function;
use crate::node::{deserialize_either, node_family, Node};
use crate::stmt::Stmt;
use derive_visitor::{Drive, DriveMut};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ImportDeclaration {
  pub specifiers: Vec<ImportSpecifierKind>,
  pub source: Node<Literal>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum ImportSpecifierKind {
  ImportDefaultSpecifier(Node<ImportDefaultSpecifier>),
  ImportNamespaceSpecifier(Node<ImportNamespaceSpecifier>),
  ImportSpecifier(Node<ImportSpecifier>),
}

node_family!(ImportSpecifierKind {
  ImportDefaultSpecifier,
  ImportNamespaceSpecifier,
  ImportSpecifier,
});

impl ImportSpecifierKind {
  /// The binding introduced in the importing module.
  pub fn local(&self) -> &Node<Identifier> {
    match self {
      ImportSpecifierKind::ImportDefaultSpecifier(n) => &n.stx.local,
      ImportSpecifierKind::ImportNamespaceSpecifier(n) => &n.stx.local,
      ImportSpecifierKind::ImportSpecifier(n) => &n.stx.local,
    }
  }
}

/// `import a from "m"`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ImportDefaultSpecifier {
  pub local: Node<Identifier>,
}

/// `import * as a from "m"`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ImportNamespaceSpecifier {
  pub local: Node<Identifier>,
}

/// `import { imported as local } from "m"`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ImportSpecifier {
  // An `Identifier`, or a string `Literal` for arbitrary module namespace names.
  pub imported: Expr,
  pub local: Node<Identifier>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ExportSpecifier {
  pub local: Expr,
  pub exported: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ExportNamedDeclaration {
  #[serde(default)]
  pub declaration: Option<Stmt>,
  #[serde(default)]
  pub specifiers: Vec<Node<ExportSpecifier>>,
  #[serde(default)]
  pub source: Option<Node<Literal>>,
}

#[derive(Debug, Drive, DriveMut)]
pub enum ExportDefaultKind {
  // Both may be anonymous here.
  FunctionDeclaration(Node<Function>),
  ClassDeclaration(Node<Class>),
  Expression(Expr),
}

impl<'de> Deserialize<'de> for ExportDefaultKind {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_either(deserializer, |typ, value| match typ {
      "FunctionDeclaration" => {
        serde_json::from_value(value).map(ExportDefaultKind::FunctionDeclaration)
      }
      "ClassDeclaration" => serde_json::from_value(value).map(ExportDefaultKind::ClassDeclaration),
      _ => serde_json::from_value(value).map(ExportDefaultKind::Expression),
    })
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ExportDefaultDeclaration {
  pub declaration: ExportDefaultKind,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ExportAllDeclaration {
  pub source: Node<Literal>,
  #[serde(default)]
  pub exported: Option<Expr>,
}
