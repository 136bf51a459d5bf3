use crate::expr::{Expr, Identifier};
use crate::func::Function;
use crate::node::{node_family, Node};
use derive_visitor::{Drive, DriveMut};
use serde::Deserialize;

/// Shared by `ClassDeclaration` and `ClassExpression`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
  #[serde(default)]
  pub id: Option<Node<Identifier>>,
  #[serde(default)]
  pub super_class: Option<Expr>,
  pub body: Node<ClassBody>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ClassBody {
  pub body: Vec<ClassMember>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum ClassMember {
  MethodDefinition(Node<MethodDefinition>),
}

node_family!(ClassMember { MethodDefinition });

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
  Constructor,
  Method,
  Get,
  Set,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct MethodDefinition {
  pub key: Expr,
  // Always a `FunctionExpression`.
  pub value: Node<Function>,
  #[drive(skip)]
  pub kind: MethodKind,
  #[drive(skip)]
  #[serde(default)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(default, rename = "static")]
  pub static_: bool,
}
