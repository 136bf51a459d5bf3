use crate::expr::{Expr, Identifier, MemberExpression};
use crate::node::{node_family, Node};
use derive_visitor::{Drive, DriveMut};
use serde::Deserialize;

/// A binding or assignment target.
///
/// `MemberExpression` only appears in assignment position (`a.b = 1`, `[a.b] = c`,
/// `for (a.b in c)`), never in declarations.
#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum Pat {
  ArrayPattern(Node<ArrayPattern>),
  AssignmentPattern(Node<AssignmentPattern>),
  Identifier(Node<Identifier>),
  MemberExpression(Node<MemberExpression>),
  ObjectPattern(Node<ObjectPattern>),
  RestElement(Node<RestElement>),
}

node_family!(Pat {
  ArrayPattern,
  AssignmentPattern,
  Identifier,
  MemberExpression,
  ObjectPattern,
  RestElement,
});

impl Pat {
  pub fn as_identifier(&self) -> Option<&Node<Identifier>> {
    match self {
      Pat::Identifier(n) => Some(n),
      _ => None,
    }
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ArrayPattern {
  pub elements: Vec<Option<Pat>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct AssignmentPattern {
  pub left: Pat,
  pub right: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct RestElement {
  pub argument: Pat,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternMember {
  Property(Node<AssignmentProperty>),
  RestElement(Node<RestElement>),
}

node_family!(ObjectPatternMember {
  Property,
  RestElement
});

/// A `Property` inside an `ObjectPattern`. Its value is a target, not an expression.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct AssignmentProperty {
  pub key: Expr,
  pub value: Pat,
  #[drive(skip)]
  #[serde(default)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(default)]
  pub shorthand: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ObjectPattern {
  pub properties: Vec<ObjectPatternMember>,
}
