use crate::expr::{Expr, Identifier};
use crate::node::{deserialize_either, Node};
use crate::pat::Pat;
use crate::stmt::BlockStatement;
use derive_visitor::{Drive, DriveMut};
use serde::{Deserialize, Deserializer};

/// Shared by function declarations, function expressions, and arrow functions. The
/// variant of the enclosing `Stmt`/`Expr` says which one this is.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Function {
  #[serde(default)]
  pub id: Option<Node<Identifier>>,
  pub params: Vec<Pat>,
  pub body: FunctionBody,
  #[drive(skip)]
  #[serde(default)]
  pub generator: bool,
  #[drive(skip)]
  #[serde(default, rename = "async")]
  pub async_: bool,
  /// Set by producers for arrow functions with a concise body.
  #[drive(skip)]
  #[serde(default)]
  pub expression: bool,
}

#[derive(Debug, Drive, DriveMut)]
pub enum FunctionBody {
  Block(Node<BlockStatement>),
  // Concise arrow function body (`a => a + 1`).
  Expression(Expr),
}

impl FunctionBody {
  pub fn as_block(&self) -> Option<&Node<BlockStatement>> {
    match self {
      FunctionBody::Block(b) => Some(b),
      FunctionBody::Expression(_) => None,
    }
  }
}

impl<'de> Deserialize<'de> for FunctionBody {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserialize_either(deserializer, |typ, value| match typ {
      "BlockStatement" => serde_json::from_value(value).map(FunctionBody::Block),
      _ => serde_json::from_value(value).map(FunctionBody::Expression),
    })
  }
}
