use crate::class::Class;
use crate::func::Function;
use crate::node::{node_family, Node};
use crate::pat::Pat;
use derive_visitor::{Drive, DriveMut};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum Expr {
  ArrayExpression(Node<ArrayExpression>),
  ArrowFunctionExpression(Node<Function>),
  AssignmentExpression(Node<AssignmentExpression>),
  AwaitExpression(Node<AwaitExpression>),
  BinaryExpression(Node<BinaryExpression>),
  CallExpression(Node<CallExpression>),
  ChainExpression(Node<ChainExpression>),
  ClassExpression(Node<Class>),
  ConditionalExpression(Node<ConditionalExpression>),
  FunctionExpression(Node<Function>),
  Identifier(Node<Identifier>),
  ImportExpression(Node<ImportExpression>),
  Literal(Node<Literal>),
  LogicalExpression(Node<BinaryExpression>),
  MemberExpression(Node<MemberExpression>),
  MetaProperty(Node<MetaProperty>),
  NewExpression(Node<CallExpression>),
  ObjectExpression(Node<ObjectExpression>),
  SequenceExpression(Node<SequenceExpression>),
  SpreadElement(Node<SpreadElement>),
  Super(Node<Super>),
  TaggedTemplateExpression(Node<TaggedTemplateExpression>),
  TemplateLiteral(Node<TemplateLiteral>),
  ThisExpression(Node<ThisExpression>),
  UnaryExpression(Node<UnaryExpression>),
  UpdateExpression(Node<UpdateExpression>),
  YieldExpression(Node<YieldExpression>),
}

node_family!(Expr {
  ArrayExpression,
  ArrowFunctionExpression,
  AssignmentExpression,
  AwaitExpression,
  BinaryExpression,
  CallExpression,
  ChainExpression,
  ClassExpression,
  ConditionalExpression,
  FunctionExpression,
  Identifier,
  ImportExpression,
  Literal,
  LogicalExpression,
  MemberExpression,
  MetaProperty,
  NewExpression,
  ObjectExpression,
  SequenceExpression,
  SpreadElement,
  Super,
  TaggedTemplateExpression,
  TemplateLiteral,
  ThisExpression,
  UnaryExpression,
  UpdateExpression,
  YieldExpression,
});

impl Expr {
  pub fn as_identifier(&self) -> Option<&Node<Identifier>> {
    match self {
      Expr::Identifier(n) => Some(n),
      _ => None,
    }
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Identifier {
  #[drive(skip)]
  pub name: String,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct RegexLiteral {
  #[drive(skip)]
  pub pattern: String,
  #[drive(skip)]
  pub flags: String,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Literal {
  // Absent for regular expressions when the producer cannot represent them.
  #[drive(skip)]
  #[serde(default)]
  pub value: Value,
  #[drive(skip)]
  #[serde(default)]
  pub raw: Option<String>,
  #[serde(default)]
  pub regex: Option<RegexLiteral>,
  #[drive(skip)]
  #[serde(default)]
  pub bigint: Option<String>,
}

impl Literal {
  pub fn as_str(&self) -> Option<&str> {
    self.value.as_str()
  }
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ThisExpression {}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Super {}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ArrayExpression {
  // `None` for holes.
  pub elements: Vec<Option<Expr>>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectMember {
  Property(Node<Property>),
  SpreadElement(Node<SpreadElement>),
}

node_family!(ObjectMember {
  Property,
  SpreadElement
});

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
  Init,
  Get,
  Set,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct Property {
  pub key: Expr,
  pub value: Expr,
  #[drive(skip)]
  pub kind: PropertyKind,
  #[drive(skip)]
  #[serde(default)]
  pub method: bool,
  #[drive(skip)]
  #[serde(default)]
  pub shorthand: bool,
  #[drive(skip)]
  #[serde(default)]
  pub computed: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ObjectExpression {
  pub properties: Vec<ObjectMember>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct SpreadElement {
  pub argument: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct UnaryExpression {
  #[drive(skip)]
  pub operator: String,
  #[drive(skip)]
  #[serde(default)]
  pub prefix: bool,
  pub argument: Expr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum UpdateOperator {
  #[serde(rename = "++")]
  Increment,
  #[serde(rename = "--")]
  Decrement,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct UpdateExpression {
  #[drive(skip)]
  pub operator: UpdateOperator,
  #[drive(skip)]
  pub prefix: bool,
  pub argument: Expr,
}

/// Shared by `BinaryExpression` and `LogicalExpression`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct BinaryExpression {
  #[drive(skip)]
  pub operator: String,
  pub left: Expr,
  pub right: Expr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum AssignmentOperator {
  #[serde(rename = "=")]
  Assign,
  #[serde(rename = "+=")]
  AddAssign,
  #[serde(rename = "-=")]
  SubAssign,
  #[serde(rename = "*=")]
  MulAssign,
  #[serde(rename = "/=")]
  DivAssign,
  #[serde(rename = "%=")]
  RemAssign,
  #[serde(rename = "**=")]
  ExpAssign,
  #[serde(rename = "<<=")]
  ShlAssign,
  #[serde(rename = ">>=")]
  ShrAssign,
  #[serde(rename = ">>>=")]
  UshrAssign,
  #[serde(rename = "|=")]
  BitOrAssign,
  #[serde(rename = "^=")]
  BitXorAssign,
  #[serde(rename = "&=")]
  BitAndAssign,
  #[serde(rename = "||=")]
  OrAssign,
  #[serde(rename = "&&=")]
  AndAssign,
  #[serde(rename = "??=")]
  NullishAssign,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct AssignmentExpression {
  #[drive(skip)]
  pub operator: AssignmentOperator,
  pub left: Pat,
  pub right: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ConditionalExpression {
  pub test: Expr,
  pub consequent: Expr,
  pub alternate: Expr,
}

/// Shared by `CallExpression` and `NewExpression`; the latter is never optional.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct CallExpression {
  pub callee: Expr,
  pub arguments: Vec<Expr>,
  #[drive(skip)]
  #[serde(default)]
  pub optional: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct MemberExpression {
  pub object: Expr,
  pub property: Expr,
  #[drive(skip)]
  #[serde(default)]
  pub computed: bool,
  #[drive(skip)]
  #[serde(default)]
  pub optional: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ChainExpression {
  pub expression: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct SequenceExpression {
  pub expressions: Vec<Expr>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct YieldExpression {
  pub argument: Option<Expr>,
  #[drive(skip)]
  #[serde(default)]
  pub delegate: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct AwaitExpression {
  pub argument: Expr,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct TemplateElementValue {
  #[drive(skip)]
  pub raw: String,
  #[drive(skip)]
  #[serde(default)]
  pub cooked: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct TemplateElement {
  pub value: TemplateElementValue,
  #[drive(skip)]
  #[serde(default)]
  pub tail: bool,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct TemplateLiteral {
  pub quasis: Vec<Node<TemplateElement>>,
  pub expressions: Vec<Expr>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct TaggedTemplateExpression {
  pub tag: Expr,
  pub quasi: Node<TemplateLiteral>,
}

#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct ImportExpression {
  pub source: Expr,
}

/// `new.target` or `import.meta`.
#[derive(Debug, Drive, DriveMut, Deserialize)]
pub struct MetaProperty {
  pub meta: Node<Identifier>,
  pub property: Node<Identifier>,
}
