use crate::loc::Loc;
use derive_visitor::{Drive, DriveMut};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::{self, Debug, Formatter};

/// Identity of a node within one tree.
///
/// Ids are assigned in pre-order by [`crate::assign_node_ids`] and are what the
/// analysis side tables are keyed on, so two structurally equal nodes (e.g. the
/// `key` and `value` of a shorthand property) never alias.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Drive, DriveMut)]
pub struct NodeId {
  #[drive(skip)]
  raw: u32,
}

impl NodeId {
  pub fn from_raw(raw: u32) -> NodeId {
    NodeId { raw }
  }

  pub fn raw(self) -> u32 {
    self.raw
  }
}

impl Debug for NodeId {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.raw)
  }
}

#[derive(Drive, DriveMut)]
pub struct Node<S: Drive + DriveMut> {
  #[drive(skip)]
  pub loc: Loc,
  // Declared before `stx` so ids are handed out parent first.
  pub id: NodeId,
  pub stx: Box<S>,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      id: NodeId::default(),
      stx: Box::new(stx),
    }
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

#[derive(Deserialize)]
struct Repr<S> {
  #[serde(default)]
  start: Option<usize>,
  #[serde(default)]
  end: Option<usize>,
  #[serde(default)]
  range: Option<(usize, usize)>,
  #[serde(flatten)]
  stx: S,
}

impl<'de, S: Deserialize<'de> + Drive + DriveMut> Deserialize<'de> for Node<S> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let Repr {
      start,
      end,
      range,
      stx,
    } = Repr::deserialize(deserializer)?;
    let loc = match (start, end, range) {
      (Some(start), Some(end), _) => Loc(start, end),
      (_, _, Some((start, end))) => Loc(start, end),
      _ => Loc::default(),
    };
    Ok(Node::new(loc, stx))
  }
}

/// The `type` tag of a raw ESTree object, if it has one.
pub(crate) fn node_type(value: &Value) -> Option<&str> {
  value.get("type").and_then(Value::as_str)
}

/// Deserializes a position that admits nodes from more than one of the closed
/// node families (e.g. a `for` head that is either a declaration or an
/// expression). The raw object is buffered so its tag can be inspected first.
pub(crate) fn deserialize_either<'de, D, T, F>(deserializer: D, pick: F) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  F: FnOnce(&str, Value) -> Result<T, serde_json::Error>,
{
  let value = Value::deserialize(deserializer)?;
  let Some(typ) = node_type(&value).map(str::to_string) else {
    return Err(D::Error::custom("ESTree node is missing its `type` tag"));
  };
  pick(&typ, value).map_err(D::Error::custom)
}

/// Generates the common accessors of a node family enum whose variants each wrap a
/// single `Node`.
macro_rules! node_family {
  ($family:ident { $($variant:ident),* $(,)? }) => {
    impl $family {
      pub fn id(&self) -> $crate::node::NodeId {
        match self {
          $($family::$variant(n) => n.id,)*
        }
      }

      pub fn loc(&self) -> $crate::loc::Loc {
        match self {
          $($family::$variant(n) => n.loc,)*
        }
      }

      /// The ESTree `type` of the wrapped node.
      pub fn type_name(&self) -> &'static str {
        match self {
          $($family::$variant(_) => stringify!($variant),)*
        }
      }
    }
  };
}

pub(crate) use node_family;
