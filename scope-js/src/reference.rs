use crate::node_ref::NodeRef;
use crate::scope::ScopeId;
use crate::variable::VariableId;
use estree_js::expr::{Expr, Identifier};
use estree_js::Node;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ReferenceId(u32);

impl ReferenceId {
  pub(crate) fn from_index(index: usize) -> ReferenceId {
    ReferenceId(index as u32)
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReferenceFlag {
  Read,
  Write,
  ReadWrite,
}

impl ReferenceFlag {
  pub fn reads(self) -> bool {
    matches!(self, ReferenceFlag::Read | ReferenceFlag::ReadWrite)
  }

  pub fn writes(self) -> bool {
    matches!(self, ReferenceFlag::Write | ReferenceFlag::ReadWrite)
  }
}

/// The assignment that may create a global binding if the written name turns out
/// not to be declared anywhere.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ImplicitGlobalCandidate<'a> {
  pub pattern: &'a Node<Identifier>,
  pub node: NodeRef<'a>,
}

/// One occurrence of a name being used.
#[derive(Debug)]
pub struct Reference<'a> {
  pub identifier: &'a Node<Identifier>,
  /// The scope in which the occurrence appears.
  pub from: ScopeId,
  /// Whether the occurrence sits inside a `with` body and so may be shadowed by an
  /// object property at runtime.
  pub tainted: bool,
  /// `None` until closing resolves it, which never happens for globals or inside
  /// dynamic scopes.
  pub resolved: Option<VariableId>,
  pub flag: ReferenceFlag,
  /// The value written, for write references that have one.
  pub write_expr: Option<&'a Expr>,
  /// Whether the write only assigns part of the value (a destructured element or a
  /// loop variable).
  pub partial: bool,
  /// Whether the write is the binding's initialization.
  pub init: bool,
  pub(crate) maybe_implicit_global: Option<ImplicitGlobalCandidate<'a>>,
}

impl<'a> Reference<'a> {
  pub fn name(&self) -> &str {
    &self.identifier.stx.name
  }

  pub fn is_write(&self) -> bool {
    self.flag.writes()
  }

  pub fn is_read(&self) -> bool {
    self.flag.reads()
  }

  pub fn is_read_only(&self) -> bool {
    self.flag == ReferenceFlag::Read
  }

  pub fn is_write_only(&self) -> bool {
    self.flag == ReferenceFlag::Write
  }

  pub fn is_read_write(&self) -> bool {
    self.flag == ReferenceFlag::ReadWrite
  }
}
