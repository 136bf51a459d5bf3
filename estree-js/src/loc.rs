use serde::Serialize;
/// Byte offsets of a node within its source text, as reported by the producing
/// parser through ESTree's `start`/`end` or `range` fields.
///
/// Trees built by hand or by tools that omit positions carry `Loc(0, 0)`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  pub fn start(&self) -> usize {
    self.0
  }

  pub fn end(&self) -> usize {
    self.1
  }
}
