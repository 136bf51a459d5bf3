use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
  #[default]
  Script,
  Module,
}

impl fmt::Display for SourceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      SourceType::Script => "script",
      SourceType::Module => "module",
    })
  }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown source type `{0}`")]
pub struct UnknownSourceType(pub String);

impl FromStr for SourceType {
  type Err = UnknownSourceType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "script" => Ok(SourceType::Script),
      "module" => Ok(SourceType::Module),
      _ => Err(UnknownSourceType(s.to_string())),
    }
  }
}

/// Controls how [`crate::analyze`] reads the tree.
///
/// Deserializes from the same camelCase keys the JavaScript tooling uses, e.g.
/// `{"ecmaVersion": 6, "sourceType": "module"}`. Missing keys take their defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeOptions {
  /// Resolve references statically even inside scopes made dynamic by `with` or a
  /// direct `eval`.
  pub optimistic: bool,
  /// Read strictness from ESTree `directive` fields (or `DirectiveStatement`s)
  /// instead of inspecting string literal statements.
  pub directive: bool,
  /// Values of 6 and above enable block, switch, class, module, and loop scopes.
  pub ecma_version: u32,
  pub source_type: SourceType,
  /// Treat `eval(...)` as an ordinary call.
  pub ignore_eval: bool,
  /// Wrap the program in a function scope the way CommonJS modules are evaluated.
  pub nodejs_scope: bool,
  /// Treat all code as strict.
  pub implied_strict: bool,
}

impl Default for AnalyzeOptions {
  fn default() -> Self {
    AnalyzeOptions {
      optimistic: false,
      directive: false,
      ecma_version: 5,
      source_type: SourceType::Script,
      ignore_eval: false,
      nodejs_scope: false,
      implied_strict: false,
    }
  }
}

impl AnalyzeOptions {
  pub fn is_es6(&self) -> bool {
    self.ecma_version >= 6
  }

  pub fn is_module(&self) -> bool {
    self.source_type == SourceType::Module
  }

  pub fn es6() -> Self {
    AnalyzeOptions {
      ecma_version: 6,
      ..Default::default()
    }
  }

  pub fn module() -> Self {
    AnalyzeOptions {
      ecma_version: 6,
      source_type: SourceType::Module,
      ..Default::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{AnalyzeOptions, SourceType};
  use serde_json::json;

  #[test]
  fn test_defaults() {
    let opts = AnalyzeOptions::default();
    assert_eq!(opts.ecma_version, 5);
    assert_eq!(opts.source_type, SourceType::Script);
    assert!(!opts.is_es6());
    assert!(!opts.optimistic);
  }

  #[test]
  fn test_source_type_from_str() {
    assert_eq!("module".parse::<SourceType>(), Ok(SourceType::Module));
    assert!("commonjs".parse::<SourceType>().is_err());
    assert_eq!(SourceType::Script.to_string(), "script");
  }

  #[test]
  fn test_deserialize_camel_case() {
    let opts: AnalyzeOptions = serde_json::from_value(json!({
      "ecmaVersion": 6,
      "sourceType": "module",
      "nodejsScope": true,
    }))
    .unwrap();
    assert!(opts.is_es6());
    assert!(opts.is_module());
    assert!(opts.nodejs_scope);
    assert!(!opts.implied_strict);
  }
}
