use crate::analyze;
use crate::error::AnalyzeError;
use crate::manager::ScopeManager;
use crate::node_ref::NodeRef;
use crate::options::AnalyzeOptions;
use crate::reference::ReferenceFlag;
use crate::scope::ScopeType;
use crate::DefinitionKind;
use derive_visitor::{Drive, Visitor};
use estree_js::expr::Identifier;
use estree_js::stmt::{Program, Stmt};
use estree_js::{Node, NodeId};
use serde_json::json;

type IdentifierNode = Node<Identifier>;

#[derive(Default, Visitor)]
#[visitor(IdentifierNode(enter))]
struct IdentifierCollector {
  ids: Vec<NodeId>,
}

impl IdentifierCollector {
  fn enter_identifier_node(&mut self, node: &IdentifierNode) {
    self.ids.push(node.id);
  }
}

fn program(body: serde_json::Value) -> Node<Program> {
  estree_js::from_value(json!({"type": "Program", "body": body})).unwrap()
}

#[test]
fn test_close_ignores_nodes_without_scope() {
  let program = program(json!([{"type": "EmptyStatement"}]));
  let mut sm = ScopeManager::new(AnalyzeOptions::default());
  let global = sm
    .nest(ScopeType::Global, NodeRef::Program(&program), false)
    .unwrap();
  let Stmt::EmptyStatement(empty) = &program.stx.body[0] else {
    panic!("expected empty statement");
  };
  sm.close(empty.id).unwrap();
  assert_eq!(sm.open_scope(), Some(global));

  sm.close(program.id).unwrap();
  assert_eq!(sm.open_scope(), None);
  assert!(sm.scope(global).is_closed());
  assert_eq!(sm.current(), Err(AnalyzeError::NoOpenScope));
}

#[test]
fn test_referencing_without_open_scope() {
  let program = program(json!([{
    "type": "ExpressionStatement",
    "expression": {"type": "Identifier", "name": "x"},
  }]));
  let Stmt::ExpressionStatement(stmt) = &program.stx.body[0] else {
    panic!("expected expression statement");
  };
  let ident = stmt.stx.expression.as_identifier().unwrap();
  let mut sm = ScopeManager::new(AnalyzeOptions::default());
  let err = sm
    .referencing(ident, ReferenceFlag::Read, None, None, false, false)
    .unwrap_err();
  assert_eq!(err, AnalyzeError::NoOpenScope);
}

#[test]
fn test_every_identifier_use_is_referenced_once() {
  // var a = b; a;
  let program = program(json!([
    {
      "type": "VariableDeclaration",
      "kind": "var",
      "declarations": [{
        "type": "VariableDeclarator",
        "id": {"type": "Identifier", "name": "a"},
        "init": {"type": "Identifier", "name": "b"},
      }],
    },
    {"type": "ExpressionStatement", "expression": {"type": "Identifier", "name": "a"}},
  ]));
  let sm = analyze(&program, AnalyzeOptions::default()).unwrap();

  let mut collector = IdentifierCollector::default();
  program.drive(&mut collector);
  let mut referenced: Vec<NodeId> = sm.references().iter().map(|r| r.identifier.id).collect();
  referenced.sort();
  assert_eq!(referenced, collector.ids);

  let a = sm.variable(sm.scope(sm.global_scope()).variable("a").unwrap());
  assert_eq!(a.identifiers[0].id, collector.ids[0]);
  assert_eq!(a.defs[0].kind, DefinitionKind::Variable);
  assert_eq!(a.defs[0].index, Some(0));
}

#[test]
fn test_member_property_and_labels_are_not_referenced() {
  // l: o.p;
  let program = program(json!([{
    "type": "LabeledStatement",
    "label": {"type": "Identifier", "name": "l"},
    "body": {
      "type": "ExpressionStatement",
      "expression": {
        "type": "MemberExpression",
        "object": {"type": "Identifier", "name": "o"},
        "property": {"type": "Identifier", "name": "p"},
        "computed": false,
      },
    },
  }]));
  let sm = analyze(&program, AnalyzeOptions::default()).unwrap();
  let mut collector = IdentifierCollector::default();
  program.drive(&mut collector);
  assert_eq!(collector.ids.len(), 3);
  assert_eq!(sm.references().len(), 1);
  assert_eq!(sm.references()[0].name(), "o");
}

#[test]
fn test_empty_program() {
  let program = program(json!([]));
  let sm = analyze(&program, AnalyzeOptions::default()).unwrap();
  assert_eq!(sm.scopes().len(), 1);
  let global = sm.scope(sm.global_scope());
  assert_eq!(global.typ, ScopeType::Global);
  assert!(!global.is_strict);
  assert!(global.upper.is_none());
  assert!(global.implicit.as_ref().unwrap().variables.is_empty());
  assert_eq!(sm.acquire(program.id, false), Some(sm.global_scope()));
  assert_eq!(sm.release(program.id, false), None);
}

#[test]
fn test_definition_kind_names() {
  assert_eq!(DefinitionKind::Tdz.to_string(), "TDZ");
  assert_eq!(DefinitionKind::ImplicitGlobalVariable.to_string(), "ImplicitGlobalVariable");
  assert_eq!(DefinitionKind::CatchClause.to_string(), "CatchClause");
}
