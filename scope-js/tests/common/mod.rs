#![allow(dead_code)]

use estree_js::{Node, Program};
use scope_js::{analyze, AnalyzeOptions, ScopeId, ScopeManager};
use serde_json::{json, Value};

pub fn program(body: Vec<Value>) -> Node<Program> {
  estree_js::from_value(json!({"type": "Program", "body": body})).unwrap()
}

pub fn es6(program: &Node<Program>) -> ScopeManager<'_> {
  analyze(program, AnalyzeOptions::es6()).unwrap()
}

pub fn module(program: &Node<Program>) -> ScopeManager<'_> {
  analyze(program, AnalyzeOptions::module()).unwrap()
}

pub fn es5(program: &Node<Program>) -> ScopeManager<'_> {
  analyze(program, AnalyzeOptions::default()).unwrap()
}

pub fn ident(name: &str) -> Value {
  json!({"type": "Identifier", "name": name})
}

pub fn num(n: i64) -> Value {
  json!({"type": "Literal", "value": n, "raw": n.to_string()})
}

pub fn string(s: &str) -> Value {
  json!({"type": "Literal", "value": s, "raw": format!("\"{s}\"")})
}

pub fn expr_stmt(expression: Value) -> Value {
  json!({"type": "ExpressionStatement", "expression": expression})
}

pub fn use_strict() -> Value {
  json!({
    "type": "ExpressionStatement",
    "expression": string("use strict"),
    "directive": "use strict",
  })
}

pub fn block(body: Vec<Value>) -> Value {
  json!({"type": "BlockStatement", "body": body})
}

pub fn declarator(id: Value, init: Option<Value>) -> Value {
  json!({"type": "VariableDeclarator", "id": id, "init": init})
}

pub fn var_decl(kind: &str, declarations: Vec<Value>) -> Value {
  json!({"type": "VariableDeclaration", "kind": kind, "declarations": declarations})
}

/// `kind name = init;`
pub fn var(kind: &str, name: &str, init: Option<Value>) -> Value {
  var_decl(kind, vec![declarator(ident(name), init)])
}

pub fn assign(operator: &str, left: Value, right: Value) -> Value {
  json!({"type": "AssignmentExpression", "operator": operator, "left": left, "right": right})
}

pub fn assign_pattern(left: Value, right: Value) -> Value {
  json!({"type": "AssignmentPattern", "left": left, "right": right})
}

pub fn array_pattern(elements: Vec<Value>) -> Value {
  json!({"type": "ArrayPattern", "elements": elements})
}

pub fn rest(argument: Value) -> Value {
  json!({"type": "RestElement", "argument": argument})
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
  json!({"type": "CallExpression", "callee": callee, "arguments": arguments, "optional": false})
}

pub fn new_expr(callee: Value, arguments: Vec<Value>) -> Value {
  json!({"type": "NewExpression", "callee": callee, "arguments": arguments})
}

pub fn member(object: Value, property: Value, computed: bool) -> Value {
  json!({"type": "MemberExpression", "object": object, "property": property, "computed": computed})
}

pub fn binary(operator: &str, left: Value, right: Value) -> Value {
  json!({"type": "BinaryExpression", "operator": operator, "left": left, "right": right})
}

pub fn update(operator: &str, argument: Value) -> Value {
  json!({"type": "UpdateExpression", "operator": operator, "prefix": false, "argument": argument})
}

pub fn this() -> Value {
  json!({"type": "ThisExpression"})
}

pub fn ret(argument: Option<Value>) -> Value {
  json!({"type": "ReturnStatement", "argument": argument})
}

fn function(typ: &str, id: Option<&str>, params: Vec<Value>, body: Vec<Value>) -> Value {
  json!({
    "type": typ,
    "id": id.map(ident),
    "params": params,
    "body": block(body),
    "generator": false,
    "async": false,
  })
}

pub fn func_decl(name: &str, params: Vec<Value>, body: Vec<Value>) -> Value {
  function("FunctionDeclaration", Some(name), params, body)
}

pub fn func_expr(name: Option<&str>, params: Vec<Value>, body: Vec<Value>) -> Value {
  function("FunctionExpression", name, params, body)
}

pub fn arrow(params: Vec<Value>, body: Value) -> Value {
  let expression = body["type"] != "BlockStatement";
  json!({
    "type": "ArrowFunctionExpression",
    "id": null,
    "params": params,
    "body": body,
    "expression": expression,
  })
}

pub fn method(kind: &str, key: Value, value: Value, computed: bool) -> Value {
  json!({
    "type": "MethodDefinition",
    "key": key,
    "value": value,
    "kind": kind,
    "computed": computed,
    "static": false,
  })
}

fn class(typ: &str, id: Option<&str>, super_class: Option<Value>, members: Vec<Value>) -> Value {
  json!({
    "type": typ,
    "id": id.map(ident),
    "superClass": super_class,
    "body": {"type": "ClassBody", "body": members},
  })
}

pub fn class_decl(name: &str, super_class: Option<Value>, members: Vec<Value>) -> Value {
  class("ClassDeclaration", Some(name), super_class, members)
}

pub fn class_expr(name: Option<&str>, super_class: Option<Value>, members: Vec<Value>) -> Value {
  class("ClassExpression", name, super_class, members)
}

pub fn with_stmt(object: Value, body: Value) -> Value {
  json!({"type": "WithStatement", "object": object, "body": body})
}

pub fn try_catch(body: Vec<Value>, param: Option<Value>, handler: Vec<Value>) -> Value {
  json!({
    "type": "TryStatement",
    "block": block(body),
    "handler": {"type": "CatchClause", "param": param, "body": block(handler)},
    "finalizer": null,
  })
}

pub fn for_in(typ: &str, left: Value, right: Value, body: Value) -> Value {
  json!({"type": typ, "left": left, "right": right, "body": body})
}

pub fn for_stmt(init: Option<Value>, test: Option<Value>, update: Option<Value>, body: Value) -> Value {
  json!({"type": "ForStatement", "init": init, "test": test, "update": update, "body": body})
}

/// Scope types from the global scope down, in creation order.
pub fn scope_types(sm: &ScopeManager<'_>) -> Vec<String> {
  sm.scopes().iter().map(|s| s.typ.to_string()).collect()
}

pub fn variable_names(sm: &ScopeManager<'_>, scope: ScopeId) -> Vec<String> {
  sm.scope(scope)
    .variables
    .iter()
    .map(|&v| sm.variable(v).name.clone())
    .collect()
}

pub fn reference_names(sm: &ScopeManager<'_>, scope: ScopeId) -> Vec<String> {
  sm.scope(scope)
    .references
    .iter()
    .map(|&r| sm.reference(r).name().to_string())
    .collect()
}

pub fn through_names(sm: &ScopeManager<'_>, scope: ScopeId) -> Vec<String> {
  sm.scope(scope)
    .through
    .iter()
    .map(|&r| sm.reference(r).name().to_string())
    .collect()
}

/// The `index`th scope in creation order.
pub fn nth(sm: &ScopeManager<'_>, index: usize) -> ScopeId {
  sm.scope_ids().nth(index).unwrap()
}
