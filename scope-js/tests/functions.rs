mod common;

use common::*;
use scope_js::{analyze, AnalyzeOptions, DefinitionKind, ScopeType};
use serde_json::json;

#[test]
fn test_function_expression_name_scope() {
  // (function foo() { foo; });
  let program = program(vec![expr_stmt(func_expr(
    Some("foo"),
    vec![],
    vec![expr_stmt(ident("foo"))],
  ))]);
  let sm = es5(&program);
  assert_eq!(scope_types(&sm), vec![
    "global",
    "function-expression-name",
    "function"
  ]);
  assert!(variable_names(&sm, sm.global_scope()).is_empty());

  let name_scope = nth(&sm, 1);
  assert!(sm.scope(name_scope).function_expression_scope);
  assert_eq!(sm.scope(name_scope).variable_scope, sm.global_scope());
  assert_eq!(variable_names(&sm, name_scope), vec!["foo"]);
  let foo = sm.scope(name_scope).variable("foo").unwrap();
  assert_eq!(sm.variable(foo).defs[0].kind, DefinitionKind::FunctionName);

  let func = nth(&sm, 2);
  assert_eq!(sm.scope(func).upper, Some(name_scope));
  assert_eq!(sm.reference(sm.scope(func).references[0]).resolved, Some(foo));
  // Resolved one function level up.
  assert!(!sm.variable(foo).stack);

  let node = sm.scope(func).block.id();
  assert_eq!(sm.acquire_all(node), &[name_scope, func]);
  assert_eq!(sm.acquire(node, false), Some(func));
  assert_eq!(sm.acquire(node, true), Some(func));
  assert_eq!(sm.release(node, false), Some(sm.global_scope()));
}

#[test]
fn test_acquire_unknown_node() {
  let program = program(vec![expr_stmt(ident("a"))]);
  let sm = es5(&program);
  let stmt = program.stx.body[0].id();
  assert!(sm.acquire(stmt, false).is_none());
  assert!(sm.acquire_all(stmt).is_empty());
  assert!(sm.release(stmt, false).is_none());
  assert!(sm.declared_variables(stmt).is_empty());
  assert_eq!(sm.acquire(program.id, false), Some(sm.global_scope()));
  assert!(sm.release(program.id, false).is_none());
}

#[test]
fn test_arguments_and_this_materialization() {
  // function a() { arguments; this; } function b() {}
  let program = program(vec![
    func_decl("a", vec![], vec![
      expr_stmt(ident("arguments")),
      expr_stmt(this()),
    ]),
    func_decl("b", vec![], vec![]),
  ]);
  let sm = es5(&program);
  let a = nth(&sm, 1);
  let b = nth(&sm, 2);
  assert!(sm.is_arguments_materialized(a));
  assert!(sm.is_this_materialized(a));
  assert!(!sm.is_arguments_materialized(b));
  assert!(!sm.is_this_materialized(b));
  // Non-function scopes answer conservatively.
  assert!(sm.is_arguments_materialized(sm.global_scope()));
  assert!(sm.is_this_materialized(sm.global_scope()));

  let arguments = sm.variable(sm.scope(b).variable("arguments").unwrap());
  assert!(arguments.defs.is_empty());
  assert!(arguments.identifiers.is_empty());
  assert_eq!(sm.scope(b).taints.get("arguments"), Some(&true));
}

#[test]
fn test_this_in_arrow_marks_arrow_scope() {
  // function f() { () => this; }
  let program = program(vec![func_decl("f", vec![], vec![expr_stmt(arrow(
    vec![],
    this(),
  ))])]);
  let sm = es6(&program);
  let f = nth(&sm, 1);
  let arrow = nth(&sm, 2);
  assert!(sm.scope(arrow).this_found);
  assert!(!sm.scope(f).this_found);
}

#[test]
fn test_is_used_name() {
  // function f(a) { b; }
  let program = program(vec![func_decl("f", vec![ident("a")], vec![expr_stmt(ident(
    "b",
  ))])]);
  let sm = es5(&program);
  let f = nth(&sm, 1);
  assert!(sm.is_used_name(f, "a"));
  assert!(sm.is_used_name(f, "b"));
  assert!(sm.is_used_name(f, "arguments"));
  assert!(!sm.is_used_name(f, "c"));
}

#[test]
fn test_resolve_identifier_in_scope() {
  // function f(a) { a; }
  let program = program(vec![func_decl("f", vec![ident("a")], vec![expr_stmt(ident(
    "a",
  ))])]);
  let sm = es5(&program);
  let f = nth(&sm, 1);
  let r = sm.scope(f).references[0];
  let ident = sm.reference(r).identifier.id;
  assert_eq!(sm.resolve(f, ident), Some(r));
  // Only references created directly in the scope are found.
  assert_eq!(sm.resolve(sm.global_scope(), ident), None);
  assert!(sm.is_static_reference(r));
}

#[test]
fn test_use_strict_prologue() {
  // function f() { 'use strict'; function g() {} } function h() { 0; 'use strict'; }
  let program = program(vec![
    func_decl("f", vec![], vec![
      expr_stmt(json!({"type": "Literal", "value": "use strict", "raw": "'use strict'"})),
      func_decl("g", vec![], vec![]),
    ]),
    func_decl("h", vec![], vec![expr_stmt(num(0)), use_strict()]),
  ]);
  let sm = es5(&program);
  assert!(!sm.scope(sm.global_scope()).is_strict);
  assert!(sm.scope(nth(&sm, 1)).is_strict);
  assert!(sm.scope(nth(&sm, 2)).is_strict);
  assert!(!sm.scope(nth(&sm, 3)).is_strict);
}

#[test]
fn test_escaped_use_strict_is_not_a_directive() {
  // function f() { "use\x20strict"; }
  let program = program(vec![func_decl("f", vec![], vec![expr_stmt(json!({
    "type": "Literal",
    "value": "use strict",
    "raw": "\"use\\x20strict\"",
  }))])]);
  let sm = es5(&program);
  assert!(!sm.scope(nth(&sm, 1)).is_strict);
}

#[test]
fn test_directive_option_reads_annotations() {
  let annotated = program(vec![use_strict(), func_decl("f", vec![], vec![])]);
  let opts = AnalyzeOptions {
    directive: true,
    ..Default::default()
  };
  let sm = analyze(&annotated, opts.clone()).unwrap();
  assert!(sm.scope(sm.global_scope()).is_strict);
  assert!(sm.scope(nth(&sm, 1)).is_strict);

  // Legacy directive statements.
  let legacy = program(vec![json!({
    "type": "DirectiveStatement",
    "directive": "use strict",
    "raw": "\"use strict\"",
  })]);
  let sm = analyze(&legacy, opts.clone()).unwrap();
  assert!(sm.scope(sm.global_scope()).is_strict);

  // A plain string statement without the annotation isn't a directive here.
  let plain = program(vec![expr_stmt(string("use strict"))]);
  let sm = analyze(&plain, opts).unwrap();
  assert!(!sm.scope(sm.global_scope()).is_strict);
}

#[test]
fn test_strict_mode_needs_ecma5() {
  let program = program(vec![use_strict()]);
  let sm = analyze(&program, AnalyzeOptions {
    ecma_version: 3,
    ..Default::default()
  })
  .unwrap();
  assert!(!sm.scope(sm.global_scope()).is_strict);
}

#[test]
fn test_implied_strict() {
  let program = program(vec![func_decl("f", vec![], vec![])]);
  let sm = analyze(&program, AnalyzeOptions {
    implied_strict: true,
    ..Default::default()
  })
  .unwrap();
  assert!(sm.scope(sm.global_scope()).is_strict);
  assert!(sm.scope(nth(&sm, 1)).is_strict);
}

#[test]
fn test_nodejs_scope() {
  // 'use strict'; var x;
  let program = program(vec![use_strict(), var("var", "x", None)]);
  let sm = analyze(&program, AnalyzeOptions {
    nodejs_scope: true,
    ..Default::default()
  })
  .unwrap();
  assert_eq!(scope_types(&sm), vec!["global", "function"]);
  let global = sm.global_scope();
  let wrapper = nth(&sm, 1);
  assert!(!sm.scope(global).is_strict);
  assert!(sm.scope(wrapper).is_strict);
  assert_eq!(sm.scope(wrapper).block.node_type(), "Program");
  assert!(variable_names(&sm, global).is_empty());
  assert_eq!(variable_names(&sm, wrapper), vec!["arguments", "x"]);
  assert_eq!(sm.acquire_all(program.id).len(), 2);
}

#[test]
fn test_labels_and_properties_are_not_references() {
  // foo: for (;;) { break foo; } a.b; new.target;
  let program = program(vec![
    json!({
      "type": "LabeledStatement",
      "label": ident("foo"),
      "body": for_stmt(None, None, None, block(vec![
        json!({"type": "BreakStatement", "label": ident("foo")}),
      ])),
    }),
    expr_stmt(member(ident("a"), ident("b"), false)),
    expr_stmt(member(ident("a"), ident("c"), true)),
    expr_stmt(json!({"type": "MetaProperty", "meta": ident("new"), "property": ident("target")})),
  ]);
  let sm = es6(&program);
  assert_eq!(reference_names(&sm, sm.global_scope()), vec!["a", "a", "c"]);
  assert_eq!(sm.scope(nth(&sm, 1)).typ, ScopeType::Block);
}

#[test]
fn test_update_and_compound_assignment_are_read_write() {
  // var a; a++; a += 1;
  let program = program(vec![
    var("var", "a", None),
    expr_stmt(update("++", ident("a"))),
    expr_stmt(assign("+=", ident("a"), num(1))),
  ]);
  let sm = analyze(&program, AnalyzeOptions {
    optimistic: true,
    ..Default::default()
  })
  .unwrap();
  let refs: Vec<_> = sm
    .scope(sm.global_scope())
    .references
    .iter()
    .map(|&r| sm.reference(r))
    .collect();
  assert_eq!(refs.len(), 2);
  assert!(refs.iter().all(|r| r.is_read_write()));
  assert!(refs[0].write_expr.is_none());
  assert!(refs[1].write_expr.is_some());
  let a = sm.scope(sm.global_scope()).variable("a");
  assert!(refs.iter().all(|r| r.resolved == a));
}
