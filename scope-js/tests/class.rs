mod common;

use common::*;
use scope_js::DefinitionKind;
use scope_js::ScopeType;

#[test]
fn test_class_declaration() {
  // class Derived extends Base { constructor() {} } new Derived();
  let program = program(vec![
    class_decl("Derived", Some(ident("Base")), vec![method(
      "constructor",
      ident("constructor"),
      func_expr(None, vec![], vec![]),
      false,
    )]),
    expr_stmt(new_expr(ident("Derived"), vec![])),
  ]);
  let sm = es6(&program);
  assert_eq!(scope_types(&sm), vec!["global", "class", "function"]);

  let global = sm.global_scope();
  assert!(!sm.scope(global).is_strict);
  assert_eq!(variable_names(&sm, global), vec!["Derived"]);
  assert_eq!(reference_names(&sm, global), vec!["Base", "Derived"]);

  let class = nth(&sm, 1);
  assert_eq!(sm.scope(class).block.node_type(), "ClassDeclaration");
  assert!(sm.scope(class).is_strict);
  assert_eq!(variable_names(&sm, class), vec!["Derived"]);
  assert!(sm.scope(class).references.is_empty());
  let inner = sm.variable(sm.scope(class).variables[0]);
  assert_eq!(inner.defs[0].kind, DefinitionKind::ClassName);

  let ctor = nth(&sm, 2);
  assert_eq!(sm.scope(ctor).block.node_type(), "FunctionExpression");
  assert!(sm.scope(ctor).is_strict);
  assert_eq!(variable_names(&sm, ctor), vec!["arguments"]);
}

#[test]
fn test_class_expression() {
  // (class { constructor() {} });
  let program = program(vec![expr_stmt(class_expr(None, None, vec![method(
    "constructor",
    ident("constructor"),
    func_expr(None, vec![], vec![]),
    false,
  )]))]);
  let sm = es6(&program);
  assert_eq!(scope_types(&sm), vec!["global", "class", "function"]);
  assert!(variable_names(&sm, sm.global_scope()).is_empty());
  assert!(variable_names(&sm, nth(&sm, 1)).is_empty());
}

#[test]
fn test_named_class_expression_binds_only_inside() {
  // (class Foo { m() { Foo; } });
  let program = program(vec![expr_stmt(class_expr(Some("Foo"), None, vec![method(
    "method",
    ident("m"),
    func_expr(None, vec![], vec![expr_stmt(ident("Foo"))]),
    false,
  )]))]);
  let sm = es6(&program);
  assert!(variable_names(&sm, sm.global_scope()).is_empty());
  let class = nth(&sm, 1);
  let foo = sm.scope(class).variable("Foo").unwrap();
  let method = nth(&sm, 2);
  assert_eq!(sm.reference(sm.scope(method).references[0]).resolved, Some(foo));
}

#[test]
fn test_computed_method_keys_are_referenced_from_class_scope() {
  // (function () {
  //   'use strict';
  //   var yuyushiki = 42;
  //   (class {
  //     [yuyushiki]() {}
  //     [yuyushiki + 40]() {}
  //   });
  // }());
  let program = program(vec![expr_stmt(call(
    func_expr(None, vec![], vec![
      use_strict(),
      var("var", "yuyushiki", Some(num(42))),
      expr_stmt(class_expr(None, None, vec![
        method("method", ident("yuyushiki"), func_expr(None, vec![], vec![]), true),
        method(
          "method",
          binary("+", ident("yuyushiki"), num(40)),
          func_expr(None, vec![], vec![]),
          true,
        ),
      ])),
    ]),
    vec![],
  ))]);
  let sm = es6(&program);
  assert_eq!(scope_types(&sm), vec![
    "global", "function", "class", "function", "function"
  ]);

  let func = nth(&sm, 1);
  assert!(sm.scope(func).is_strict);
  assert_eq!(variable_names(&sm, func), vec!["arguments", "yuyushiki"]);
  let yuyushiki = sm.scope(func).variable("yuyushiki").unwrap();

  let class = nth(&sm, 2);
  assert_eq!(sm.scope(class).typ, ScopeType::Class);
  assert!(sm.scope(class).is_strict);
  let refs = &sm.scope(class).references;
  assert_eq!(refs.len(), 2);
  for &r in refs {
    assert_eq!(sm.reference(r).name(), "yuyushiki");
    assert_eq!(sm.reference(r).resolved, Some(yuyushiki));
  }
}

#[test]
fn test_class_then_let_instance() {
  // class Shoe { constructor() {} } let shoe = new Shoe();
  let program = program(vec![
    class_decl("Shoe", None, vec![method(
      "constructor",
      ident("constructor"),
      func_expr(None, vec![], vec![]),
      false,
    )]),
    var("let", "shoe", Some(new_expr(ident("Shoe"), vec![]))),
  ]);
  let sm = es6(&program);
  assert_eq!(sm.scopes().len(), 3);
  let global = sm.global_scope();
  assert_eq!(variable_names(&sm, global), vec!["Shoe", "shoe"]);
  assert_eq!(reference_names(&sm, global), vec!["shoe", "Shoe"]);
}

#[test]
fn test_object_method_is_strict() {
  // ({ m() {}, f: function () {} });
  let program = program(vec![expr_stmt(serde_json::json!({
    "type": "ObjectExpression",
    "properties": [
      {"type": "Property", "key": ident("m"), "value": func_expr(None, vec![], vec![]), "kind": "init", "method": true},
      {"type": "Property", "key": ident("f"), "value": func_expr(None, vec![], vec![]), "kind": "init", "method": false},
    ],
  }))]);
  let sm = es6(&program);
  assert_eq!(scope_types(&sm), vec!["global", "function", "function"]);
  assert!(sm.scope(nth(&sm, 1)).is_strict);
  assert!(!sm.scope(nth(&sm, 2)).is_strict);
  // Non-computed keys are not references.
  assert!(sm.scope(sm.global_scope()).references.is_empty());
}
