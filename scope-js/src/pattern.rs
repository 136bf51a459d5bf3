use estree_js::expr::{Expr, Identifier};
use estree_js::pat::{AssignmentPattern, ObjectPatternMember, Pat, RestElement};
use estree_js::{Node, NodeId};

/// An identifier bound or assigned by a pattern.
pub(crate) struct PatternTarget<'a> {
  pub ident: &'a Node<Identifier>,
  /// Whether the identifier is the whole pattern rather than a part of it.
  pub top_level: bool,
  /// Whether the identifier is the direct argument of a rest element.
  pub rest: bool,
  /// Default-value patterns enclosing the identifier, outermost first.
  pub assignments: Vec<&'a Node<AssignmentPattern>>,
}

/// What a pattern contains, in source order.
#[derive(Default)]
pub(crate) struct PatternParts<'a> {
  pub targets: Vec<PatternTarget<'a>>,
  /// Expressions that are evaluated as part of destructuring and must be walked as
  /// ordinary code: computed keys, default values, and the object parts of member
  /// targets.
  pub right_hand_nodes: Vec<&'a Expr>,
}

struct PatternWalker<'a> {
  root: NodeId,
  assignments: Vec<&'a Node<AssignmentPattern>>,
  rest_elements: Vec<&'a Node<RestElement>>,
  parts: PatternParts<'a>,
}

impl<'a> PatternWalker<'a> {
  fn visit(&mut self, pat: &'a Pat) {
    match pat {
      Pat::Identifier(ident) => {
        let rest = self.rest_elements.last().is_some_and(|r| {
          r.stx
            .argument
            .as_identifier()
            .is_some_and(|arg| arg.id == ident.id)
        });
        self.parts.targets.push(PatternTarget {
          ident,
          top_level: ident.id == self.root,
          rest,
          assignments: self.assignments.clone(),
        });
      }
      Pat::ObjectPattern(obj) => {
        for member in obj.stx.properties.iter() {
          match member {
            ObjectPatternMember::Property(prop) => {
              if prop.stx.computed {
                self.parts.right_hand_nodes.push(&prop.stx.key);
              }
              self.visit(&prop.stx.value);
            }
            ObjectPatternMember::RestElement(rest) => self.visit_rest(rest),
          }
        }
      }
      Pat::ArrayPattern(arr) => {
        for element in arr.stx.elements.iter().flatten() {
          self.visit(element);
        }
      }
      Pat::AssignmentPattern(assign) => {
        self.assignments.push(assign);
        self.visit(&assign.stx.left);
        self.parts.right_hand_nodes.push(&assign.stx.right);
        self.assignments.pop();
      }
      Pat::RestElement(rest) => self.visit_rest(rest),
      Pat::MemberExpression(member) => {
        if member.stx.computed {
          self.parts.right_hand_nodes.push(&member.stx.property);
        }
        self.parts.right_hand_nodes.push(&member.stx.object);
      }
    }
  }

  fn visit_rest(&mut self, rest: &'a Node<RestElement>) {
    self.rest_elements.push(rest);
    self.visit(&rest.stx.argument);
    self.rest_elements.pop();
  }
}

pub(crate) fn walk_pattern<'a>(pat: &'a Pat) -> PatternParts<'a> {
  let mut walker = PatternWalker {
    root: pat.id(),
    assignments: Vec::new(),
    rest_elements: Vec::new(),
    parts: PatternParts::default(),
  };
  walker.visit(pat);
  walker.parts
}
