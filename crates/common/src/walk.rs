//! Pre-order expression walking with pruning
//!
//! Thin layer over [`oxc_ast_visit::Visit`] for rules that only care about
//! expressions below some root, e.g. the value of a JSX attribute.

use oxc_ast::ast::Expression;
use oxc_ast_visit::{walk, Visit};
use oxc_span::{GetSpan, Span};

/// Whether the walker should recurse into the node it just visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Into,
    Skip,
}

struct ExpressionWalker<F> {
    visitor: F,
}

impl<'a, F> Visit<'a> for ExpressionWalker<F>
where
    F: FnMut(&Expression<'a>) -> Descend,
{
    fn visit_expression(&mut self, expr: &Expression<'a>) {
        if (self.visitor)(expr) == Descend::Into {
            walk::walk_expression(self, expr);
        }
    }
}

/// Visit `root` and every expression below it, parents first, children left to right.
///
/// Returning [`Descend::Skip`] prunes the subtree of the current expression.
pub fn walk_expressions<'a, F>(root: &Expression<'a>, visitor: F)
where
    F: FnMut(&Expression<'a>) -> Descend,
{
    ExpressionWalker { visitor }.visit_expression(root);
}

/// Run `action` on every expression under `root` that satisfies `predicate`.
///
/// The subtree of a matched expression is not searched again, so a match is
/// never reported together with matches nested inside it.
pub fn descend_into<'a, P, A>(root: &Expression<'a>, mut predicate: P, mut action: A)
where
    P: FnMut(&Expression<'a>) -> bool,
    A: FnMut(&Expression<'a>),
{
    walk_expressions(root, |expr| {
        if predicate(expr) {
            action(expr);
            Descend::Skip
        } else {
            Descend::Into
        }
    });
}

/// Spans of the expressions [`descend_into`] would hand to its action
pub fn find_matching<'a, P>(root: &Expression<'a>, predicate: P) -> Vec<Span>
where
    P: FnMut(&Expression<'a>) -> bool,
{
    let mut spans = Vec::new();
    descend_into(root, predicate, |expr| spans.push(expr.span()));
    spans
}

/// Strip any number of surrounding parentheses
pub fn unwrap_parens<'b, 'a>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    let mut current = expr;
    while let Expression::ParenthesizedExpression(paren) = current {
        current = &paren.expression;
    }
    current
}

/// Arrow functions and function expressions
pub fn is_function_like(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_)
    )
}
