//! jsx-wrap-multiline
//!
//! Multiline JSX in expression position must be wrapped in parentheses that
//! sit on their own lines. Elements nested directly in other elements are
//! exempt.

use oxc_ast::ast::JSXElement;
use oxc_span::Span;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

pub const FAILURE_NOT_WRAPPED: &str = "Multiline JSX elements must be wrapped in parentheses";
pub const FAILURE_MISSING_NEW_LINE_AFTER_OPEN: &str =
    "New line required after open parenthesis when wrapping multiline JSX elements";
pub const FAILURE_MISSING_NEW_LINE_BEFORE_CLOSE: &str =
    "New line requred before close parenthesis when wrapping multiline JSX elements";

/// Where an element sits relative to its parent node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPosition {
    /// Child of another element or fragment
    JsxChild,
    /// Directly inside `( ... )`, with the span of the parenthesized expression
    Parenthesized(Span),
    Other,
}

/// jsx-wrap-multiline rule
#[derive(Debug, Clone, Default)]
pub struct JsxWrapMultiline;

impl RuleMeta for JsxWrapMultiline {
    const NAME: &'static str = "jsx-wrap-multiline";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Checks that multiline JSX elements are wrapped in parens";
}

impl JsxWrapMultiline {
    pub fn new() -> Self {
        Self
    }

    pub fn check(
        &self,
        ctx: &LintContext,
        element: &JSXElement,
        position: ElementPosition,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let span = element.span;
        if !ctx.is_multiline(span) {
            return diagnostics;
        }
        let paren = match position {
            ElementPosition::JsxChild => return diagnostics,
            ElementPosition::Parenthesized(paren) => paren,
            ElementPosition::Other => {
                diagnostics.push(Diagnostic::warning(Self::NAME, span, FAILURE_NOT_WRAPPED));
                return diagnostics;
            }
        };

        if ctx.line(paren.start) == ctx.line(span.start) {
            diagnostics.push(Diagnostic::warning(
                Self::NAME,
                Span::new(paren.start, span.start),
                FAILURE_MISSING_NEW_LINE_AFTER_OPEN,
            ));
        }
        if ctx.line(paren.end - 1) == ctx.line(span.end) {
            diagnostics.push(Diagnostic::warning(
                Self::NAME,
                Span::new(span.end, paren.end),
                FAILURE_MISSING_NEW_LINE_BEFORE_CLOSE,
            ));
        }
        diagnostics
    }
}
