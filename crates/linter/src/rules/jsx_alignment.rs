//! jsx-alignment
//!
//! Multiline JSX tags put each attribute on its own line, aligned one level
//! deeper than the tag, and the tag close back at the tag's indentation.

use oxc_ast::ast::JSXElement;
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

pub const ATTR_LINE_FAILURE: &str = "JSX attributes must be on a line below the opening tag";
pub const ATTR_INDENT_FAILURE: &str =
    "JSX attributes must be indented further than the opening tag statement";
pub const ATTR_ALIGN_FAILURE: &str =
    "JSX attributes must be on their own line and vertically aligned";
pub const TAG_CLOSE_FAILURE: &str =
    "Tag closing must be on its own line and aligned with opening of tag";
pub const CLOSING_TAG_FAILURE: &str =
    "Closing tag must be on its own line and aligned with opening tag";

/// jsx-alignment rule
#[derive(Debug, Clone, Default)]
pub struct JsxAlignment;

impl RuleMeta for JsxAlignment {
    const NAME: &'static str = "jsx-alignment";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str =
        "Enforces a consistent layout for the attributes and closing of multiline JSX tags.";
}

impl JsxAlignment {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, element: &JSXElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let opening = &element.opening_element;
        let Some(first) = opening.attributes.first() else {
            return diagnostics;
        };
        if !ctx.is_multiline(opening.span) {
            return diagnostics;
        }

        let open_line = ctx.line(opening.span.start);
        let initial_indent = ctx.line_index().indent(ctx.source_text(), open_line);
        // `>` of an opening tag, `/>` of a self-closing one
        let close_offset = if element.closing_element.is_some() {
            opening.span.end.saturating_sub(1)
        } else {
            opening.span.end.saturating_sub(2)
        };
        let (close_line, close_column) = ctx.line_index().line_col(close_offset);

        let first_span = first.span();
        let first_column = ctx.column(first_span.start);
        if ctx.line(first_span.start) == open_line {
            diagnostics.push(Diagnostic::warning(Self::NAME, first_span, ATTR_LINE_FAILURE));
        }

        let mut last_line = None;
        for (i, attr) in opening.attributes.iter().enumerate() {
            let span = attr.span();
            let column = ctx.column(span.start);
            if column <= initial_indent {
                diagnostics.push(Diagnostic::warning(Self::NAME, span, ATTR_INDENT_FAILURE));
            }
            if i > 0 && column != first_column {
                diagnostics.push(Diagnostic::warning(Self::NAME, span, ATTR_ALIGN_FAILURE));
            }
            last_line = Some(ctx.line(span.start));
        }

        if last_line == Some(close_line) || close_column != initial_indent {
            diagnostics.push(Diagnostic::warning(
                Self::NAME,
                Span::new(close_offset, close_offset + 1),
                TAG_CLOSE_FAILURE,
            ));
        }

        if let Some(closing) = &element.closing_element {
            let (line, column) = ctx.line_index().line_col(closing.span.start);
            if line <= close_line || column != initial_indent {
                diagnostics.push(Diagnostic::warning(Self::NAME, closing.span, CLOSING_TAG_FAILURE));
            }
        }

        diagnostics
    }
}
