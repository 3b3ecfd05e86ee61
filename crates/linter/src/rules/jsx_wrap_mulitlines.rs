//! jsx-wrap-mulitlines
//!
//! Earlier variant of jsx-wrap-multiline. Every multiline element, JSX
//! children included, must sit directly inside parentheses.

use oxc_ast::ast::JSXElement;

use super::jsx_wrap_multiline::ElementPosition;
use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Multiline JSX elements must be wrapped in parenthesis";

/// jsx-wrap-mulitlines rule
#[derive(Debug, Clone, Default)]
pub struct JsxWrapMulitlines;

impl RuleMeta for JsxWrapMulitlines {
    const NAME: &'static str = "jsx-wrap-mulitlines";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Checks that multiline JSX elements are wrapped in parens";
}

impl JsxWrapMulitlines {
    pub fn new() -> Self {
        Self
    }

    pub fn check(
        &self,
        ctx: &LintContext,
        element: &JSXElement,
        position: ElementPosition,
    ) -> Option<Diagnostic> {
        if !ctx.is_multiline(element.span) {
            return None;
        }
        if matches!(position, ElementPosition::Parenthesized(_)) {
            return None;
        }
        Some(Diagnostic::warning(Self::NAME, element.span, MESSAGE))
    }
}
