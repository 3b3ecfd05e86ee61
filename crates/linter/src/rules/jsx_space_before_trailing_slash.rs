//! jsx-space-before-trailing-slash

use oxc_ast::ast::JSXElement;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Self-closing JSX elements must have a space before the '/>' part";

/// jsx-space-before-trailing-slash rule
#[derive(Debug, Clone, Default)]
pub struct JsxSpaceBeforeTrailingSlash;

impl RuleMeta for JsxSpaceBeforeTrailingSlash {
    const NAME: &'static str = "jsx-space-before-trailing-slash";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Checks that self-closing JSX elements have a space before '/>'";
    const HAS_FIX: bool = true;
}

impl JsxSpaceBeforeTrailingSlash {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, element: &JSXElement) -> Option<Diagnostic> {
        if element.closing_element.is_some() {
            return None;
        }
        let slash = element.span.end.checked_sub(2)?;
        let before = ctx.source_text().get(..slash as usize)?.chars().next_back()?;
        if before.is_whitespace() {
            return None;
        }
        Some(Diagnostic::warning(Self::NAME, element.span, MESSAGE).with_fix(Fix::insert(slash, " ")))
    }
}
