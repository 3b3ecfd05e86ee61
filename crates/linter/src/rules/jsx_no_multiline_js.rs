//! jsx-no-multiline-js

use oxc_ast::ast::JSXExpressionContainer;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Multiline JS expressions inside JSX are forbidden";

/// jsx-no-multiline-js rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoMultilineJs;

impl RuleMeta for JsxNoMultilineJs {
    const NAME: &'static str = "jsx-no-multiline-js";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str =
        "Disallows multiline JS expressions inside JSX blocks to promote readability";
}

impl JsxNoMultilineJs {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, container: &JSXExpressionContainer) -> Option<Diagnostic> {
        ctx.span_text(container.span)
            .contains('\n')
            .then(|| Diagnostic::warning(Self::NAME, container.span, MESSAGE))
    }
}
