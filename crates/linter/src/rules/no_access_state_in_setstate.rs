//! no-access-state-in-setstate

use oxc_ast::ast::CallExpression;
use oxc_span::GetSpan;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Use callback in setState when referencing the previous state.";

/// no-access-state-in-setstate rule
#[derive(Debug, Clone, Default)]
pub struct NoAccessStateInSetstate;

impl RuleMeta for NoAccessStateInSetstate {
    const NAME: &'static str = "no-access-state-in-setstate";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Reports usage of this.state within setState";
}

impl NoAccessStateInSetstate {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, call: &CallExpression) -> Option<Diagnostic> {
        if ctx.span_text(call.callee.span()) != "this.setState" {
            return None;
        }
        let argument = call.arguments.first()?;
        ctx.span_text(argument.span())
            .contains("this.state.")
            .then(|| Diagnostic::warning(Self::NAME, call.span, MESSAGE))
    }
}
