//! jsx-no-bind-props
//!
//! Like jsx-no-bind, but searches the whole attribute value and spread
//! values for `.bind(` calls.

use oxc_ast::ast::{Expression, JSXOpeningElement};
use oxc_span::GetSpan;

use common::{descend_into, for_each_attribute_value};

use super::jsx_no_bind::BIND_MESSAGE;
use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

/// jsx-no-bind-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoBindProps;

impl RuleMeta for JsxNoBindProps {
    const NAME: &'static str = "jsx-no-bind-props";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Forbids function binding in JSX attributes and spread props.";
}

impl JsxNoBindProps {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            for_each_attribute_value(item, |_, value| {
                descend_into(
                    value,
                    |expr| {
                        matches!(expr, Expression::CallExpression(_))
                            && ctx.span_text(expr.span()).contains(".bind(")
                    },
                    |expr| {
                        diagnostics.push(Diagnostic::warning(Self::NAME, expr.span(), BIND_MESSAGE));
                    },
                );
            });
        }
        diagnostics
    }
}
