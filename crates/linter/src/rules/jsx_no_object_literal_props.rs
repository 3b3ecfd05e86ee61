//! jsx-no-object-literal-props

use oxc_ast::ast::{Expression, JSXOpeningElement};
use oxc_span::GetSpan;

use common::{descend_into, for_each_attribute_value};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Object literal properties are forbidden in JSX attributes due to their rendering performance impact";

/// jsx-no-object-literal-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoObjectLiteralProps;

impl RuleMeta for JsxNoObjectLiteralProps {
    const NAME: &'static str = "jsx-no-object-literal-props";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Checks for object literal used in JSX attributes";
}

impl JsxNoObjectLiteralProps {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            for_each_attribute_value(item, |_, value| {
                descend_into(
                    value,
                    |expr| matches!(expr, Expression::ObjectExpression(_)),
                    |expr| diagnostics.push(Diagnostic::warning(Self::NAME, expr.span(), MESSAGE)),
                );
            });
        }
        diagnostics
    }
}
