//! jsx-no-array-literal-props

use oxc_ast::ast::{Expression, JSXAttributeItem, JSXOpeningElement};
use oxc_span::GetSpan;

use common::{attribute_value_expression, unwrap_parens};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Array literal properties are forbidden in JSX attributes due to their rendering performance impact";

/// jsx-no-array-literal-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoArrayLiteralProps;

impl RuleMeta for JsxNoArrayLiteralProps {
    const NAME: &'static str = "jsx-no-array-literal-props";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Checks for array literal used in JSX attributes";
}

impl JsxNoArrayLiteralProps {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        opening
            .attributes
            .iter()
            .filter_map(|item| match item {
                JSXAttributeItem::Attribute(attr) => attribute_value_expression(attr),
                JSXAttributeItem::SpreadAttribute(_) => None,
            })
            .map(unwrap_parens)
            .filter(|expr| matches!(expr, Expression::ArrayExpression(_)))
            .map(|expr| Diagnostic::warning(Self::NAME, expr.span(), MESSAGE))
            .collect()
    }
}
