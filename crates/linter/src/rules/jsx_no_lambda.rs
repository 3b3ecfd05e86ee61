//! jsx-no-lambda

use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement};
use oxc_span::GetSpan;

use common::{attribute_value_expression, is_function_like, unwrap_parens};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str =
    "Lambdas are forbidden in JSX attributes due to their rendering performance impact";

/// jsx-no-lambda rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoLambda;

impl RuleMeta for JsxNoLambda {
    const NAME: &'static str = "jsx-no-lambda";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Checks for fresh lambda literals used in JSX attributes";
}

impl JsxNoLambda {
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
            .filter(|expr| is_function_like(expr))
            .map(|expr| Diagnostic::warning(Self::NAME, expr.span(), MESSAGE))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_jsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_jsx_no_lambda(JsxNoLambda::new())
    }

    #[test]
    fn test_lambdas() {
        let source = "<a b={() => c()} d={(function () {})} e={this.f} g={h(() => 1)} />;";
        let diagnostics = lint_jsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["() => c()", "function () {}"]);
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_method_reference_passes() {
        assert!(lint_jsx("<button onClick={this.handleClick} />;", config()).is_empty());
    }
}
