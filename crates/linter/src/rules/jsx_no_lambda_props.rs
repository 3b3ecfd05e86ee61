//! jsx-no-lambda-props
//!
//! Functions anywhere inside attribute or spread values. `ref` is exempt: it
//! is not a prop, so a fresh callback there causes no rerender.

use oxc_ast::ast::JSXOpeningElement;
use oxc_span::GetSpan;

use common::{descend_into, for_each_attribute_value, is_attribute_named, is_function_like};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Lambda expressions in JSX create new references on every render and can cause unnecessary rerenders (jsx-no-lambda-props)";

/// jsx-no-lambda-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoLambdaProps;

impl RuleMeta for JsxNoLambdaProps {
    const NAME: &'static str = "jsx-no-lambda-props";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Checks for lambda expressions used in JSX attributes";
}

impl JsxNoLambdaProps {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            for_each_attribute_value(item, |attr, value| {
                if attr.is_some_and(|attr| is_attribute_named(attr, "ref")) {
                    return;
                }
                descend_into(value, is_function_like, |expr| {
                    diagnostics.push(Diagnostic::warning(Self::NAME, expr.span(), MESSAGE));
                });
            });
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_jsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_jsx_no_lambda_props(JsxNoLambdaProps::new())
    }

    #[test]
    fn test_nested_lambdas() {
        let source = "<a b={{ c: () => 1 }} {...{ d: function () {} }} e={f(x => () => x)} />;";
        let diagnostics = lint_jsx(source, config());
        assert_eq!(
            texts(source, &diagnostics),
            vec!["() => 1", "function () {}", "x => () => x"]
        );
    }

    #[test]
    fn test_ref_is_exempt() {
        assert!(lint_jsx("<a ref={el => (this.el = el)} />;", config()).is_empty());
    }
}
