//! jsx-no-bind

use oxc_ast::ast::{Expression, JSXAttributeItem, JSXOpeningElement};
use oxc_span::GetSpan;

use common::attribute_value_expression;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

pub(crate) const BIND_MESSAGE: &str =
    "Binds are forbidden in JSX attributes due to their rendering performance impact";

/// jsx-no-bind rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoBind;

impl RuleMeta for JsxNoBind {
    const NAME: &'static str = "jsx-no-bind";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Forbids function binding in JSX attributes. This has the same intent as jsx-no-lambda in helping you avoid excessive re-renders.";
}

impl JsxNoBind {
    pub fn new() -> Self {
        Self
    }

    /// `attr={this.handle.bind(this)}`
    pub fn check(&self, ctx: &LintContext, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let Some(expr) = attribute_value_expression(attr) else {
                continue;
            };
            if matches!(expr, Expression::CallExpression(_))
                && ctx.span_text(expr.span()).contains(".bind(this)")
            {
                diagnostics.push(Diagnostic::warning(Self::NAME, expr.span(), BIND_MESSAGE));
            }
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
        RulesConfig::none().with_jsx_no_bind(JsxNoBind::new())
    }

    #[test]
    fn test_bind_this() {
        let source = "<a b={this.c.bind(this)} d={this.e.bind(other)} f={(this.g.bind(this))} />;";
        let diagnostics = lint_jsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["this.c.bind(this)"]);
        assert_eq!(diagnostics[0].message, BIND_MESSAGE);
    }
}
