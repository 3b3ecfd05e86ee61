//! jsx-curly-brace-presence
//!
//! Enforce or forbid curly braces around string literal props.

use oxc_ast::ast::{Expression, JSXAttributeItem, JSXOpeningElement};
use serde::{Deserialize, Serialize};

use common::{expression_container, string_initializer};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, RuleCategory, RuleMeta};

pub const FAILURE_CURLY_BRACE_SUPERFLUOUS: &str =
    "JSX attribute must NOT have curly braces around string literal";
pub const FAILURE_CURLY_BRACE_MISSING: &str =
    "JSX attribute must have curly braces around string literal";

/// Whether string props are wrapped in braces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurlyBracePresence {
    Always,
    #[default]
    Never,
}

/// Configuration for jsx-curly-brace-presence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxCurlyBracePresenceConfig {
    #[serde(default)]
    pub props: CurlyBracePresence,
}

/// jsx-curly-brace-presence rule
#[derive(Debug, Clone, Default)]
pub struct JsxCurlyBracePresence {
    pub config: JsxCurlyBracePresenceConfig,
}

impl RuleMeta for JsxCurlyBracePresence {
    const NAME: &'static str = "jsx-curly-brace-presence";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str =
        "Enforce curly braces or disallow unnecessary curly braces in JSX props";
    const HAS_FIX: bool = true;
    const OPTION_EXAMPLES: &'static [&'static str] =
        &[r#"{ "props": "always" }"#, r#"{ "props": "never" }"#];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "props": { "enum": ["always", "never"], "type": "string" } }
        })
    }
}

impl JsxCurlyBracePresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxCurlyBracePresenceConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, ctx: &LintContext, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            match self.config.props {
                CurlyBracePresence::Always => {
                    if let Some(lit) = string_initializer(attr) {
                        let wrapped = format!("{{{}}}", ctx.span_text(lit.span));
                        diagnostics.push(
                            Diagnostic::warning(Self::NAME, lit.span, FAILURE_CURLY_BRACE_MISSING)
                                .with_fix(Fix::new(lit.span, wrapped)),
                        );
                    }
                }
                CurlyBracePresence::Never => {
                    let Some(container) = expression_container(attr) else {
                        continue;
                    };
                    let replacement = match container.expression.as_expression() {
                        Some(Expression::StringLiteral(lit)) => ctx.span_text(lit.span).to_string(),
                        Some(Expression::TemplateLiteral(template))
                            if template.expressions.is_empty() =>
                        {
                            let content = template.quasis.first().map_or("", |quasi| {
                                quasi.value.cooked.as_ref().unwrap_or(&quasi.value.raw).as_str()
                            });
                            format!("\"{}\"", content)
                        }
                        _ => continue,
                    };
                    diagnostics.push(
                        Diagnostic::warning(
                            Self::NAME,
                            container.span,
                            FAILURE_CURLY_BRACE_SUPERFLUOUS,
                        )
                        .with_fix(Fix::new(container.span, replacement)),
                    );
                }
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

    fn config(props: CurlyBracePresence) -> RulesConfig {
        RulesConfig::none().with_jsx_curly_brace_presence(JsxCurlyBracePresence::with_config(
            JsxCurlyBracePresenceConfig { props },
        ))
    }

    #[test]
    fn test_never_flags_braced_literals() {
        let source = "<a href={\"x\"} title={`y`} alt={`${z}`} id=\"w\" />;";
        let diagnostics = lint_jsx(source, config(CurlyBracePresence::Never));
        assert_eq!(texts(source, &diagnostics), vec!["{\"x\"}", "{`y`}"]);
        assert_eq!(diagnostics[0].fixes[0].replacement, "\"x\"");
        assert_eq!(diagnostics[1].fixes[0].replacement, "\"y\"");
    }

    #[test]
    fn test_always_flags_bare_literals() {
        let source = "<a href=\"x\" title={\"y\"} />;";
        let diagnostics = lint_jsx(source, config(CurlyBracePresence::Always));
        assert_eq!(texts(source, &diagnostics), vec!["\"x\""]);
        assert_eq!(diagnostics[0].message, FAILURE_CURLY_BRACE_MISSING);
        assert_eq!(diagnostics[0].fixes[0].replacement, "{\"x\"}");
    }

    #[test]
    fn test_default_is_never() {
        assert_eq!(JsxCurlyBracePresenceConfig::default().props, CurlyBracePresence::Never);
    }
}
