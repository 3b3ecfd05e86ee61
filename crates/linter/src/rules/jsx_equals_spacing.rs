//! jsx-equals-spacing
//!
//! Require or forbid spaces around `=` in JSX attributes.

use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use common::{find_token, whitespace_gap};

use super::jsx_curly_spacing::SpacingOption;
use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, RuleCategory, RuleMeta};

pub const FAILURE_REQUIRED_SPACE_BEFORE: &str = "A space is required before '='";
pub const FAILURE_REQUIRED_SPACE_AFTER: &str = "A space is required after '='";
pub const FAILURE_FORBIDDEN_SPACE_BEFORE: &str = "There should be no space before '='";
pub const FAILURE_FORBIDDEN_SPACE_AFTER: &str = "There should be no space after '='";

/// Configuration for jsx-equals-spacing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxEqualsSpacingConfig {
    /// Unset means the rule reports nothing
    #[serde(default)]
    pub spacing: Option<SpacingOption>,
}

/// jsx-equals-spacing rule
#[derive(Debug, Clone, Default)]
pub struct JsxEqualsSpacing {
    pub config: JsxEqualsSpacingConfig,
}

impl RuleMeta for JsxEqualsSpacing {
    const NAME: &'static str = "jsx-equals-spacing";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str =
        "Disallow or enforce spaces around equal signs in JSX attributes";
    const HAS_FIX: bool = true;
    const OPTION_EXAMPLES: &'static [&'static str] =
        &[r#"{ "spacing": "always" }"#, r#"{ "spacing": "never" }"#];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "spacing": { "enum": ["always", "never"], "type": "string" } }
        })
    }
}

impl JsxEqualsSpacing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxEqualsSpacingConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, ctx: &LintContext, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let Some(spacing) = self.config.spacing else {
            return diagnostics;
        };
        let source = ctx.source_text();

        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let Some(value) = &attr.value else {
                continue;
            };
            let name_end = attr.name.span().end;
            let value_start = value.span().start;
            let Some(equals) = find_token(source, ctx.comments(), name_end, value_start, "=") else {
                continue;
            };
            let before = whitespace_gap(source, ctx.comments(), name_end, equals);
            let after = whitespace_gap(source, ctx.comments(), equals + 1, value_start);

            match spacing {
                SpacingOption::Always => {
                    if before.is_none() {
                        diagnostics.push(
                            Diagnostic::warning(
                                Self::NAME,
                                Span::new(equals, equals + 1),
                                FAILURE_REQUIRED_SPACE_BEFORE,
                            )
                            .with_fix(Fix::insert(name_end, " ")),
                        );
                    }
                    if after.is_none() {
                        diagnostics.push(
                            Diagnostic::warning(
                                Self::NAME,
                                Span::new(equals + 1, equals + 2),
                                FAILURE_REQUIRED_SPACE_AFTER,
                            )
                            .with_fix(Fix::insert(equals + 1, " ")),
                        );
                    }
                }
                SpacingOption::Never => {
                    if let Some(gap) = before {
                        diagnostics.push(
                            Diagnostic::warning(
                                Self::NAME,
                                Span::new(equals - 1, equals),
                                FAILURE_FORBIDDEN_SPACE_BEFORE,
                            )
                            .with_fix(Fix::new(gap.span, gap.comments)),
                        );
                    }
                    if let Some(gap) = after {
                        diagnostics.push(
                            Diagnostic::warning(
                                Self::NAME,
                                Span::new(equals + 1, equals + 2),
                                FAILURE_FORBIDDEN_SPACE_AFTER,
                            )
                            .with_fix(Fix::new(gap.span, gap.comments)),
                        );
                    }
                }
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_jsx, messages};
    use crate::RulesConfig;

    fn config(spacing: SpacingOption) -> RulesConfig {
        RulesConfig::none().with_jsx_equals_spacing(JsxEqualsSpacing::with_config(
            JsxEqualsSpacingConfig { spacing: Some(spacing) },
        ))
    }

    #[test]
    fn test_always() {
        let source = r#"<a b="1" c = "2" d ={e} />;"#;
        let diagnostics = lint_jsx(source, config(SpacingOption::Always));
        assert_eq!(
            messages(&diagnostics),
            vec![
                FAILURE_REQUIRED_SPACE_BEFORE,
                FAILURE_REQUIRED_SPACE_AFTER,
                FAILURE_REQUIRED_SPACE_AFTER,
            ]
        );
        assert_eq!(diagnostics[0].fixes[0], Fix::insert(4, " "));
    }

    #[test]
    fn test_never() {
        let source = r#"<a b="1" c = "2" d= {e} />;"#;
        let diagnostics = lint_jsx(source, config(SpacingOption::Never));
        assert_eq!(
            messages(&diagnostics),
            vec![
                FAILURE_FORBIDDEN_SPACE_BEFORE,
                FAILURE_FORBIDDEN_SPACE_AFTER,
                FAILURE_FORBIDDEN_SPACE_AFTER,
            ]
        );
        let fix = &diagnostics[0].fixes[0];
        assert_eq!(&source[fix.start as usize..fix.end as usize], " ");
        assert!(fix.replacement.is_empty());
    }

    #[test]
    fn test_bare_attributes_are_ignored() {
        assert!(lint_jsx("<a disabled />;", config(SpacingOption::Always)).is_empty());
    }

    #[test]
    fn test_comment_with_quotes_between_tokens() {
        let source = r#"<a b= /* "=" */ "1" />;"#;
        let diagnostics = lint_jsx(source, config(SpacingOption::Never));
        assert_eq!(messages(&diagnostics), vec![FAILURE_FORBIDDEN_SPACE_AFTER]);
        assert_eq!(diagnostics[0].fixes[0], Fix::new(Span::new(5, 16), r#"/* "=" */"#));
    }
}
