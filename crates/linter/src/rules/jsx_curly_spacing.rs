//! jsx-curly-spacing
//!
//! Require or forbid spaces inside the braces of JSX expressions and spreads.

use oxc_ast::ast::{Expression, JSXExpressionContainer};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use common::{find_token, is_multiline, whitespace_gap};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, RuleCategory, RuleMeta};

/// Spacing inside braces or around `=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingOption {
    Always,
    Never,
}

/// Configuration for jsx-curly-spacing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxCurlySpacingConfig {
    /// Unset means the rule reports nothing
    #[serde(default)]
    pub spacing: Option<SpacingOption>,
}

/// jsx-curly-spacing rule
#[derive(Debug, Clone, Default)]
pub struct JsxCurlySpacing {
    pub config: JsxCurlySpacingConfig,
}

impl RuleMeta for JsxCurlySpacing {
    const NAME: &'static str = "jsx-curly-spacing";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Checks JSX curly braces spacing";
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

/// The four tokens whose gaps are checked
struct Tokens {
    first: Span,
    second: Span,
    second_to_last: Span,
    last: Span,
}

impl JsxCurlySpacing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxCurlySpacingConfig) -> Self {
        Self { config }
    }

    /// `{expr}` as an attribute value or a child, `{}` included
    pub fn check_container(
        &self,
        ctx: &LintContext,
        container: &JSXExpressionContainer,
    ) -> Vec<Diagnostic> {
        let span = container.span;
        let first = Span::new(span.start, span.start + 1);
        let last = Span::new(span.end - 1, span.end);
        let tokens = match container.expression.as_expression() {
            Some(expr) => Tokens { first, second: expr.span(), second_to_last: expr.span(), last },
            None => Tokens { first, second: last, second_to_last: first, last },
        };
        self.check_tokens(ctx, span, &tokens)
    }

    /// `{...argument}` as an attribute or a child
    pub fn check_spread(
        &self,
        ctx: &LintContext,
        span: Span,
        argument: &Expression,
    ) -> Vec<Diagnostic> {
        let argument_span = argument.span();
        let start = span.start + 1;
        let Some(dots) = find_token(ctx.source_text(), ctx.comments(), start, argument_span.start, "...")
        else {
            return Vec::new();
        };
        let tokens = Tokens {
            first: Span::new(span.start, span.start + 1),
            second: Span::new(dots, dots + 3),
            second_to_last: argument_span,
            last: Span::new(span.end - 1, span.end),
        };
        self.check_tokens(ctx, span, &tokens)
    }

    fn check_tokens(&self, ctx: &LintContext, span: Span, tokens: &Tokens) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let source = ctx.source_text();
        let opening_brace = Span::new(span.start, span.start + 1);
        let closing_brace = Span::new(span.end - 1, span.end);
        let leading = whitespace_gap(source, ctx.comments(), tokens.first.end, tokens.second.start);
        let trailing =
            whitespace_gap(source, ctx.comments(), tokens.second_to_last.end, tokens.last.start);

        match self.config.spacing {
            Some(SpacingOption::Always) => {
                if leading.is_none() {
                    diagnostics.push(
                        Diagnostic::warning(Self::NAME, opening_brace, "A space is required after {")
                            .with_fix(Fix::insert(tokens.first.end, " ")),
                    );
                }
                if trailing.is_none() {
                    diagnostics.push(
                        Diagnostic::warning(Self::NAME, closing_brace, "A space is required before }")
                            .with_fix(Fix::insert(tokens.last.start, " ")),
                    );
                }
            }
            Some(SpacingOption::Never) => {
                let head = ctx.span_text(Span::new(tokens.first.start, tokens.second.end));
                if let Some(gap) = leading.filter(|_| !is_multiline(head)) {
                    diagnostics.push(
                        Diagnostic::warning(Self::NAME, opening_brace, "There should be no space after {")
                            .with_fix(Fix::new(gap.span, gap.comments)),
                    );
                }
                let tail = ctx.span_text(Span::new(tokens.second_to_last.start, tokens.last.end));
                if let Some(gap) = trailing.filter(|_| !is_multiline(tail)) {
                    let diagnostic = Diagnostic::warning(
                        Self::NAME,
                        closing_brace,
                        "There should be no space before }",
                    );
                    // `{ }`: the leading fix already covers the only gap
                    if tokens.first == tokens.second_to_last {
                        diagnostics.push(diagnostic);
                    } else {
                        diagnostics.push(diagnostic.with_fix(Fix::new(gap.span, gap.comments)));
                    }
                }
            }
            None => {}
        }
        diagnostics
    }
}
