//! jsx-boolean-value
//!
//! Enforce boolean attribute notation in JSX.

use oxc_ast::ast::{Expression, JSXAttributeItem, JSXOpeningElement};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use common::attribute_value_expression;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

pub const NEVER_MESSAGE: &str = "Value must be omitted for boolean attributes";
pub const ALWAYS_MESSAGE: &str = "Value must be set for boolean attributes";

/// How boolean attributes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanValueOption {
    /// `<input disabled={true} />`
    #[default]
    Always,
    /// `<input disabled />`
    Never,
}

/// Configuration for jsx-boolean-value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxBooleanValueConfig {
    #[serde(default)]
    pub value: BooleanValueOption,
}

/// jsx-boolean-value rule
#[derive(Debug, Clone, Default)]
pub struct JsxBooleanValue {
    pub config: JsxBooleanValueConfig,
}

impl RuleMeta for JsxBooleanValue {
    const NAME: &'static str = "jsx-boolean-value";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Enforce boolean attribute notation in jsx.";
    const HAS_FIX: bool = true;
    const OPTION_EXAMPLES: &'static [&'static str] =
        &[r#"{ "value": "always" }"#, r#"{ "value": "never" }"#];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "value": { "enum": ["always", "never"], "type": "string" } }
        })
    }
}

impl JsxBooleanValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxBooleanValueConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            match self.config.value {
                BooleanValueOption::Always if attr.value.is_none() => {
                    diagnostics.push(
                        Diagnostic::warning(Self::NAME, attr.span, ALWAYS_MESSAGE).with_fix(
                            Fix::insert(attr.span.end, "={true}").with_message("Set value to true"),
                        ),
                    );
                }
                BooleanValueOption::Never => {
                    if let Some(Expression::BooleanLiteral(lit)) = attribute_value_expression(attr) {
                        if lit.value {
                            let value_span = Span::new(attr.name.span().end, attr.span.end);
                            diagnostics.push(
                                Diagnostic::warning(Self::NAME, attr.span, NEVER_MESSAGE).with_fix(
                                    Fix::delete(value_span).with_message("Remove the value"),
                                ),
                            );
                        }
                    }
                }
                BooleanValueOption::Always => {}
            }
        }
        diagnostics
    }
}
