//! jsx-ban-props
//!
//! Ban specific props by name.

use indexmap::IndexMap;
use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement};
use serde::{Deserialize, Serialize};

use common::{attribute_name, attribute_name_span};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// A banned prop with an optional explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedProp {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Configuration for jsx-ban-props
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxBanPropsConfig {
    #[serde(default)]
    pub props: Vec<BannedProp>,
}

/// jsx-ban-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxBanProps {
    /// Prop name to explanation, empty when none was given
    banned: IndexMap<String, String>,
}

impl RuleMeta for JsxBanProps {
    const NAME: &'static str = "jsx-ban-props";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Bans the use of specific props.";
    const OPTION_EXAMPLES: &'static [&'static str] = &[
        r#"{ "props": [{ "name": "someProp" }, { "name": "anotherProp", "message": "Optional explanation" }] }"#,
    ];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "props": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "message": { "type": "string" }
                        },
                        "required": ["name"]
                    }
                }
            }
        })
    }
}

impl JsxBanProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxBanPropsConfig) -> Self {
        let banned = config
            .props
            .into_iter()
            .map(|prop| (prop.name, prop.message.unwrap_or_default()))
            .collect();
        Self { banned }
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let name = attribute_name(attr);
            if let Some(explanation) = self.banned.get(&name) {
                let message = if explanation.is_empty() {
                    format!("Use of the prop '{}' is not allowed.", name)
                } else {
                    format!("Use of the prop '{}' is not allowed. {}", name, explanation)
                };
                diagnostics.push(Diagnostic::warning(Self::NAME, attribute_name_span(attr), message));
            }
        }
        diagnostics
    }
}
