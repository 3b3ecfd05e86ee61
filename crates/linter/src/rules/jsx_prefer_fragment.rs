//! jsx-prefer-fragment
//!
//! A bare `<div>` used only to group children should be a fragment.

use oxc_ast::ast::JSXElement;
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use common::tag_name;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

/// Configuration for jsx-prefer-fragment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxPreferFragmentConfig {
    /// Fix to `<React.Fragment>` instead of `<>`
    #[serde(default)]
    pub no_syntax_sugar: bool,
}

/// jsx-prefer-fragment rule
#[derive(Debug, Clone, Default)]
pub struct JsxPreferFragment {
    pub config: JsxPreferFragmentConfig,
}

impl RuleMeta for JsxPreferFragment {
    const NAME: &'static str = "jsx-prefer-fragment";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Prefer React.Fragment over a wrapping div without attributes";
    const HAS_FIX: bool = true;
    const OPTION_EXAMPLES: &'static [&'static str] = &["true", r#"{ "noSyntaxSugar": true }"#];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": { "noSyntaxSugar": { "type": "boolean" } }
        })
    }
}

impl JsxPreferFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxPreferFragmentConfig) -> Self {
        Self { config }
    }

    pub fn check(&self, element: &JSXElement) -> Option<Diagnostic> {
        let opening = &element.opening_element;
        let closing = element.closing_element.as_ref()?;
        let name = tag_name(element);
        if name != "div" || !opening.attributes.is_empty() {
            return None;
        }
        let fragment = if self.config.no_syntax_sugar { "React.Fragment" } else { "" };
        Some(
            Diagnostic::warning(
                Self::NAME,
                opening.name.span(),
                format!("An empty '{}' should be written as React.Fragment.", name),
            )
            .with_fix(Fix::new(opening.name.span(), fragment))
            .with_fix(Fix::new(closing.name.span(), fragment)),
        )
    }
}
