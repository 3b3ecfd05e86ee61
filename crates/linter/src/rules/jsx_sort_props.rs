//! jsx-sort-props
//!
//! Props sorted alphabetically, optionally grouped by kind.

use std::fmt;

use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement};
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};

use common::{attribute_name, attribute_name_span};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// Kind of an attribute item, for grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropOrder {
    /// `{...props}`
    Spread,
    /// `disabled`
    Shorthand,
    /// `value={x}`
    Longhand,
}

impl PropOrder {
    fn of(item: &JSXAttributeItem) -> Self {
        match item {
            JSXAttributeItem::SpreadAttribute(_) => Self::Spread,
            JSXAttributeItem::Attribute(attr) if attr.value.is_none() => Self::Shorthand,
            JSXAttributeItem::Attribute(_) => Self::Longhand,
        }
    }
}

impl fmt::Display for PropOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spread => "spread",
            Self::Shorthand => "shorthand",
            Self::Longhand => "longhand",
        })
    }
}

/// Configuration for jsx-sort-props
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxSortPropsConfig {
    #[serde(default)]
    pub ignore_case: bool,
    /// Group order; kinds not listed are unranked
    #[serde(default)]
    pub order: Option<Vec<PropOrder>>,
}

/// jsx-sort-props rule
#[derive(Debug, Clone, Default)]
pub struct JsxSortProps {
    pub config: JsxSortPropsConfig,
}

impl RuleMeta for JsxSortProps {
    const NAME: &'static str = "jsx-sort-props";
    const CATEGORY: RuleCategory = RuleCategory::Maintainability;
    const DESCRIPTION: &'static str =
        "Requires props in JSX elements to be sorted alphabetically, and grouped as specified";
    const OPTION_EXAMPLES: &'static [&'static str] = &[
        "true",
        r#"{ "ignoreCase": true }"#,
        r#"{ "ignoreCase": true, "order": ["spread", "shorthand"] }"#,
    ];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "ignoreCase": { "type": "boolean" },
                "order": {
                    "type": "array",
                    "items": { "enum": ["spread", "shorthand", "longhand"], "type": "string" },
                    "maxLength": 3
                }
            }
        })
    }
}

impl JsxSortProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: JsxSortPropsConfig) -> Self {
        Self { config }
    }

    fn rank(&self, kind: PropOrder) -> Option<usize> {
        self.config.order.as_ref()?.iter().position(|k| *k == kind)
    }

    /// Reports at most one failure per element
    pub fn check(&self, opening: &JSXOpeningElement) -> Option<Diagnostic> {
        if opening.attributes.len() <= 1 {
            return None;
        }
        let mut last_key: Option<String> = None;
        let mut last_group: Option<(Option<usize>, PropOrder)> = None;

        for item in &opening.attributes {
            if self.config.order.is_some() {
                let kind = PropOrder::of(item);
                let rank = self.rank(kind);
                if let (Some((last_rank, last_kind)), Some(rank)) = (last_group, rank) {
                    if last_rank.is_none_or(|last_rank| last_rank > rank) {
                        return Some(Diagnostic::warning(
                            Self::NAME,
                            item.span(),
                            format!("{} properties should come before {} properties", kind, last_kind),
                        ));
                    }
                }
                if last_group.map(|(last_rank, _)| last_rank) != Some(rank) {
                    last_key = None;
                }
                last_group = Some((rank, kind));
            }

            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let name = attribute_name(attr);
            let key = if self.config.ignore_case { name.to_lowercase() } else { name.clone() };
            if last_key.as_ref().is_some_and(|last| *last > key) {
                return Some(Diagnostic::warning(
                    Self::NAME,
                    attribute_name_span(attr),
                    format!("The key '{}' is not sorted alphabetically", name),
                ));
            }
            last_key = Some(key);
        }
        None
    }
}
