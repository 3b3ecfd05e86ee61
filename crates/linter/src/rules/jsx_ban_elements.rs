//! jsx-ban-elements
//!
//! Ban JSX elements whose tag name matches a configured pattern.

use oxc_ast::ast::JSXOpeningElement;
use oxc_span::GetSpan;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

/// A banned tag name pattern with an optional explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedElement {
    /// Regular expression tested against the full tag name
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Configuration for jsx-ban-elements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxBanElementsConfig {
    #[serde(default)]
    pub bans: Vec<BannedElement>,
}

/// jsx-ban-elements rule
#[derive(Debug, Clone, Default)]
pub struct JsxBanElements {
    bans: Vec<(Regex, Option<String>)>,
}

impl RuleMeta for JsxBanElements {
    const NAME: &'static str = "jsx-ban-elements";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Bans specific JSX elements from being used.";
    const OPTION_EXAMPLES: &'static [&'static str] = &[
        r#"{ "bans": [{ "pattern": "^Object$", "message": "Use {} instead." }, { "pattern": "String" }] }"#,
    ];

    fn options_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "bans": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "pattern": { "type": "string" },
                            "message": { "type": "string" }
                        },
                        "required": ["pattern"]
                    }
                }
            }
        })
    }
}

impl JsxBanElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the configured patterns
    pub fn with_config(config: JsxBanElementsConfig) -> Result<Self, ConfigError> {
        let bans = config
            .bans
            .into_iter()
            .map(|ban| match Regex::new(&ban.pattern) {
                Ok(regex) => Ok((regex, ban.message)),
                Err(source) => Err(ConfigError::InvalidPattern {
                    rule: Self::NAME,
                    pattern: ban.pattern,
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bans })
    }

    /// Report the tag name against the first matching ban
    pub fn check(&self, ctx: &LintContext, opening: &JSXOpeningElement) -> Option<Diagnostic> {
        let span = opening.name.span();
        let name = ctx.span_text(span);
        let (_, message) = self.bans.iter().find(|(pattern, _)| pattern.is_match(name))?;
        let text = match message {
            Some(message) => format!("JSX element '{}' is banned. {}", name, message),
            None => format!("JSX element '{}' is banned.", name),
        };
        Some(Diagnostic::warning(Self::NAME, span, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_jsx, texts};
    use crate::RulesConfig;

    fn config(json: &str) -> RulesConfig {
        let options: JsxBanElementsConfig = serde_json::from_str(json).unwrap();
        RulesConfig::none().with_jsx_ban_elements(JsxBanElements::with_config(options).unwrap())
    }

    #[test]
    fn test_banned_element_with_message() {
        let source = "<div><Object /><Other /></div>;";
        let diagnostics = lint_jsx(
            source,
            config(r#"{"bans": [{"pattern": "^Object$", "message": "Use {} instead."}]}"#),
        );
        assert_eq!(texts(source, &diagnostics), vec!["Object"]);
        assert_eq!(diagnostics[0].message, "JSX element 'Object' is banned. Use {} instead.");
    }

    #[test]
    fn test_first_matching_ban_wins() {
        let source = "<Foo.Bar></Foo.Bar>;";
        let diagnostics = lint_jsx(
            source,
            config(r#"{"bans": [{"pattern": "Bar"}, {"pattern": "Foo", "message": "no"}]}"#),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "JSX element 'Foo.Bar' is banned.");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let options: JsxBanElementsConfig =
            serde_json::from_str(r#"{"bans": [{"pattern": "("}]}"#).unwrap();
        assert!(matches!(
            JsxBanElements::with_config(options),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}
