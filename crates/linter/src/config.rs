//! Which rules run, and with which options
//!
//! [`RulesConfig`] holds one optional, fully built rule per field. Hosts
//! usually build it from JSON with [`RulesConfig::from_json`]:
//!
//! ```json
//! { "jsx-no-lambda": true, "jsx-curly-spacing": { "spacing": "never" }, "jsx-key": false }
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::rules::*;
use crate::RuleMeta;

/// Errors raised while resolving a rules configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
    #[error("invalid options for rule `{rule}`: {source}")]
    InvalidOptions {
        rule: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid pattern `{pattern}` for rule `{rule}`: {source}")]
    InvalidPattern {
        rule: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("rules configuration must be a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Options of rules that take none; `{}` is accepted, anything else rejected
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NoOptions {}

/// Deserialize a rule's options object
fn options<C: DeserializeOwned>(rule: &str, value: Value) -> Result<C, ConfigError> {
    serde_json::from_value(value).map_err(|source| ConfigError::InvalidOptions {
        rule: rule.to_string(),
        source,
    })
}

fn plain<R: Default>(rule: &str, value: Value) -> Result<R, ConfigError> {
    options::<NoOptions>(rule, value)?;
    Ok(R::default())
}

macro_rules! rules_config {
    ($($field:ident, $with:ident: $rule:ty, $recommended:literal, $build:expr;)*) => {
        /// Enabled rules; `None` disables a rule
        #[derive(Debug, Clone)]
        pub struct RulesConfig {
            $(pub $field: Option<$rule>,)*
        }

        impl Default for RulesConfig {
            /// The recommended rule set
            fn default() -> Self {
                Self {
                    $($field: $recommended.then(<$rule>::default),)*
                }
            }
        }

        impl RulesConfig {
            pub fn none() -> Self {
                Self {
                    $($field: None,)*
                }
            }

            /// Every rule with default options
            pub fn all() -> Self {
                Self {
                    $($field: Some(<$rule>::default()),)*
                }
            }

            $(
                pub fn $with(mut self, rule: $rule) -> Self {
                    self.$field = Some(rule);
                    self
                }
            )*

            /// Names of the enabled rules
            pub fn enabled_rules(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$field.is_some() {
                        names.push(<$rule as RuleMeta>::NAME);
                    }
                )*
                names
            }

            /// Apply one `"rule-name": value` entry on top of this config
            pub fn set(&mut self, name: &str, value: Value) -> Result<(), ConfigError> {
                $(
                    if name == <$rule as RuleMeta>::NAME {
                        self.$field = match value {
                            Value::Null | Value::Bool(false) => None,
                            Value::Bool(true) => Some(<$rule>::default()),
                            value => Some(($build)(name, value)?),
                        };
                        return Ok(());
                    }
                )*
                Err(ConfigError::UnknownRule(name.to_string()))
            }
        }
    };
}

rules_config! {
    component_no_proptypes, with_component_no_proptypes: ComponentNoProptypes, false, plain;
    jsx_alignment, with_jsx_alignment: JsxAlignment, true, plain;
    jsx_ban_elements, with_jsx_ban_elements: JsxBanElements, false,
        |rule, value| JsxBanElements::with_config(options(rule, value)?);
    jsx_ban_props, with_jsx_ban_props: JsxBanProps, false,
        |rule, value| options(rule, value).map(JsxBanProps::with_config);
    jsx_boolean_value, with_jsx_boolean_value: JsxBooleanValue, false,
        |rule, value| options(rule, value).map(JsxBooleanValue::with_config);
    jsx_curly_brace_presence, with_jsx_curly_brace_presence: JsxCurlyBracePresence, true,
        |rule, value| options(rule, value).map(JsxCurlyBracePresence::with_config);
    jsx_curly_spacing, with_jsx_curly_spacing: JsxCurlySpacing, false,
        |rule, value| options(rule, value).map(JsxCurlySpacing::with_config);
    jsx_equals_spacing, with_jsx_equals_spacing: JsxEqualsSpacing, false,
        |rule, value| options(rule, value).map(JsxEqualsSpacing::with_config);
    jsx_key, with_jsx_key: JsxKey, true, plain;
    jsx_named_prop_interface, with_jsx_named_prop_interface: JsxNamedPropInterface, false, plain;
    jsx_no_array_literal_props, with_jsx_no_array_literal_props: JsxNoArrayLiteralProps, false, plain;
    jsx_no_bind, with_jsx_no_bind: JsxNoBind, true, plain;
    jsx_no_bind_props, with_jsx_no_bind_props: JsxNoBindProps, false, plain;
    jsx_no_jsx_literal_props, with_jsx_no_jsx_literal_props: JsxNoJsxLiteralProps, false, plain;
    jsx_no_lambda, with_jsx_no_lambda: JsxNoLambda, true, plain;
    jsx_no_lambda_props, with_jsx_no_lambda_props: JsxNoLambdaProps, false, plain;
    jsx_no_method_ref, with_jsx_no_method_ref: JsxNoMethodRef, false, plain;
    jsx_no_multiline_js, with_jsx_no_multiline_js: JsxNoMultilineJs, false, plain;
    jsx_no_object_literal_props, with_jsx_no_object_literal_props: JsxNoObjectLiteralProps, false, plain;
    jsx_no_string_ref, with_jsx_no_string_ref: JsxNoStringRef, true, plain;
    jsx_prefer_fragment, with_jsx_prefer_fragment: JsxPreferFragment, false,
        |rule, value| options(rule, value).map(JsxPreferFragment::with_config);
    jsx_prop_sorting, with_jsx_prop_sorting: JsxPropSorting, false, plain;
    jsx_self_close, with_jsx_self_close: JsxSelfClose, true, plain;
    jsx_sort_props, with_jsx_sort_props: JsxSortProps, false,
        |rule, value| options(rule, value).map(JsxSortProps::with_config);
    jsx_space_before_trailing_slash, with_jsx_space_before_trailing_slash: JsxSpaceBeforeTrailingSlash, true, plain;
    jsx_use_translation_function, with_jsx_use_translation_function: JsxUseTranslationFunction, false, plain;
    jsx_whitespace_literal, with_jsx_whitespace_literal: JsxWhitespaceLiteral, true, plain;
    jsx_wrap_mulitlines, with_jsx_wrap_mulitlines: JsxWrapMulitlines, false, plain;
    jsx_wrap_multiline, with_jsx_wrap_multiline: JsxWrapMultiline, true, plain;
    no_access_state_in_setstate, with_no_access_state_in_setstate: NoAccessStateInSetstate, true, plain;
    no_string_ref, with_no_string_ref: NoStringRef, false, plain;
    react_component_classes_should_implement_scu, with_react_component_classes_should_implement_scu:
        ReactComponentClassesShouldImplementScu, false, plain;
    react_no_unnecessary_fragment, with_react_no_unnecessary_fragment: ReactNoUnnecessaryFragment, true, plain;
    react_pure_components_have_primitive_attributes, with_react_pure_components_have_primitive_attributes:
        ReactPureComponentsHavePrimitiveAttributes, false, plain;
    react_pure_components_have_simple_attributes, with_react_pure_components_have_simple_attributes:
        ReactPureComponentsHaveSimpleAttributes, false, plain;
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object keyed by rule name.
    ///
    /// Rules not mentioned keep their recommended setting. `true` enables a rule
    /// with default options, `false` or `null` disables it, an object enables it
    /// with those options.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let Value::Object(entries) = serde_json::from_str::<Value>(json)? else {
            return Err(ConfigError::NotAnObject);
        };
        let mut config = Self::default();
        for (name, value) in entries {
            config.set(&name, value)?;
        }
        debug!(enabled = config.enabled_rules().len(), "resolved rules configuration");
        Ok(config)
    }

    /// Whether a rule that needs symbol resolution is enabled
    pub fn needs_semantic(&self) -> bool {
        self.jsx_no_method_ref.is_some() || self.react_pure_components_have_simple_attributes.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_recommended_set() {
        let config = RulesConfig::default();
        assert_eq!(
            config.enabled_rules(),
            vec![
                "jsx-alignment",
                "jsx-curly-brace-presence",
                "jsx-key",
                "jsx-no-bind",
                "jsx-no-lambda",
                "jsx-no-string-ref",
                "jsx-self-close",
                "jsx-space-before-trailing-slash",
                "jsx-whitespace-literal",
                "jsx-wrap-multiline",
                "no-access-state-in-setstate",
                "react-no-unnecessary-fragment",
            ]
        );
        assert!(RulesConfig::none().enabled_rules().is_empty());
        assert_eq!(RulesConfig::all().enabled_rules().len(), 35);
    }

    #[test]
    fn test_from_json() {
        let config = RulesConfig::from_json(
            r#"{
                "jsx-key": false,
                "jsx-curly-spacing": { "spacing": "never" },
                "jsx-sort-props": { "ignoreCase": true, "order": ["spread", "longhand"] },
                "jsx-no-multiline-js": true,
                "jsx-no-lambda": null
            }"#,
        )
        .unwrap();
        assert!(config.jsx_key.is_none());
        assert!(config.jsx_no_lambda.is_none());
        assert!(config.jsx_no_multiline_js.is_some());
        assert_eq!(
            config.jsx_curly_spacing.unwrap().config.spacing,
            Some(SpacingOption::Never)
        );
        let sort = config.jsx_sort_props.unwrap().config;
        assert!(sort.ignore_case);
        assert_eq!(sort.order, Some(vec![PropOrder::Spread, PropOrder::Longhand]));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RulesConfig::from_json(r#"{ "no-such-rule": true }"#),
            Err(ConfigError::UnknownRule(name)) if name == "no-such-rule"
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "jsx-curly-spacing": { "spacing": "sometimes" } }"#),
            Err(ConfigError::InvalidOptions { rule, .. }) if rule == "jsx-curly-spacing"
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "jsx-key": { "extra": 1 } }"#),
            Err(ConfigError::InvalidOptions { .. })
        ));
        assert!(matches!(
            RulesConfig::from_json(r#"{ "jsx-ban-elements": { "bans": [{ "pattern": "(" }] } }"#),
            Err(ConfigError::InvalidPattern { pattern, .. }) if pattern == "("
        ));
        assert!(matches!(RulesConfig::from_json("[]"), Err(ConfigError::NotAnObject)));
        assert!(matches!(RulesConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
