//! jsx-use-translation-function
//!
//! User-visible strings in JSX should come from a translation function.

use oxc_ast::ast::{
    Expression, JSXAttributeItem, JSXAttributeValue, JSXChild, JSXElement, JSXOpeningElement,
};
use phf::phf_set;

use common::{attribute_name, is_blank_text};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "No string literal in JSX. Use a translation function.";

/// Attributes whose text ends up in front of the user
static TRANSLATABLE_ATTRIBUTES: phf::Set<&'static str> = phf_set! {
    "placeholder",
    "title",
    "alt",
};

/// jsx-use-translation-function rule
#[derive(Debug, Clone, Default)]
pub struct JsxUseTranslationFunction;

impl RuleMeta for JsxUseTranslationFunction {
    const NAME: &'static str = "jsx-use-translation-function";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Enforces use of a translation function. Most plain string literals are disallowed in JSX when enabled.";
}

impl JsxUseTranslationFunction {
    pub fn new() -> Self {
        Self
    }

    /// Text children and `{"literal"}` children
    pub fn check_children(&self, element: &JSXElement) -> Vec<Diagnostic> {
        element
            .children
            .iter()
            .filter_map(|child| match child {
                JSXChild::Text(text) if !is_blank_text(child) => Some(text.span),
                JSXChild::ExpressionContainer(container)
                    if matches!(
                        container.expression.as_expression(),
                        Some(Expression::StringLiteral(_))
                    ) =>
                {
                    Some(container.span)
                }
                _ => None,
            })
            .map(|span| Diagnostic::warning(Self::NAME, span, MESSAGE))
            .collect()
    }

    /// `placeholder="..."`, `title={"..."}` and the like
    pub fn check_attributes(&self, opening: &JSXOpeningElement) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            if !TRANSLATABLE_ATTRIBUTES.contains(attribute_name(attr).as_str()) {
                continue;
            }
            let span = match &attr.value {
                Some(JSXAttributeValue::StringLiteral(lit)) => lit.span,
                Some(JSXAttributeValue::ExpressionContainer(container))
                    if matches!(
                        container.expression.as_expression(),
                        Some(Expression::StringLiteral(_))
                    ) =>
                {
                    container.span
                }
                _ => continue,
            };
            diagnostics.push(Diagnostic::warning(Self::NAME, span, MESSAGE));
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
        RulesConfig::none().with_jsx_use_translation_function(JsxUseTranslationFunction::new())
    }

    #[test]
    fn test_text_children() {
        let source = "<div>\n  Hello\n  {\"world\"}\n  {t('greeting')}\n  {`tpl`}\n</div>;";
        let diagnostics = lint_jsx(source, config());
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(texts(source, &diagnostics)[0].trim(), "Hello");
        assert_eq!(texts(source, &diagnostics)[1], "{\"world\"}");
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_translatable_attributes() {
        let source = r#"<input placeholder="Name" title={"Title"} alt={t("alt")} id="name" />;"#;
        let diagnostics = lint_jsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec![r#""Name""#, r#"{"Title"}"#]);
    }
}
