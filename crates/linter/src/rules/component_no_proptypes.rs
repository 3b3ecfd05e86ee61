//! component-no-proptypes
//!
//! Forbid `propTypes`; TypeScript props interfaces do that job.

use oxc_span::Span;

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

/// component-no-proptypes rule
#[derive(Debug, Clone, Default)]
pub struct ComponentNoProptypes;

impl RuleMeta for ComponentNoProptypes {
    const NAME: &'static str = "component-no-proptypes";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str =
        "Forbids `propTypes` on components; use a TypeScript props interface instead.";
}

const MESSAGE: &str =
    "PropTypes are forbidden as TypeScript should manage type checking, not React";

impl ComponentNoProptypes {
    pub fn new() -> Self {
        Self
    }

    /// Check any identifier: references, bindings and property names alike
    pub fn check(&self, name: &str, span: Span) -> Option<Diagnostic> {
        (name == "propTypes").then(|| Diagnostic::warning(Self::NAME, span, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_tsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_component_no_proptypes(ComponentNoProptypes::new())
    }

    #[test]
    fn test_static_member_assignment() {
        let source = "Button.propTypes = { label: PropTypes.string };";
        let diagnostics = lint_tsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["propTypes"]);
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_class_property_and_binding() {
        let source = r#"
            class Button extends React.Component {
                static propTypes = {};
            }
            const propTypes = {};
        "#;
        assert_eq!(lint_tsx(source, config()).len(), 2);
    }

    #[test]
    fn test_unrelated_names_pass() {
        let source = "const props = { types: 1 }; Button.defaultProps = {};";
        assert!(lint_tsx(source, config()).is_empty());
    }
}
