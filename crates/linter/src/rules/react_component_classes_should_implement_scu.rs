//! react-component-classes-should-implement-scu

use oxc_ast::ast::Class;

use crate::diagnostic::Diagnostic;
use crate::utils::{class_method_names, super_class_text};
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "React components extending React.Component should either implement shouldComponentUpdate() or extend PureComponent to avoid unnecessary renders (react-component-classes-should-implement-scu)";

/// react-component-classes-should-implement-scu rule
#[derive(Debug, Clone, Default)]
pub struct ReactComponentClassesShouldImplementScu;

impl RuleMeta for ReactComponentClassesShouldImplementScu {
    const NAME: &'static str = "react-component-classes-should-implement-scu";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Enforces that React component classes implement shouldComponentUpdate or extend PureComponent.";
}

impl ReactComponentClassesShouldImplementScu {
    pub fn new() -> Self {
        Self
    }

    /// Class declarations only; class expressions are not components here
    pub fn check(&self, ctx: &LintContext, class: &Class) -> Option<Diagnostic> {
        if !class.is_declaration() {
            return None;
        }
        if super_class_text(class, ctx.source_text())? != "React.Component" {
            return None;
        }
        let implements_scu = class_method_names(class)
            .iter()
            .any(|name| name.contains("shouldComponentUpdate"));
        (!implements_scu).then(|| Diagnostic::warning(Self::NAME, class.span, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_tsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_react_component_classes_should_implement_scu(
            ReactComponentClassesShouldImplementScu::new(),
        )
    }

    #[test]
    fn test_component_classes() {
        let source = r#"class A extends React.Component { render() { return null; } }
class B extends React.Component { shouldComponentUpdate() { return false; } }
class C extends React.PureComponent {}
class D {}"#;
        let diagnostics = lint_tsx(source, config());
        assert_eq!(
            texts(source, &diagnostics),
            vec!["class A extends React.Component { render() { return null; } }"]
        );
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_type_arguments_are_ignored() {
        let source = "class A extends React.Component<Props, State> {}";
        assert_eq!(lint_tsx(source, config()).len(), 1);
    }
}
