//! jsx-no-method-ref
//!
//! Passing `obj.method` as a prop loses `this`. Needs a symbol resolver to
//! tell methods apart from plain properties.

use oxc_ast::ast::{
    Class, ClassElement, Expression, JSXAttributeItem, JSXOpeningElement, MethodDefinitionKind,
    ObjectPropertyKind, StaticMemberExpression,
};

use common::{attribute_value_expression, unwrap_parens};

use crate::diagnostic::Diagnostic;
use crate::type_info::{Declaration, TypeResolver};
use crate::utils::property_key_name;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Method references are forbidden in JSX attributes";

/// jsx-no-method-ref rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoMethodRef;

impl RuleMeta for JsxNoMethodRef {
    const NAME: &'static str = "jsx-no-method-ref";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Forbid method references in JSX attributes, as they lose `this`.";
    const REQUIRES_TYPE_INFO: bool = true;
}

impl JsxNoMethodRef {
    pub fn new() -> Self {
        Self
    }

    /// `this_methods` are the methods of the class enclosing the element, if any
    pub fn check<'a>(
        &self,
        opening: &JSXOpeningElement<'a>,
        resolver: &dyn TypeResolver<'a>,
        this_methods: &[&str],
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for item in &opening.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let Some(value) = attribute_value_expression(attr) else {
                continue;
            };
            let Expression::StaticMemberExpression(member) = unwrap_parens(value) else {
                continue;
            };
            if is_method_reference(member, resolver, this_methods) {
                diagnostics.push(Diagnostic::warning(Self::NAME, member.span, MESSAGE));
            }
        }
        diagnostics
    }
}

fn is_method_reference<'a>(
    member: &StaticMemberExpression<'a>,
    resolver: &dyn TypeResolver<'a>,
    this_methods: &[&str],
) -> bool {
    let name = member.property.name.as_str();
    match &member.object {
        Expression::ThisExpression(_) => this_methods.contains(&name),
        Expression::Identifier(ident) => match resolver.resolve_reference(ident) {
            Some(Declaration::Class(class)) => has_method(class, name, true),
            Some(Declaration::Variable(decl)) => match &decl.init {
                Some(Expression::NewExpression(new_expr)) => match &new_expr.callee {
                    Expression::Identifier(callee) => matches!(
                        resolver.resolve_reference(callee),
                        Some(Declaration::Class(class)) if has_method(class, name, false)
                    ),
                    _ => false,
                },
                Some(Expression::ObjectExpression(object)) => {
                    object.properties.iter().any(|prop| match prop {
                        ObjectPropertyKind::ObjectProperty(prop) => {
                            prop.method && property_key_name(&prop.key) == Some(name)
                        }
                        ObjectPropertyKind::SpreadProperty(_) => false,
                    })
                }
                _ => false,
            },
            _ => false,
        },
        _ => false,
    }
}

fn has_method(class: &Class, name: &str, is_static: bool) -> bool {
    class.body.body.iter().any(|element| match element {
        ClassElement::MethodDefinition(method) => {
            matches!(method.kind, MethodDefinitionKind::Method)
                && method.r#static == is_static
                && property_key_name(&method.key) == Some(name)
        }
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_typed, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_jsx_no_method_ref(JsxNoMethodRef::new())
    }

    #[test]
    fn test_this_methods() {
        let source = r#"
class Button extends React.Component {
    handleClick() {}
    handleArrow = () => {};
    render() {
        return <div a={this.handleClick} b={this.handleArrow} c={(this.handleClick)} />;
    }
}"#;
        let diagnostics = lint_typed(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["this.handleClick", "this.handleClick"]);
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_resolved_methods() {
        let source = r#"
class Store { static load() {} save() {} }
const store = new Store();
const handlers = { open() {}, close: () => {} };
const a = <div a={Store.load} b={store.save} c={handlers.open} d={handlers.close} e={store.missing} />;
"#;
        let diagnostics = lint_typed(source, config());
        assert_eq!(
            texts(source, &diagnostics),
            vec!["Store.load", "store.save", "handlers.open"]
        );
    }

    #[test]
    fn test_local_binding_shadows_module_binding() {
        let source = r#"
const handlers = { open() {} };
function render() {
    const handlers = { open: 1 };
    return <div a={handlers.open} />;
}
function other() {
    return <div a={handlers.open} />;
}
"#;
        let diagnostics = lint_typed(source, config());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].start as usize, source.rfind("handlers.open").unwrap());
    }
}
