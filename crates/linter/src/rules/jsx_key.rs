//! jsx-key
//!
//! Elements built in array literals or returned from `.map()` callbacks need a `key`.

use oxc_ast::ast::{
    Argument, ArrayExpression, ArrayExpressionElement, CallExpression, Expression, FunctionBody,
    JSXAttributeItem, JSXElement, ObjectPropertyKind, PropertyKey, Statement,
};

use common::{find_attribute, unwrap_parens};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Missing \"key\" prop for element.";

/// jsx-key rule
#[derive(Debug, Clone, Default)]
pub struct JsxKey;

impl RuleMeta for JsxKey {
    const NAME: &'static str = "jsx-key";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Warn if an element that likely requires a key prop, namely one present in an array literal or an arrow function expression.";
}

impl JsxKey {
    pub fn new() -> Self {
        Self
    }

    /// `[<a />, <b key="b" />]`
    pub fn check_array(&self, array: &ArrayExpression) -> Vec<Diagnostic> {
        array
            .elements
            .iter()
            .filter_map(|element| match element {
                ArrayExpressionElement::JSXElement(element) => self.check_element(element),
                _ => None,
            })
            .collect()
    }

    /// `items.map(item => <li />)`
    pub fn check_map_call(&self, call: &CallExpression) -> Option<Diagnostic> {
        let Expression::StaticMemberExpression(member) = &call.callee else {
            return None;
        };
        if member.property.name != "map" {
            return None;
        }
        let returned = match call.arguments.first()? {
            Argument::ArrowFunctionExpression(arrow) if arrow.expression => {
                match arrow.body.statements.first()? {
                    Statement::ExpressionStatement(stmt) => Some(&stmt.expression),
                    _ => None,
                }
            }
            Argument::ArrowFunctionExpression(arrow) => first_return(&arrow.body),
            Argument::FunctionExpression(func) => first_return(func.body.as_ref()?),
            _ => None,
        }?;
        match unwrap_parens(returned) {
            Expression::JSXElement(element) => self.check_element(element),
            _ => None,
        }
    }

    fn check_element(&self, element: &JSXElement) -> Option<Diagnostic> {
        let opening = &element.opening_element;
        if find_attribute(opening, "key").is_some() || has_key_spread(&opening.attributes) {
            return None;
        }
        Some(Diagnostic::warning(Self::NAME, element.span, MESSAGE))
    }
}

fn first_return<'b, 'a>(body: &'b FunctionBody<'a>) -> Option<&'b Expression<'a>> {
    body.statements.iter().find_map(|stmt| match stmt {
        Statement::ReturnStatement(ret) => Some(ret.argument.as_ref()),
        _ => None,
    })?
}

/// `{...{ key: id }}`
fn has_key_spread(attributes: &[JSXAttributeItem]) -> bool {
    attributes.iter().any(|item| {
        let JSXAttributeItem::SpreadAttribute(spread) = item else {
            return false;
        };
        let Expression::ObjectExpression(object) = &spread.argument else {
            return false;
        };
        object.properties.iter().any(|prop| {
            matches!(
                prop,
                ObjectPropertyKind::ObjectProperty(prop)
                    if matches!(&prop.key, PropertyKey::StaticIdentifier(id) if id.name == "key")
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_jsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_jsx_key(JsxKey::new())
    }

    #[test]
    fn test_array_literal() {
        let source = r#"const a = [<li />, <li key="b" />, <li {...{ key: 1 }} />, (<li>c</li>)];"#;
        let diagnostics = lint_jsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["<li />"]);
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_map_callbacks() {
        let source = r#"
            a.map(x => <li>{x}</li>);
            b.map(x => (<li />));
            c.map(function (x) { const y = x; return (<p />); });
            d.map(x => <li key={x} />);
            e.map(x => { if (x) { return <i />; } });
        "#;
        let diagnostics = lint_jsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["<li>{x}</li>", "<li />", "<p />"]);
    }

    #[test]
    fn test_spread_of_identifier_does_not_count() {
        let source = "items.map(x => <li {...props} />);";
        assert_eq!(lint_jsx(source, config()).len(), 1);
    }
}
