//! JSX element naming and shape helpers

use oxc_ast::ast::{JSXChild, JSXElement, JSXElementName, JSXMemberExpression, JSXMemberExpressionObject};
use phf::phf_set;

/// Tag names that render as a React fragment
pub static FRAGMENT_NAMES: phf::Set<&'static str> = phf_set! {
    "Fragment",
    "React.Fragment",
};

/// Get the tag name of a JSX element (`div`, `Foo.Bar`, `svg:rect`)
pub fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Identifier(id) => id.name.to_string(),
        JSXElementName::IdentifierReference(id) => id.name.to_string(),
        JSXElementName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
        JSXElementName::MemberExpression(member) => member_expression_name(member),
        JSXElementName::ThisExpression(_) => "this".to_string(),
    }
}

fn member_expression_name(member: &JSXMemberExpression) -> String {
    let object = match &member.object {
        JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
        JSXMemberExpressionObject::MemberExpression(m) => member_expression_name(m),
        JSXMemberExpressionObject::ThisExpression(_) => "this".to_string(),
    };
    format!("{}.{}", object, member.property.name)
}

/// Get the tag name of an element
pub fn tag_name(element: &JSXElement) -> String {
    element_name(&element.opening_element.name)
}

/// `<Fragment>` or `<React.Fragment>`
pub fn is_fragment_element(element: &JSXElement) -> bool {
    FRAGMENT_NAMES.contains(tag_name(element).as_str())
}

pub fn is_self_closing(element: &JSXElement) -> bool {
    element.closing_element.is_none()
}

/// Text made only of whitespace
pub fn is_blank_text(child: &JSXChild) -> bool {
    matches!(child, JSXChild::Text(text) if text.value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::{Expression, Statement};
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn name_of(source: &str) -> String {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        match ret.program.body.first() {
            Some(Statement::ExpressionStatement(stmt)) => match &stmt.expression {
                Expression::JSXElement(element) => tag_name(element),
                _ => panic!("expected a JSX element"),
            },
            _ => panic!("expected an expression statement"),
        }
    }

    #[test]
    fn test_element_names() {
        assert_eq!(name_of("<div />"), "div");
        assert_eq!(name_of("<Foo />"), "Foo");
        assert_eq!(name_of("<React.Fragment></React.Fragment>"), "React.Fragment");
        assert_eq!(name_of("<svg:rect />"), "svg:rect");
        assert_eq!(name_of("<this.Item />"), "this.Item");
    }
}
