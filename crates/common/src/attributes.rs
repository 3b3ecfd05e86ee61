//! JSX attribute and spread value extraction

use oxc_ast::ast::{
    Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName, JSXAttributeValue,
    JSXExpressionContainer, JSXOpeningElement, JSXSpreadAttribute, ObjectProperty, PropertyKind,
    StringLiteral,
};
use oxc_ast_visit::{walk, Visit};
use oxc_span::{GetSpan, Span};

/// Full attribute name, `ns:name` for namespaced attributes
pub fn attribute_name(attr: &JSXAttribute) -> String {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => ident.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

/// Span of the attribute name only
pub fn attribute_name_span(attr: &JSXAttribute) -> Span {
    attr.name.span()
}

/// Check the attribute name without allocating for plain identifiers
pub fn is_attribute_named(attr: &JSXAttribute, name: &str) -> bool {
    match &attr.name {
        JSXAttributeName::Identifier(ident) => ident.name == name,
        JSXAttributeName::NamespacedName(_) => attribute_name(attr) == name,
    }
}

/// Find an attribute by name on an opening element
pub fn find_attribute<'b, 'a>(
    opening: &'b JSXOpeningElement<'a>,
    name: &str,
) -> Option<&'b JSXAttribute<'a>> {
    opening.attributes.iter().find_map(|item| match item {
        JSXAttributeItem::Attribute(attr) if is_attribute_named(attr, name) => Some(&**attr),
        _ => None,
    })
}

/// The expression container of `attr={...}`, empty containers included
pub fn expression_container<'b, 'a>(
    attr: &'b JSXAttribute<'a>,
) -> Option<&'b JSXExpressionContainer<'a>> {
    match attr.value.as_ref()? {
        JSXAttributeValue::ExpressionContainer(container) => Some(&**container),
        _ => None,
    }
}

/// The expression of `attr={expr}`.
///
/// `None` for attributes without a value, string initializers and `attr={}`.
pub fn attribute_value_expression<'b, 'a>(
    attr: &'b JSXAttribute<'a>,
) -> Option<&'b Expression<'a>> {
    expression_container(attr)?.expression.as_expression()
}

/// The literal of `attr="..."`
pub fn string_initializer<'b, 'a>(attr: &'b JSXAttribute<'a>) -> Option<&'b StringLiteral<'a>> {
    match attr.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(&**lit),
        _ => None,
    }
}

struct PropertyValueFinder<F> {
    handler: F,
}

impl<'a, F> Visit<'a> for PropertyValueFinder<F>
where
    F: FnMut(&Expression<'a>),
{
    fn visit_object_property(&mut self, prop: &ObjectProperty<'a>) {
        if matches!(prop.kind, PropertyKind::Init) && !prop.method && !prop.shorthand {
            (self.handler)(&prop.value);
        } else {
            walk::walk_object_property(self, prop);
        }
    }
}

/// Hand every `key: value` property value found in a spread argument to `handler`.
///
/// `{...{a: fn, b: 1}}` yields `fn` then `1`. Shorthand properties, methods and
/// accessors are skipped, and a yielded value is not searched any further.
pub fn for_each_spread_value<'a, F>(spread: &JSXSpreadAttribute<'a>, handler: F)
where
    F: FnMut(&Expression<'a>),
{
    PropertyValueFinder { handler }.visit_expression(&spread.argument);
}

/// Attribute value or spread values of one attribute item.
///
/// The handler receives the owning attribute for `attr={expr}` and `None` for
/// values that come out of a spread.
pub fn for_each_attribute_value<'a, F>(item: &JSXAttributeItem<'a>, mut handler: F)
where
    F: FnMut(Option<&JSXAttribute<'a>>, &Expression<'a>),
{
    match item {
        JSXAttributeItem::Attribute(attr) => {
            if let Some(expr) = attribute_value_expression(attr) {
                handler(Some(&**attr), expr);
            }
        }
        JSXAttributeItem::SpreadAttribute(spread) => {
            for_each_spread_value(spread, |expr| handler(None, expr));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_ast::ast::Statement;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn with_opening(source: &str, f: impl FnOnce(&JSXOpeningElement)) {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
        assert!(ret.errors.is_empty());
        match ret.program.body.first() {
            Some(Statement::ExpressionStatement(stmt)) => match &stmt.expression {
                Expression::JSXElement(element) => f(&element.opening_element),
                _ => panic!("expected a JSX element"),
            },
            _ => panic!("expected an expression statement"),
        }
    }

    fn values(source: &str) -> Vec<String> {
        let mut found = Vec::new();
        with_opening(source, |opening| {
            for item in &opening.attributes {
                for_each_attribute_value(item, |_, expr| {
                    let span = expr.span();
                    found.push(source[span.start as usize..span.end as usize].to_string());
                });
            }
        });
        found
    }

    #[test]
    fn test_expression_value() {
        assert_eq!(values("<a onClick={handle} />"), vec!["handle"]);
    }

    #[test]
    fn test_no_expression_for_literal_or_bare() {
        assert!(values(r#"<a href="x" disabled />"#).is_empty());
    }

    #[test]
    fn test_string_initializer() {
        with_opening(r#"<a href="x" />"#, |opening| {
            let attr = find_attribute(opening, "href").expect("href");
            assert_eq!(string_initializer(attr).map(|s| s.value.as_str()), Some("x"));
            assert!(attribute_value_expression(attr).is_none());
        });
    }

    #[test]
    fn test_spread_values() {
        assert_eq!(values("<a {...{a: () => {}, b: 1}} />"), vec!["() => {}", "1"]);
    }

    #[test]
    fn test_spread_skips_shorthand_and_methods() {
        assert_eq!(values("<a {...{a, b() {}, get c() { return 1 }, d: 2}} />"), vec!["2"]);
    }

    #[test]
    fn test_spread_values_are_not_searched_again() {
        assert_eq!(values("<a {...{a: {b: 1}}} />"), vec!["{b: 1}"]);
    }

    #[test]
    fn test_spread_identifier_has_no_values() {
        assert!(values("<a {...props} />").is_empty());
    }

    #[test]
    fn test_namespaced_name() {
        with_opening("<a xlink:href={x} />", |opening| {
            let attr = find_attribute(opening, "xlink:href").expect("namespaced attribute");
            assert_eq!(attribute_name(attr), "xlink:href");
        });
    }
}
