//! Utility functions for React lint rules

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use oxc_ast::ast::{
    ClassElement, Class, Expression, JSXAttribute, JSXAttributeValue, MethodDefinitionKind,
    PropertyKey,
};
use oxc_span::{GetSpan, Span};

/// Type names that mark a stateless functional component
pub const SFC_TYPE_NAMES: &[&str] = &["React.SFC", "React.StatelessFunctionalComponent"];

/// Check a type name against [`SFC_TYPE_NAMES`]
pub fn is_sfc_type_name(name: &str) -> bool {
    SFC_TYPE_NAMES.contains(&name)
}

/// Static name of a property key (`a`, `"a"`), `None` for computed keys
pub fn property_key_name<'b>(key: &'b PropertyKey) -> Option<&'b str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Names of the methods declared on a class body
pub fn class_method_names<'b>(class: &'b Class) -> Vec<&'b str> {
    class
        .body
        .body
        .iter()
        .filter_map(|element| match element {
            ClassElement::MethodDefinition(method)
                if matches!(method.kind, MethodDefinitionKind::Method) =>
            {
                property_key_name(&method.key)
            }
            _ => None,
        })
        .collect()
}

/// Text of the class `extends` clause, without type arguments
pub fn super_class_text<'s>(class: &Class, source_text: &'s str) -> Option<&'s str> {
    let span = class.super_class.as_ref()?.span();
    source_text.get(span.start as usize..span.end as usize)
}

/// Where a `ref` attribute is given a string: the literal for `ref="x"`,
/// the container for `ref={"x"}` and `` ref={`x`} ``
pub fn string_ref_span(attr: &JSXAttribute) -> Option<Span> {
    match attr.value.as_ref()? {
        JSXAttributeValue::StringLiteral(lit) => Some(lit.span),
        JSXAttributeValue::ExpressionContainer(container) => {
            match container.expression.as_expression()? {
                Expression::StringLiteral(_) | Expression::TemplateLiteral(_) => {
                    Some(container.span)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn root_collator() -> Option<&'static CollatorBorrowed<'static>> {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| Collator::try_new(Default::default(), CollatorOptions::default()).ok())
        .as_ref()
}

/// Compare strings the way JavaScript's `localeCompare` does, with the ICU
/// root collation.
///
/// Punctuation and whitespace sort before digits, digits before letters,
/// letters compare case-insensitively first and lowercase wins a tie.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match root_collator() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
