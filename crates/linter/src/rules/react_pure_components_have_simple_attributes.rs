//! react-pure-components-have-simple-attributes
//!
//! Pure components (`React.SFC<P>`, `React.PureComponent<P>`) should not take
//! object-typed props. Referenced prop types are resolved to their interface
//! or type alias.

use oxc_ast::ast::{Class, TSSignature, TSType, TSTypeName, TSTypeReference};
use oxc_span::GetSpan;

use crate::diagnostic::Diagnostic;
use crate::type_info::{Declaration, TypeResolver};
use crate::utils::{is_sfc_type_name, super_class_text};
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Pure React components with complex properties, such as objects, may fail shouldComponentUpdate() checks, leading to excessive renders.";

/// react-pure-components-have-simple-attributes rule
#[derive(Debug, Clone, Default)]
pub struct ReactPureComponentsHaveSimpleAttributes;

impl RuleMeta for ReactPureComponentsHaveSimpleAttributes {
    const NAME: &'static str = "react-pure-components-have-simple-attributes";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Warns when a pure component has complex properties.";
    const REQUIRES_TYPE_INFO: bool = true;
}

impl ReactPureComponentsHaveSimpleAttributes {
    pub fn new() -> Self {
        Self
    }

    /// `React.SFC<Props>`
    pub fn check_type_reference<'a>(
        &self,
        ctx: &LintContext,
        reference: &TSTypeReference<'a>,
        resolver: &dyn TypeResolver<'a>,
    ) -> Vec<Diagnostic> {
        if !is_sfc_type_name(ctx.span_text(reference.type_name.span())) {
            return Vec::new();
        }
        match reference.type_arguments.as_ref().and_then(|args| args.params.first()) {
            Some(props) => self.inspect_props(props, resolver),
            None => Vec::new(),
        }
    }

    /// `class A extends React.PureComponent<Props>`
    pub fn check_class<'a>(
        &self,
        ctx: &LintContext,
        class: &Class<'a>,
        resolver: &dyn TypeResolver<'a>,
    ) -> Vec<Diagnostic> {
        if super_class_text(class, ctx.source_text()) != Some("React.PureComponent") {
            return Vec::new();
        }
        match class.super_type_arguments.as_ref().and_then(|args| args.params.first()) {
            Some(props) => self.inspect_props(props, resolver),
            None => Vec::new(),
        }
    }

    fn inspect_props<'a>(&self, props: &TSType<'a>, resolver: &dyn TypeResolver<'a>) -> Vec<Diagnostic> {
        match props {
            TSType::TSTypeLiteral(literal) => self.inspect_members(&literal.members, resolver),
            TSType::TSTypeReference(reference) => match resolve_reference(reference, resolver) {
                Some(Declaration::Interface(decl)) => self.inspect_members(&decl.body.body, resolver),
                Some(Declaration::TypeAlias(alias)) => match &alias.type_annotation {
                    TSType::TSTypeLiteral(literal) => {
                        self.inspect_members(&literal.members, resolver)
                    }
                    _ => Vec::new(),
                },
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn inspect_members<'a>(
        &self,
        members: &[TSSignature<'a>],
        resolver: &dyn TypeResolver<'a>,
    ) -> Vec<Diagnostic> {
        members
            .iter()
            .filter_map(|member| match member {
                TSSignature::TSPropertySignature(prop) => prop.type_annotation.as_ref(),
                _ => None,
            })
            .map(|annotation| &annotation.type_annotation)
            .filter(|ty| is_complex_type(ty, resolver))
            .map(|ty| Diagnostic::warning(Self::NAME, ty.span(), MESSAGE))
            .collect()
    }
}

fn resolve_reference<'a>(
    reference: &TSTypeReference<'a>,
    resolver: &dyn TypeResolver<'a>,
) -> Option<Declaration<'a>> {
    match &reference.type_name {
        TSTypeName::IdentifierReference(ident) => resolver.resolve_reference(ident),
        _ => None,
    }
}

/// Object type literals and references to interfaces; enums stay simple
fn is_complex_type<'a>(ty: &TSType<'a>, resolver: &dyn TypeResolver<'a>) -> bool {
    match ty {
        TSType::TSTypeLiteral(_) => true,
        TSType::TSTypeReference(reference) => {
            matches!(resolve_reference(reference, resolver), Some(Declaration::Interface(_)))
        }
        _ => false,
    }
}
