//! react-pure-components-have-primitive-attributes
//!
//! Props of `React.SFC<{ ... }>` components should be primitives; object props
//! defeat shallow comparison.

use oxc_ast::ast::{TSSignature, TSType, TSTypeReference};
use oxc_span::GetSpan;

use crate::diagnostic::Diagnostic;
use crate::utils::is_sfc_type_name;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Pure React components with non-primitive properties may fail shouldComponentUpdate() checks, leading to excessive renders.";

/// react-pure-components-have-primitive-attributes rule
#[derive(Debug, Clone, Default)]
pub struct ReactPureComponentsHavePrimitiveAttributes;

impl RuleMeta for ReactPureComponentsHavePrimitiveAttributes {
    const NAME: &'static str = "react-pure-components-have-primitive-attributes";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Warns when a pure component has non-primitive properties.";
}

impl ReactPureComponentsHavePrimitiveAttributes {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, reference: &TSTypeReference) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if !is_sfc_type_name(ctx.span_text(reference.type_name.span())) {
            return diagnostics;
        }
        let Some(arguments) = &reference.type_arguments else {
            return diagnostics;
        };
        let [TSType::TSTypeLiteral(props)] = arguments.params.as_slice() else {
            return diagnostics;
        };
        for member in &props.members {
            let TSSignature::TSPropertySignature(prop) = member else {
                continue;
            };
            let Some(annotation) = &prop.type_annotation else {
                continue;
            };
            let ty = &annotation.type_annotation;
            if matches!(ty, TSType::TSTypeLiteral(_) | TSType::TSTypeReference(_)) {
                diagnostics.push(Diagnostic::warning(Self::NAME, ty.span(), MESSAGE));
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{lint_tsx, texts};
    use crate::RulesConfig;

    fn config() -> RulesConfig {
        RulesConfig::none().with_react_pure_components_have_primitive_attributes(
            ReactPureComponentsHavePrimitiveAttributes::new(),
        )
    }

    #[test]
    fn test_non_primitive_props() {
        let source = "const A: React.SFC<{ a: string; b: { c: number }; d: Date; e: number[] }> = () => null;";
        let diagnostics = lint_tsx(source, config());
        assert_eq!(texts(source, &diagnostics), vec!["{ c: number }", "Date"]);
        assert_eq!(diagnostics[0].message, MESSAGE);
    }

    #[test]
    fn test_other_types_ignored() {
        let source = "const A: React.FC<{ b: { c: number } }> = () => null;\nconst B: React.SFC<Props> = () => null;";
        assert!(lint_tsx(source, config()).is_empty());
    }
}
