//! jsx-prop-sorting

use std::cmp::Ordering;

use oxc_ast::ast::{TSInterfaceDeclaration, TSSignature};

use crate::diagnostic::Diagnostic;
use crate::utils::locale_compare;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "Prop names are not alphabetized";

/// jsx-prop-sorting rule
#[derive(Debug, Clone, Default)]
pub struct JsxPropSorting;

impl RuleMeta for JsxPropSorting {
    const NAME: &'static str = "jsx-prop-sorting";
    const CATEGORY: RuleCategory = RuleCategory::Maintainability;
    const DESCRIPTION: &'static str = "Checks if the props in an interface are alphabetized";
}

impl JsxPropSorting {
    pub fn new() -> Self {
        Self
    }

    /// Each property must sort after the last one that was in order
    pub fn check(&self, ctx: &LintContext, decl: &TSInterfaceDeclaration) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut previous = "";
        for member in &decl.body.body {
            let TSSignature::TSPropertySignature(prop) = member else {
                continue;
            };
            let current = ctx.span_text(prop.span);
            if locale_compare(current, previous) == Ordering::Greater {
                previous = current;
            } else {
                diagnostics.push(Diagnostic::warning(Self::NAME, prop.span, MESSAGE));
            }
        }
        diagnostics
    }
}
