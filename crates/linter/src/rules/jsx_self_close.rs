//! jsx-self-close

use oxc_ast::ast::JSXElement;
use oxc_span::Span;

use common::is_blank_text;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "JSX elements with no children must be self-closing";

/// jsx-self-close rule
#[derive(Debug, Clone, Default)]
pub struct JsxSelfClose;

impl RuleMeta for JsxSelfClose {
    const NAME: &'static str = "jsx-self-close";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Checks that JSX elements with no children are self-closing";
    const HAS_FIX: bool = true;
}

impl JsxSelfClose {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, element: &JSXElement) -> Option<Diagnostic> {
        let closing = element.closing_element.as_ref()?;
        let empty = match element.children.as_slice() {
            [] => true,
            [only] => is_blank_text(only),
            _ => false,
        };
        if !empty {
            return None;
        }
        // `>...</tag>` becomes ` />`
        let replaced = Span::new(element.opening_element.span.end - 1, closing.span.end);
        Some(Diagnostic::warning(Self::NAME, element.span, MESSAGE).with_fix(Fix::new(replaced, " />")))
    }
}
