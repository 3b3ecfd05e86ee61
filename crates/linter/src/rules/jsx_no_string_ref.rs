//! jsx-no-string-ref

use oxc_ast::ast::JSXOpeningElement;

use common::find_attribute;

use crate::diagnostic::Diagnostic;
use crate::utils::string_ref_span;
use crate::{RuleCategory, RuleMeta};

pub(crate) const STRING_REF_MESSAGE: &str = "Pass a callback to ref prop instead of a string literal";

/// jsx-no-string-ref rule
#[derive(Debug, Clone, Default)]
pub struct JsxNoStringRef;

impl RuleMeta for JsxNoStringRef {
    const NAME: &'static str = "jsx-no-string-ref";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Passing strings to the 'ref' prop of React elements is considered a legacy feature and will soon be deprecated. Instead, use a callback.";
}

impl JsxNoStringRef {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Option<Diagnostic> {
        let span = string_ref_span(find_attribute(opening, "ref")?)?;
        Some(Diagnostic::warning(Self::NAME, span, STRING_REF_MESSAGE))
    }
}
