//! no-string-ref
//!
//! Older name of jsx-no-string-ref, kept so existing configs keep working.

use oxc_ast::ast::JSXOpeningElement;

use common::find_attribute;

use super::jsx_no_string_ref::STRING_REF_MESSAGE;
use crate::diagnostic::Diagnostic;
use crate::utils::string_ref_span;
use crate::{RuleCategory, RuleMeta};

/// no-string-ref rule
#[derive(Debug, Clone, Default)]
pub struct NoStringRef;

impl RuleMeta for NoStringRef {
    const NAME: &'static str = "no-string-ref";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Using string literals in ref attributes is deprecated.";
}

impl NoStringRef {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, opening: &JSXOpeningElement) -> Option<Diagnostic> {
        let span = string_ref_span(find_attribute(opening, "ref")?)?;
        Some(Diagnostic::warning(Self::NAME, span, STRING_REF_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::lint_jsx;
    use crate::RulesConfig;

    #[test]
    fn test_reports_under_own_name() {
        let config = RulesConfig::none().with_no_string_ref(NoStringRef::new());
        let diagnostics = lint_jsx(r#"<a ref="x" />;"#, config);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "no-string-ref");
    }

    #[test]
    fn test_template_literal_refs() {
        let config = RulesConfig::none().with_no_string_ref(NoStringRef::new());
        let diagnostics = lint_jsx("<div><a ref={`plain`} /><b ref={`x${n}`} /></div>;", config);
        assert_eq!(diagnostics.len(), 2);
    }
}
