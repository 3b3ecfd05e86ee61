//! react-no-unnecessary-fragment
//!
//! A fragment around zero or one child does nothing.

use oxc_ast::ast::{JSXChild, JSXElement, JSXFragment};
use oxc_span::Span;

use common::{is_blank_text, is_fragment_element};

use crate::diagnostic::Diagnostic;
use crate::{RuleCategory, RuleMeta};

const MESSAGE: &str = "Unnecessary Fragment are forbidden";

/// react-no-unnecessary-fragment rule
#[derive(Debug, Clone, Default)]
pub struct ReactNoUnnecessaryFragment;

impl RuleMeta for ReactNoUnnecessaryFragment {
    const NAME: &'static str = "react-no-unnecessary-fragment";
    const CATEGORY: RuleCategory = RuleCategory::Style;
    const DESCRIPTION: &'static str = "Warn if unnecessary fragment is used";
}

impl ReactNoUnnecessaryFragment {
    pub fn new() -> Self {
        Self
    }

    /// `<>...</>`
    pub fn check_fragment(&self, fragment: &JSXFragment) -> Option<Diagnostic> {
        self.check_children(fragment.span, &fragment.children)
    }

    /// `<Fragment>...</Fragment>`, `<React.Fragment />`
    pub fn check_element(&self, element: &JSXElement) -> Option<Diagnostic> {
        if !is_fragment_element(element) {
            return None;
        }
        if element.closing_element.is_none() {
            return Some(Diagnostic::warning(Self::NAME, element.span, MESSAGE));
        }
        self.check_children(element.span, &element.children)
    }

    fn check_children(&self, span: Span, children: &[JSXChild]) -> Option<Diagnostic> {
        let meaningful = children.iter().filter(|child| !is_blank_text(child)).take(2).count();
        (meaningful <= 1).then(|| Diagnostic::warning(Self::NAME, span, MESSAGE))
    }
}
