//! jsx-whitespace-literal
//!
//! `&nbsp;` in JSX text is better written as an explicit `{" "}`.

use oxc_ast::ast::JSXText;
use oxc_span::Span;

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, RuleCategory, RuleMeta};

const ENTITY: &str = "&nbsp;";
const MESSAGE: &str = "Expected '{\" \"}' instead of '&nbsp;' in JSX markup";

/// jsx-whitespace-literal rule
#[derive(Debug, Clone, Default)]
pub struct JsxWhitespaceLiteral;

impl RuleMeta for JsxWhitespaceLiteral {
    const NAME: &'static str = "jsx-whitespace-literal";
    const CATEGORY: RuleCategory = RuleCategory::Functionality;
    const DESCRIPTION: &'static str = "Warn if '&nbsp;' is used in JSX markup. Prefer {\" \"} over '&nbsp;'";
    const HAS_FIX: bool = true;
}

impl JsxWhitespaceLiteral {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, text: &JSXText) -> Vec<Diagnostic> {
        let raw = ctx.span_text(text.span);
        nbsp_runs(raw)
            .into_iter()
            .map(|(start, count)| {
                let start = text.span.start + start as u32;
                let span = Span::new(start, start + (count * ENTITY.len()) as u32);
                let spaces = " ".repeat(count);
                Diagnostic::warning(Self::NAME, span, MESSAGE)
                    .with_fix(Fix::new(span, format!("{{\"{}\"}}", spaces)))
            })
            .collect()
    }
}

/// `(offset, entity count)` of each run of adjacent `&nbsp;`
fn nbsp_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (offset, _) in text.match_indices(ENTITY) {
        match runs.last_mut() {
            Some((start, count)) if *start + *count * ENTITY.len() == offset => *count += 1,
            _ => runs.push((offset, 1)),
        }
    }
    runs
}
