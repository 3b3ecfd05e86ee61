//! jsx-named-prop-interface
//!
//! In TSX files, interfaces must be named after the component file: `Button.tsx`
//! declares `ButtonProps`.

use oxc_ast::ast::TSInterfaceDeclaration;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, RuleCategory, RuleMeta};

const MESSAGE: &str = "interface name must be ${componentName}Props";

/// jsx-named-prop-interface rule
#[derive(Debug, Clone, Default)]
pub struct JsxNamedPropInterface;

impl RuleMeta for JsxNamedPropInterface {
    const NAME: &'static str = "jsx-named-prop-interface";
    const CATEGORY: RuleCategory = RuleCategory::Maintainability;
    const DESCRIPTION: &'static str = "Enforce a consistent naming convention for prop type";
}

impl JsxNamedPropInterface {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, ctx: &LintContext, decl: &TSInterfaceDeclaration) -> Option<Diagnostic> {
        if !ctx.is_tsx() {
            return None;
        }
        let component = component_name(ctx.file_path()?);
        let expected = format!("{}Props", component);
        (decl.id.name.as_str() != expected)
            .then(|| Diagnostic::warning(Self::NAME, decl.span, MESSAGE))
    }
}

/// Last path segment with its first `?tsx` removed, `?` being any character
fn component_name(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    for (i, c) in file_name.char_indices() {
        let after = i + c.len_utf8();
        if file_name[after..].starts_with("tsx") {
            return format!("{}{}", &file_name[..i], &file_name[after + 3..]);
        }
    }
    file_name.to_string()
}
