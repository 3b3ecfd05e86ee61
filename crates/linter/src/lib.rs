//! React/TSX lint rules on the oxc AST
//!
//! This crate provides the tslint-react family of rules for oxc.
//! Rules can be used:
//! 1. Standalone, calling a rule's `check_*` methods on AST nodes
//! 2. Through [`LintRunner`], which runs every enabled rule in a single pass
//! 3. Through [`SemanticLintRunner`] for rules that resolve symbols

pub mod config;
pub mod rules;
pub mod semantic_visitor;
pub mod type_info;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;
#[cfg(test)]
mod test_utils;

use serde::Serialize;

pub use config::{ConfigError, RulesConfig};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use rules::*;
pub use semantic_visitor::{lint_with_semantic, SemanticLintRunner};
pub use type_info::{Declaration, SemanticTypeResolver, TypeResolver};
pub use visitor::{lint, lint_with_config, LintResult, LintRunner};

/// Rule category, following the tslint rule types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Rules that catch likely bugs or slow renders
    Functionality,
    /// Rules that keep components easy to read and change
    Maintainability,
    /// Formatting and layout of JSX
    Style,
    /// Rules that only make sense for TypeScript sources
    Typescript,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    const DESCRIPTION: &'static str;
    /// Whether the rule attaches fixes to its diagnostics
    const HAS_FIX: bool = false;
    /// Whether the rule needs symbol resolution to run
    const REQUIRES_TYPE_INFO: bool = false;
    const OPTION_EXAMPLES: &'static [&'static str] = &["true"];

    /// JSON schema of the rule options, `null` when the rule takes none
    fn options_schema() -> serde_json::Value {
        serde_json::Value::Null
    }

    /// URL to documentation
    fn docs_url() -> String {
        format!("https://github.com/palantir/tslint-react#{}", Self::NAME)
    }

    fn metadata() -> RuleMetadata {
        RuleMetadata {
            name: Self::NAME,
            category: Self::CATEGORY,
            description: Self::DESCRIPTION,
            has_fix: Self::HAS_FIX,
            requires_type_info: Self::REQUIRES_TYPE_INFO,
            option_examples: Self::OPTION_EXAMPLES,
            options: Self::options_schema(),
            docs_url: Self::docs_url(),
        }
    }
}

/// Static description of a rule, as exposed to hosts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMetadata {
    pub name: &'static str,
    pub category: RuleCategory,
    pub description: &'static str,
    pub has_fix: bool,
    pub requires_type_info: bool,
    pub option_examples: &'static [&'static str],
    pub options: serde_json::Value,
    pub docs_url: String,
}
