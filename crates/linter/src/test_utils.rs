//! Parse-and-lint helpers shared by the rule tests

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

use crate::{Diagnostic, LintContext, LintRunner, RulesConfig, SemanticLintRunner};

fn run(source: &str, source_type: SourceType, path: Option<&str>, config: RulesConfig) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    let mut ctx = LintContext::new(source, source_type);
    if let Some(path) = path {
        ctx = ctx.with_file_path(path);
    }
    LintRunner::new(ctx, config).run(&ret.program).diagnostics
}

pub fn lint_jsx(source: &str, config: RulesConfig) -> Vec<Diagnostic> {
    run(source, SourceType::jsx(), None, config)
}

pub fn lint_tsx(source: &str, config: RulesConfig) -> Vec<Diagnostic> {
    run(source, SourceType::tsx(), None, config)
}

pub fn lint_tsx_file(source: &str, path: &str, config: RulesConfig) -> Vec<Diagnostic> {
    run(source, SourceType::tsx(), Some(path), config)
}

/// Lint TSX with a semantic model, for the type-aware rules
pub fn lint_typed(source: &str, config: RulesConfig) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let source_type = SourceType::tsx();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    let semantic_ret = SemanticBuilder::new().build(&ret.program);
    let ctx = LintContext::new(source, source_type).with_semantic(&semantic_ret.semantic);
    SemanticLintRunner::new(ctx, config).run(&ret.program).diagnostics
}

/// Source text under each diagnostic
pub fn texts<'s>(source: &'s str, diagnostics: &[Diagnostic]) -> Vec<&'s str> {
    diagnostics
        .iter()
        .map(|d| &source[d.start as usize..d.end as usize])
        .collect()
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}
