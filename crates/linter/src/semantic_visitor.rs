//! Semantic-aware lint pass
//!
//! Runs the rules that need to know what a name refers to. Names are resolved
//! through [`SemanticTypeResolver`], which sits on oxc_semantic's symbol table.

use oxc_ast::ast::{Class, JSXOpeningElement, Program, TSTypeReference};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::Semantic;
use oxc_span::SourceType;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::RulesConfig;
use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::type_info::SemanticTypeResolver;
use crate::utils::class_method_names;
use crate::visitor::{LintResult, LintRunner};

/// Lint pass for the type-aware rules
pub struct SemanticLintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    resolver: Option<SemanticTypeResolver<'a>>,
    /// Method names of each enclosing class, innermost last
    class_methods: Vec<Vec<String>>,
    /// (rule, start, end) of every reported diagnostic
    reported: FxHashSet<(String, u32, u32)>,
}

impl<'a> SemanticLintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        let resolver = ctx.semantic().map(SemanticTypeResolver::new);
        Self {
            ctx,
            config,
            resolver,
            class_methods: Vec::new(),
            reported: FxHashSet::default(),
        }
    }

    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        if !self.config.needs_semantic() {
            return LintResult::default();
        }
        if self.resolver.is_none() {
            warn!("no semantic model available; type-aware rules skipped");
            return LintResult::default();
        }
        self.visit_program(program);
        let diagnostics = self.ctx.into_diagnostics();
        debug!(diagnostics = diagnostics.len(), "semantic lint pass finished");
        LintResult { diagnostics }
    }

    /// Report diagnostics, dropping any already reported by the same rule at
    /// the same span. A props type shared by several components is reported once.
    fn report_unique(&mut self, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            let key = (diagnostic.rule.clone(), diagnostic.start, diagnostic.end);
            if self.reported.insert(key) {
                self.ctx.report(diagnostic);
            }
        }
    }
}

impl<'a> Visit<'a> for SemanticLintRunner<'a> {
    fn visit_class(&mut self, class: &Class<'a>) {
        if let (Some(rule), Some(resolver)) = (
            &self.config.react_pure_components_have_simple_attributes,
            &self.resolver,
        ) {
            let diagnostics = rule.check_class(&self.ctx, class, resolver);
            self.report_unique(diagnostics);
        }
        self.class_methods.push(
            class_method_names(class)
                .into_iter()
                .map(str::to_string)
                .collect(),
        );
        walk::walk_class(self, class);
        self.class_methods.pop();
    }

    fn visit_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'a>) {
        if let (Some(rule), Some(resolver)) = (&self.config.jsx_no_method_ref, &self.resolver) {
            let this_methods: Vec<&str> = self
                .class_methods
                .last()
                .map(|names| names.iter().map(String::as_str).collect())
                .unwrap_or_default();
            let diagnostics = rule.check(opening, resolver, &this_methods);
            self.report_unique(diagnostics);
        }
        walk::walk_jsx_opening_element(self, opening);
    }

    fn visit_ts_type_reference(&mut self, reference: &TSTypeReference<'a>) {
        if let (Some(rule), Some(resolver)) = (
            &self.config.react_pure_components_have_simple_attributes,
            &self.resolver,
        ) {
            let diagnostics = rule.check_type_reference(&self.ctx, reference, resolver);
            self.report_unique(diagnostics);
        }
        walk::walk_ts_type_reference(self, reference);
    }
}

/// Run both passes, the type-aware rules resolving names through `semantic`
pub fn lint_with_semantic<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    semantic: &'a Semantic<'a>,
    config: RulesConfig,
) -> LintResult {
    let mut result = LintRunner::new(LintContext::new(source_text, source_type), config.clone())
        .run(program);
    let ctx = LintContext::new(source_text, source_type).with_semantic(semantic);
    result.merge(SemanticLintRunner::new(ctx, config).run(program));
    result
}
