//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! `LintRunner` traverses the AST once and hands each node to the enabled
//! rules interested in its kind. Rules that need symbol resolution are left to
//! [`crate::SemanticLintRunner`] and never run here.

use oxc_ast::ast::{
    ArrayExpression, BindingIdentifier, CallExpression, Class, IdentifierName,
    IdentifierReference, JSXChild, JSXElement, JSXExpressionContainer, JSXFragment,
    JSXIdentifier, JSXOpeningElement, JSXSpreadAttribute, JSXSpreadChild, JSXText, Program,
    TSInterfaceDeclaration, TSTypeReference,
};
use oxc_ast::AstKind;
use oxc_ast_visit::{walk, Visit};
use oxc_span::{SourceType, Span};
use tracing::debug;

use crate::config::RulesConfig;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::rules::ElementPosition;

/// Syntactic lint pass
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
    /// Kinds of the nodes enclosing the current one, innermost last
    ancestors: Vec<AstKind<'a>>,
    /// Set when the next element visited is a child of another element
    jsx_child: bool,
    /// Whether the children being walked belong to an element, not a fragment
    element_children: bool,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self {
            ctx,
            config,
            ancestors: Vec::new(),
            jsx_child: false,
            element_children: false,
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        debug!(rules = self.config.enabled_rules().len(), "running lint pass");
        self.ctx.set_comments(program.comments.iter().map(|comment| comment.span));
        self.visit_program(program);
        let diagnostics = self.ctx.into_diagnostics();
        debug!(diagnostics = diagnostics.len(), "lint pass finished");
        LintResult { diagnostics }
    }

    fn parent(&self) -> Option<&AstKind<'a>> {
        self.ancestors.last()
    }

    /// Check a JSX element with all applicable rules
    fn check_jsx_element(&mut self, element: &JSXElement<'a>, position: ElementPosition) {
        let ctx = &mut self.ctx;
        let config = &self.config;

        if let Some(rule) = &config.jsx_alignment {
            let diagnostics = rule.check(ctx, element);
            ctx.extend(diagnostics);
        }
        if let Some(rule) = &config.jsx_self_close {
            ctx.extend(rule.check(element));
        }
        if let Some(rule) = &config.jsx_space_before_trailing_slash {
            let diagnostic = rule.check(ctx, element);
            ctx.extend(diagnostic);
        }
        if let Some(rule) = &config.jsx_prefer_fragment {
            ctx.extend(rule.check(element));
        }
        if let Some(rule) = &config.react_no_unnecessary_fragment {
            ctx.extend(rule.check_element(element));
        }
        if let Some(rule) = &config.jsx_use_translation_function {
            ctx.extend(rule.check_children(element));
        }
        if let Some(rule) = &config.jsx_wrap_mulitlines {
            let diagnostic = rule.check(ctx, element, position);
            ctx.extend(diagnostic);
        }
        if let Some(rule) = &config.jsx_wrap_multiline {
            let diagnostics = rule.check(ctx, element, position);
            ctx.extend(diagnostics);
        }
    }

    /// Check a JSX opening element with all applicable rules
    fn check_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'a>) {
        let ctx = &mut self.ctx;
        let config = &self.config;

        if let Some(rule) = &config.jsx_ban_elements {
            let diagnostic = rule.check(ctx, opening);
            ctx.extend(diagnostic);
        }
        if let Some(rule) = &config.jsx_ban_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_boolean_value {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_curly_brace_presence {
            let diagnostics = rule.check(ctx, opening);
            ctx.extend(diagnostics);
        }
        if let Some(rule) = &config.jsx_equals_spacing {
            let diagnostics = rule.check(ctx, opening);
            ctx.extend(diagnostics);
        }
        if let Some(rule) = &config.jsx_no_array_literal_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_no_bind {
            let diagnostics = rule.check(ctx, opening);
            ctx.extend(diagnostics);
        }
        if let Some(rule) = &config.jsx_no_bind_props {
            let diagnostics = rule.check(ctx, opening);
            ctx.extend(diagnostics);
        }
        if let Some(rule) = &config.jsx_no_jsx_literal_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_no_lambda {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_no_lambda_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_no_object_literal_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_no_string_ref {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.no_string_ref {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_sort_props {
            ctx.extend(rule.check(opening));
        }
        if let Some(rule) = &config.jsx_use_translation_function {
            ctx.extend(rule.check_attributes(opening));
        }
    }

    fn check_identifier(&mut self, name: &str, span: Span) {
        if let Some(rule) = &self.config.component_no_proptypes {
            self.ctx.extend(rule.check(name, span));
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        self.ancestors.push(kind);
    }

    fn leave_node(&mut self, _kind: AstKind<'a>) {
        self.ancestors.pop();
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        let position = if std::mem::take(&mut self.jsx_child) {
            ElementPosition::JsxChild
        } else {
            match self.parent() {
                Some(AstKind::ParenthesizedExpression(paren)) => {
                    ElementPosition::Parenthesized(paren.span)
                }
                _ => ElementPosition::Other,
            }
        };
        self.check_jsx_element(element, position);
        let outer = std::mem::replace(&mut self.element_children, true);
        walk::walk_jsx_element(self, element);
        self.element_children = outer;
    }

    fn visit_jsx_child(&mut self, child: &JSXChild<'a>) {
        self.jsx_child = self.element_children && matches!(child, JSXChild::Element(_));
        walk::walk_jsx_child(self, child);
        self.jsx_child = false;
    }

    fn visit_jsx_opening_element(&mut self, opening: &JSXOpeningElement<'a>) {
        self.check_jsx_opening_element(opening);
        walk::walk_jsx_opening_element(self, opening);
    }

    fn visit_jsx_fragment(&mut self, fragment: &JSXFragment<'a>) {
        if let Some(rule) = &self.config.react_no_unnecessary_fragment {
            self.ctx.extend(rule.check_fragment(fragment));
        }
        let outer = std::mem::replace(&mut self.element_children, false);
        walk::walk_jsx_fragment(self, fragment);
        self.element_children = outer;
    }

    fn visit_jsx_expression_container(&mut self, container: &JSXExpressionContainer<'a>) {
        if let Some(rule) = &self.config.jsx_curly_spacing {
            let diagnostics = rule.check_container(&self.ctx, container);
            self.ctx.extend(diagnostics);
        }
        if let Some(rule) = &self.config.jsx_no_multiline_js {
            let diagnostic = rule.check(&self.ctx, container);
            self.ctx.extend(diagnostic);
        }
        walk::walk_jsx_expression_container(self, container);
    }

    fn visit_jsx_spread_attribute(&mut self, spread: &JSXSpreadAttribute<'a>) {
        if let Some(rule) = &self.config.jsx_curly_spacing {
            let diagnostics = rule.check_spread(&self.ctx, spread.span, &spread.argument);
            self.ctx.extend(diagnostics);
        }
        walk::walk_jsx_spread_attribute(self, spread);
    }

    fn visit_jsx_spread_child(&mut self, spread: &JSXSpreadChild<'a>) {
        if let Some(rule) = &self.config.jsx_curly_spacing {
            let diagnostics = rule.check_spread(&self.ctx, spread.span, &spread.expression);
            self.ctx.extend(diagnostics);
        }
        walk::walk_jsx_spread_child(self, spread);
    }

    fn visit_jsx_text(&mut self, text: &JSXText<'a>) {
        if let Some(rule) = &self.config.jsx_whitespace_literal {
            let diagnostics = rule.check(&self.ctx, text);
            self.ctx.extend(diagnostics);
        }
        walk::walk_jsx_text(self, text);
    }

    fn visit_array_expression(&mut self, array: &ArrayExpression<'a>) {
        if let Some(rule) = &self.config.jsx_key {
            self.ctx.extend(rule.check_array(array));
        }
        walk::walk_array_expression(self, array);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if let Some(rule) = &self.config.jsx_key {
            self.ctx.extend(rule.check_map_call(call));
        }
        if let Some(rule) = &self.config.no_access_state_in_setstate {
            let diagnostic = rule.check(&self.ctx, call);
            self.ctx.extend(diagnostic);
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_class(&mut self, class: &Class<'a>) {
        if let Some(rule) = &self.config.react_component_classes_should_implement_scu {
            let diagnostic = rule.check(&self.ctx, class);
            self.ctx.extend(diagnostic);
        }
        walk::walk_class(self, class);
    }

    fn visit_ts_interface_declaration(&mut self, decl: &TSInterfaceDeclaration<'a>) {
        if let Some(rule) = &self.config.jsx_named_prop_interface {
            let diagnostic = rule.check(&self.ctx, decl);
            self.ctx.extend(diagnostic);
        }
        if let Some(rule) = &self.config.jsx_prop_sorting {
            let diagnostics = rule.check(&self.ctx, decl);
            self.ctx.extend(diagnostics);
        }
        walk::walk_ts_interface_declaration(self, decl);
    }

    fn visit_ts_type_reference(&mut self, reference: &TSTypeReference<'a>) {
        if let Some(rule) = &self.config.react_pure_components_have_primitive_attributes {
            let diagnostics = rule.check(&self.ctx, reference);
            self.ctx.extend(diagnostics);
        }
        walk::walk_ts_type_reference(self, reference);
    }

    fn visit_identifier_name(&mut self, ident: &IdentifierName<'a>) {
        self.check_identifier(&ident.name, ident.span);
        walk::walk_identifier_name(self, ident);
    }

    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        self.check_identifier(&ident.name, ident.span);
        walk::walk_identifier_reference(self, ident);
    }

    fn visit_binding_identifier(&mut self, ident: &BindingIdentifier<'a>) {
        self.check_identifier(&ident.name, ident.span);
        walk::walk_binding_identifier(self, ident);
    }

    fn visit_jsx_identifier(&mut self, ident: &JSXIdentifier<'a>) {
        self.check_identifier(&ident.name, ident.span);
        walk::walk_jsx_identifier(self, ident);
    }
}

/// Result of running the linter
#[derive(Debug, Default, serde::Serialize)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    /// Append another pass's diagnostics, keeping source order
    pub fn merge(&mut self, other: LintResult) {
        self.diagnostics.extend(other.diagnostics);
        self.diagnostics.sort_by_key(|d| d.start);
    }
}

/// Convenience function to lint a TSX program with the recommended rules
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::tsx());
    LintRunner::new(ctx, RulesConfig::default()).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    use crate::rules::{JsxNoLambda, JsxSortProps, JsxWrapMultiline};

    fn parse_and_lint(source: &str) -> LintResult {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        lint(source, &ret.program)
    }

    fn parse_and_lint_with_config(source: &str, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::tsx();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint_with_config(source, source_type, &ret.program, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint(r#"const a = <div className="foo" />;"#);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_recommended_rules() {
        let result = parse_and_lint("const a = <div onClick={() => go()}></div>;");
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(rules, vec!["jsx-self-close", "jsx-no-lambda"]);
    }

    #[test]
    fn test_lint_with_disabled_rules() {
        let config = RulesConfig::none().with_jsx_no_lambda(JsxNoLambda::new());
        let result = parse_and_lint_with_config("const a = <div onClick={() => go()}></div>;", config);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, "jsx-no-lambda");
    }

    #[test]
    fn test_nested_elements_checked_independently() {
        let config = RulesConfig::none().with_jsx_sort_props(JsxSortProps::new());
        let result = parse_and_lint_with_config(
            r#"const a = <A b="1" a="2" icon={<B d="1" c="2" />} />;"#,
            config,
        );
        assert_eq!(result.diagnostics.len(), 2);
    }

    #[test]
    fn test_multiline_child_of_fragment_is_not_exempt() {
        let config = RulesConfig::none().with_jsx_wrap_multiline(JsxWrapMultiline::new());
        let source = "const a = (\n  <>\n    <div>\n    </div>\n  </>\n);";
        let result = parse_and_lint_with_config(source, config.clone());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].start as usize, source.find("<div>").unwrap());

        let source = "const a = (\n  <p>\n    <div>\n    </div>\n  </p>\n);";
        let result = parse_and_lint_with_config(source, config);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_result_counts() {
        let result = parse_and_lint("const a = <div onClick={() => go()} />;");
        assert!(result.has_warnings());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_merge_keeps_source_order() {
        let mut first = LintResult {
            diagnostics: vec![Diagnostic::warning("a", Span::new(10, 12), "late")],
        };
        first.merge(LintResult {
            diagnostics: vec![Diagnostic::warning("b", Span::new(2, 4), "early")],
        });
        assert_eq!(first.diagnostics[0].message, "early");
    }
}
