//! Integration tests for jsx-linter rules

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, JSXElement, Program, Statement};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

use common::{descend_into, walk_expressions, Descend};
use jsx_linter::rules::{JsxNoLambda, JsxNoLambdaProps, JsxSelfClose, JsxSortProps};
use jsx_linter::{lint_with_config, LintContext, LintRunner, RulesConfig};

fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> Option<Program<'a>> {
    let ret = Parser::new(allocator, source, SourceType::tsx()).parse();
    if ret.errors.is_empty() {
        Some(ret.program)
    } else {
        None
    }
}

/// Expression of the first expression statement
fn first_expression<'b, 'a>(program: &'b Program<'a>) -> Option<&'b Expression<'a>> {
    match program.body.first()? {
        Statement::ExpressionStatement(stmt) => Some(&stmt.expression),
        _ => None,
    }
}

fn find_jsx_element<'b, 'a>(program: &'b Program<'a>) -> Option<&'b JSXElement<'a>> {
    match first_expression(program)? {
        Expression::JSXElement(element) => Some(element),
        _ => None,
    }
}

#[test]
fn test_jsx_no_lambda_fails_on_arrow() {
    let allocator = Allocator::default();
    let source = "<Button onClick={() => doThing()} />;";
    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostics = JsxNoLambda::new().check(&element.opening_element);

    assert_eq!(diagnostics.len(), 1);
    let text = &source[diagnostics[0].start as usize..diagnostics[0].end as usize];
    assert_eq!(text, "() => doThing()");
}

#[test]
fn test_jsx_no_lambda_passes_method_reference() {
    let allocator = Allocator::default();
    let source = "<Button onClick={this.handleClick} />;";
    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    assert!(JsxNoLambda::new().check(&element.opening_element).is_empty());
}

#[test]
fn test_jsx_sort_props_reports_first_unsorted_key() {
    let allocator = Allocator::default();
    let source = r#"<Foo b="2" a="1" />;"#;
    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostic = JsxSortProps::new()
        .check(&element.opening_element)
        .expect("should report");

    assert_eq!(&source[diagnostic.start as usize..diagnostic.end as usize], "a");
    assert_eq!(diagnostic.message, "The key 'a' is not sorted alphabetically");
}

#[test]
fn test_spread_object_values_are_inspected() {
    let allocator = Allocator::default();
    let source = "<Foo {...{a: () => {}, b: 1}} />;";
    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostics = JsxNoLambdaProps::new().check(&element.opening_element);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(&source[diagnostics[0].start as usize..diagnostics[0].end as usize], "() => {}");
}

#[test]
fn test_self_close_fix() {
    let allocator = Allocator::default();
    let source = "<div className=\"a\"></div>;";
    let program = parse(&allocator, source).expect("should parse");
    let element = find_jsx_element(&program).expect("should find element");

    let diagnostic = JsxSelfClose::new().check(element).expect("should report");
    let fix = &diagnostic.fixes[0];
    let fixed = format!(
        "{}{}{}",
        &source[..fix.start as usize],
        fix.replacement,
        &source[fix.end as usize..]
    );
    assert_eq!(fixed, "<div className=\"a\" />;");
}

#[test]
fn test_walking_twice_visits_same_nodes() {
    let allocator = Allocator::default();
    let source = "f(a, () => [b, c && d], e.g);";
    let program = parse(&allocator, source).expect("should parse");
    let root = first_expression(&program).expect("should find expression");

    let collect = || {
        let mut spans = Vec::new();
        walk_expressions(root, |expr| {
            spans.push(expr.span());
            Descend::Into
        });
        spans
    };
    let first = collect();
    assert!(first.len() > 5);
    assert_eq!(first, collect());
    assert_eq!(first[0], root.span());
}

#[test]
fn test_descent_prunes_at_match() {
    let allocator = Allocator::default();
    let source = "f(() => () => 1, function () { return () => 2; });";
    let program = parse(&allocator, source).expect("should parse");
    let root = first_expression(&program).expect("should find expression");

    let mut matched = Vec::new();
    descend_into(root, common::is_function_like, |expr| {
        matched.push(&source[expr.span().start as usize..expr.span().end as usize]);
    });

    assert_eq!(
        matched,
        vec!["() => () => 1", "function () { return () => 2; }"]
    );
}

#[test]
fn test_runner_with_custom_config() {
    let allocator = Allocator::default();
    let source = r#"const el = <Foo b="2" a="1" onClick={() => go()} />;"#;
    let program = parse(&allocator, source).expect("should parse");
    let config = RulesConfig::none()
        .with_jsx_no_lambda(JsxNoLambda::new())
        .with_jsx_sort_props(JsxSortProps::new());

    let result = lint_with_config(source, SourceType::tsx(), &program, config);
    let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["jsx-no-lambda", "jsx-sort-props"]);
}

#[test]
fn test_runner_from_json_config() {
    let allocator = Allocator::default();
    let source = "const el = <div onClick={() => go()}></div>;";
    let program = parse(&allocator, source).expect("should parse");
    let config = RulesConfig::from_json(r#"{ "jsx-self-close": false }"#).expect("valid config");

    let ctx = LintContext::new(source, SourceType::tsx());
    let result = LintRunner::new(ctx, config).run(&program);
    let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules, vec!["jsx-no-lambda"]);
}
