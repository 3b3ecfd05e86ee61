//! JSX lint rules on OXC
//!
//! Lints React JSX/TSX sources with the tslint-react rule set, on the oxc
//! parser and semantic model.
//!
//! ## Usage
//!
//! ```rust
//! use jsx_lint_oxc::lint_source;
//!
//! let source = r#"const a = <button onClick={() => go()} />;"#;
//! let result = lint_source(source, "app.tsx").unwrap();
//! assert_eq!(result.diagnostics[0].rule, "jsx-no-lambda");
//! ```

pub use jsx_linter::{ConfigError, Diagnostic, DiagnosticSeverity, Fix, LintResult, RulesConfig};

#[cfg(feature = "napi")]
use napi_derive::napi;

use jsx_linter::{LintContext, LintRunner, SemanticLintRunner};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use tracing::debug;

/// Errors that stop a file from being linted
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to parse {filename}: {message}")]
    Parse { filename: String, message: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result of a lint call exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsLintResult {
    /// Diagnostics serialized as a JSON array
    pub diagnostics: String,
    pub error_count: u32,
    pub warning_count: u32,
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used to pick JSX or TSX parsing
    /// @default "input.tsx"
    pub filename: Option<String>,

    /// Rules configuration as a JSON object keyed by rule name
    /// @default the recommended rule set
    pub rules: Option<String>,
}

/// Lint JSX source code
#[cfg(feature = "napi")]
#[napi]
pub fn lint_jsx(source: String, options: Option<JsLintOptions>) -> napi::Result<JsLintResult> {
    let js_options = options.unwrap_or_default();
    let filename = js_options.filename.as_deref().unwrap_or("input.tsx");

    let to_napi = |err: LintError| napi::Error::from_reason(err.to_string());
    let config = match js_options.rules.as_deref() {
        Some(json) => RulesConfig::from_json(json)
            .map_err(LintError::from)
            .map_err(to_napi)?,
        None => RulesConfig::default(),
    };
    let result = lint_source_with_config(&source, filename, config).map_err(to_napi)?;

    Ok(JsLintResult {
        diagnostics: serde_json::to_string(&result.diagnostics)
            .map_err(|err| napi::Error::from_reason(err.to_string()))?,
        error_count: result.error_count() as u32,
        warning_count: result.warning_count() as u32,
    })
}

/// Lint a source file with the recommended rules
pub fn lint_source(source: &str, filename: &str) -> Result<LintResult, LintError> {
    lint_source_with_config(source, filename, RulesConfig::default())
}

/// Lint a source file with the given rules.
///
/// The file name picks the dialect (`.jsx`, `.tsx`, ...) and is handed to
/// rules that look at it. A semantic model is only built when a type-aware
/// rule is enabled.
pub fn lint_source_with_config(
    source: &str,
    filename: &str,
    config: RulesConfig,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::tsx());
    debug!(filename, ?source_type, "linting");

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LintError::Parse { filename: filename.to_string(), message });
    }
    let program = ret.program;

    let ctx = LintContext::new(source, source_type).with_file_path(filename);
    let needs_semantic = config.needs_semantic();
    let mut result = LintRunner::new(ctx, config.clone()).run(&program);

    if needs_semantic {
        let semantic_ret = SemanticBuilder::new().build(&program);
        let ctx = LintContext::new(source, source_type)
            .with_file_path(filename)
            .with_semantic(&semantic_ret.semantic);
        result.merge(SemanticLintRunner::new(ctx, config).run(&program));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_rules() {
        let source = r#"const a = <div onClick={() => go()}></div>;"#;
        let result = lint_source(source, "input.tsx").unwrap();
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(rules, vec!["jsx-self-close", "jsx-no-lambda"]);
    }

    #[test]
    fn test_clean_source() {
        let source = r#"const a = <Button onClick={this.handleClick} label="ok" />;"#;
        let result = lint_source(source, "input.jsx").unwrap();
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = lint_source("const a = <div>;", "input.tsx").unwrap_err();
        assert!(matches!(err, LintError::Parse { ref filename, .. } if filename == "input.tsx"));
    }

    #[test]
    fn test_type_aware_rules_run_with_config() {
        let source = r#"
            class Store { save() {} }
            const store = new Store();
            const a = <Button onSave={store.save} />;
        "#;
        let config = RulesConfig::from_json(r#"{ "jsx-no-method-ref": true }"#).unwrap();
        let result = lint_source_with_config(source, "input.tsx", config).unwrap();
        let rules: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
        assert_eq!(rules, vec!["jsx-no-method-ref"]);
    }
}
