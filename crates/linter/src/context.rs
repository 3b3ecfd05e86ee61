//! Lint context for rule execution

use common::LineIndex;
use oxc_semantic::Semantic;
use oxc_span::{SourceType, Span};

use crate::Diagnostic;

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
    /// Path of the linted file, when the host knows it
    file_path: Option<&'a str>,
    line_index: LineIndex,
    /// Spans of the program's comments, in source order
    comments: Vec<Span>,
    /// Semantic analysis (scopes, symbols, etc.)
    semantic: Option<&'a Semantic<'a>>,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str, source_type: SourceType) -> Self {
        Self {
            source_text,
            source_type,
            file_path: None,
            line_index: LineIndex::new(source_text),
            comments: Vec::new(),
            semantic: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_semantic(mut self, semantic: &'a Semantic<'a>) -> Self {
        self.semantic = Some(semantic);
        self
    }

    pub fn with_file_path(mut self, file_path: &'a str) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// Take comment spans from the parsed program
    pub fn set_comments(&mut self, comments: impl IntoIterator<Item = Span>) {
        self.comments = comments.into_iter().collect();
    }

    pub fn comments(&self) -> &[Span] {
        &self.comments
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn file_path(&self) -> Option<&'a str> {
        self.file_path
    }

    /// Check if the source is TSX
    pub fn is_tsx(&self) -> bool {
        self.source_type.is_typescript() && self.source_type.is_jsx()
    }

    /// Get semantic analysis if available
    pub fn semantic(&self) -> Option<&'a Semantic<'a>> {
        self.semantic
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Zero-based line of a byte offset
    pub fn line(&self, offset: u32) -> usize {
        self.line_index.line(offset)
    }

    /// Zero-based byte column of an offset
    pub fn column(&self, offset: u32) -> u32 {
        self.line_index.column(offset)
    }

    /// Check whether a span starts and ends on different lines
    pub fn is_multiline(&self, span: Span) -> bool {
        self.line(span.start) != self.line(span.end)
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source_text
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Get reference to diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
