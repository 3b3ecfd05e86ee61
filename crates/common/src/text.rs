//! Source text helpers: line/column lookup and the gaps between tokens

use oxc_span::Span;

/// Byte offsets of line starts, for mapping offsets to (line, column).
///
/// Lines and columns are zero based; columns count bytes.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i as u32 + 1),
        );
        Self { line_starts }
    }

    pub fn line(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    pub fn line_col(&self, offset: u32) -> (usize, u32) {
        let line = self.line(offset);
        (line, offset - self.line_starts[line])
    }

    pub fn column(&self, offset: u32) -> u32 {
        self.line_col(offset).1
    }

    pub fn line_start(&self, line: usize) -> u32 {
        self.line_starts.get(line).copied().unwrap_or(0)
    }

    /// Width of the spaces and tabs that open `line`
    pub fn indent(&self, source: &str, line: usize) -> u32 {
        let start = self.line_start(line) as usize;
        let rest = source.get(start..).unwrap_or_default();
        rest.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count() as u32
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

/// Whitespace between two tokens, with the comments it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub span: Span,
    /// The comments inside the gap, concatenated
    pub comments: String,
}

/// Comments from `comments` lying entirely inside `[start, end)`.
///
/// `comments` are the spans oxc_parser records on `Program::comments`, in
/// source order.
pub fn comments_within(
    comments: &[Span],
    start: u32,
    end: u32,
) -> impl Iterator<Item = Span> + '_ {
    comments
        .iter()
        .copied()
        .skip_while(move |comment| comment.start < start)
        .take_while(move |comment| comment.end <= end)
}

/// The gap `[start, end)` when it holds more than comments.
///
/// Replacing `span` with `comments` removes the whitespace and keeps the comments.
pub fn whitespace_gap(source: &str, comments: &[Span], start: u32, end: u32) -> Option<Gap> {
    if end <= start {
        return None;
    }
    source.get(start as usize..end as usize)?;
    let inside: Vec<Span> = comments_within(comments, start, end).collect();
    let comment_len: u32 = inside.iter().map(|comment| comment.size()).sum();
    if end - start > comment_len {
        let text = inside
            .iter()
            .map(|comment| &source[comment.start as usize..comment.end as usize])
            .collect();
        Some(Gap { span: Span::new(start, end), comments: text })
    } else {
        None
    }
}

/// Offset of the first occurrence of `needle` in `[start, end)` outside comments
pub fn find_token(
    source: &str,
    comments: &[Span],
    start: u32,
    end: u32,
    needle: &str,
) -> Option<u32> {
    let text = source.get(start as usize..end as usize)?;
    let mut from = 0;
    while let Some(pos) = text[from..].find(needle) {
        let at = start + (from + pos) as u32;
        match comments.iter().find(|comment| comment.start <= at && at < comment.end) {
            Some(comment) => from = (comment.end - start) as usize,
            None => return Some(at),
        }
    }
    None
}

pub fn is_multiline(text: &str) -> bool {
    text.contains('\n')
}
