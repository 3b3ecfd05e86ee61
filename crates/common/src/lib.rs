//! Traversal and matching core shared by the JSX lint rules

pub mod attributes;
pub mod element;
pub mod text;
pub mod walk;

pub use attributes::*;
pub use element::*;
pub use text::{comments_within, find_token, is_multiline, whitespace_gap, Gap, LineIndex};
pub use walk::{descend_into, find_matching, is_function_like, unwrap_parens, walk_expressions, Descend};
