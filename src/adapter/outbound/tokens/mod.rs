//! Account token list adapters.

mod file;

pub use file::{parse_tokens, FileTokenSource};
