//! Format-spec parser.
//!
//! Turns template text such as `"{=a:*0} {0}"` into an AST of literal runs
//! and placeholder fields. The AST is public for tooling.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::parse_format_spec;
