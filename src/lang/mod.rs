/*!
# Language Module

Lexical analysis and parsing for Tiny BASIC. `lex` turns one line of
source text into tokens; `parse` turns tokens back into a `Line`
holding an optional line number and statement AST.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use token::{Operator, Token, Word};

pub mod ast;

/// A line number when present; `None` means direct mode.
pub type LineNumber = Option<i32>;

/// Character range of a token within its source line.
pub type Column = std::ops::Range<usize>;
