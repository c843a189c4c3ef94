/// Command parser entry point.
///
/// Lexes one command line, dispatches on its keyword, and rejects trailing
/// tokens. Lines without a keyword are skipped.
pub mod core;

/// Parsers for the body of each command.
///
/// Handles `DEFINE`, `RUN`, `ALL` and `FIND`, whose bodies carry names,
/// parameter or input lists, expressions and file paths.
pub mod command;

/// Expression tokenizer and validator.
///
/// Turns the raw text of a circuit expression into [`crate::circuit::Token`]s
/// and checks that every operand is a declared parameter.
pub mod expression;

/// Helpers shared by the command parsers.
pub mod utils;
