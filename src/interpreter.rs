/// The evaluator module executes commands and computes results.
///
/// The evaluator owns the session context, binds circuit inputs, converts
/// expressions to postfix form and evaluates them.
///
/// # Responsibilities
/// - Dispatches parsed commands against the circuit storage.
/// - Converts and evaluates boolean expressions.
/// - Reports structural errors such as unmatched parentheses.
pub mod evaluator;
/// The lexer module tokenizes command lines and circuit expressions.
///
/// # Responsibilities
/// - Splits a command line into keywords, words, quoted strings and
///   punctuation.
/// - Splits an expression into operators, parentheses and operand symbols.
pub mod lexer;
/// The parser module turns command lines into commands.
///
/// # Responsibilities
/// - Parses the body of each command.
/// - Tokenizes and validates circuit expressions.
/// - Reports syntax errors with the command line number.
pub mod parser;
/// Named registry of validated circuits.
pub mod storage;
/// Truth table loading and sum-of-products synthesis for `FIND`.
pub mod truth_table;
