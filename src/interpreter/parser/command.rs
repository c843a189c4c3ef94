use std::{iter::Peekable, path::PathBuf};

use crate::{
    circuit::{CircuitInput, Command},
    error::ParseError,
    interpreter::{
        lexer::CommandToken,
        parser::{
            core::ParseResult,
            utils::{parse_char_list, parse_word, unquote},
        },
    },
};

/// Parses the body of a `DEFINE` command.
///
/// Syntax:
/// ```text
///     DEFINE <name>(<sym>, <sym>, ...) "<expression>"
/// ```
/// The expression is kept as written, quotes included. It is tokenized and
/// validated when the definition is executed.
///
/// # Errors
/// - `UnexpectedToken` or `UnexpectedEndOfInput` if the name is missing.
/// - `ExpectedOpeningParen` or `ExpectedClosingParen` for a malformed
///   parameter list.
/// - `ExpectedQuotedString` if no quoted expression follows.
pub fn parse_define<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    let name = parse_word(tokens, line)?;
    let parameters = parse_char_list(tokens, Ok, line)?;

    let expression = match tokens.next() {
        Some((CommandToken::Quoted(text), _)) => text.clone(),
        _ => {
            return Err(ParseError::ExpectedQuotedString { command: "DEFINE",
                                                          line });
        },
    };

    Ok(Command::Define { name,
                         parameters,
                         expression })
}

/// Parses the body of a `RUN` command.
///
/// Syntax:
/// ```text
///     RUN <name>(<0|1>, <0|1>, ...)
/// ```
///
/// # Errors
/// - `InvalidArgument` if an input is anything other than `0` or `1`.
/// - The errors of a malformed name or parenthesized list.
pub fn parse_run<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    let circuit_name = parse_word(tokens, line)?;
    let arguments = parse_char_list(tokens,
                                    |c| match c {
                                        '0' => Ok(false),
                                        '1' => Ok(true),
                                        found => Err(ParseError::InvalidArgument { found, line }),
                                    },
                                    line)?;

    Ok(Command::Run(CircuitInput { circuit_name,
                                   arguments }))
}

/// Parses the body of an `ALL` command: a single circuit name.
pub fn parse_all<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    let name = parse_word(tokens, line)?;
    Ok(Command::All { name })
}

/// Parses the body of a `FIND` command.
///
/// The path is normally quoted; a bare path without spaces is accepted too.
///
/// # Errors
/// Returns `ExpectedQuotedString` if no path follows the keyword.
pub fn parse_find<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Command>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    match tokens.next() {
        Some((CommandToken::Quoted(text), _)) => {
            Ok(Command::Find { path: PathBuf::from(unquote(text)) })
        },
        Some((CommandToken::Word(text), _)) => Ok(Command::Find { path: PathBuf::from(text) }),
        _ => Err(ParseError::ExpectedQuotedString { command: "FIND",
                                                    line }),
    }
}
