use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::CommandToken, parser::core::ParseResult},
};

/// Parses a parenthesized list of single-character items.
///
/// Every character of every word between `(` and `)` becomes one item; commas
/// are separators and may be omitted, so `(a, b)`, `(a b)` and `(ab)` all
/// produce `['a', 'b']`. An empty pair of parentheses produces an empty list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the opening parenthesis.
/// - `item`: Converts one character to an item, or rejects it.
/// - `line`: Command line number for error reporting.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the opening parenthesis is missing,
/// - the line ends or another token appears before `)`,
/// - `item` rejects a character.
pub(in crate::interpreter::parser) fn parse_char_list<'a, I, T>(
    tokens: &mut Peekable<I>,
    item: impl Fn(char) -> ParseResult<T>,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    match tokens.next() {
        Some((CommandToken::LParen, _)) => {},
        _ => return Err(ParseError::ExpectedOpeningParen { line }),
    }

    let mut items = Vec::new();
    loop {
        match tokens.next() {
            Some((CommandToken::RParen, _)) => break,
            Some((CommandToken::Comma, _)) => {},
            Some((CommandToken::Word(word), _)) => {
                for c in word.chars() {
                    items.push(item(c)?);
                }
            },
            _ => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
    Ok(items)
}

/// Parses a plain word, such as a circuit name.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not a word.
/// - `UnexpectedEndOfInput` if the line has ended.
pub(in crate::interpreter::parser) fn parse_word<'a, I>(tokens: &mut Peekable<I>,
                                                         line: usize)
                                                         -> ParseResult<String>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    match tokens.next() {
        Some((CommandToken::Word(word), _)) => Ok(word.clone()),
        Some((tok, _)) => Err(ParseError::UnexpectedToken { token: format!("Expected a name, found '{tok}'"),
                                                            line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Ensures that nothing follows a complete command.
pub(in crate::interpreter::parser) fn expect_end<'a, I>(tokens: &mut Peekable<I>,
                                                         line: usize)
                                                         -> ParseResult<()>
    where I: Iterator<Item = &'a (CommandToken, usize)> + Clone
{
    match tokens.next() {
        None => Ok(()),
        Some((tok, _)) => Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                     line }),
    }
}

/// Strips the surrounding quote marks of a `Quoted` token.
pub(in crate::interpreter::parser) fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}
