use logos::Logos;
use tracing::debug;

use crate::{
    circuit::Command,
    error::ParseError,
    interpreter::{
        lexer::{CommandToken, LexerExtras},
        parser::command::{parse_all, parse_define, parse_find, parse_run},
        parser::utils::expect_end,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one command line.
///
/// This is the entry point for command parsing. The first token selects the
/// command; the remaining tokens are handed to the matching command parser.
///
/// A line that is empty or does not start with a command keyword is not an
/// error: it is skipped and `Ok(None)` is returned.
///
/// # Parameters
/// - `source`: The text of the command line, without its line terminator.
/// - `line`: Command line number for error reporting.
///
/// # Returns
/// The parsed [`Command`], or `None` for a line that should be ignored.
///
/// # Example
/// ```
/// use circuitry::{circuit::Command, interpreter::parser::core::parse_command};
///
/// assert_eq!(parse_command("PRINT", 1).unwrap(), Some(Command::Print));
/// assert_eq!(parse_command("HELLO there", 2).unwrap(), None);
/// assert!(parse_command("ALL", 3).is_err());
/// ```
pub fn parse_command(source: &str, line: usize) -> ParseResult<Option<Command>> {
    let mut lexer = CommandToken::lexer_with_extras(source, LexerExtras { line });

    let keyword = match lexer.next() {
        Some(Ok(token @ (CommandToken::Define
                         | CommandToken::Run
                         | CommandToken::All
                         | CommandToken::Find
                         | CommandToken::Print
                         | CommandToken::Exit))) => token,
        _ => {
            debug!(line, "ignoring unrecognized command line");
            return Ok(None);
        },
    };

    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    let mut iter = tokens.iter().peekable();

    let command = match keyword {
        CommandToken::Define => parse_define(&mut iter, line)?,
        CommandToken::Run => parse_run(&mut iter, line)?,
        CommandToken::All => parse_all(&mut iter, line)?,
        CommandToken::Find => parse_find(&mut iter, line)?,
        CommandToken::Print => Command::Print,
        _ => Command::Exit,
    };
    expect_end(&mut iter, line)?;

    Ok(Some(command))
}
