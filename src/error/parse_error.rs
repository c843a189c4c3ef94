#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing a command line.
pub enum ParseError {
    /// Found a token the lexer or parser did not expect.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The command line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the command line unexpectedly.
    UnexpectedEndOfInput {
        /// The command line where the error occurred.
        line: usize,
    },
    /// An opening parenthesis `(` was expected after a circuit name.
    ExpectedOpeningParen {
        /// The command line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The command line where the error occurred.
        line: usize,
    },
    /// A quoted string was expected, e.g. the expression of a `DEFINE`.
    ExpectedQuotedString {
        /// The command keyword being parsed.
        command: &'static str,
        /// The command line where the error occurred.
        line:    usize,
    },
    /// A `RUN` argument was not a `0` or `1`.
    InvalidArgument {
        /// The offending argument character.
        found: char,
        /// The command line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after a complete command.
    UnexpectedTrailingTokens {
        /// The extra token.
        token: String,
        /// The command line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of command.")
            },

            Self::ExpectedOpeningParen { line } => write!(f,
                                                          "Error on line {line}: Expected opening parenthesis '(' after the circuit name."),

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedQuotedString { command, line } => write!(f,
                                                                   "Error on line {line}: {command} expects a quoted string. Example: DEFINE and2(a, b) \"a & b\""),

            Self::InvalidArgument { found, line } => write!(f,
                                                            "Error on line {line}: Invalid argument '{found}'. Circuit inputs must be 0 or 1."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after command. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
