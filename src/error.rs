/// Parsing errors.
///
/// Defines all error types that can occur while lexing a command line or
/// breaking it into a command: unexpected tokens, missing parentheses or
/// quotes, and invalid circuit inputs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised while executing a command: rejected
/// definitions, unknown circuits, structural defects found during postfix
/// conversion or evaluation, and truth table failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that abandons a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The command line could not be parsed.
    Parse(ParseError),
    /// The command failed while executing.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
