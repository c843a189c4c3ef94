use logos::Logos;

/// Represents a lexical token of a command line.
///
/// A command line is a keyword followed by words, quoted strings and
/// punctuation. Keywords are only recognized when they form a whole word, so a
/// circuit named `RUNNER` lexes as a `Word`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum CommandToken {
    /// `DEFINE`
    #[token("DEFINE")]
    Define,
    /// `RUN`
    #[token("RUN")]
    Run,
    /// `ALL`
    #[token("ALL")]
    All,
    /// `FIND`
    #[token("FIND")]
    Find,
    /// `PRINT`
    #[token("PRINT")]
    Print,
    /// `EXIT`
    #[token("EXIT")]
    Exit,
    /// A double-quoted string, quotes included, such as `"a & b"`.
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string())]
    Quoted(String),
    /// Circuit names, parameter symbols, input values and file paths.
    #[regex(r#"[^ \t\r\f(),"]+"#, |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Represents a lexical token of a circuit expression.
///
/// Spaces and quote marks are dropped; any other character that is not an
/// operator or a parenthesis is an operand symbol.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r#"[ "]+"#)]
pub enum ExpressionToken {
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A single operand character, such as `a`.
    #[regex(r#"[^ "!&|()]"#, parse_symbol)]
    Symbol(char),
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the number of the command line being lexed for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current command line number.
    pub line: usize,
}

/// Extracts the single character matched by an operand pattern.
///
/// # Returns
/// - `Some(char)`: The matched character.
/// - `None`: If the slice is empty.
fn parse_symbol(lex: &logos::Lexer<ExpressionToken>) -> Option<char> {
    lex.slice().chars().next()
}

impl std::fmt::Display for CommandToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Define => write!(f, "DEFINE"),
            Self::Run => write!(f, "RUN"),
            Self::All => write!(f, "ALL"),
            Self::Find => write!(f, "FIND"),
            Self::Print => write!(f, "PRINT"),
            Self::Exit => write!(f, "EXIT"),
            Self::Quoted(text) | Self::Word(text) => write!(f, "{text}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
        }
    }
}
