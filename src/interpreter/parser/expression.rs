use logos::Logos;

use crate::{
    circuit::{Operator, Token},
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::EvalResult, lexer::ExpressionToken, parser::core::ParseResult},
};

/// Splits a raw circuit expression into tokens.
///
/// Every character other than a space or a quote mark becomes one token. No
/// semantic checks happen here; an empty expression yields no tokens.
///
/// # Parameters
/// - `expression`: The raw expression, optionally quote-delimited.
/// - `line`: Command line number for error reporting.
///
/// # Example
/// ```
/// use circuitry::{
///     circuit::{Operator, Token},
///     interpreter::parser::expression::tokenize,
/// };
///
/// let tokens = tokenize("\"!a & b\"", 1).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Op(Operator::Not),
///                 Token::Operand('a'),
///                 Token::Op(Operator::And),
///                 Token::Operand('b')]);
/// assert!(tokenize("\"\"", 1).unwrap().is_empty());
/// ```
pub fn tokenize(expression: &str, line: usize) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(expression.len());
    let mut lexer = ExpressionToken::lexer(expression);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line });
        };
        tokens.push(match token {
                        ExpressionToken::Bang => Token::Op(Operator::Not),
                        ExpressionToken::Ampersand => Token::Op(Operator::And),
                        ExpressionToken::Pipe => Token::Op(Operator::Or),
                        ExpressionToken::LParen => Token::LParen,
                        ExpressionToken::RParen => Token::RParen,
                        ExpressionToken::Symbol(c) => Token::Operand(c),
                    });
    }

    Ok(tokens)
}

/// Checks that every operand of an expression is a declared parameter.
///
/// # Errors
/// Returns `RuntimeError::InvalidOperand` naming the first undeclared symbol.
///
/// # Example
/// ```
/// use circuitry::interpreter::parser::expression::{tokenize, validate};
///
/// let tokens = tokenize("a & (b | !a)", 1).unwrap();
/// assert!(validate(&tokens, &['a', 'b'], "f", 1).is_ok());
/// assert!(validate(&tokens, &['a'], "f", 1).is_err());
/// ```
pub fn validate(tokens: &[Token], parameters: &[char], circuit: &str, line: usize) -> EvalResult<()> {
    for token in tokens {
        let symbol = match token {
            Token::Op(_) | Token::LParen | Token::RParen => continue,
            other => other.as_char(),
        };

        if !parameters.contains(&symbol) {
            return Err(RuntimeError::InvalidOperand { symbol,
                                                      circuit: circuit.to_string(),
                                                      line });
        }
    }

    Ok(())
}
