use crate::{
    circuit::{Operator, Token},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Converts an infix token sequence to postfix order (Shunting-Yard).
///
/// Digits and operands go straight to the output. `(` is pushed onto the
/// operator stack and `)` pops operators until its partner. An incoming
/// operator first pops every stacked operator that binds strictly tighter, so
/// chains of equal operators (including repeated `!`) group to the right.
///
/// # Parameters
/// - `infix`: Tokens in written order, usually with all parameters bound.
/// - `line`: Command line number for error reporting.
///
/// # Errors
/// Returns `RuntimeError::UnmatchedParenthesis` if a `)` has no partner or a
/// `(` is never closed.
///
/// # Example
/// ```
/// use circuitry::{
///     circuit::{Operator, Token},
///     interpreter::evaluator::postfix::to_postfix,
/// };
///
/// // 1 | !0 & 1  =>  1 0 ! 1 & |
/// let infix = [Token::Digit(true),
///              Token::Op(Operator::Or),
///              Token::Op(Operator::Not),
///              Token::Digit(false),
///              Token::Op(Operator::And),
///              Token::Digit(true)];
/// let postfix: String = to_postfix(&infix, 1).unwrap().iter().map(|t| t.as_char()).collect();
/// assert_eq!(postfix, "10!1&|");
/// ```
pub fn to_postfix(infix: &[Token], line: usize) -> EvalResult<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::with_capacity(infix.len());
    let mut output = Vec::with_capacity(infix.len());

    for &token in infix {
        match token {
            Token::Digit(_) | Token::Operand(_) => output.push(token),
            Token::LParen => operators.push(token),
            Token::RParen => loop {
                match operators.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(RuntimeError::UnmatchedParenthesis { line }),
                }
            },
            Token::Op(incoming) => {
                while let Some(&Token::Op(top)) = operators.last()
                      && top.precedence() > incoming.precedence()
                {
                    operators.pop();
                    output.push(Token::Op(top));
                }
                operators.push(token);
            },
        }
    }

    while let Some(op) = operators.pop() {
        if op == Token::LParen {
            return Err(RuntimeError::UnmatchedParenthesis { line });
        }
        output.push(op);
    }

    Ok(output)
}

/// Evaluates a postfix token sequence with an operand stack.
///
/// - A digit pushes its value.
/// - `!` pops one value and pushes its negation.
/// - `&` and `|` pop the right operand, then the left one, and push the result.
///
/// Exactly one value must remain at the end; it is the result.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds too few values.
/// - `UnknownToken` for an unbound operand or a stray parenthesis.
/// - `MalformedExpression` if anything other than one value remains,
///   including for an empty expression.
///
/// # Example
/// ```
/// use circuitry::{
///     circuit::{Operator, Token},
///     interpreter::evaluator::postfix::evaluate_postfix,
/// };
///
/// let postfix = [Token::Digit(true), Token::Digit(false), Token::Op(Operator::Not),
///                Token::Op(Operator::And)];
/// assert!(evaluate_postfix(&postfix, 1).unwrap());
/// assert!(evaluate_postfix(&[Token::Op(Operator::Or)], 1).is_err());
/// ```
pub fn evaluate_postfix(postfix: &[Token], line: usize) -> EvalResult<bool> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for &token in postfix {
        match token {
            Token::Digit(value) => stack.push(value),
            Token::Op(Operator::Not) => {
                let operand = stack.pop()
                                   .ok_or(RuntimeError::InsufficientOperands { operator: '!',
                                                                               line })?;
                stack.push(!operand);
            },
            Token::Op(op) => {
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::InsufficientOperands { operator: op.symbol(),
                                                                    line });
                };
                stack.push(match op {
                               Operator::And => left && right,
                               _ => left || right,
                           });
            },
            Token::Operand(_) | Token::LParen | Token::RParen => {
                return Err(RuntimeError::UnknownToken { token: token.as_char(),
                                                        line });
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        rest => Err(RuntimeError::MalformedExpression { remaining: rest.len(),
                                                        line }),
    }
}
