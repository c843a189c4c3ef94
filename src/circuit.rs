use std::fmt;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{
            core::EvalResult,
            postfix::{evaluate_postfix, to_postfix},
        },
        parser::expression::{tokenize, validate},
    },
};

/// A logical operator usable in circuit expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `!`, logical negation of one operand.
    Not,
    /// `&`, logical conjunction.
    And,
    /// `|`, logical disjunction.
    Or,
}

impl Operator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// ```
    /// use circuitry::circuit::Operator;
    ///
    /// assert!(Operator::Not.precedence() > Operator::And.precedence());
    /// assert!(Operator::And.precedence() > Operator::Or.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 3,
            Self::And => 2,
            Self::Or => 1,
        }
    }

    /// Returns the character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Not => '!',
            Self::And => '&',
            Self::Or => '|',
        }
    }
}

/// The atomic lexical unit of a circuit expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A concrete input value, produced when parameters are substituted.
    Digit(bool),
    /// A parameter symbol, e.g. `a`.
    Operand(char),
    /// A logical operator.
    Op(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Returns the character this token was written as.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Digit(false) => '0',
            Self::Digit(true) => '1',
            Self::Operand(c) => c,
            Self::Op(op) => op.symbol(),
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A named boolean function defined by `DEFINE`.
///
/// A `Circuit` can only be obtained through [`Circuit::new`], which tokenizes
/// and validates the expression, so every operand of a stored circuit is one of
/// its parameters. Circuits are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    name:       String,
    parameters: Vec<char>,
    expression: String,
    tokens:     Vec<Token>,
}

impl Circuit {
    /// Tokenizes and validates a circuit definition.
    ///
    /// # Parameters
    /// - `name`: Name of the circuit.
    /// - `parameters`: Ordered parameter symbols.
    /// - `expression`: Raw expression, optionally quote-delimited.
    /// - `line`: Command line number for error reporting.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidOperand` if the expression uses a symbol
    /// that is not a parameter. The definition is discarded as a whole.
    ///
    /// # Example
    /// ```
    /// use circuitry::circuit::Circuit;
    ///
    /// let and2 = Circuit::new("and2", vec!['a', 'b'], "\"a & b\"", 1).unwrap();
    /// assert_eq!(and2.evaluate(&[true, true], 1).unwrap(), true);
    /// assert!(Circuit::new("bad", vec!['a'], "\"a & c\"", 1).is_err());
    /// ```
    pub fn new(name: impl Into<String>,
               parameters: Vec<char>,
               expression: impl Into<String>,
               line: usize)
               -> Result<Self, Error> {
        let name = name.into();
        let expression = expression.into();
        let tokens = tokenize(&expression, line)?;

        validate(&tokens, &parameters, &name, line)?;

        Ok(Self { name,
                  parameters,
                  expression,
                  tokens })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &[char] {
        &self.parameters
    }

    /// The expression exactly as it was written in the definition.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Replaces every parameter occurrence with the matching input value.
    ///
    /// `values[i]` is bound to `parameters()[i]`. A repeated parameter takes the
    /// value of its last position. Operands without a value are left in place
    /// and rejected later by the evaluator.
    #[must_use]
    pub fn bind(&self, values: &[bool]) -> Vec<Token> {
        self.tokens
            .iter()
            .map(|token| match token {
                Token::Operand(symbol) => self.parameters
                                              .iter()
                                              .rposition(|p| p == symbol)
                                              .and_then(|i| values.get(i))
                                              .map_or(*token, |v| Token::Digit(*v)),
                _ => *token,
            })
            .collect()
    }

    /// Evaluates the circuit for one assignment of its inputs.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if `values` does not match the parameter
    ///   count.
    /// - Any structural error from postfix conversion or evaluation.
    pub fn evaluate(&self, values: &[bool], line: usize) -> EvalResult<bool> {
        if values.len() != self.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: self.parameters.len(),
                                                             found: values.len(),
                                                             line });
        }

        let infix = self.bind(values);
        let postfix = to_postfix(&infix, line)?;
        evaluate_postfix(&postfix, line)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") {}", self.expression)
    }
}

/// Concrete inputs for one `RUN` of a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitInput {
    /// The circuit to run.
    pub circuit_name: String,
    /// One value per circuit parameter, in parameter order.
    pub arguments:    Vec<bool>,
}

/// A single parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `DEFINE name(a, b) "expr"`
    Define {
        /// Name of the new circuit.
        name:       String,
        /// Ordered parameter symbols.
        parameters: Vec<char>,
        /// The quoted expression, quotes included.
        expression: String,
    },
    /// `RUN name(1, 0)`
    Run(CircuitInput),
    /// `ALL name`
    All {
        /// Name of the circuit to enumerate.
        name: String,
    },
    /// `FIND "table.txt"`
    Find {
        /// Path of the truth table file.
        path: std::path::PathBuf,
    },
    /// `PRINT`
    Print,
    /// `EXIT`
    Exit,
}
