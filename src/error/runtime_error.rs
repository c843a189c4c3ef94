use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while defining, running or synthesizing
/// circuits.
pub enum RuntimeError {
    /// An expression used a symbol that is not one of the circuit parameters.
    InvalidOperand {
        /// The undeclared symbol.
        symbol:  char,
        /// The name of the rejected circuit.
        circuit: String,
        /// The command line where the error occurred.
        line:    usize,
    },
    /// Attempted to define a circuit whose name is already taken.
    DuplicateCircuit {
        /// The name of the circuit.
        name: String,
        /// The command line where the error occurred.
        line: usize,
    },
    /// Referred to a circuit that was never defined.
    CircuitNotFound {
        /// The name of the circuit.
        name: String,
        /// The command line where the error occurred.
        line: usize,
    },
    /// The circuit storage has no room for another definition.
    StorageFull {
        /// The configured capacity.
        capacity: usize,
        /// The command line where the error occurred.
        line:     usize,
    },
    /// `RUN` supplied a different number of inputs than the circuit declares.
    ArgumentCountMismatch {
        /// The number of parameters the circuit declares.
        expected: usize,
        /// The number of inputs supplied.
        found:    usize,
        /// The command line where the error occurred.
        line:     usize,
    },
    /// `ALL` was asked to enumerate more assignments than can be counted.
    TooManyParameters {
        /// The number of parameters of the circuit.
        count: usize,
        /// The command line where the error occurred.
        line:  usize,
    },
    /// A parenthesis has no matching partner.
    UnmatchedParenthesis {
        /// The command line where the error occurred.
        line: usize,
    },
    /// Evaluation did not end with exactly one value.
    MalformedExpression {
        /// The number of values left on the stack.
        remaining: usize,
        /// The command line where the error occurred.
        line:      usize,
    },
    /// An operator found fewer operands than it needs.
    InsufficientOperands {
        /// The operator symbol.
        operator: char,
        /// The command line where the error occurred.
        line:     usize,
    },
    /// The evaluator met a token it cannot evaluate.
    UnknownToken {
        /// The token as written.
        token: char,
        /// The command line where the error occurred.
        line:  usize,
    },
    /// A truth table file could not be opened or read.
    FileOpenFailure {
        /// The path that was requested.
        path:    PathBuf,
        /// The reason reported by the operating system.
        details: String,
        /// The command line where the error occurred.
        line:    usize,
    },
    /// A truth table has more input columns than there are parameter symbols.
    UnsupportedColumnCount {
        /// The number of input columns found.
        found:   usize,
        /// The largest supported number of input columns.
        maximum: usize,
        /// The command line where the error occurred.
        line:    usize,
    },
    /// A truth table row could not be read as integers.
    MalformedTruthTable {
        /// Details about the offending row.
        details: String,
        /// The command line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { symbol,
                                   circuit,
                                   line, } => write!(f,
                                                     "Error on line {line}: Found token '{symbol}' that is not a valid operator or operand of '{circuit}'. Skip DEFINE command."),
            Self::DuplicateCircuit { name, line } => write!(f,
                                                            "Error on line {line}: Integrated circuit with name '{name}' already exists. Skip DEFINE command."),
            Self::CircuitNotFound { name, line } => write!(f,
                                                           "Error on line {line}: Circuit with name '{name}' does not exist."),
            Self::StorageFull { capacity, line } => write!(f,
                                                           "Error on line {line}: Circuit storage is full ({capacity} circuits)."),

            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Expected {expected} inputs but found {found}."),
            Self::TooManyParameters { count, line } => write!(f,
                                                              "Error on line {line}: Cannot enumerate all inputs of a circuit with {count} parameters."),

            Self::UnmatchedParenthesis { line } => {
                write!(f, "Error on line {line}: Mismatch in parentheses found.")
            },
            Self::MalformedExpression { remaining, line } => write!(f,
                                                                    "Error on line {line}: Malformed expression, {remaining} values left after evaluation."),
            Self::InsufficientOperands { operator, line } => write!(f,
                                                                    "Error on line {line}: Operator '{operator}' is missing an operand."),
            Self::UnknownToken { token, line } => {
                write!(f, "Error on line {line}: Unknown token '{token}' in expression.")
            },

            Self::FileOpenFailure { path, details, line } => write!(f,
                                                                    "Error on line {line}: Failed to read truth table '{}': {details}. Skip FIND command.",
                                                                    path.display()),
            Self::UnsupportedColumnCount { found,
                                           maximum,
                                           line, } => write!(f,
                                                             "Error on line {line}: Truth table has {found} input columns, at most {maximum} are supported."),
            Self::MalformedTruthTable { details, line } => {
                write!(f, "Error on line {line}: Malformed truth table: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
