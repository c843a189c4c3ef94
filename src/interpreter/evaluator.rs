/// Core evaluation logic and session context.
///
/// Contains the `Context` holding the circuit storage, the `Flow` returned to
/// the session loop, and command dispatch.
pub mod core;

/// Command execution.
///
/// Implements `DEFINE`, `RUN`, `ALL`, `FIND` and `PRINT` on top of the
/// storage, the expression engine and truth table synthesis.
pub mod command;

/// Postfix conversion and evaluation.
///
/// Converts bound infix expressions to postfix order with the Shunting-Yard
/// algorithm and evaluates them on an operand stack.
pub mod postfix;
