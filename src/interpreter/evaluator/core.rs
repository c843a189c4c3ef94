use tracing::debug;

use crate::{
    circuit::Command,
    config::Config,
    error::{Error, RuntimeError},
    interpreter::{parser::core::parse_command, storage::CircuitStorage},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the output, possibly empty, and read the next command.
    Continue(String),
    /// Stop reading commands.
    Exit,
}

/// Stores the runtime state of an interpreter session.
///
/// The circuit storage is the only state that outlives a single command. It is
/// written by `DEFINE` and only read by the other commands.
///
/// ## Usage
///
/// A `Context` is created once per session. Every command line is handed to
/// [`Context::execute_line`]; an error abandons that command only.
pub struct Context {
    /// All circuits defined so far.
    pub storage: CircuitStorage,
    /// Session settings.
    pub config:  Config,
}

impl Context {
    /// Creates a context with an empty storage sized by `config.capacity`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { storage: CircuitStorage::with_capacity(config.capacity),
               config }
    }

    /// Parses and executes one command line.
    ///
    /// Lines that are not commands produce empty output.
    ///
    /// # Example
    /// ```
    /// use circuitry::{
    ///     config::Config,
    ///     interpreter::evaluator::core::{Context, Flow},
    /// };
    ///
    /// let mut context = Context::new(Config::default());
    /// context.execute_line("DEFINE or2(a, b) \"a | b\"", 1).unwrap();
    /// assert_eq!(context.execute_line("RUN or2(0, 1)", 2).unwrap(),
    ///            Flow::Continue("1\n".to_string()));
    /// assert_eq!(context.execute_line("EXIT", 3).unwrap(), Flow::Exit);
    /// ```
    pub fn execute_line(&mut self, source: &str, line: usize) -> Result<Flow, Error> {
        match parse_command(source, line)? {
            Some(command) => self.execute(&command, line),
            None => Ok(Flow::Continue(String::new())),
        }
    }

    /// Executes a parsed command.
    ///
    /// # Parameters
    /// - `command`: Command to execute.
    /// - `line`: Command line number for error reporting.
    ///
    /// # Returns
    /// The text the command prints, or [`Flow::Exit`].
    pub fn execute(&mut self, command: &Command, line: usize) -> Result<Flow, Error> {
        debug!(line, ?command, "executing command");

        let output = match command {
            Command::Define { name,
                              parameters,
                              expression, } => {
                self.define(name, parameters, expression, line)?;
                String::new()
            },
            Command::Run(input) => self.run(input, line)?,
            Command::All { name } => self.run_all(name, line)?,
            Command::Find { path } => self.find(path, line)?,
            Command::Print => self.print(),
            Command::Exit => return Ok(Flow::Exit),
        };

        Ok(Flow::Continue(output))
    }
}
