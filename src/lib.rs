//! # circuitry
//!
//! circuitry is a console simulator for digital integrated circuits written in
//! Rust. Circuits are named boolean functions over `!`, `&` and `|`; they can
//! be defined, run for concrete inputs, enumerated over every input, printed,
//! and synthesized back from a truth table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    borrow::Cow,
    io::{self, BufRead, Write},
};

use tracing::{debug, warn};

use crate::{
    config::Config,
    interpreter::evaluator::core::{Context, Flow},
};

/// Defines the circuit data model.
///
/// This module declares the expression `Token`, the `Circuit` definition with
/// its validation and evaluation entry points, the inputs of a `RUN`, and the
/// `Command` produced by the parser.
pub mod circuit;
/// Session settings.
///
/// Holds the storage capacity, prompt and truth table echo switches shared by
/// the binary and library callers.
pub mod config;
/// Provides unified error types for parsing and execution.
///
/// Every error names the command line it occurred on and abandons only that
/// command; the session continues with the next line.
///
/// # Responsibilities
/// - Defines error enums for command syntax and runtime failures.
/// - Renders messages in a uniform `Error on line N: ...` form.
pub mod error;
/// Orchestrates command execution.
///
/// This module ties together lexing, parsing, expression evaluation, circuit
/// storage and truth table synthesis.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Owns the circuit storage for the lifetime of a session.
/// - Manages the flow of output and errors between commands.
pub mod interpreter;
/// General utilities.
///
/// Provides helpers that are not specific to a single phase, such as input
/// assignment enumeration.
pub mod util;

/// Output captured from a session run by [`get_result`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Everything written to standard output.
    pub stdout: String,
    /// Every diagnostic written to standard error.
    pub stderr: String,
}

/// Runs an interpreter session.
///
/// Reads one command per line from `input` until `EXIT` or the end of input.
/// Command output goes to `out`; each failed command writes its error to
/// `err` and the session continues. Bytes that are not valid UTF-8 are
/// replaced with `U+FFFD`, so such a line is handled like any other.
///
/// # Errors
/// Returns an error only if reading `input` or writing `out`/`err` fails.
pub fn run<R, W, E>(mut input: R, out: &mut W, err: &mut E, config: &Config) -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut context = Context::new(config.clone());

    if config.prompt {
        writeln!(out, "Console simulator of Digital Integrated Circuits")?;
        write!(out, "Enter command: ")?;
        out.flush()?;
    }

    let mut buffer = Vec::new();
    let mut line = 0;
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line += 1;

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        let source = String::from_utf8_lossy(&buffer);
        if matches!(source, Cow::Owned(_)) {
            warn!(line, "input line is not valid UTF-8");
        }

        match context.execute_line(&source, line) {
            Ok(Flow::Exit) => {
                debug!(line, "session ended by EXIT");
                break;
            },
            Ok(Flow::Continue(output)) => out.write_all(output.as_bytes())?,
            Err(e) => {
                writeln!(err, "{e}")?;
                err.flush()?;
            },
        }

        if config.prompt {
            write!(out, "Enter command: ")?;
        }
        out.flush()?;
    }

    out.flush()
}

/// Runs a whole script and returns everything it printed.
///
/// # Errors
/// Returns an error if the captured output is not valid UTF-8.
///
/// # Examples
/// ```
/// use circuitry::{config::Config, get_result};
///
/// let script = "DEFINE and2(a, b) \"a & b\"\nRUN and2(1, 1)\nRUN and2(1, 0)\nEXIT\n";
/// let transcript = get_result(script, &Config::default()).unwrap();
/// assert_eq!(transcript.stdout, "1\n0\n");
/// assert!(transcript.stderr.is_empty());
///
/// // Running an unknown circuit reports an error and keeps going.
/// let transcript = get_result("RUN nope(1)\nPRINT\n", &Config::default()).unwrap();
/// assert!(transcript.stderr.contains("does not exist"));
/// ```
pub fn get_result(source: &str, config: &Config) -> io::Result<Transcript> {
    let mut out = Vec::new();
    let mut err = Vec::new();

    run(source.as_bytes(), &mut out, &mut err, config)?;

    let decode = |bytes: Vec<u8>| {
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    };
    Ok(Transcript { stdout: decode(out)?,
                    stderr: decode(err)?, })
}
