use std::{fmt::Write as _, path::Path};

use tracing::debug;

use crate::{
    circuit::{Circuit, CircuitInput},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        truth_table::{TruthTable, synthesize},
    },
    util::bits::Assignments,
};

impl Context {
    /// Executes `DEFINE`: tokenizes, validates and stores a circuit.
    ///
    /// A definition that fails validation is discarded whole. A duplicate name
    /// leaves the stored circuit untouched.
    ///
    /// # Errors
    /// - `InvalidOperand` for an undeclared symbol in the expression.
    /// - `DuplicateCircuit` or `StorageFull` from the storage.
    pub fn define(&mut self,
                  name: &str,
                  parameters: &[char],
                  expression: &str,
                  line: usize)
                  -> Result<(), Error> {
        let circuit = Circuit::new(name, parameters.to_vec(), expression, line)?;
        self.storage.insert(circuit, line)?;
        Ok(())
    }

    /// Executes `RUN`: evaluates a circuit for the given inputs.
    ///
    /// # Returns
    /// The result, `0` or `1`, on its own line.
    ///
    /// # Errors
    /// - `CircuitNotFound` if no circuit has the requested name.
    /// - `ArgumentCountMismatch` if the input count differs from the parameter
    ///   count.
    /// - Any structural error of the expression.
    pub fn run(&self, input: &CircuitInput, line: usize) -> EvalResult<String> {
        let circuit = self.storage.get(&input.circuit_name, line)?;
        let result = circuit.evaluate(&input.arguments, line)?;
        Ok(format!("{}\n", u8::from(result)))
    }

    /// Executes `ALL`: evaluates a circuit for every input assignment.
    ///
    /// The output starts with `Execute <name> <expression>`, followed by one
    /// line per assignment in truth-table order, e.g. `0 | 1 | res: 1`.
    ///
    /// # Errors
    /// - `CircuitNotFound` if no circuit has the requested name.
    /// - `TooManyParameters` if the assignments cannot be counted.
    /// - Any structural error of the expression.
    pub fn run_all(&self, name: &str, line: usize) -> EvalResult<String> {
        let circuit = self.storage.get(name, line)?;
        let count = circuit.parameters().len();
        let assignments =
            Assignments::new(count).ok_or(RuntimeError::TooManyParameters { count, line })?;

        let mut output = format!("Execute {} {}\n", circuit.name(), circuit.expression());
        for values in assignments {
            let result = circuit.evaluate(&values, line)?;
            for value in &values {
                let _ = write!(output, "{} | ", u8::from(*value));
            }
            let _ = writeln!(output, "res: {}", u8::from(result));
        }

        Ok(output)
    }

    /// Executes `FIND`: synthesizes an expression from a truth table file.
    ///
    /// # Returns
    /// The parsed table (unless disabled in the config) followed by the
    /// quoted sum-of-products expression, which is `""` when no row outputs
    /// `1`.
    ///
    /// # Errors
    /// - `FileOpenFailure` if the file cannot be read.
    /// - `MalformedTruthTable` or `UnsupportedColumnCount` for a bad table.
    pub fn find(&self, path: &Path, line: usize) -> EvalResult<String> {
        let table = TruthTable::load(path, line)?;
        let expression = synthesize(&table, line)?;
        debug!(rows = table.rows().len(), cols = table.cols(), "synthesized expression");

        let mut output = String::new();
        if self.config.show_table {
            output.push_str(&table.to_string());
        }
        let _ = writeln!(output, "\"{expression}\"");
        Ok(output)
    }

    /// Executes `PRINT`: lists every stored circuit, ordered by name.
    #[must_use]
    pub fn print(&self) -> String {
        self.storage
            .sorted()
            .into_iter()
            .fold(String::new(), |mut output, circuit| {
                let _ = writeln!(output, "{circuit}");
                output
            })
    }
}
