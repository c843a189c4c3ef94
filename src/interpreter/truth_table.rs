use std::{fmt, fs, io, path::Path};

use tracing::{debug, warn};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest number of input columns, one per letter `a` to `z`.
pub const MAX_INPUT_COLUMNS: usize = 26;

/// Rows of integers read from a row-oriented text table.
///
/// The last column of a row is the function output; the preceding columns are
/// its inputs. Rows are expected to have equal widths. Ragged rows are logged
/// but not rejected: each row is read with its own width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    rows: Vec<Vec<i64>>,
}

impl TruthTable {
    /// Reads a truth table from a file.
    ///
    /// # Errors
    /// - `FileOpenFailure` if the file cannot be read.
    /// - `MalformedTruthTable` if the file is not valid UTF-8.
    /// - Any error of [`TruthTable::parse`].
    pub fn load(path: &Path, line: usize) -> EvalResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
                                               io::ErrorKind::InvalidData => {
                                                   RuntimeError::MalformedTruthTable { details: e.to_string(),
                                                                                       line }
                                               },
                                               _ => RuntimeError::FileOpenFailure { path: path.to_path_buf(),
                                                                                    details: e.to_string(),
                                                                                    line },
                                           })?;
        debug!(path = %path.display(), "loaded truth table");
        Self::parse(&text, line)
    }

    /// Parses whitespace-separated integers, one row per line.
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `MalformedTruthTable` if a cell is not an integer or a row has
    /// fewer than two columns.
    ///
    /// # Example
    /// ```
    /// use circuitry::interpreter::truth_table::TruthTable;
    ///
    /// let table = TruthTable::parse("0 0 0\n0 1 1\n", 1).unwrap();
    /// assert_eq!(table.rows().len(), 2);
    /// assert_eq!(table.cols(), 3);
    /// assert!(TruthTable::parse("0 x 1", 1).is_err());
    /// ```
    pub fn parse(text: &str, line: usize) -> EvalResult<Self> {
        let mut rows: Vec<Vec<i64>> = Vec::new();

        for (number, row) in text.lines().enumerate().filter(|(_, r)| !r.trim().is_empty()) {
            let cells = row.split_whitespace()
                           .map(|cell| {
                               cell.parse::<i64>().map_err(|_| RuntimeError::MalformedTruthTable {
                                   details: format!("row {}: '{cell}' is not an integer", number + 1),
                                   line,
                               })
                           })
                           .collect::<EvalResult<Vec<_>>>()?;

            if cells.len() < 2 {
                return Err(RuntimeError::MalformedTruthTable { details: format!("row {} has {} column(s), expected inputs and an output",
                                                                                number + 1,
                                                                                cells.len()),
                                                               line });
            }

            if let Some(first) = rows.first()
               && first.len() != cells.len()
            {
                warn!(row = number + 1,
                      expected = first.len(),
                      found = cells.len(),
                      "truth table rows have unequal column counts");
            }
            rows.push(cells);
        }

        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Width of the last row, or zero for an empty table.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.rows.last().map_or(0, Vec::len)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Synthesizes a sum-of-products expression from a truth table.
///
/// Every row whose output is `1` contributes one conjunction of its inputs, a
/// `0` input negated with `!`. The terms are joined with `|` in row order. A
/// table where no row outputs `1` yields an empty string.
///
/// # Errors
/// Returns `UnsupportedColumnCount` if any row has more inputs than there are
/// column symbols.
///
/// # Example
/// ```
/// use circuitry::interpreter::truth_table::{TruthTable, synthesize};
///
/// let table = TruthTable::parse("1 0 1\n0 1 0\n", 1).unwrap();
/// assert_eq!(synthesize(&table, 1).unwrap(), "(a & !b)");
/// ```
pub fn synthesize(table: &TruthTable, line: usize) -> EvalResult<String> {
    let widest = table.rows().iter().map(|row| row.len().saturating_sub(1)).max().unwrap_or(0);
    if widest > MAX_INPUT_COLUMNS {
        return Err(RuntimeError::UnsupportedColumnCount { found: widest,
                                                          maximum: MAX_INPUT_COLUMNS,
                                                          line });
    }

    let terms: Vec<String> =
        table.rows()
             .iter()
             .filter_map(|row| row.split_last())
             .filter(|(output, _)| **output == 1)
             .map(|(_, inputs)| {
                 let literals: Vec<String> =
                     inputs.iter()
                           .zip('a'..='z')
                           .map(|(&bit, symbol)| {
                               if bit == 0 { format!("!{symbol}") } else { symbol.to_string() }
                           })
                           .collect();
                 format!("({})", literals.join(" & "))
             })
             .collect();

    Ok(terms.join(" | "))
}
