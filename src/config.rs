use crate::interpreter::storage::MAX_CIRCUITS;

/// Settings of one interpreter session.
///
/// The binary fills these from its command-line arguments; library users
/// start from [`Config::default`] and adjust what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of circuits that can be defined.
    pub capacity:   usize,
    /// Print a banner and an `Enter command: ` prompt before each command.
    pub prompt:     bool,
    /// Echo the parsed truth table before the result of `FIND`.
    pub show_table: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { capacity:   MAX_CIRCUITS,
               prompt:     false,
               show_table: true, }
    }
}
