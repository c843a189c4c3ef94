/// Input assignment enumeration.
///
/// Provides the iterator that walks every combination of circuit inputs in
/// truth-table order, used by the `ALL` command.
pub mod bits;
