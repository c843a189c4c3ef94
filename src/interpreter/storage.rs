use std::collections::HashMap;

use tracing::debug;

use crate::{circuit::Circuit, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Default number of circuits a storage can hold.
pub const MAX_CIRCUITS: usize = 100;

/// Named registry of validated circuits.
///
/// Names are unique. A stored circuit is never replaced: defining a name twice
/// keeps the first definition.
#[derive(Debug, Clone)]
pub struct CircuitStorage {
    circuits: HashMap<String, Circuit>,
    capacity: usize,
}

impl Default for CircuitStorage {
    fn default() -> Self {
        Self::with_capacity(MAX_CIRCUITS)
    }
}

impl CircuitStorage {
    /// Creates an empty storage that accepts at most `capacity` circuits.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { circuits: HashMap::new(),
               capacity }
    }

    /// Stores a circuit under its name.
    ///
    /// # Errors
    /// - `DuplicateCircuit` if the name is taken; the original stays.
    /// - `StorageFull` if the capacity is reached.
    ///
    /// # Example
    /// ```
    /// use circuitry::{circuit::Circuit, interpreter::storage::CircuitStorage};
    ///
    /// let mut storage = CircuitStorage::default();
    /// storage.insert(Circuit::new("id", vec!['a'], "a", 1).unwrap(), 1).unwrap();
    /// assert!(storage.insert(Circuit::new("id", vec!['a'], "!a", 2).unwrap(), 2).is_err());
    /// assert_eq!(storage.get("id", 3).unwrap().expression(), "a");
    /// ```
    pub fn insert(&mut self, circuit: Circuit, line: usize) -> EvalResult<()> {
        if self.circuits.contains_key(circuit.name()) {
            return Err(RuntimeError::DuplicateCircuit { name: circuit.name().to_string(),
                                                        line });
        }
        if self.circuits.len() >= self.capacity {
            return Err(RuntimeError::StorageFull { capacity: self.capacity,
                                                   line });
        }

        debug!(name = circuit.name(), "storing circuit");
        self.circuits.insert(circuit.name().to_string(), circuit);
        Ok(())
    }

    /// Looks up a circuit by name.
    ///
    /// # Errors
    /// Returns `CircuitNotFound` if no circuit has that name.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Circuit> {
        self.circuits
            .get(name)
            .ok_or_else(|| RuntimeError::CircuitNotFound { name: name.to_string(),
                                                           line })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.circuits.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.circuits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circuits.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns all circuits ordered by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Circuit> {
        let mut circuits: Vec<&Circuit> = self.circuits.values().collect();
        circuits.sort_by(|a, b| a.name().cmp(b.name()));
        circuits
    }
}
