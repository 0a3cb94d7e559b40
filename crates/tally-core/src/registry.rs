use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{Result, TallyError};

/// Named counter registry: `name -> value`.
///
/// Each call locks only the shard holding `name`, so every operation on one
/// name is serialized while different names proceed independently.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counters: DashMap<String, u64>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Insert `name -> 0`. Fails if `name` is already present.
    pub fn create(&self, name: &str) -> Result<u64> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TallyError::AlreadyExists(name.to_string())),
            Entry::Vacant(v) => {
                v.insert(0);
                tracing::trace!(counter = %name, "counter created");
                Ok(0)
            }
        }
    }

    /// Add one and return the new value.
    pub fn increment(&self, name: &str) -> Result<u64> {
        let mut value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| TallyError::NotFound(name.to_string()))?;
        *value += 1;
        Ok(*value)
    }

    pub fn read(&self, name: &str) -> Result<u64> {
        self.counters
            .get(name)
            .map(|v| *v.value())
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.counters
            .remove(name)
            .map(|_| tracing::trace!(counter = %name, "counter deleted"))
            .ok_or_else(|| TallyError::NotFound(name.to_string()))
    }

    /// Number of live counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
