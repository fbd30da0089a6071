//! The name → validator registry shared by every component composed from the
//! same root.
//!
//! Lookups are case-sensitive exact matches and return `Option` — an
//! unresolved name is a normal, recoverable condition (a validator may be
//! registered after a component was configured), never an error.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::validator::Validator;

/// Keyed store mapping a validator name to its implementation.
///
/// Registration under an already-taken name silently overwrites — last write
/// wins, so a pluggable validator can be swapped at runtime without the
/// components that declare it noticing anything but the new behavior.
///
/// Registration is expected to be rare (module or capability init); lookups
/// are the hot path.
#[derive(Default)]
pub struct ValidatorRegistry {
    entries: RwLock<HashMap<String, Arc<dyn Validator>>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        ValidatorRegistry::default()
    }

    /// Store `validator` under its own [`name`](Validator::name).
    /// Overwrites any previous entry with the same name.
    pub fn register(&self, validator: Arc<dyn Validator>) {
        let name = validator.name().to_string();
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let replaced = entries.insert(name.clone(), validator).is_some();
        debug!(name = %name, replaced, "validator registered");
    }

    /// Exact-match lookup. `None` when no validator is registered under
    /// `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Validator>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// True if a validator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the registered names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("len", &self.len())
            .finish()
    }
}
