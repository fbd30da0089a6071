//! Thin adapter between an input-change signal and validation.
//!
//! The core never listens for input itself — that wiring belongs to the host.
//! This adapter is the one-line bridge a typical text-input component needs:
//! forward the changed value to `validate` and let the verdict drive the
//! `invalid` state (and through it, the projection).

use serde_json::Value;

use crate::validatable::Validatable;

/// Wraps a [`Validatable`] behind an input-shaped surface.
pub struct ValidatableInput {
    state: Validatable,
}

impl ValidatableInput {
    pub fn new(state: Validatable) -> Self {
        ValidatableInput { state }
    }

    /// Handle a change notification: validate the new value and return the
    /// verdict. `invalid` and the validation states update as a side effect.
    pub fn on_input(&mut self, value: &Value) -> bool {
        self.state.validate(value)
    }

    /// The wrapped validation state.
    pub fn state(&self) -> &Validatable {
        &self.state
    }

    /// Mutable access for configuration (declaration changes etc.).
    pub fn state_mut(&mut self) -> &mut Validatable {
        &mut self.state
    }
}

impl std::fmt::Debug for ValidatableInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatableInput")
            .field("state", &self.state)
            .finish()
    }
}
