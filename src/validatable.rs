//! Per-component validation state: declared validator names, the lazily
//! resolved validator cache, the aggregated verdict, and the `invalid`
//! transition handling.
//!
//! Aggregation collects **all** per-validator results, not just the first
//! failure — every declared validator runs on every `validate` call so the
//! diagnostic list stays complete for display.
//!
//! The resolved-validator cache is a derived value: it is invalidated
//! whenever the declaration changes and recomputed on the next read. A
//! component therefore moves through three informal phases — unconfigured
//! (no names), configured (names set, cache stale), resolved (cache built) —
//! and drops back to configured on every reassignment.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::projection::InvalidProjection;
use crate::registry::ValidatorRegistry;
use crate::types::ValidationState;
use crate::validator::Validator;

/// Validation state owned by one component instance.
///
/// Created through
/// [`ValidationCapability::validatable`](crate::ValidationCapability::validatable),
/// which binds it to the capability's shared registry. The owning component
/// serializes all calls; nothing here tolerates re-entrant `validate` from
/// inside a validator.
pub struct Validatable {
    registry: Arc<ValidatorRegistry>,
    /// Declared validator names, in declaration order. Structured source of
    /// truth — the space-delimited form is parsed once at the boundary.
    names: Vec<String>,
    /// Resolution cache. `None` = stale; rebuilt on next read.
    resolved: Option<Vec<Arc<dyn Validator>>>,
    invalid: bool,
    states: Option<Vec<ValidationState>>,
    projection: Option<Box<dyn InvalidProjection>>,
}

impl Validatable {
    pub(crate) fn new(registry: Arc<ValidatorRegistry>) -> Self {
        Validatable {
            registry,
            names: Vec::new(),
            resolved: None,
            invalid: false,
            states: None,
            projection: None,
        }
    }

    /// Attach the projection notified on `invalid` transitions.
    pub fn with_projection(mut self, projection: Box<dyn InvalidProjection>) -> Self {
        self.projection = Some(projection);
        self
    }

    // ─── Declaration ────────────────────────────────────────────────────────

    /// Set the validator declaration from its space-delimited form, e.g.
    /// `"minlen no-digits"`. Empty or all-whitespace input declares zero
    /// validators (every later `validate` succeeds vacuously).
    ///
    /// Invalidates the resolution cache.
    pub fn set_validator(&mut self, declaration: &str) {
        self.names = declaration.split_whitespace().map(str::to_string).collect();
        self.resolved = None;
    }

    /// Structured counterpart of [`set_validator`](Validatable::set_validator).
    pub fn set_validator_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self.resolved = None;
    }

    /// Declared validator names, in declaration order.
    pub fn validator_names(&self) -> &[String] {
        &self.names
    }

    // ─── Resolution ─────────────────────────────────────────────────────────

    /// True if at least one declared name resolves against the registry.
    ///
    /// Forces re-resolution when the cache is stale, and also when a previous
    /// resolution produced nothing while names are declared — that covers
    /// validators registered after the component was configured.
    pub fn has_validator(&mut self) -> bool {
        let needs_resolve = match &self.resolved {
            None => true,
            Some(resolved) => resolved.is_empty() && !self.names.is_empty(),
        };
        if needs_resolve {
            self.resolve();
        }
        self.resolved.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Rebuild the resolution cache from the current declaration.
    ///
    /// Names with no registry entry are dropped without comment; a component
    /// declaring only unknown names behaves exactly like one declaring none.
    fn resolve(&mut self) {
        let resolved: Vec<Arc<dyn Validator>> = self
            .names
            .iter()
            .filter_map(|name| self.registry.lookup(name))
            .collect();
        trace!(
            declared = self.names.len(),
            resolved = resolved.len(),
            "validator names resolved"
        );
        self.resolved = Some(resolved);
    }

    // ─── Validation ─────────────────────────────────────────────────────────

    /// Run every resolved validator against `value`, in declaration order,
    /// and return the aggregated verdict.
    ///
    /// The verdict is conjunctive: valid iff every validator accepts. No
    /// short-circuiting — each run rebuilds the full
    /// [`validation_states`](Validatable::validation_states) list. With no
    /// validator configured the call is vacuously valid and the list is
    /// cleared.
    ///
    /// Updates [`invalid`](Validatable::invalid), which notifies the attached
    /// projection on a transition.
    pub fn validate(&mut self, value: &Value) -> bool {
        let valid = self.check_validity(value);
        self.set_invalid(!valid);
        valid
    }

    fn check_validity(&mut self, value: &Value) -> bool {
        if !self.has_validator() {
            self.states = None;
            return true;
        }

        let mut valid = true;
        let mut states = Vec::new();
        for validator in self.resolved.as_deref().unwrap_or(&[]) {
            let result = validator.validate(value);
            valid &= result;
            states.push(ValidationState {
                validator: validator.name().to_string(),
                valid: result,
                message: validator.message(),
            });
        }
        trace!(valid, validators = states.len(), "validated value");
        self.states = Some(states);
        valid
    }

    // ─── Invalid state ──────────────────────────────────────────────────────

    /// True if the last `validate` call (or a manual
    /// [`set_invalid`](Validatable::set_invalid)) left the component invalid.
    pub fn invalid(&self) -> bool {
        self.invalid
    }

    /// Set `invalid` directly, bypassing validation.
    ///
    /// Transitions notify the projection exactly once per edge; writing the
    /// current value again notifies nothing.
    pub fn set_invalid(&mut self, invalid: bool) {
        if invalid == self.invalid {
            return;
        }
        self.invalid = invalid;
        debug!(invalid, "invalid state changed");
        if let Some(projection) = &mut self.projection {
            if invalid {
                projection.set_invalid_marker();
            } else {
                projection.clear_invalid_marker();
            }
        }
    }

    /// Per-validator results of the latest `validate` call, in declaration
    /// order. `None` until `validate` has run with at least one resolved
    /// validator, and again after a run with none.
    pub fn validation_states(&self) -> Option<&[ValidationState]> {
        self.states.as_deref()
    }
}

impl std::fmt::Debug for Validatable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validatable")
            .field("names", &self.names)
            .field("resolved", &self.resolved.as_ref().map(Vec::len))
            .field("invalid", &self.invalid)
            .finish()
    }
}
