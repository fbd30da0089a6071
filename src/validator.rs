//! The leaf validator contract.
//!
//! Validators are named, pure, synchronous predicates over a value, paired
//! with a human-readable failure message. The core consumes them through this
//! trait; it never ships concrete rules of its own.

use serde_json::Value;

/// Extension point implemented by leaf validators.
///
/// The `value` handed to [`validate`](Validator::validate) is polymorphic: a
/// scalar, an ordered sequence, or a keyed mapping. The core passes it
/// through unchanged — if a mapping should be checked entrywise, that
/// iteration is the validator's own responsibility.
///
/// Implementations must be fast and side-effect free; `validate` runs to
/// completion with no cancellation or timeout applied.
pub trait Validator: Send + Sync {
    /// Identity used as the registry key. Case-sensitive.
    fn name(&self) -> &str;

    /// Failure text shown when this validator rejects a value. May be
    /// computed per call.
    fn message(&self) -> String;

    /// Tests `value`. Returning `false` marks the component invalid.
    fn validate(&self, value: &Value) -> bool;
}

/// Closure-backed [`Validator`].
///
/// Lets a caller register a rule without defining a new type:
///
/// ```rust
/// use serde_json::Value;
/// use validatable::FnValidator;
///
/// let minlen = FnValidator::new("minlen", "value is too short", |v: &Value| {
///     v.as_str().is_some_and(|s| s.len() >= 4)
/// });
/// ```
pub struct FnValidator<F> {
    name: String,
    message: String,
    predicate: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(name: impl Into<String>, message: impl Into<String>, predicate: F) -> Self {
        FnValidator {
            name: name.into(),
            message: message.into(),
            predicate,
        }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn validate(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}
