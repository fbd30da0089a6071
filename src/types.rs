use serde::{Deserialize, Serialize};

/// Outcome of one validator run within a `validate` call.
///
/// After calling [`Validatable::validate`](crate::Validatable::validate) the
/// component holds one of these per resolved validator, in declaration order.
/// Hosts that surface diagnostics to users (or ship them across a process
/// boundary) can serialize the list as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationState {
    /// Name of the validator that produced this entry.
    pub validator: String,
    /// Result of the test.
    pub valid: bool,
    /// Failure text authored by the validator. Present on every entry so a
    /// host can render the message without a second lookup; opaque to the
    /// core.
    pub message: String,
}
