//! Composable named-validator capability for stateful components.
//!
//! A component declares one or more validators by name; the capability
//! resolves those names against a shared registry, runs every resolved
//! validator against a value, and exposes an aggregated valid/invalid verdict
//! plus per-validator diagnostic detail:
//!
//! ```text
//! compose::<Base>() → ValidationCapability → validatable() → Validatable
//!                                  │                             │
//!                        register(validator)          set_validator("a b")
//!                                  │                             │
//!                                  └───── resolve by name ───────┤
//!                                                                │
//!                                   validate(value) → bool + invalid
//!                                                   + validation states
//! ```
//!
//! Rendering, attribute reflection, and input event wiring stay outside; the
//! crate's seams for them are the [`Validator`] and [`InvalidProjection`]
//! traits and the [`ValidatableInput`] adapter.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use validatable::{CompositionRoot, FnValidator};
//!
//! struct TextInput;
//!
//! let root = CompositionRoot::new();
//! let capability = root.compose::<TextInput>();
//! capability.register(Arc::new(FnValidator::new(
//!     "minlen",
//!     "value must be at least 4 characters",
//!     |v| v.as_str().is_some_and(|s| s.len() >= 4),
//! )));
//!
//! let mut state = capability.validatable();
//! state.set_validator("minlen");
//!
//! assert!(!state.validate(&json!("ab")));
//! assert!(state.invalid());
//! assert!(state.validate(&json!("abcd")));
//! assert!(!state.invalid());
//! ```

pub mod capability;
pub mod input;
pub mod projection;
pub mod registry;
pub mod types;
pub mod validatable;
pub mod validator;

pub use capability::{CompositionRoot, ValidationCapability};
pub use input::ValidatableInput;
pub use projection::InvalidProjection;
pub use registry::ValidatorRegistry;
pub use types::ValidationState;
pub use validatable::Validatable;
pub use validator::{FnValidator, Validator};
