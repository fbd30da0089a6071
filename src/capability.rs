//! Composition guard: attaches the validation capability to a base component
//! type exactly once.
//!
//! Attaching the capability to the same base type twice — directly, or
//! transitively through another behavior that already carries it — must not
//! duplicate the shared registry or fork the capability's identity. The guard
//! is a memoizing factory keyed by base-type identity: the first request for
//! a base type builds the capability, every later request returns the cached
//! one. Missing the cache would not crash anything; it would silently split
//! state across accidentally-duplicated capability layers, which is why the
//! guard is mandatory.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::registry::ValidatorRegistry;
use crate::validatable::Validatable;
use crate::validator::Validator;

/// Owns the capability cache and the single shared [`ValidatorRegistry`].
///
/// A root is the unit of isolation: every capability composed from one root
/// shares one registry, and two roots share nothing. Tests construct a fresh
/// root per case; an application typically keeps one for its lifetime.
#[derive(Default)]
pub struct CompositionRoot {
    registry: OnceLock<Arc<ValidatorRegistry>>,
    composed: RwLock<HashMap<TypeId, ValidationCapability>>,
}

impl CompositionRoot {
    pub fn new() -> Self {
        CompositionRoot::default()
    }

    /// Compose the validation capability onto base type `T`.
    ///
    /// Memoized by `T`'s type identity: the second and every later call for
    /// the same `T` returns a handle to the same capability, so repeated or
    /// diamond application collapses to a single one. The shared registry is
    /// created lazily by the first composition on this root.
    pub fn compose<T: ?Sized + 'static>(&self) -> ValidationCapability {
        let key = TypeId::of::<T>();
        {
            let composed = self
                .composed
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(capability) = composed.get(&key) {
                return capability.clone();
            }
        }

        let mut composed = self
            .composed
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        composed
            .entry(key)
            .or_insert_with(|| {
                debug!(base = type_name::<T>(), "validation capability composed");
                ValidationCapability {
                    registry: Arc::clone(self.registry()),
                }
            })
            .clone()
    }

    /// True if the capability has already been composed onto `T`.
    ///
    /// Reliable because there is exactly one canonical capability per base
    /// type, not one per call site.
    pub fn is_composed<T: ?Sized + 'static>(&self) -> bool {
        self.composed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// The root's shared registry, created on first capability composition
    /// and alive as long as the root.
    pub fn registry(&self) -> &Arc<ValidatorRegistry> {
        self.registry
            .get_or_init(|| Arc::new(ValidatorRegistry::new()))
    }
}

impl std::fmt::Debug for CompositionRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let composed = self
            .composed
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("CompositionRoot")
            .field("composed", &composed)
            .finish()
    }
}

/// Handle to one applied capability: the validation behavior bound to a base
/// type, sharing its root's registry.
///
/// Cloning is cheap and does not re-apply anything.
#[derive(Clone)]
pub struct ValidationCapability {
    registry: Arc<ValidatorRegistry>,
}

impl ValidationCapability {
    /// Register a validator in the shared registry. Convenience for
    /// `capability.registry().register(..)`.
    pub fn register(&self, validator: Arc<dyn Validator>) {
        self.registry.register(validator);
    }

    /// The registry this capability resolves names against.
    pub fn registry(&self) -> &Arc<ValidatorRegistry> {
        &self.registry
    }

    /// Mint the per-instance validation state for one component instance.
    pub fn validatable(&self) -> Validatable {
        Validatable::new(Arc::clone(&self.registry))
    }

    /// True if both handles resolve against the same registry instance —
    /// i.e. they stem from the same logical capability application chain.
    pub fn shares_registry_with(&self, other: &ValidationCapability) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl std::fmt::Debug for ValidationCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationCapability")
            .field("registry", &self.registry)
            .finish()
    }
}
