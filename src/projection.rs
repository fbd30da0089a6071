//! Invalid-marker projection seam.
//!
//! When a component's `invalid` state flips, something external usually has
//! to change with it — an accessibility flag, a reflected attribute, a style
//! hook. The core only decides *when* (on each transition, never on a
//! no-change write); *what* the marker looks like belongs to the host.

/// Extension point notified on every transition of the `invalid` state.
///
/// No default implementation ships with the core: the projection target
/// (attribute store, DOM, widget tree) is host-specific. A typical
/// implementation sets a boolean accessibility attribute such as
/// `aria-invalid` on the component's external representation and removes it
/// again on the clearing transition.
pub trait InvalidProjection {
    /// `invalid` went false → true: mark the external representation.
    fn set_invalid_marker(&mut self);

    /// `invalid` went true → false: remove the marker.
    fn clear_invalid_marker(&mut self);
}
