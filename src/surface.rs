//! The boundary between the bridge and the host platform's surfaces.
//!
//! The bridge never touches views, gestures, or animations itself;
//! everything it needs from the platform layer is behind [`SurfaceHost`].
//! A host surface (a view wrapper, a table, a grid) implements this
//! trait and passes itself into each controller entry point, so the
//! controller stores no reference back into the host.

use crate::geometry::Point;
use crate::index::ModelIndex;

/// Handle for an installed legacy press-and-hold preview registration.
///
/// Minted by the host from [`SurfaceHost::register_legacy_preview`] and
/// passed back verbatim on unregistration. Opaque to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationToken(u64);

impl RegistrationToken {
    /// Wraps a host-chosen raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Handle for an installed context-menu interaction.
///
/// Same contract as [`RegistrationToken`], for the modern protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionToken(u64);

impl InteractionToken {
    /// Wraps a host-chosen raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identifies a host view that targeted previews can snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(u64);

impl AnchorId {
    /// Wraps a host-chosen raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The host-chosen raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The item found under a query point on an indexed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemHit {
    /// The index of the item.
    pub index: ModelIndex,
    /// The query point converted into the item's coordinate space.
    pub point_in_item: Point,
}

/// Host-side operations the bridge drives.
///
/// Implemented by the platform layer for each interactive surface. All
/// methods are called synchronously on the surface's owning thread.
pub trait SurfaceHost {
    /// Register the surface with the legacy press-and-hold preview API,
    /// returning the handle needed to unregister later.
    fn register_legacy_preview(&mut self) -> RegistrationToken;

    /// Undo a previous [`register_legacy_preview`](Self::register_legacy_preview).
    fn unregister_legacy_preview(&mut self, token: RegistrationToken);

    /// Attach a context-menu interaction to the surface, returning the
    /// handle needed to detach it later.
    fn install_interaction(&mut self) -> InteractionToken;

    /// Undo a previous [`install_interaction`](Self::install_interaction).
    fn remove_interaction(&mut self, token: InteractionToken);

    /// Resolve a point in surface coordinates to the item under it.
    ///
    /// Plain surfaces, and indexed surfaces when the point falls between
    /// items, return `None`. The bridge never guesses at coordinates;
    /// this is the surface's native resolution.
    fn item_at(&self, point: Point) -> Option<ItemHit>;

    /// Resolve an item index to its current on-screen view, or `None`
    /// when the item has no view (scrolled out, removed).
    fn item_anchor(&self, index: ModelIndex) -> Option<AnchorId>;

    /// The surface's own view, the anchor for non-indexed previews.
    fn surface_anchor(&self) -> AnchorId;
}
