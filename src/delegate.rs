//! Delegate contracts a host screen implements to supply preview models.
//!
//! A screen that wants previews on one of its surfaces implements the
//! contract matching that surface and registers itself with the
//! surface's [`PreviewController`](crate::bridge::PreviewController).
//! The controller holds the delegate weakly: the screen owns the surface
//! (and transitively the controller), so a strong reference here would
//! be a cycle. A deallocated delegate simply yields no model on query.
//!
//! Two contracts exist:
//!
//! - [`PreviewDelegate`] for plain surfaces, queried with a point in
//!   surface coordinates.
//! - [`IndexedPreviewDelegate`] for table and collection surfaces,
//!   queried with the item under the point and an item-local point. Grid
//!   and row specialization lives entirely in the surface's own
//!   point-to-item resolution, so both surface kinds share this trait.

use crate::geometry::Point;
use crate::index::ModelIndex;
use crate::model::PreviewModel;

/// Supplies preview models for a plain interactive surface.
pub trait PreviewDelegate<C> {
    /// Returns the model to preview at `point`, in surface coordinates,
    /// or `None` when nothing at that point is previewable.
    fn model_at(&self, point: Point) -> Option<PreviewModel<C>>;
}

/// Supplies preview models for an indexed (table or collection) surface.
pub trait IndexedPreviewDelegate<C> {
    /// Returns the model to preview for the item at `index`, queried at
    /// `point_in_item` in the item's own coordinates, or `None` when the
    /// item is not previewable.
    fn model_at_index(&self, index: ModelIndex, point_in_item: Point) -> Option<PreviewModel<C>>;

    /// Fallback for points that map to no item, or items the indexed
    /// accessor declined.
    ///
    /// The default declines everything; override it to make the gaps
    /// between items (or declined items) previewable as surface content.
    fn model_at(&self, point: Point) -> Option<PreviewModel<C>> {
        let _ = point;
        None
    }
}
