//! Per-surface registration storage.
//!
//! One [`Registration`] lives per registered surface: the weak delegate,
//! the host handles needed to tear the registration down again, and the
//! single in-flight candidate. The surface (via its controller) owns the
//! store; the store never owns the delegate.

use std::sync::{Arc, Weak};

use crate::delegate::{IndexedPreviewDelegate, PreviewDelegate};
use crate::geometry::Point;
use crate::index::ModelIndex;
use crate::model::PreviewModel;
use crate::surface::{InteractionToken, RegistrationToken};

/// The registered delegate, held weakly to avoid a retain cycle with the
/// screen that owns the surface.
pub(crate) enum RegisteredDelegate<C> {
    /// A plain-surface delegate.
    Plain(Weak<dyn PreviewDelegate<C>>),
    /// A table/collection delegate.
    Indexed(Weak<dyn IndexedPreviewDelegate<C>>),
}

impl<C> RegisteredDelegate<C> {
    /// Whether this registration is for exactly `other` (pointer identity).
    pub(crate) fn matches_plain(&self, other: &Arc<dyn PreviewDelegate<C>>) -> bool {
        matches!(self, Self::Plain(weak) if Weak::ptr_eq(weak, &Arc::downgrade(other)))
    }

    /// Whether this registration is for exactly `other` (pointer identity).
    pub(crate) fn matches_indexed(&self, other: &Arc<dyn IndexedPreviewDelegate<C>>) -> bool {
        matches!(self, Self::Indexed(weak) if Weak::ptr_eq(weak, &Arc::downgrade(other)))
    }
}

/// The cached result of the most recent successful location query.
///
/// Exactly zero or one candidate exists per registration. It is replaced
/// wholesale by each new non-empty query and taken out at commit.
pub(crate) struct Candidate<C> {
    /// The model the delegate produced.
    pub(crate) model: PreviewModel<C>,
    /// The query point, in surface coordinates.
    pub(crate) point: Point,
    /// The item the model came from, for indexed queries that hit one.
    pub(crate) index: Option<ModelIndex>,
}

/// Everything stored for one registered surface.
pub(crate) struct Registration<C> {
    /// The delegate answering location queries.
    pub(crate) delegate: RegisteredDelegate<C>,
    /// Handle for the legacy preview registration.
    pub(crate) legacy: RegistrationToken,
    /// Handle for the context-menu interaction.
    pub(crate) interaction: InteractionToken,
    /// The in-flight candidate, if any.
    pub(crate) candidate: Option<Candidate<C>>,
}

impl<C> Registration<C> {
    pub(crate) fn new(
        delegate: RegisteredDelegate<C>,
        legacy: RegistrationToken,
        interaction: InteractionToken,
    ) -> Self {
        Self {
            delegate,
            legacy,
            interaction,
            candidate: None,
        }
    }
}
