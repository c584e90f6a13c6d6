//! The per-surface interaction bridge.
//!
//! [`PreviewController`] is the one piece of mutable state this crate
//! manages per interactive surface. It normalizes the two host callback
//! protocols, the legacy press-and-hold preview sequence and the modern
//! context-menu interaction sequence, into a single flow:
//!
//! 1. the host asks what is previewable at a point; the controller asks
//!    the registered delegate and caches the answer as the candidate,
//! 2. the host requests preview content, a menu configuration, or a
//!    targeted snapshot; the controller derives all of them from the
//!    cached candidate without re-querying the delegate,
//! 3. the host commits or cancels; committing dispatches the directive
//!    through the commit engine and clears the candidate.
//!
//! Candidate acquisition is shared by both protocol adapters, so the two
//! callback shapes can never disagree about what is being previewed.
//!
//! All methods must be called on the thread the controller was created
//! on; this is checked in debug builds.

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::commit::{perform_commit, ContentPresenter};
use crate::delegate::{IndexedPreviewDelegate, PreviewDelegate};
use crate::geometry::{Point, Rect};
use crate::menu::{menu_entries, MenuConfiguration};
use crate::model::ContentHandle;
use crate::store::{Candidate, Registration, RegisteredDelegate};
use crate::surface::SurfaceHost;
use crate::targeted::TargetedPreview;
use crate::targets;
use crate::thread_check::ThreadAffinity;

/// What the legacy protocol needs to start one preview.
pub struct LegacyPreview<C> {
    /// The content to present while peeking.
    pub content: ContentHandle<C>,
    /// Source rectangle hint for the host's highlight animation, taken
    /// from the model's origin rectangle when present.
    pub source_rect: Option<Rect>,
}

impl<C> fmt::Debug for LegacyPreview<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyPreview")
            .field("content", &self.content)
            .field("source_rect", &self.source_rect)
            .finish()
    }
}

/// The interaction-state bridge for one interactive surface.
///
/// The surface owns its controller 1:1; the controller owns the
/// registration slot and, inside it, the current candidate. Hosts pass
/// their [`SurfaceHost`] into each call rather than the controller
/// keeping a reference back into the host.
pub struct PreviewController<C> {
    affinity: ThreadAffinity,
    registration: Option<Registration<C>>,
}

impl<C: 'static> Default for PreviewController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: 'static> PreviewController<C> {
    /// Creates a controller with no registered delegate.
    pub fn new() -> Self {
        Self {
            affinity: ThreadAffinity::current(),
            registration: None,
        }
    }

    /// Whether a delegate is currently registered.
    ///
    /// A registration whose weak delegate has died still counts; it is
    /// cleared only by an explicit [`set_delegate`](Self::set_delegate)
    /// or [`set_indexed_delegate`](Self::set_indexed_delegate) call.
    pub fn has_delegate(&self) -> bool {
        self.registration.is_some()
    }

    /// Whether an interaction's candidate is currently cached.
    pub fn has_candidate(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|reg| reg.candidate.is_some())
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Registers, replaces, or removes the plain-surface delegate.
    ///
    /// Setting the delegate the surface already has (by identity) is a
    /// no-op. Otherwise any previous registration is torn down first:
    /// the legacy context is unregistered and the interaction removed.
    /// `None` stops there, leaving the surface unregistered.
    pub fn set_delegate(
        &mut self,
        host: &mut dyn SurfaceHost,
        delegate: Option<Arc<dyn PreviewDelegate<C>>>,
    ) {
        self.affinity.debug_assert_same_thread();
        match (&self.registration, &delegate) {
            (Some(reg), Some(new)) if reg.delegate.matches_plain(new) => return,
            (None, None) => return,
            _ => {}
        }

        self.teardown(host);
        if let Some(delegate) = delegate {
            self.install(host, RegisteredDelegate::Plain(Arc::downgrade(&delegate)));
        }
    }

    /// Registers, replaces, or removes the indexed delegate.
    ///
    /// Same contract as [`set_delegate`](Self::set_delegate), for table
    /// and collection surfaces.
    pub fn set_indexed_delegate(
        &mut self,
        host: &mut dyn SurfaceHost,
        delegate: Option<Arc<dyn IndexedPreviewDelegate<C>>>,
    ) {
        self.affinity.debug_assert_same_thread();
        match (&self.registration, &delegate) {
            (Some(reg), Some(new)) if reg.delegate.matches_indexed(new) => return,
            (None, None) => return,
            _ => {}
        }

        self.teardown(host);
        if let Some(delegate) = delegate {
            self.install(host, RegisteredDelegate::Indexed(Arc::downgrade(&delegate)));
        }
    }

    fn teardown(&mut self, host: &mut dyn SurfaceHost) {
        if let Some(registration) = self.registration.take() {
            host.unregister_legacy_preview(registration.legacy);
            host.remove_interaction(registration.interaction);
            trace!(target: targets::REGISTRATION, "tore down preview registration");
        }
    }

    fn install(&mut self, host: &mut dyn SurfaceHost, delegate: RegisteredDelegate<C>) {
        let legacy = host.register_legacy_preview();
        let interaction = host.install_interaction();
        self.registration = Some(Registration::new(delegate, legacy, interaction));
        trace!(target: targets::REGISTRATION, "installed preview registration");
    }

    // ------------------------------------------------------------------
    // Candidate acquisition
    // ------------------------------------------------------------------

    /// Asks the delegate for a model at `point` and caches the answer.
    ///
    /// Returns whether a fresh candidate was stored. On `false` any
    /// previous candidate is left untouched; callers must not fall back
    /// to it.
    fn acquire_candidate(&mut self, host: &dyn SurfaceHost, point: Point) -> bool {
        let Some(registration) = self.registration.as_mut() else {
            return false;
        };

        let produced = match &registration.delegate {
            RegisteredDelegate::Plain(weak) => {
                let Some(delegate) = weak.upgrade() else {
                    trace!(target: targets::BRIDGE, "plain delegate deallocated; no model");
                    return false;
                };
                delegate.model_at(point).map(|model| Candidate {
                    model,
                    point,
                    index: None,
                })
            }
            RegisteredDelegate::Indexed(weak) => {
                let Some(delegate) = weak.upgrade() else {
                    trace!(target: targets::BRIDGE, "indexed delegate deallocated; no model");
                    return false;
                };
                match host.item_at(point) {
                    Some(hit) => delegate
                        .model_at_index(hit.index, hit.point_in_item)
                        .map(|model| Candidate {
                            model,
                            point,
                            index: Some(hit.index),
                        })
                        .or_else(|| {
                            // The item declined; the gap-filling plain
                            // accessor gets the surface-space point.
                            delegate.model_at(point).map(|model| Candidate {
                                model,
                                point,
                                index: None,
                            })
                        }),
                    None => delegate.model_at(point).map(|model| Candidate {
                        model,
                        point,
                        index: None,
                    }),
                }
            }
        };

        match produced {
            Some(candidate) => {
                trace!(
                    target: targets::BRIDGE,
                    content = ?candidate.model.content_handle().id(),
                    point = ?candidate.point,
                    "cached preview candidate"
                );
                registration.candidate = Some(candidate);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Legacy protocol adapter
    // ------------------------------------------------------------------

    /// Legacy "view controller for location" callback.
    ///
    /// Queries the delegate, caches the candidate, and returns the
    /// content to peek plus the source-rectangle hint.
    pub fn preview_content_at(
        &mut self,
        host: &dyn SurfaceHost,
        point: Point,
    ) -> Option<LegacyPreview<C>> {
        self.affinity.debug_assert_same_thread();
        if !self.acquire_candidate(host, point) {
            return None;
        }

        let candidate = self.registration.as_ref()?.candidate.as_ref()?;
        Some(LegacyPreview {
            content: candidate.model.content_handle().clone(),
            source_rect: candidate.model.origin_rect(),
        })
    }

    /// Legacy "commit" callback.
    ///
    /// `content` must be the handle returned by the matching
    /// [`preview_content_at`](Self::preview_content_at) call.
    pub fn commit_preview(
        &mut self,
        presenter: &mut dyn ContentPresenter<C>,
        content: &ContentHandle<C>,
    ) {
        self.affinity.debug_assert_same_thread();
        self.commit_candidate(presenter, content);
    }

    // ------------------------------------------------------------------
    // Modern protocol adapter
    // ------------------------------------------------------------------

    /// Modern "configuration for location" callback.
    ///
    /// Queries the delegate, caches the candidate, and returns the lazy
    /// content and menu providers. The providers read the candidate
    /// cached now; they never re-query the delegate.
    pub fn menu_configuration_at(
        &mut self,
        host: &dyn SurfaceHost,
        point: Point,
    ) -> Option<MenuConfiguration<C>> {
        self.affinity.debug_assert_same_thread();
        if !self.acquire_candidate(host, point) {
            return None;
        }

        let candidate = self.registration.as_ref()?.candidate.as_ref()?;
        let content = candidate.model.content_handle().clone();
        let actions = candidate.model.actions().to_vec();
        Some(MenuConfiguration::new(
            Box::new(move || content.clone()),
            Box::new(move || menu_entries(&actions)),
        ))
    }

    /// Modern "preview for highlighting" callback.
    pub fn highlight_preview(&self, host: &dyn SurfaceHost) -> Option<TargetedPreview> {
        self.affinity.debug_assert_same_thread();
        self.targeted_preview(host)
    }

    /// Modern "preview for dismissing" callback.
    pub fn dismissal_preview(&self, host: &dyn SurfaceHost) -> Option<TargetedPreview> {
        self.affinity.debug_assert_same_thread();
        self.targeted_preview(host)
    }

    /// Modern "will perform preview action" callback.
    ///
    /// `content` is the handle the host's commit animation is carrying;
    /// it must match the cached candidate.
    pub fn perform_preview_commit(
        &mut self,
        presenter: &mut dyn ContentPresenter<C>,
        content: &ContentHandle<C>,
    ) {
        self.affinity.debug_assert_same_thread();
        self.commit_candidate(presenter, content);
    }

    /// Host-reported cancellation: the interaction ended without a
    /// commit. Clears the candidate so it cannot leak into the next
    /// interaction.
    pub fn cancel_preview(&mut self) {
        self.affinity.debug_assert_same_thread();
        if let Some(registration) = self.registration.as_mut() {
            if registration.candidate.take().is_some() {
                trace!(target: targets::BRIDGE, "preview cancelled; candidate cleared");
            }
        }
    }

    // ------------------------------------------------------------------
    // Shared tails
    // ------------------------------------------------------------------

    /// Derives the targeted snapshot for the current candidate.
    ///
    /// Indexed candidates anchor to their item's view and return `None`
    /// when the item has scrolled away; everything else anchors to the
    /// surface itself.
    fn targeted_preview(&self, host: &dyn SurfaceHost) -> Option<TargetedPreview> {
        let registration = self.registration.as_ref()?;
        let candidate = registration.candidate.as_ref()?;

        let anchor = match candidate.index {
            Some(index) => host.item_anchor(index)?,
            None => host.surface_anchor(),
        };

        Some(match candidate.model.origin_rect() {
            Some(rect) => TargetedPreview::rounded(anchor, rect),
            None => TargetedPreview::unmasked(anchor),
        })
    }

    /// Commits the cached candidate, the single place the
    /// one-commit-per-candidate invariant is enforced.
    fn commit_candidate(
        &mut self,
        presenter: &mut dyn ContentPresenter<C>,
        content: &ContentHandle<C>,
    ) {
        let Some(registration) = self.registration.as_mut() else {
            return;
        };

        let Some(candidate) = registration.candidate.take() else {
            trace!(target: targets::COMMIT, "commit with no cached candidate; ignoring");
            return;
        };

        // A commit callback for content the bridge is no longer
        // previewing means the host and bridge desynchronized.
        let is_current = candidate.model.content_handle() == content;
        debug_assert!(
            is_current,
            "commit content does not match the cached preview candidate"
        );
        if !is_current {
            warn!(target: targets::COMMIT, "ignoring commit for stale preview content");
            registration.candidate = Some(candidate);
            return;
        }

        let (handle, commit) = candidate.model.into_parts();
        trace!(
            target: targets::COMMIT,
            content = ?handle.id(),
            directive = ?commit,
            "committing preview"
        );
        perform_commit(commit, handle.into_content(), presenter);
    }
}
