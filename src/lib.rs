//! Press-and-hold preview and context-menu interaction bridge.
//!
//! Prospect unifies two generations of the interactive "peek" pattern,
//! a legacy press-and-hold preview callback protocol and its modern
//! context-menu replacement, behind one delegate contract and one
//! per-surface state machine. A host toolkit drives the bridge from its
//! gesture callbacks; screens implement a small delegate trait to say
//! what is previewable where; the bridge guarantees the previewed
//! content is committed exactly once, with no stale state left behind
//! after a commit or cancellation.
//!
//! # Architecture
//!
//! - **Model** ([`PreviewModel`]): immutable description of one
//!   previewable piece of content: the content itself, an optional
//!   origin rectangle, quick actions, and a commit directive.
//! - **Delegates** ([`PreviewDelegate`], [`IndexedPreviewDelegate`]):
//!   implemented by host screens to answer "what is previewable at this
//!   point?" for plain and table/collection surfaces.
//! - **Bridge** ([`PreviewController`]): one per surface; caches the
//!   single in-flight candidate and adapts both host callback protocols
//!   onto it.
//! - **Commit engine** ([`ContentPresenter`], [`perform_commit`]):
//!   enacts the model's directive against the presenting screen.
//!
//! The host platform appears only as two traits: [`SurfaceHost`]
//! (registration hooks, point-to-item resolution, snapshot anchors) and
//! [`ContentPresenter`] (navigation). Gesture recognition, menu
//! rendering, and animation stay on the host side.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use prospect::{
//!     Point, PreviewCommit, PreviewController, PreviewDelegate, PreviewModel,
//! };
//!
//! struct InboxScreen;
//!
//! impl PreviewDelegate<MessageView> for InboxScreen {
//!     fn model_at(&self, point: Point) -> Option<PreviewModel<MessageView>> {
//!         let message = self.message_under(point)?;
//!         Some(PreviewModel::new(MessageView::new(message), PreviewCommit::Show))
//!     }
//! }
//!
//! let screen = Arc::new(InboxScreen);
//! let mut controller = PreviewController::new();
//! controller.set_delegate(&mut surface, Some(screen.clone() as _));
//!
//! // From the host's gesture callbacks:
//! if let Some(preview) = controller.preview_content_at(&surface, location) {
//!     // present preview.content, then on the commit callback:
//!     controller.commit_preview(&mut navigator, &preview.content);
//! }
//! ```
//!
//! # Threading
//!
//! Everything is synchronous and single-threaded: the controller must be
//! driven from the thread that owns its surface. Debug builds verify
//! this on every entry point.

pub mod bridge;
pub mod commit;
pub mod delegate;
pub mod geometry;
pub mod index;
pub mod menu;
pub mod model;
mod store;
pub mod surface;
pub mod targeted;
pub mod thread_check;

pub use bridge::{LegacyPreview, PreviewController};
pub use commit::{perform_commit, ContentPresenter};
pub use delegate::{IndexedPreviewDelegate, PreviewDelegate};
pub use geometry::{Color, Point, Rect, Size};
pub use index::ModelIndex;
pub use menu::{menu_entries, MenuConfiguration, MenuEntry};
pub use model::{
    ContentHandle, ContentId, PreviewAction, PreviewCommit, PreviewModel, PreviewableContent,
};
pub use surface::{AnchorId, InteractionToken, ItemHit, RegistrationToken, SurfaceHost};
pub use targeted::{
    PreviewParameters, RoundedRect, TargetedPreview, DEFAULT_PREVIEW_CORNER_RADIUS,
};
pub use thread_check::ThreadAffinity;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Delegate registration and teardown.
    pub const REGISTRATION: &str = "prospect::registration";
    /// Candidate acquisition and protocol adaptation.
    pub const BRIDGE: &str = "prospect::bridge";
    /// Commit dispatch.
    pub const COMMIT: &str = "prospect::commit";
}
