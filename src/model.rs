//! Preview model: what to preview, where it came from, and how to commit it.
//!
//! A [`PreviewModel`] is an immutable value a delegate produces in answer
//! to "what is previewable at this point?". It bundles the content to
//! show, an optional origin rectangle used to shape highlight/dismiss
//! animations, an ordered list of quick actions, and a commit directive
//! describing how the interaction finalizes.
//!
//! The previewed content type `C` is opaque to this crate. Content is
//! wrapped in a [`ContentHandle`] whose equality is identity: two handles
//! compare equal only if they were minted from the same model, which is
//! how the bridge detects stale commit callbacks.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::geometry::Rect;

/// A global counter for generating unique content identities.
static CONTENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a piece of previewable content.
///
/// Minted once per [`PreviewModel`]; never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(u64);

impl ContentId {
    fn next() -> Self {
        Self(CONTENT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A shared, identity-carrying handle to previewable content.
///
/// Cloning is cheap and preserves identity. The host holds a handle for
/// the duration of a preview and passes it back when committing; the
/// bridge compares identities to reject callbacks that arrived after the
/// candidate they belong to was superseded.
pub struct ContentHandle<C> {
    id: ContentId,
    content: Arc<C>,
}

impl<C> ContentHandle<C> {
    /// Wraps content in a fresh handle with a new identity.
    pub fn new(content: C) -> Self {
        Self {
            id: ContentId::next(),
            content: Arc::new(content),
        }
    }

    /// The identity of this content.
    #[inline]
    pub fn id(&self) -> ContentId {
        self.id
    }

    /// Borrow the content.
    #[inline]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Consume the handle, yielding the shared content.
    #[inline]
    pub fn into_content(self) -> Arc<C> {
        self.content
    }
}

impl<C> Clone for ContentHandle<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            content: Arc::clone(&self.content),
        }
    }
}

impl<C> PartialEq for ContentHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for ContentHandle<C> {}

impl<C> fmt::Debug for ContentHandle<C> {
    // `C` is opaque, so only the identity is rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// A quick action offered alongside a preview.
///
/// Insertion order in [`PreviewModel::actions`] is display order. The
/// handler is invoked synchronously when the user selects the action.
pub struct PreviewAction {
    title: String,
    destructive: bool,
    handler: Arc<dyn Fn()>,
}

impl PreviewAction {
    /// Creates a new action with the given title and selection handler.
    pub fn new(title: impl Into<String>, handler: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            destructive: false,
            handler: Arc::new(handler),
        }
    }

    /// Marks the action as destructive.
    ///
    /// Hosts render destructive actions distinctly (typically in red).
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the action is destructive.
    pub fn is_destructive(&self) -> bool {
        self.destructive
    }

    /// Invoke the selection handler.
    pub fn invoke(&self) {
        (self.handler)();
    }

    pub(crate) fn handler(&self) -> Arc<dyn Fn()> {
        Arc::clone(&self.handler)
    }
}

impl Clone for PreviewAction {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            destructive: self.destructive,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl fmt::Debug for PreviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewAction")
            .field("title", &self.title)
            .field("destructive", &self.destructive)
            .finish_non_exhaustive()
    }
}

/// How a successful preview interaction finalizes.
pub enum PreviewCommit<C> {
    /// Push/show the content as a primary navigation action.
    Show,
    /// Show the content as a detail/secondary navigation action.
    ShowDetail,
    /// Invoke the handler with the content; perform no navigation.
    ///
    /// The handler runs only when the interaction is committed. If the
    /// preview is cancelled the closure is dropped unrun, so anything it
    /// captures must tolerate never being called.
    Custom(Box<dyn FnOnce(Arc<C>)>),
}

impl<C> fmt::Debug for PreviewCommit<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "Show"),
            Self::ShowDetail => write!(f, "ShowDetail"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Content that can supply its own preview actions.
///
/// Implement this on content types that know their quick actions, then
/// build models with [`PreviewModel::from_previewable`] instead of
/// listing the actions at every call site.
pub trait PreviewableContent {
    /// The quick actions to offer while this content is previewed.
    fn preview_actions(&self) -> Vec<PreviewAction>;
}

/// An immutable description of one previewable piece of content.
///
/// Constructed by a delegate in answer to a location query, then cached
/// by the bridge as the current candidate until the interaction commits,
/// is cancelled, or is superseded by a new query.
pub struct PreviewModel<C> {
    content: ContentHandle<C>,
    origin_rect: Option<Rect>,
    actions: Vec<PreviewAction>,
    commit: PreviewCommit<C>,
}

impl<C> PreviewModel<C> {
    /// Creates a model previewing `content`, finalized by `commit`.
    ///
    /// No origin rectangle (highlight/dismiss animations snapshot the
    /// whole surface) and no quick actions; use the builder methods to
    /// add either.
    pub fn new(content: C, commit: PreviewCommit<C>) -> Self {
        Self {
            content: ContentHandle::new(content),
            origin_rect: None,
            actions: Vec::new(),
            commit,
        }
    }

    /// Creates a model whose actions come from the content itself.
    pub fn from_previewable(content: C, commit: PreviewCommit<C>) -> Self
    where
        C: PreviewableContent,
    {
        let actions = content.preview_actions();
        Self::new(content, commit).with_actions(actions)
    }

    /// Sets the origin rectangle, in the coordinate space of the surface
    /// the query was made against (the item for indexed queries, the
    /// surface itself otherwise).
    pub fn with_origin_rect(mut self, rect: Rect) -> Self {
        self.origin_rect = Some(rect);
        self
    }

    /// Sets the quick actions. Insertion order is display order.
    pub fn with_actions(mut self, actions: Vec<PreviewAction>) -> Self {
        self.actions = actions;
        self
    }

    /// The handle to the previewed content.
    pub fn content_handle(&self) -> &ContentHandle<C> {
        &self.content
    }

    /// The origin rectangle, if any.
    pub fn origin_rect(&self) -> Option<Rect> {
        self.origin_rect
    }

    /// The quick actions, in display order.
    pub fn actions(&self) -> &[PreviewAction] {
        &self.actions
    }

    /// Splits the model into the pieces the commit engine consumes.
    pub(crate) fn into_parts(self) -> (ContentHandle<C>, PreviewCommit<C>) {
        (self.content, self.commit)
    }
}

impl<C> fmt::Debug for PreviewModel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewModel")
            .field("content", &self.content)
            .field("origin_rect", &self.origin_rect)
            .field("actions", &self.actions)
            .field("commit", &self.commit)
            .finish()
    }
}
