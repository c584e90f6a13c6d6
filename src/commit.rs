//! The commit engine: turning a directive into presenter calls.
//!
//! When an interaction commits, the bridge takes the cached model apart
//! and dispatches its directive here, against the [`ContentPresenter`]
//! the presenting screen supplies. Exactly one presenter call (or one
//! custom-handler invocation) results per commit.

use std::sync::Arc;

use crate::model::PreviewCommit;

/// Navigation operations of the presenting screen.
///
/// Implemented by whatever owns the navigation stack in the host
/// application. Ownership of the content transfers to the presenter on
/// the call.
pub trait ContentPresenter<C> {
    /// Push/show the content as a primary navigation action.
    fn show(&mut self, content: Arc<C>);

    /// Show the content as a detail/secondary navigation action.
    fn show_detail(&mut self, content: Arc<C>);
}

/// Dispatches a commit directive against a presenter.
///
/// `Show` and `ShowDetail` each make exactly one presenter call;
/// `Custom` invokes its handler with the content and performs no
/// navigation.
pub fn perform_commit<C>(
    commit: PreviewCommit<C>,
    content: Arc<C>,
    presenter: &mut dyn ContentPresenter<C>,
) {
    match commit {
        PreviewCommit::Show => presenter.show(content),
        PreviewCommit::ShowDetail => presenter.show_detail(content),
        PreviewCommit::Custom(handler) => handler(content),
    }
}
