//! Host-facing menu items and the context-menu configuration.
//!
//! When the modern protocol asks for a configuration, the bridge hands
//! back a [`MenuConfiguration`]: a lazy provider for the preview content
//! and a lazy provider for the action menu. Both close over the cached
//! candidate, so evaluating them never re-queries the delegate.

use std::fmt;
use std::sync::Arc;

use crate::model::{ContentHandle, PreviewAction};

/// A single entry in a host-rendered context menu.
///
/// Produced from a [`PreviewAction`] with order and destructiveness
/// preserved; the host renders it and calls [`activate`](Self::activate)
/// on selection.
pub struct MenuEntry {
    title: String,
    destructive: bool,
    handler: Arc<dyn Fn()>,
}

impl MenuEntry {
    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the host should render this entry as destructive.
    pub fn is_destructive(&self) -> bool {
        self.destructive
    }

    /// Invoke the entry's handler. Hosts call this once per selection.
    pub fn activate(&self) {
        (self.handler)();
    }
}

impl From<&PreviewAction> for MenuEntry {
    fn from(action: &PreviewAction) -> Self {
        Self {
            title: action.title().to_owned(),
            destructive: action.is_destructive(),
            handler: action.handler(),
        }
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("title", &self.title)
            .field("destructive", &self.destructive)
            .finish_non_exhaustive()
    }
}

/// Maps actions to menu entries, preserving order.
pub fn menu_entries(actions: &[PreviewAction]) -> Vec<MenuEntry> {
    actions.iter().map(MenuEntry::from).collect()
}

/// What the modern protocol needs to run one context-menu interaction.
///
/// Both providers are lazy: hosts typically evaluate the preview
/// provider when the menu opens and the menu provider when (if) the menu
/// itself is expanded.
pub struct MenuConfiguration<C> {
    preview_provider: Box<dyn Fn() -> ContentHandle<C>>,
    menu_provider: Box<dyn Fn() -> Vec<MenuEntry>>,
}

impl<C> MenuConfiguration<C> {
    pub(crate) fn new(
        preview_provider: Box<dyn Fn() -> ContentHandle<C>>,
        menu_provider: Box<dyn Fn() -> Vec<MenuEntry>>,
    ) -> Self {
        Self {
            preview_provider,
            menu_provider,
        }
    }

    /// Evaluate the preview provider.
    pub fn preview(&self) -> ContentHandle<C> {
        (self.preview_provider)()
    }

    /// Evaluate the menu provider.
    pub fn menu(&self) -> Vec<MenuEntry> {
        (self.menu_provider)()
    }
}

impl<C> fmt::Debug for MenuConfiguration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuConfiguration").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_destructive_flags_preserved() {
        let actions = vec![
            PreviewAction::new("Cancel", || {}),
            PreviewAction::new("Delete", || {}).destructive(),
        ];

        let entries = menu_entries(&actions);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), "Cancel");
        assert!(!entries[0].is_destructive());
        assert_eq!(entries[1].title(), "Delete");
        assert!(entries[1].is_destructive());
    }

    #[test]
    fn test_entry_activation_invokes_action_handler() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let actions = vec![PreviewAction::new("Tap", move || {
            counter.set(counter.get() + 1);
        })];

        let entries = menu_entries(&actions);
        entries[0].activate();
        assert_eq!(count.get(), 1);
    }
}
