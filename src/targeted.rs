//! Targeted previews: the visual anchor for highlight/dismiss animations.
//!
//! A [`TargetedPreview`] tells the host which view to snapshot and how
//! to shape the snapshot. Models with an origin rectangle get a rounded
//! rectangle mask over a transparent background; models without one get
//! an unmasked snapshot of the whole anchor view.

use crate::geometry::{Color, Rect};
use crate::surface::AnchorId;

/// Corner radius applied to masked snapshots unless overridden.
pub const DEFAULT_PREVIEW_CORNER_RADIUS: f32 = 3.0;

/// A rectangle with uniformly rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// The rectangle, in the anchor view's coordinate space.
    pub rect: Rect,
    /// The corner radius.
    pub corner_radius: f32,
}

/// How the host should shape a targeted snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewParameters {
    /// The visible region of the snapshot; `None` leaves it unmasked.
    pub visible_path: Option<RoundedRect>,
    /// Background behind the visible region; `None` uses the host default.
    pub background: Option<Color>,
}

/// A snapshot request the host enacts for highlight and dismiss
/// animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetedPreview {
    anchor: AnchorId,
    parameters: PreviewParameters,
}

impl TargetedPreview {
    /// An unmasked snapshot of the whole anchor view.
    pub fn unmasked(anchor: AnchorId) -> Self {
        Self {
            anchor,
            parameters: PreviewParameters::default(),
        }
    }

    /// A snapshot clipped to `rect` with the default corner radius and a
    /// transparent background.
    pub fn rounded(anchor: AnchorId, rect: Rect) -> Self {
        Self::rounded_with_radius(anchor, rect, DEFAULT_PREVIEW_CORNER_RADIUS)
    }

    /// A snapshot clipped to `rect` with an explicit corner radius.
    pub fn rounded_with_radius(anchor: AnchorId, rect: Rect, corner_radius: f32) -> Self {
        Self {
            anchor,
            parameters: PreviewParameters {
                visible_path: Some(RoundedRect {
                    rect,
                    corner_radius,
                }),
                background: Some(Color::TRANSPARENT),
            },
        }
    }

    /// The view to snapshot.
    pub fn anchor(&self) -> AnchorId {
        self.anchor
    }

    /// How to shape the snapshot.
    pub fn parameters(&self) -> PreviewParameters {
        self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_defaults() {
        let rect = Rect::new(10.0, 10.0, 50.0, 20.0);
        let preview = TargetedPreview::rounded(AnchorId::new(7), rect);

        assert_eq!(preview.anchor(), AnchorId::new(7));
        let params = preview.parameters();
        assert_eq!(
            params.visible_path,
            Some(RoundedRect {
                rect,
                corner_radius: DEFAULT_PREVIEW_CORNER_RADIUS,
            })
        );
        assert_eq!(params.background, Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_unmasked_has_no_path_or_background() {
        let preview = TargetedPreview::unmasked(AnchorId::new(1));
        assert_eq!(preview.parameters(), PreviewParameters::default());
        assert!(preview.parameters().visible_path.is_none());
        assert!(preview.parameters().background.is_none());
    }
}
