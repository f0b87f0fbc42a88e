//! Constraint kinds and world-bounds resolution

use hoverkit_geometry::{Bounds, Point, Size};

/// Selects which rectangle defines the bounds a behavior is clamped against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Constraint {
    /// No clamping.
    #[default]
    None,
    /// The screen rectangle, origin to current resolution.
    Screen,
    /// The subject rectangle's immediate parent.
    Parent,
    /// An explicitly configured auxiliary rectangle.
    Other,
}

/// Geometry the host resolves for a single bounds query.
///
/// Underlying rectangles can move between frames, so callers rebuild this on
/// every query; nothing here is cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundsSources {
    /// Current screen resolution, in the same units as rectangle corners.
    pub screen: Size,
    /// World extents of the subject's parent rectangle, if it has one.
    pub parent: Option<Bounds>,
    /// World extents of the configured auxiliary rectangle, if any.
    pub other: Option<Bounds>,
}

/// Resolves a constraint kind against the supplied rectangles.
///
/// The host guarantees a parent rectangle for `Parent` subjects; if one is
/// missing anyway the result degrades to unbounded. `Other` falls back to
/// unbounded silently when no auxiliary rectangle is configured.
pub fn resolve_bounds(constraint: Constraint, sources: &BoundsSources) -> Bounds {
    match constraint {
        Constraint::None => Bounds::UNBOUNDED,
        Constraint::Screen => Bounds::new(
            Point::ZERO,
            Point::new(sources.screen.width, sources.screen.height),
        ),
        Constraint::Parent => sources.parent.unwrap_or_else(|| {
            log::warn!("parent constraint resolved without a parent rectangle");
            Bounds::UNBOUNDED
        }),
        Constraint::Other => sources.other.unwrap_or(Bounds::UNBOUNDED),
    }
}

/// Implemented by behaviors that expose the bounds currently constraining
/// them.
pub trait Constrained {
    fn bounds(&self, sources: &BoundsSources) -> Bounds;
}
