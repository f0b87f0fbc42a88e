//! Drag and tooltip positioning behaviors for Hoverkit
//!
//! Behaviors here are plain state machines: the host feeds pointer events
//! and one tick per rendered frame in, and applies the returned world
//! positions to whatever it draws. The host owns every rectangle; the
//! behaviors only read the geometry snapshots passed with each call.

mod clock;
mod constraint;
mod drag;
mod tooltip;

pub use clock::*;
pub use constraint::*;
pub use drag::*;
pub use tooltip::*;

pub mod prelude {
    pub use crate::clock::TickClock;
    pub use crate::constraint::{resolve_bounds, BoundsSources, Constrained, Constraint};
    pub use crate::drag::{DragBehavior, DragConfig, DragInput, DragPivot};
    pub use crate::tooltip::{
        ActivationMethod, DisplayPivot, MirrorConstraint, TooltipBehavior, TooltipConfig,
        TooltipInput,
    };
}
