//! Simple drag movement with bound clamping

use crate::constraint::{resolve_bounds, BoundsSources, Constrained, Constraint};
use hoverkit_geometry::{Bounds, Point, Projection, RectFrame};
use smallvec::SmallVec;

/// Determines where the dragged rectangle sits relative to the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPivot {
    /// The target keeps its own pivot under the pointer; no offset.
    #[default]
    TargetPivot,
    /// Offset by the negated local position of the trigger rectangle.
    TriggerPivot,
    /// Offset between the trigger's world position and the pointer.
    PointerLocal,
    /// Offset between the target's world position and the pointer.
    PointerWorld,
}

/// Host-side configuration for a drag behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragConfig {
    pub constraint: Constraint,
    pub pivot: DragPivot,
}

/// Geometry the host resolves for a single drag event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragInput {
    /// Pointer position in world space.
    pub pointer: Point,
    /// Current frame of the rectangle being moved.
    pub target: RectFrame,
    /// Current frame of the rectangle receiving the pointer events. Often
    /// the target itself, but a window header drags its whole window.
    pub trigger: RectFrame,
    /// The trigger's position relative to its parent.
    pub trigger_local_position: Point,
    /// Rectangles available for bounds resolution.
    pub sources: BoundsSources,
}

type Listener = Box<dyn FnMut()>;
type MoveListener = Box<dyn FnMut(Point)>;

/// Drag state machine.
///
/// Captures a projection of the target when a gesture starts and clamps
/// every subsequent pointer position against freshly resolved bounds. The
/// behavior never owns the target rectangle; the host applies the position
/// returned from [`drag_move`](Self::drag_move). No state outlives the
/// gesture beyond the configured grip offset.
pub struct DragBehavior {
    config: DragConfig,
    projection: Option<Projection>,
    grip_offset: Point,
    on_begin: SmallVec<[Listener; 1]>,
    on_drag: SmallVec<[MoveListener; 1]>,
    on_end: SmallVec<[Listener; 1]>,
}

impl DragBehavior {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            projection: None,
            grip_offset: Point::ZERO,
            on_begin: SmallVec::new(),
            on_drag: SmallVec::new(),
            on_end: SmallVec::new(),
        }
    }

    pub fn config(&self) -> DragConfig {
        self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.projection.is_some()
    }

    /// Registers a listener fired when a drag gesture starts.
    pub fn on_drag_begin(&mut self, listener: impl FnMut() + 'static) {
        self.on_begin.push(Box::new(listener));
    }

    /// Registers a listener fired with each corrected drag position.
    pub fn on_drag(&mut self, listener: impl FnMut(Point) + 'static) {
        self.on_drag.push(Box::new(listener));
    }

    /// Registers a listener fired when a drag gesture ends.
    pub fn on_drag_end(&mut self, listener: impl FnMut() + 'static) {
        self.on_end.push(Box::new(listener));
    }

    /// Captures the pointer-relative grip offset for the configured pivot
    /// mode.
    pub fn pointer_down(&mut self, input: &DragInput) {
        self.grip_offset = match self.config.pivot {
            DragPivot::TargetPivot => Point::ZERO,
            DragPivot::TriggerPivot => -input.trigger_local_position,
            DragPivot::PointerLocal => input.trigger.position - input.pointer,
            DragPivot::PointerWorld => input.target.position - input.pointer,
        };
    }

    /// Snapshots the target's current geometry and enters the dragging
    /// state.
    pub fn drag_start(&mut self, input: &DragInput) {
        self.projection = Some(Projection::new(&input.target));
        for listener in &mut self.on_begin {
            listener();
        }
    }

    /// Moves the captured projection to the pointer plus grip offset,
    /// clamped against freshly resolved bounds.
    ///
    /// Returns the position the host should apply to the target, or `None`
    /// outside a gesture.
    pub fn drag_move(&mut self, input: &DragInput) -> Option<Point> {
        let projection = self.projection.as_mut()?;
        let bounds = resolve_bounds(self.config.constraint, &input.sources);
        projection.move_bounded(input.pointer + self.grip_offset, bounds);
        let position = projection.world_position();
        for listener in &mut self.on_drag {
            listener(position);
        }
        Some(position)
    }

    /// Leaves the dragging state. The target's position is untouched.
    pub fn drag_end(&mut self) {
        if self.projection.take().is_some() {
            for listener in &mut self.on_end {
                listener();
            }
        }
    }
}

impl Constrained for DragBehavior {
    fn bounds(&self, sources: &BoundsSources) -> Bounds {
        resolve_bounds(self.config.constraint, sources)
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
