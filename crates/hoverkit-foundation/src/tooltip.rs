//! Tooltip display with delayed activation and mirror-on-overflow placement

use crate::constraint::{resolve_bounds, BoundsSources, Constrained, Constraint};
use hoverkit_geometry::{Bounds, Point, Projection, RectFrame, Size};
use smallvec::SmallVec;

/// Pointer interaction that activates the tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationMethod {
    #[default]
    Hover,
    Click,
}

/// Which position the displayed content anchors to while visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPivot {
    /// Live pointer position, re-read every frame.
    #[default]
    FollowPointer,
    /// Pointer position captured once when the content appears.
    PointerOnShow,
    /// The trigger rectangle's own position.
    TriggerPosition,
}

/// Axis (or axes) the content may mirror across when it would leave bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MirrorConstraint {
    #[default]
    None,
    UpDown,
    LeftRight,
    Both,
}

/// Host-side configuration for a tooltip behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipConfig {
    pub constraint: Constraint,
    pub mirror: MirrorConstraint,
    pub activation: ActivationMethod,
    pub display_pivot: DisplayPivot,
    /// Seconds the pointer must stay engaged before the content appears.
    pub display_delay: f32,
    /// Offset from the anchor, in 180-grid units (see
    /// [`screen_scaled_offset`]).
    pub pointer_offset: Point,
}

/// Geometry the host resolves for a tooltip event or tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipInput {
    /// Pointer position in world space.
    pub pointer: Point,
    /// World position of the trigger rectangle.
    pub trigger_position: Point,
    /// Current frame of the content rectangle, if one is configured.
    pub content: Option<RectFrame>,
    /// Rectangles available for bounds resolution.
    pub sources: BoundsSources,
}

/// Scales an offset so it spans the same screen fraction at any resolution.
///
/// The per-axis scale advances in whole steps of a 180-unit reference grid:
/// an 800x600 screen scales by (4, 3).
pub fn screen_scaled_offset(offset: Point, screen: Size) -> Point {
    Point::new(
        offset.x * (screen.width / 180.0).floor(),
        offset.y * (screen.height / 180.0).floor(),
    )
}

/// Offset placing the content at its mirrored position across the selected
/// axis, preserving the projection's pivot.
///
/// A `None` position constraint or mirror axis leaves the offset untouched.
/// Applying the transform twice returns the original offset.
pub fn mirrored_offset(
    constraint: Constraint,
    mirror: MirrorConstraint,
    projection: &Projection,
    offset: Point,
) -> Point {
    if constraint == Constraint::None {
        return offset;
    }

    let pivot = projection.pivot();
    let size = projection.size();
    let mut mirrored = offset;
    match mirror {
        MirrorConstraint::None => {}
        MirrorConstraint::UpDown => {
            mirrored.y = -mirrored.y + (pivot.y * 2.0 - 1.0) * size.height;
        }
        MirrorConstraint::LeftRight => {
            mirrored.x = -mirrored.x + (pivot.x * 2.0 - 1.0) * size.width;
        }
        MirrorConstraint::Both => {
            mirrored.x = -mirrored.x + (pivot.x * 2.0 - 1.0) * size.width;
            mirrored.y = -mirrored.y + (pivot.y * 2.0 - 1.0) * size.height;
        }
    }
    mirrored
}

fn can_flip(mirror: MirrorConstraint, current: &Projection, other: &Projection) -> bool {
    match mirror {
        MirrorConstraint::None => false,
        MirrorConstraint::UpDown => {
            let current = current.out_of_bounds();
            let other = other.out_of_bounds();
            (current.top != 0.0 || current.bottom != 0.0)
                && other.top == 0.0
                && other.bottom == 0.0
        }
        MirrorConstraint::LeftRight => {
            let current = current.out_of_bounds();
            let other = other.out_of_bounds();
            (current.left != 0.0 || current.right != 0.0)
                && other.left == 0.0
                && other.right == 0.0
        }
        MirrorConstraint::Both => current.is_out_of_bounds() && !other.is_out_of_bounds(),
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Hidden,
    Pending { elapsed: f32 },
    Visible { main: Projection, mirrored: Projection },
}

type Listener = Box<dyn FnMut()>;

/// Tooltip state machine: Hidden, then Pending while the display delay
/// accumulates, then Visible until the pointer disengages.
///
/// The host drives it with pointer events plus one [`tick`](Self::tick) per
/// rendered frame and places the content at whatever position the tick
/// returns. While visible, each tick evaluates the content at its normal and
/// mirrored positions and keeps whichever fits; the asymmetric in/out test
/// means a flip only happens when the current side is broken AND the other
/// side fits, so the choice cannot oscillate in steady conditions.
///
/// At most one run is in flight per behavior. Re-activating mid-run cancels
/// the previous run and fires its end notification exactly once before the
/// new begin notification.
pub struct TooltipBehavior {
    config: TooltipConfig,
    phase: Phase,
    engaged: bool,
    click_held: bool,
    flipped: bool,
    pointer_on_show: Point,
    on_begin: SmallVec<[Listener; 1]>,
    on_stay: SmallVec<[Listener; 1]>,
    on_end: SmallVec<[Listener; 1]>,
}

impl TooltipBehavior {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            phase: Phase::Hidden,
            engaged: false,
            click_held: false,
            flipped: false,
            pointer_on_show: Point::ZERO,
            on_begin: SmallVec::new(),
            on_stay: SmallVec::new(),
            on_end: SmallVec::new(),
        }
    }

    pub fn config(&self) -> TooltipConfig {
        self.config
    }

    /// Returns true while a pointer engagement keeps the tooltip alive.
    pub fn is_active(&self) -> bool {
        self.engaged
    }

    /// Returns true while the content should be displayed.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// Returns true while the displayed position is the mirrored one.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Registers a listener fired when an activation starts, before the
    /// display delay.
    pub fn on_begin(&mut self, listener: impl FnMut() + 'static) {
        self.on_begin.push(Box::new(listener));
    }

    /// Registers a listener fired on every visible tick after the first.
    pub fn on_stay(&mut self, listener: impl FnMut() + 'static) {
        self.on_stay.push(Box::new(listener));
    }

    /// Registers a listener fired exactly once when a run ends, whether it
    /// was dismissed, aborted during the delay, or cancelled by a
    /// re-activation.
    pub fn on_end(&mut self, listener: impl FnMut() + 'static) {
        self.on_end.push(Box::new(listener));
    }

    pub fn pointer_enter(&mut self, input: &TooltipInput) {
        if self.config.activation == ActivationMethod::Hover || self.click_held {
            self.begin(input);
        }
    }

    pub fn pointer_exit(&mut self) {
        self.engaged = false;
    }

    pub fn pointer_down(&mut self, input: &TooltipInput) {
        if self.config.activation == ActivationMethod::Click {
            self.begin(input);
            self.click_held = true;
        }
    }

    pub fn pointer_up(&mut self) {
        if self.config.activation == ActivationMethod::Click {
            self.engaged = false;
            self.click_held = false;
        }
    }

    /// Click-activated tooltips also dismiss when the press turns into a
    /// drag.
    pub fn drag_end(&mut self) {
        self.pointer_up();
    }

    fn begin(&mut self, input: &TooltipInput) {
        if input.content.is_none() {
            log::debug!("tooltip activation refused: no content rectangle");
            return;
        }
        if !matches!(self.phase, Phase::Hidden) {
            self.finish();
        }
        self.engaged = true;
        self.phase = Phase::Pending { elapsed: 0.0 };
        for listener in &mut self.on_begin {
            listener();
        }
    }

    fn finish(&mut self) {
        self.flipped = false;
        self.engaged = false;
        self.phase = Phase::Hidden;
        for listener in &mut self.on_end {
            listener();
        }
    }

    /// Advances the tooltip by one frame.
    ///
    /// Returns the world position the host should place the content at, or
    /// `None` while nothing is displayed. The host re-resolves every
    /// rectangle in `input` each frame; bounds are never cached across
    /// ticks.
    pub fn tick(&mut self, dt: f32, input: &TooltipInput) -> Option<Point> {
        if matches!(self.phase, Phase::Hidden) {
            return None;
        }
        if !self.engaged || input.content.is_none() {
            self.finish();
            return None;
        }

        if let Phase::Pending { elapsed } = &mut self.phase {
            *elapsed += dt;
            if *elapsed < self.config.display_delay {
                return None;
            }
            let content = input.content.as_ref()?;
            self.pointer_on_show = input.pointer;
            // Content geometry is captured once; the projections are reused
            // until this run ends. The first placement happens below without
            // notifying stay listeners.
            self.phase = Phase::Visible {
                main: Projection::new(content),
                mirrored: Projection::new(content),
            };
        } else {
            for listener in &mut self.on_stay {
                listener();
            }
        }

        let anchor = match self.config.display_pivot {
            DisplayPivot::FollowPointer => input.pointer,
            DisplayPivot::PointerOnShow => self.pointer_on_show,
            DisplayPivot::TriggerPosition => input.trigger_position,
        };
        let offset = screen_scaled_offset(self.config.pointer_offset, input.sources.screen);
        let bounds = resolve_bounds(self.config.constraint, &input.sources);

        let Phase::Visible { main, mirrored } = &mut self.phase else {
            return None;
        };
        let mirror_offset =
            mirrored_offset(self.config.constraint, self.config.mirror, main, offset);
        main.move_bounded(anchor + offset, bounds);
        mirrored.move_bounded(anchor + mirror_offset, bounds);

        let (current, other) = if self.flipped {
            (&*mirrored, &*main)
        } else {
            (&*main, &*mirrored)
        };
        if can_flip(self.config.mirror, current, other) {
            self.flipped = !self.flipped;
            Some(other.world_position())
        } else {
            Some(current.world_position())
        }
    }
}

impl Constrained for TooltipBehavior {
    fn bounds(&self, sources: &BoundsSources) -> Bounds {
        resolve_bounds(self.config.constraint, sources)
    }
}

#[cfg(test)]
#[path = "tests/tooltip_tests.rs"]
mod tests;
