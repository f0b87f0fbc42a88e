//! Drawless, baseless snapshot of a rectangle with positional bounds

use crate::{Bounds, Point, RectFrame, Size};

/// Signed out-of-bounds distance for each edge of a projection.
///
/// A zero entry means the edge sits within bounds on its axis; otherwise the
/// entry is the movement needed to bring the edge back inward (negative past
/// the min bound, positive past the max bound).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeDistances {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeDistances {
    pub fn any(&self) -> bool {
        self.left != 0.0 || self.right != 0.0 || self.top != 0.0 || self.bottom != 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Positionless snapshot of a rectangle's corner geometry, evaluable at
/// arbitrary world positions with or without bound clamping.
///
/// Corner order is always bottom-left, top-left, top-right, bottom-right.
/// Local corners are captured once at construction and never re-read from
/// the source frame; a projection lives for one gesture or display run and
/// is discarded when it ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    local_corners: [Point; 4],
    world_corners: [Point; 4],
    bounded_corners: [Point; 4],
    bounds: Bounds,
    world_position: Point,
}

impl Projection {
    /// Captures the frame's corner geometry relative to its own origin.
    ///
    /// Bounds start unbounded and the projection sits at the world origin
    /// until moved.
    pub fn new(frame: &RectFrame) -> Self {
        let local_corners = frame.local_corners();
        Self {
            local_corners,
            world_corners: local_corners,
            bounded_corners: local_corners,
            bounds: Bounds::UNBOUNDED,
            world_position: Point::ZERO,
        }
    }

    /// Captures the frame and immediately moves to `world_position`,
    /// ignoring bounds.
    pub fn at(frame: &RectFrame, world_position: Point) -> Self {
        let mut projection = Self::new(frame);
        projection.move_to(world_position);
        projection
    }

    /// Captures the frame and immediately performs a bounded move.
    pub fn bounded_at(frame: &RectFrame, world_position: Point, bounds: Bounds) -> Self {
        let mut projection = Self::new(frame);
        projection.move_bounded(world_position, bounds);
        projection
    }

    /// Corner positions relative to the projection's origin.
    pub fn local_corners(&self) -> [Point; 4] {
        self.local_corners
    }

    /// Corner positions at the last requested (uncorrected) world position.
    pub fn world_corners(&self) -> [Point; 4] {
        self.world_corners
    }

    /// Corner positions at the last bound-corrected world position. Stale
    /// until a bounded move has happened.
    pub fn bounded_corners(&self) -> [Point; 4] {
        self.bounded_corners
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The projection's current world position: the last position passed to
    /// [`move_to`](Self::move_to), or the corrected position after
    /// [`move_bounded`](Self::move_bounded).
    pub fn world_position(&self) -> Point {
        self.world_position
    }

    /// Moves the projection to a world position, unaffected by bounds.
    pub fn move_to(&mut self, world_position: Point) {
        for (world, local) in self.world_corners.iter_mut().zip(self.local_corners) {
            *world = local + world_position;
        }
        self.world_position = world_position;
    }

    /// Moves the projection to a world position, then corrects that position
    /// so its edges stay within `bounds`.
    ///
    /// Each edge is measured only against the bound it can violate and the
    /// two per-axis distances are subtracted together, so opposite overflows
    /// partially cancel when the rectangle cannot fit at all. `world_corners`
    /// keep the uncorrected position; only `bounded_corners` and
    /// `world_position` move to the corrected one.
    pub fn move_bounded(&mut self, world_position: Point, bounds: Bounds) {
        self.move_to(world_position);
        self.bounds = bounds;

        let distances = EdgeDistances {
            left: (self.world_corners[0].x - bounds.min.x).min(0.0),
            right: (self.world_corners[2].x - bounds.max.x).max(0.0),
            top: (self.world_corners[2].y - bounds.max.y).max(0.0),
            bottom: (self.world_corners[0].y - bounds.min.y).min(0.0),
        };
        let corrected = Point::new(
            world_position.x - distances.horizontal_sum(),
            world_position.y - distances.vertical_sum(),
        );
        for (bounded, local) in self.bounded_corners.iter_mut().zip(self.local_corners) {
            *bounded = local + corrected;
        }
        self.world_position = corrected;
    }

    /// Out-of-bounds distances of the current `world_corners` against the
    /// stored bounds.
    ///
    /// Always computed from the uncorrected corners, so a projection that was
    /// just bound-corrected still reports the violation at its requested
    /// position.
    pub fn out_of_bounds(&self) -> EdgeDistances {
        EdgeDistances {
            left: edge_distance(self.world_corners[0].x, self.bounds.min.x, self.bounds.max.x),
            right: edge_distance(self.world_corners[2].x, self.bounds.min.x, self.bounds.max.x),
            top: edge_distance(self.world_corners[2].y, self.bounds.min.y, self.bounds.max.y),
            bottom: edge_distance(self.world_corners[0].y, self.bounds.min.y, self.bounds.max.y),
        }
    }

    /// Returns true if any edge of `world_corners` is caught outside bounds.
    pub fn is_out_of_bounds(&self) -> bool {
        self.out_of_bounds().any()
    }

    /// Width and height derived from the local corners.
    ///
    /// Sums the absolute corner offsets per axis, which equals the true
    /// rectangle size only while the origin lies between the corners.
    pub fn size(&self) -> Size {
        Size::new(
            self.local_corners[0].x.abs() + self.local_corners[2].x.abs(),
            self.local_corners[0].y.abs() + self.local_corners[2].y.abs(),
        )
    }

    /// Fractional position of the origin within the local box, 0.5 on any
    /// degenerate axis.
    ///
    /// Origins outside the corner span produce values outside `[0, 1]`.
    pub fn pivot(&self) -> Point {
        Point::new(
            axis_pivot(self.local_corners[0].x, self.local_corners[2].x),
            axis_pivot(self.local_corners[0].y, self.local_corners[2].y),
        )
    }
}

fn axis_pivot(near: f32, far: f32) -> f32 {
    let span = near - far;
    if span != 0.0 {
        (near + far) / -span.abs() * 0.5 + 0.5
    } else {
        0.5
    }
}

/// Movement needed to bring `value` back inside `[min, max]`; zero when it
/// already is. The result never flips sign past zero.
fn edge_distance(value: f32, min: f32, max: f32) -> f32 {
    let below = value - min;
    if below < 0.0 {
        return below;
    }
    let above = value - max;
    if above > 0.0 {
        return above;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_box(size: f32) -> RectFrame {
        RectFrame::centered(Point::ZERO, Size::new(size, size))
    }

    #[test]
    fn corner_order_and_world_offset() {
        let frame = centered_box(100.0);
        let mut projection = Projection::new(&frame);
        projection.move_to(Point::new(10.0, 20.0));

        let local = projection.local_corners();
        assert_eq!(local[0], Point::new(-50.0, -50.0));
        assert_eq!(local[1], Point::new(-50.0, 50.0));
        assert_eq!(local[2], Point::new(50.0, 50.0));
        assert_eq!(local[3], Point::new(50.0, -50.0));

        for (world, local) in projection.world_corners().iter().zip(local) {
            assert_eq!(*world, local + Point::new(10.0, 20.0));
        }
        assert_eq!(projection.world_position(), Point::new(10.0, 20.0));
    }

    #[test]
    fn unbounded_move_applies_no_correction() {
        let frame = centered_box(100.0);
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(1.0e6, -1.0e6), Bounds::UNBOUNDED);
        assert_eq!(projection.world_position(), Point::new(1.0e6, -1.0e6));
        assert!(!projection.is_out_of_bounds());
    }

    #[test]
    fn in_bounds_move_is_untouched() {
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(400.0, 300.0), bounds);
        assert_eq!(projection.world_position(), Point::new(400.0, 300.0));
        assert_eq!(projection.bounded_corners(), projection.world_corners());
    }

    #[test]
    fn clamps_against_screen_corner() {
        // 100x100 box centered on origin, pushed past the top-right of an
        // 800x600 screen.
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(1000.0, 1000.0), bounds);
        assert_eq!(projection.world_position(), Point::new(750.0, 550.0));
    }

    #[test]
    fn corrected_position_reports_no_violation() {
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(1000.0, 300.0), bounds);

        // The bounded projection itself keeps reporting the requested
        // position's violation.
        assert!(projection.out_of_bounds().right > 0.0);

        // Re-evaluated at the corrected position, the edge is back inside.
        let corrected = projection.world_position();
        projection.move_to(corrected);
        assert_eq!(projection.out_of_bounds(), EdgeDistances::default());
    }

    #[test]
    fn opposite_overflows_cancel_additively() {
        // A 100-wide box against a 60-wide corridor: both x corrections apply
        // and partially cancel rather than resolving to a min/max clamp.
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(60.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(40.0, 300.0), bounds);
        // left = -10, right = 30, corrected x = 40 - (-10) - 30 = 20.
        assert_eq!(projection.world_position().x, 20.0);
    }

    #[test]
    fn out_of_bounds_distances_are_one_per_edge() {
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(-10.0, 630.0), bounds);

        let distances = projection.out_of_bounds();
        assert_eq!(distances.left, -60.0);
        assert_eq!(distances.right, 0.0);
        assert_eq!(distances.top, 80.0);
        assert_eq!(distances.bottom, 0.0);
        assert!(projection.is_out_of_bounds());
    }

    #[test]
    fn zero_size_rectangle_degenerates_cleanly() {
        let frame = RectFrame::centered(Point::ZERO, Size::ZERO);
        let mut projection = Projection::new(&frame);
        assert_eq!(projection.size(), Size::ZERO);
        assert_eq!(projection.pivot(), Point::new(0.5, 0.5));

        projection.move_to(Point::new(5.0, 5.0));
        for corner in projection.world_corners() {
            assert_eq!(corner, Point::new(5.0, 5.0));
        }
    }

    #[test]
    fn pivot_follows_origin_placement() {
        let centered = Projection::new(&centered_box(100.0));
        assert_eq!(centered.pivot(), Point::new(0.5, 0.5));

        let bottom_left = Projection::new(&RectFrame::from_position_size_pivot(
            Point::ZERO,
            Size::new(80.0, 40.0),
            Point::new(0.0, 0.0),
        ));
        assert_eq!(bottom_left.pivot(), Point::new(0.0, 0.0));
        assert_eq!(bottom_left.size(), Size::new(80.0, 40.0));

        let top_right = Projection::new(&RectFrame::from_position_size_pivot(
            Point::ZERO,
            Size::new(80.0, 40.0),
            Point::new(1.0, 1.0),
        ));
        assert_eq!(top_right.pivot(), Point::new(1.0, 1.0));
    }

    #[test]
    fn constructors_match_their_move_counterparts() {
        let frame = centered_box(100.0);
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));

        let placed = Projection::at(&frame, Point::new(30.0, 40.0));
        let mut moved = Projection::new(&frame);
        moved.move_to(Point::new(30.0, 40.0));
        assert_eq!(placed, moved);

        let constructed = Projection::bounded_at(&frame, Point::new(1000.0, 1000.0), bounds);
        let mut moved = Projection::new(&frame);
        moved.move_bounded(Point::new(1000.0, 1000.0), bounds);
        assert_eq!(constructed, moved);
    }
}
