//! Host-supplied rectangle snapshots

use crate::{Bounds, Point, Size};

/// World-space snapshot of a rectangle: its four corners plus the world
/// position of its origin.
///
/// Corner order is bottom-left, top-left, top-right, bottom-right. The host
/// materializes one of these per call; the library never reads live scene
/// state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectFrame {
    pub corners: [Point; 4],
    pub position: Point,
}

impl RectFrame {
    pub const fn new(corners: [Point; 4], position: Point) -> Self {
        Self { corners, position }
    }

    /// Builds a frame from an origin position, a size, and a fractional
    /// pivot locating the origin within the rectangle.
    pub fn from_position_size_pivot(position: Point, size: Size, pivot: Point) -> Self {
        let left = -pivot.x * size.width;
        let bottom = -pivot.y * size.height;
        let right = left + size.width;
        let top = bottom + size.height;
        let corners = [
            Point::new(position.x + left, position.y + bottom),
            Point::new(position.x + left, position.y + top),
            Point::new(position.x + right, position.y + top),
            Point::new(position.x + right, position.y + bottom),
        ];
        Self { corners, position }
    }

    /// Builds a frame with the origin at the rectangle's center.
    pub fn centered(position: Point, size: Size) -> Self {
        Self::from_position_size_pivot(position, size, Point::new(0.5, 0.5))
    }

    /// Corner positions relative to the frame's own origin.
    pub fn local_corners(&self) -> [Point; 4] {
        [
            self.corners[0] - self.position,
            self.corners[1] - self.position,
            self.corners[2] - self.position,
            self.corners[3] - self.position,
        ]
    }

    /// Min/max world extents of the frame.
    pub fn extents(&self) -> Bounds {
        Bounds::new(self.corners[0], self.corners[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_frame_has_symmetric_local_corners() {
        let frame = RectFrame::centered(Point::new(100.0, 200.0), Size::new(40.0, 20.0));
        assert_eq!(
            frame.local_corners(),
            [
                Point::new(-20.0, -10.0),
                Point::new(-20.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(20.0, -10.0),
            ]
        );
    }

    #[test]
    fn pivot_locates_origin_within_rectangle() {
        let frame = RectFrame::from_position_size_pivot(
            Point::new(50.0, 50.0),
            Size::new(10.0, 10.0),
            Point::new(0.0, 1.0),
        );
        // Origin at the bottom-left x, top y.
        assert_eq!(frame.corners[0], Point::new(50.0, 40.0));
        assert_eq!(frame.corners[2], Point::new(60.0, 50.0));
    }

    #[test]
    fn extents_span_min_to_max_corner() {
        let frame = RectFrame::centered(Point::new(0.0, 0.0), Size::new(100.0, 60.0));
        let extents = frame.extents();
        assert_eq!(extents.min, Point::new(-50.0, -30.0));
        assert_eq!(extents.max, Point::new(50.0, 30.0));
    }
}
