//! Segment builders for host debug overlays
//!
//! The library never draws; these produce the line endpoints a host can feed
//! into whatever debug renderer it has.

use crate::{Point, Projection};

/// Closed loop of segments tracing four corners in order, each corner joined
/// to the previous one.
pub fn corner_segments(corners: [Point; 4]) -> [(Point, Point); 4] {
    let mut segments = [(Point::ZERO, Point::ZERO); 4];
    for (i, segment) in segments.iter_mut().enumerate() {
        let previous = if i == 0 { 3 } else { i - 1 };
        *segment = (corners[i], corners[previous]);
    }
    segments
}

/// Per-edge violation segments for a projection, ordered left, right, top,
/// bottom.
///
/// Each segment starts at the edge's axis-midline anchor and runs inward by
/// the edge's out-of-bounds distance; in-bounds edges produce zero-length
/// segments.
pub fn out_of_bounds_segments(projection: &Projection) -> [(Point, Point); 4] {
    let corners = projection.world_corners();
    let position = projection.world_position();
    let distances = projection.out_of_bounds();

    let anchors = [
        Point::new(corners[0].x, position.y),
        Point::new(corners[2].x, position.y),
        Point::new(position.x, corners[2].y),
        Point::new(position.x, corners[0].y),
    ];
    [
        (
            anchors[0],
            Point::new(anchors[0].x - distances.left, anchors[0].y),
        ),
        (
            anchors[1],
            Point::new(anchors[1].x - distances.right, anchors[1].y),
        ),
        (
            anchors[2],
            Point::new(anchors[2].x, anchors[2].y - distances.top),
        ),
        (
            anchors[3],
            Point::new(anchors[3].x, anchors[3].y - distances.bottom),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, RectFrame, Size};

    #[test]
    fn corner_segments_close_the_loop() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let segments = corner_segments(corners);
        assert_eq!(segments[0], (corners[0], corners[3]));
        assert_eq!(segments[1], (corners[1], corners[0]));
        assert_eq!(segments[2], (corners[2], corners[1]));
        assert_eq!(segments[3], (corners[3], corners[2]));
    }

    #[test]
    fn violation_segments_run_back_toward_bounds() {
        let frame = RectFrame::centered(Point::ZERO, Size::new(100.0, 100.0));
        let bounds = Bounds::new(Point::ZERO, Point::new(800.0, 600.0));
        let mut projection = Projection::new(&frame);
        projection.move_bounded(Point::new(830.0, 300.0), bounds);

        let segments = out_of_bounds_segments(&projection);
        // Right edge at x = 880 is 80 past the bound; its segment spans back
        // to x = 800, anchored at the corrected position's midline.
        assert_eq!(segments[1].0, Point::new(880.0, 300.0));
        assert_eq!(segments[1].1, Point::new(800.0, 300.0));
        // In-bounds edges collapse to their anchors.
        assert_eq!(segments[2].0, segments[2].1);
    }
}
