//! Shared scenes and helpers for integration tests.

#![allow(dead_code)]

use drishti::core::Point2D;
use drishti::sensor::{CircleObstacle, Obstacle, RangeSensor, RangeSensorConfig, SegmentObstacle};

/// Corner of a room ahead-left of the origin with a pillar in front of the
/// lower wall.
///
/// ```text
///   y=100  ───────────────┐ (200, 100)
///                         │
///        sensor (0,0) ▶   │ x=200
///                 ○       │
///            pillar       │
///                         ┘ (200, -300)
/// ```
pub fn corner_room() -> Vec<Box<dyn Obstacle<f64>>> {
    vec![
        Box::new(SegmentObstacle::new(Point2D::new(200.0, -300.0), Point2D::new(200.0, 100.0))),
        Box::new(SegmentObstacle::new(Point2D::new(-300.0, 100.0), Point2D::new(200.0, 100.0))),
        Box::new(CircleObstacle::new(Point2D::new(100.0, -50.0), 15.0)),
    ]
}

/// Same room with `f32` precision.
pub fn corner_room_f32() -> Vec<Box<dyn Obstacle<f32>>> {
    vec![
        Box::new(SegmentObstacle::new(Point2D::new(200.0, -300.0), Point2D::new(200.0, 100.0))),
        Box::new(SegmentObstacle::new(Point2D::new(-300.0, 100.0), Point2D::new(200.0, 100.0))),
        Box::new(CircleObstacle::new(Point2D::new(100.0, -50.0), 15.0)),
    ]
}

pub const ROOM_CORNER: Point2D<f64> = Point2D { x: 200.0, y: 100.0 };

/// Scan `obstacles` once from the origin facing +X.
pub fn scan<O: Obstacle<f64>>(
    config: RangeSensorConfig,
    obstacles: &[O],
) -> (Vec<Point2D<f64>>, Vec<f64>) {
    let sensor = RangeSensor::<f64>::new(config);
    sensor.update(Point2D::zero(), 0.0, obstacles);
    let snapshot = sensor.read_snapshot();
    (snapshot.to_cartesian(Point2D::zero()), snapshot.distances)
}

/// Points of the valid beams only, in scan order.
pub fn valid_points(points: &[Point2D<f64>], distances: &[f64]) -> Vec<Point2D<f64>> {
    points
        .iter()
        .zip(distances)
        .filter(|(_, d)| d.is_finite())
        .map(|(p, _)| *p)
        .collect()
}
