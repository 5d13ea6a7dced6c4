//! Obstacles the range sensor can cast rays against.
//!
//! The sensor only needs one question answered per obstacle: how far along
//! a ray is the nearest hit? Any shape from the surrounding simulation can
//! take part by implementing [`Obstacle`].

use crate::core::{Point2D, Scalar};

/// Shape that can be hit by a sensor ray.
pub trait Obstacle<T: Scalar>: Send + Sync {
    /// Distance from `origin` to the nearest intersection along `direction`.
    ///
    /// `direction` is expected to be a unit vector. Returns `None` if the ray
    /// misses. Hits behind the origin are never reported.
    fn ray_distance(&self, origin: Point2D<T>, direction: Point2D<T>) -> Option<T>;
}

impl<T: Scalar, O: Obstacle<T> + ?Sized> Obstacle<T> for &O {
    fn ray_distance(&self, origin: Point2D<T>, direction: Point2D<T>) -> Option<T> {
        (**self).ray_distance(origin, direction)
    }
}

impl<T: Scalar, O: Obstacle<T> + ?Sized> Obstacle<T> for Box<O> {
    fn ray_distance(&self, origin: Point2D<T>, direction: Point2D<T>) -> Option<T> {
        (**self).ray_distance(origin, direction)
    }
}

/// Straight wall between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentObstacle<T> {
    pub start: Point2D<T>,
    pub end: Point2D<T>,
}

impl<T: Scalar> SegmentObstacle<T> {
    pub fn new(start: Point2D<T>, end: Point2D<T>) -> Self {
        Self { start, end }
    }
}

impl<T: Scalar> Obstacle<T> for SegmentObstacle<T> {
    fn ray_distance(&self, origin: Point2D<T>, direction: Point2D<T>) -> Option<T> {
        let dir = direction.normalized();
        let edge = self.end - self.start;
        let denom = dir.cross(edge);
        // Parallel or collinear rays never report a hit
        if denom.abs() <= T::EPSILON {
            return None;
        }
        let to_start = self.start - origin;
        let t = to_start.cross(edge) / denom;
        let s = to_start.cross(dir) / denom;
        if t >= T::ZERO && s >= T::ZERO && s <= T::ONE {
            Some(t)
        } else {
            None
        }
    }
}

/// Round obstacle such as a pillar or table leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleObstacle<T> {
    pub center: Point2D<T>,
    pub radius: T,
}

impl<T: Scalar> CircleObstacle<T> {
    pub fn new(center: Point2D<T>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl<T: Scalar> Obstacle<T> for CircleObstacle<T> {
    fn ray_distance(&self, origin: Point2D<T>, direction: Point2D<T>) -> Option<T> {
        let dir = direction.normalized();
        let f = origin - self.center;
        let b = f.dot(dir);
        let c = f.dot(f) - self.radius * self.radius;
        let disc = b * b - c;
        if disc < T::ZERO {
            return None;
        }
        let sq = disc.sqrt();
        let near = -b - sq;
        let far = -b + sq;
        if near >= T::ZERO {
            Some(near)
        } else if far >= T::ZERO {
            // Origin inside the circle
            Some(far)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_hit() {
        let wall = SegmentObstacle::new(Point2D::new(10.0f64, -5.0), Point2D::new(10.0, 5.0));
        let d = wall.ray_distance(Point2D::zero(), Point2D::new(1.0, 0.0));
        assert_relative_eq!(d.unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segment_miss_behind_and_beside() {
        let wall = SegmentObstacle::new(Point2D::new(10.0f64, -5.0), Point2D::new(10.0, 5.0));
        assert!(wall.ray_distance(Point2D::zero(), Point2D::new(-1.0, 0.0)).is_none());
        assert!(wall.ray_distance(Point2D::zero(), Point2D::new(0.0, 1.0)).is_none());
        // Passes above the end of the wall
        let dir = Point2D::new(1.0, 1.0).normalized();
        assert!(wall.ray_distance(Point2D::zero(), dir).is_none());
    }

    #[test]
    fn test_segment_parallel() {
        let wall = SegmentObstacle::new(Point2D::new(0.0f32, 1.0), Point2D::new(10.0, 1.0));
        assert!(wall.ray_distance(Point2D::zero(), Point2D::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn test_circle_hit_from_outside() {
        let pillar = CircleObstacle::new(Point2D::new(20.0f64, 0.0), 5.0);
        let d = pillar.ray_distance(Point2D::zero(), Point2D::new(1.0, 0.0));
        assert_relative_eq!(d.unwrap(), 15.0, epsilon = 1e-12);
        assert!(pillar.ray_distance(Point2D::zero(), Point2D::new(0.0, 1.0)).is_none());
    }

    #[test]
    fn test_circle_from_inside() {
        let room = CircleObstacle::new(Point2D::new(1.0f64, 1.0), 7.0);
        let d = room.ray_distance(Point2D::new(1.0, 1.0), Point2D::new(0.0, -1.0));
        assert_relative_eq!(d.unwrap(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trait_object() {
        let obstacles: Vec<Box<dyn Obstacle<f64>>> = vec![
            Box::new(CircleObstacle::new(Point2D::new(20.0, 0.0), 5.0)),
            Box::new(SegmentObstacle::new(Point2D::new(10.0, -5.0), Point2D::new(10.0, 5.0))),
        ];
        let nearest = obstacles
            .iter()
            .filter_map(|o| o.ray_distance(Point2D::zero(), Point2D::new(1.0, 0.0)))
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(nearest, 10.0, epsilon = 1e-12);
    }
}
