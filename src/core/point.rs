//! 2D point type shared by the sensor and the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

use super::scalar::Scalar;

/// A point (or vector) in the simulation plane.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D<T> {
    /// X coordinate
    pub x: T,
    /// Y coordinate
    pub y: T,
}

impl<T: Scalar> Point2D<T> {
    /// Create a new point
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Origin
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    /// Unit vector at `angle` scaled by `distance`.
    #[inline]
    pub fn from_polar(angle: T, distance: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(distance * cos, distance * sin)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: Point2D<T>) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Point2D<T>) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Length as a vector from the origin
    #[inline]
    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or itself if zero-length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > T::ZERO {
            Self::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    #[inline]
    pub fn dot(&self, other: Point2D<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z-component of the 3D cross product.
    #[inline]
    pub fn cross(&self, other: Point2D<T>) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T: Scalar> Add for Point2D<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Scalar> Sub for Point2D<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> Mul<T> for Point2D<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}
