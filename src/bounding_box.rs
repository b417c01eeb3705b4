//! Axis aligned bounding boxes.

use nalgebra::{Scalar, Vector2};
use std::ops::{Add, Sub};

/// Smallest axis aligned box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<K: Scalar + Copy + PartialOrd> {
    /// Lower left corner
    pub min: Vector2<K>,
    /// Upper right corner
    pub max: Vector2<K>,
}

impl<K: Scalar + Copy + PartialOrd> BoundingBox<K> {
    /// Bounds of `points`, `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Vector2<K>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let mut min = points.next()?;
        let mut max = min;
        for p in points {
            if min.x > p.x {
                min.x = p.x;
            }
            if min.y > p.y {
                min.y = p.y;
            }
            if max.x < p.x {
                max.x = p.x;
            }
            if max.y < p.y {
                max.y = p.y;
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Whether `point` lies inside or on the border
    pub fn contains(&self, point: Vector2<K>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}

impl<K> BoundingBox<K>
where
    K: Scalar + Copy + PartialOrd + Add<Output = K> + Sub<Output = K>,
{
    /// Extent along both axes
    pub fn size(&self) -> Vector2<K> {
        Vector2::new(self.max.x - self.min.x, self.max.y - self.min.y)
    }

    /// The same box grown by `margin` on every side
    pub fn expand(&self, margin: K) -> Self {
        BoundingBox {
            min: Vector2::new(self.min.x - margin, self.min.y - margin),
            max: Vector2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}

impl<K: Scalar + Copy + PartialOrd> From<[Vector2<K>; 2]> for BoundingBox<K> {
    fn from(array: [Vector2<K>; 2]) -> Self {
        BoundingBox {
            min: array[0],
            max: array[1],
        }
    }
}
