use crate::Point;
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box, `ll` is the lower left corner and `ur` the upper right one
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct AABB {
    pub ll: Point,
    pub ur: Point,
}

impl AABB {
    /// Create a new `AABB`.
    pub const fn new(ll: Point, ur: Point) -> Self {
        AABB { ll, ur }
    }

    /// Smallest `AABB` containing every point, `None` if there are none.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let mut ll: Point = *points.first()?;
        let mut ur: Point = ll;

        for &v in &points[1..] {
            ll = ll.min(v);
            ur = ur.max(v);
        }

        Some(AABB { ll, ur })
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.ur.x - self.ll.x
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.ur.y - self.ll.y
    }

    #[inline]
    pub fn union(self, other: AABB) -> AABB {
        AABB {
            ll: self.ll.min(other.ll),
            ur: self.ur.max(other.ur),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.ll * 0.5 + self.ur * 0.5
    }

    #[inline]
    pub fn expand(self, w: f64) -> Self {
        let d = Point::new(w, w);
        Self {
            ll: self.ll - d,
            ur: self.ur + d,
        }
    }

    /// Inclusive on every side
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.ll.x && p.y >= self.ll.y && p.x <= self.ur.x && p.y <= self.ur.y
    }
}

#[cfg(test)]
mod tests {
    use crate::{point, AABB};

    #[test]
    fn test_from_points() {
        assert_eq!(AABB::from_points(&[]), None);

        let b = AABB::from_points(&[point(1.0, 5.0), point(-2.0, 3.0), point(0.0, 7.0)]).unwrap();
        assert_eq!(b.ll, point(-2.0, 3.0));
        assert_eq!(b.ur, point(1.0, 7.0));
        assert_eq!(b.w(), 3.0);
        assert_eq!(b.h(), 4.0);
    }

    #[test]
    fn test_contains_inclusive() {
        let b = AABB::new(point(0.0, 0.0), point(2.0, 2.0));
        assert!(b.contains(point(0.0, 0.0)));
        assert!(b.contains(point(2.0, 1.0)));
        assert!(!b.contains(point(2.1, 1.0)));
        assert!(b.expand(0.5).contains(point(2.1, 1.0)));
    }

    #[test]
    fn test_union() {
        let a = AABB::new(point(0.0, 0.0), point(1.0, 1.0));
        let b = AABB::new(point(3.0, -1.0), point(4.0, 0.5));
        let u = a.union(b);
        assert_eq!(u, AABB::new(point(0.0, -1.0), point(4.0, 1.0)));
        assert_eq!(u.center(), point(2.0, 0.0));
    }
}
