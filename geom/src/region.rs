use crate::{Point, Segment, AABB};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A closed region bounded by straight edges.
///
/// The vertices are kept exactly as given, in either winding. The boundary is implicitly
/// closed: the last vertex connects back to the first, so repeating the first point at the end
/// is not needed. No check is made that the polygon is simple, self intersecting shapes are
/// evaluated with the even-odd rule.
///
/// Regions with fewer than 3 vertices have no interior and never contain anything.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Even-odd ray casting: a ray is shot from `p` towards +x and every edge it crosses
    /// toggles the result.
    ///
    /// An edge counts when it straddles `p.y` (exactly one endpoint strictly above it) and
    /// `p.x` is strictly left of where the edge meets the horizontal line through `p`.
    /// Points lying on the boundary are not special cased, they fall where this arithmetic
    /// puts them. For the square `(0,0),(4,0),(4,4),(0,4)` that means the bottom and left
    /// edges and the `(0,0)` corner are inside while the top and right edges are not.
    ///
    /// O(n), never fails. Non-finite coordinates give an unspecified answer.
    pub fn contains(&self, p: Point) -> bool {
        let nvert = self.points.len();
        if nvert == 0 {
            return false;
        }

        let mut j = nvert - 1;
        let mut c = false;

        for i in 0..nvert {
            let verti = self.points[i];
            let vertj = self.points[j];

            // evaluation order matters for points on the boundary
            if ((verti.y > p.y) != (vertj.y > p.y))
                && (p.x < (vertj.x - verti.x) * (p.y - verti.y) / (vertj.y - verti.y) + verti.x)
            {
                c = !c;
            }
            j = i;
        }
        c
    }

    /// The `n` boundary edges, `v[i] -> v[(i + 1) % n]`
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Closest point on the boundary
    pub fn project(&self, p: Point) -> Option<Point> {
        self.edges()
            .map(|s| s.project(p))
            .min_by_key(|&proj| OrderedFloat(p.distance2(proj)))
    }

    pub fn distance_to_boundary(&self, p: Point) -> Option<f64> {
        self.project(p).map(|proj| proj.distance(p))
    }

    pub fn bbox(&self) -> Option<AABB> {
        AABB::from_points(&self.points)
    }

    pub fn barycenter(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().sum::<Point>() / (self.points.len() as f64))
    }

    /// Shoelace formula, positive for counter-clockwise regions
    pub fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        self.edges().map(|s| s.src.cross(s.dst)).sum::<f64>() * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Same boundary walked the other way
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        self.points.as_slice()
    }
}

impl From<Vec<Point>> for Region {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Region {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
