use crate::{Point, AABB};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn new(src: Point, dst: Point) -> Self {
        Self { src, dst }
    }

    /// Closest point of the segment to `p`
    pub fn project(&self, p: Point) -> Point {
        let diff = self.dst - self.src;
        let diff2 = p - self.src;
        let diff3 = p - self.dst;

        let proj1 = diff2.dot(diff);
        let proj2 = -diff3.dot(diff);

        if proj1 <= 0.0 {
            self.src
        } else if proj2 <= 0.0 {
            self.dst
        } else {
            let t = proj1 / diff.magnitude2();
            self.src + diff * t
        }
    }

    pub fn vec(&self) -> Point {
        self.dst - self.src
    }

    pub fn length(&self) -> f64 {
        self.vec().magnitude()
    }

    pub fn middle(&self) -> Point {
        (self.src + self.dst) * 0.5
    }

    pub fn bbox(&self) -> AABB {
        AABB::new(self.src.min(self.dst), self.src.max(self.dst))
    }
}
