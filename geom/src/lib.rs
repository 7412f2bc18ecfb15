mod aabb;
mod point;
mod region;
mod segment;

pub use aabb::*;
pub use point::*;
pub use region::*;
pub use segment::*;
