pub mod aabb;
pub mod plane;
pub mod transform;
pub mod vector;

pub use aabb::BBox3;
pub use glam::{dvec3, DAffine3, DMat3, DVec3};
pub use plane::Plane;
pub use transform::Transform;
pub use vector::VectorExt;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
