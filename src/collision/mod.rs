pub mod aabb;
pub mod detection;
pub mod resolution;

pub use aabb::BoundingBox;
pub use detection::{
    check_circle_circle, detect_collision, separating_axis, Collision, CollisionSide,
};
pub use resolution::{apply_resolution, elastic_velocities, resolve_collision};
