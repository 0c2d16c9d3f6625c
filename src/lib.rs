//! Small 2D rigid-body physics core: vector math, circle and polygon shapes,
//! a unit-step integrator, bounding-box broad phase, SAT narrow phase and
//! elastic collision response.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{detect_collision, resolve_collision, BoundingBox, Collision, CollisionSide};
pub use error::{PhysicsError, PhysicsResult};
pub use integration::Environment;
pub use math::vec2::{normalize_angle, Vec2};
pub use objects::{BodyConfig, RigidBody};
pub use shapes::{Circle, LineSegment, Polygon, Shape};
pub use world::{PhysicsWorld, WorldConfig};
