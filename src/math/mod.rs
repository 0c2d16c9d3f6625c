pub mod vec2;

pub use vec2::{normalize_angle, Vec2};
