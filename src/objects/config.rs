//! Construction options shared by every body shape.

use serde::{Deserialize, Serialize};

use crate::math::vec2::Vec2;

/// Optional settings applied when a body is created.
///
/// Deserializes from the camelCase keys `tag`, `angle`, `velocity`,
/// `angularVelocity`, `mass`, `force`, `torque`, `isStatic` and `render`.
/// Missing keys fall back to [`BodyConfig::default`] and unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    /// Identity within a world. Left empty, the world assigns one.
    pub tag: String,
    pub angle: f64,
    pub velocity: Vec2,
    pub angular_velocity: f64,
    pub mass: f64,
    /// Permanent force present from the first step.
    pub force: Vec2,
    /// Permanent torque present from the first step.
    pub torque: f64,
    pub is_static: bool,
    /// Opaque data for whoever draws the body; never read by the engine.
    pub render: Option<serde_json::Value>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            tag: String::new(),
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass: 1.0,
            force: Vec2::ZERO,
            torque: 0.0,
            is_static: false,
            render: None,
        }
    }
}

impl BodyConfig {
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[must_use]
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[must_use]
    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    #[must_use]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    #[must_use]
    pub fn with_force(mut self, force: Vec2) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn with_torque(mut self, torque: f64) -> Self {
        self.torque = torque;
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: serde_json::Value) -> Self {
        self.render = Some(render);
        self
    }
}
