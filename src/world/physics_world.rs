use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collision::{detect_collision, resolution};
use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::Environment;
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

const DEFAULT_SECONDS_PER_STEP: f64 = 1.0 / 60.0;

/// World-level settings, deserializable from the same camelCase bag as
/// [`crate::objects::BodyConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    pub gravity: Vec2,
    pub force: Vec2,
    /// Simulated seconds per `step()`; only drives timed force expiry.
    pub seconds_per_step: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::ZERO,
            force: Vec2::ZERO,
            seconds_per_step: DEFAULT_SECONDS_PER_STEP,
        }
    }
}

/// Owns the bodies and advances them one unit step at a time.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    pub gravity: Vec2,
    pub force: Vec2,
    pub seconds_per_step: f64,
    bodies: Vec<RigidBody>,
    next_id: usize,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::from_config(WorldConfig::default())
    }

    pub fn from_config(config: WorldConfig) -> Self {
        Self {
            gravity: config.gravity,
            force: config.force,
            seconds_per_step: config.seconds_per_step,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a body and returns its tag. Untagged bodies get a fresh
    /// `body-<n>` tag.
    pub fn add_body(&mut self, mut body: RigidBody) -> PhysicsResult<&str> {
        if body.tag().is_empty() {
            let tag = self.generate_tag();
            body.set_tag(tag);
        } else if self.index_of(body.tag()).is_some() {
            return Err(PhysicsError::duplicate_tag(body.tag()));
        }

        debug!(tag = body.tag(), bodies = self.bodies.len() + 1, "body added");
        self.bodies.push(body);
        let added = &self.bodies[self.bodies.len() - 1];
        Ok(added.tag())
    }

    pub fn remove_body(&mut self, tag: &str) -> PhysicsResult<RigidBody> {
        let index = self
            .index_of(tag)
            .ok_or_else(|| PhysicsError::unknown_tag(tag))?;
        let body = self.bodies.remove(index);
        debug!(tag, bodies = self.bodies.len(), "body removed");
        Ok(body)
    }

    pub fn body(&self, tag: &str) -> PhysicsResult<&RigidBody> {
        self.bodies
            .iter()
            .find(|body| body.tag() == tag)
            .ok_or_else(|| PhysicsError::unknown_tag(tag))
    }

    pub fn body_mut(&mut self, tag: &str) -> PhysicsResult<&mut RigidBody> {
        self.bodies
            .iter_mut()
            .find(|body| body.tag() == tag)
            .ok_or_else(|| PhysicsError::unknown_tag(tag))
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn environment(&self) -> Environment {
        Environment::new(self.gravity, self.force)
    }

    /// Integrates every body, then separates and bounces each colliding
    /// pair once. Returns how many pairs collided.
    pub fn step(&mut self) -> usize {
        let environment = self.environment();
        for body in self.bodies.iter_mut() {
            body.update(&environment, self.seconds_per_step);
        }

        let mut collisions = 0;
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (body_a, body_b) = body_pair_mut(&mut self.bodies, i, j);
                if body_a.is_static() && body_b.is_static() {
                    continue;
                }
                if let Some(collision) = detect_collision(body_a, body_b) {
                    resolution::apply_resolution(body_a, body_b, &collision);
                    collisions += 1;
                }
            }
        }
        collisions
    }

    fn index_of(&self, tag: &str) -> Option<usize> {
        self.bodies.iter().position(|body| body.tag() == tag)
    }

    fn generate_tag(&mut self) -> String {
        loop {
            let tag = format!("body-{}", self.next_id);
            self.next_id += 1;
            if self.index_of(&tag).is_none() {
                return tag;
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Two disjoint mutable borrows, `i < j`.
fn body_pair_mut(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
