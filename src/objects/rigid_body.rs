use tracing::{debug, trace};

use crate::collision::BoundingBox;
use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::{integrator, Environment};
use crate::math::vec2::{normalize_angle, Vec2};
use crate::objects::BodyConfig;
use crate::shapes::{Circle, LineSegment, Polygon, Shape};

/// A force or torque share that is retracted once its time runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Contribution {
    Force(Vec2),
    Torque(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TimedContribution {
    contribution: Contribution,
    remaining: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    tag: String,
    shape: Shape,

    // Kinematic state. `position` is the center of mass.
    position: Vec2,
    angle: f64,
    velocity: Vec2,
    angular_velocity: f64,
    acceleration: Vec2,
    angular_acceleration: f64,

    // Accumulated external force and torque, including live timed shares.
    force: Vec2,
    torque: f64,
    timed: Vec<TimedContribution>,

    mass: f64,
    rotational_inertia: f64,
    is_static: bool,

    render: Option<serde_json::Value>,
}

impl RigidBody {
    /// A circle centered on `center`.
    pub fn circle(center: Vec2, radius: f64, config: BodyConfig) -> PhysicsResult<Self> {
        let circle = Circle::new(radius)?;
        let inertia = circle.rotational_inertia(config.mass);
        Self::from_parts(Shape::Circle(circle), center, inertia, config)
    }

    /// A convex polygon from world-space vertices. The body's position is
    /// the polygon's centroid of area.
    pub fn polygon(vertices: Vec<Vec2>, config: BodyConfig) -> PhysicsResult<Self> {
        let polygon = Polygon::new(vertices)?;
        Self::from_polygon(polygon, config)
    }

    /// A regular polygon of `sides` vertices at `radius` from `center`.
    pub fn regular_polygon(
        center: Vec2,
        sides: usize,
        radius: f64,
        config: BodyConfig,
    ) -> PhysicsResult<Self> {
        let polygon = Polygon::regular(center, sides, radius)?;
        Self::from_polygon(polygon, config)
    }

    fn from_polygon(polygon: Polygon, config: BodyConfig) -> PhysicsResult<Self> {
        let center_of_mass = polygon.center_of_mass();
        let inertia = polygon.rotational_inertia(config.mass, center_of_mass);
        Self::from_parts(Shape::Polygon(polygon), center_of_mass, inertia, config)
    }

    fn from_parts(
        shape: Shape,
        position: Vec2,
        rotational_inertia: f64,
        config: BodyConfig,
    ) -> PhysicsResult<Self> {
        validate_mass(config.mass)?;
        Ok(Self {
            tag: config.tag,
            shape,
            position,
            angle: normalize_angle(config.angle),
            velocity: config.velocity,
            angular_velocity: config.angular_velocity,
            acceleration: Vec2::ZERO,
            angular_acceleration: 0.0,
            force: config.force,
            torque: config.torque,
            timed: Vec::new(),
            mass: config.mass,
            rotational_inertia,
            is_static: config.is_static,
            render: config.render,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn set_tag(&mut self, tag: String) {
        self.tag = tag;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Radius, for circles.
    pub fn radius(&self) -> Option<f64> {
        match &self.shape {
            Shape::Circle(circle) => Some(circle.radius),
            Shape::Polygon(_) => None,
        }
    }

    /// World-space vertex ring, for polygons.
    pub fn vertices(&self) -> Option<&[Vec2]> {
        match &self.shape {
            Shape::Polygon(polygon) => Some(polygon.vertices()),
            Shape::Circle(_) => None,
        }
    }

    /// Polygon edges, for polygons.
    pub fn sides(&self) -> Option<&[LineSegment]> {
        match &self.shape {
            Shape::Polygon(polygon) => Some(polygon.sides()),
            Shape::Circle(_) => None,
        }
    }

    /// Mean of the polygon's vertices; the center of a circle.
    pub fn centroid(&self) -> Vec2 {
        match &self.shape {
            Shape::Polygon(polygon) => polygon.centroid(),
            Shape::Circle(_) => self.position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Orientation in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: f64) {
        self.angular_velocity = angular_velocity;
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn angular_acceleration(&self) -> f64 {
        self.angular_acceleration
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn torque(&self) -> f64 {
        self.torque
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Changes the mass, scaling rotational inertia by the same ratio.
    pub fn set_mass(&mut self, mass: f64) -> PhysicsResult<()> {
        validate_mass(mass)?;
        self.rotational_inertia *= mass / self.mass;
        self.mass = mass;
        Ok(())
    }

    pub fn rotational_inertia(&self) -> f64 {
        self.rotational_inertia
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
        if is_static {
            self.acceleration = Vec2::ZERO;
            self.angular_acceleration = 0.0;
        }
    }

    pub fn render(&self) -> Option<&serde_json::Value> {
        self.render.as_ref()
    }

    /// Number of timed force/torque shares still in effect.
    pub fn pending_contributions(&self) -> usize {
        self.timed.len()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.shape.bounding_box(self.position)
    }

    /// Moves the body, keeping polygon vertices in step with the position.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
        if let Shape::Polygon(polygon) = &mut self.shape {
            polygon.translate(offset);
        }
    }

    /// Turns the body about its center of mass.
    pub fn rotate(&mut self, angle: f64) {
        if angle == 0.0 {
            return;
        }
        self.angle = normalize_angle(self.angle + angle);
        if let Shape::Polygon(polygon) = &mut self.shape {
            polygon.rotate(angle, self.position);
        }
    }

    /// Adds `force` to the accumulator. With a positive `timeout` (seconds)
    /// exactly this share is taken back once that much simulated time has
    /// passed; otherwise it stays until removed by an opposite force.
    pub fn apply_force(&mut self, force: Vec2, timeout: f64) {
        self.force += force;
        if timeout > 0.0 {
            trace!(tag = %self.tag, ?force, timeout, "timed force applied");
            self.timed.push(TimedContribution {
                contribution: Contribution::Force(force),
                remaining: timeout,
            });
        }
    }

    /// Adds `force * radius` to the torque accumulator, with the same
    /// timeout rules as [`RigidBody::apply_force`].
    pub fn apply_torque(&mut self, force: f64, radius: f64, timeout: f64) {
        let torque = force * radius;
        self.torque += torque;
        if timeout > 0.0 {
            trace!(tag = %self.tag, torque, timeout, "timed torque applied");
            self.timed.push(TimedContribution {
                contribution: Contribution::Torque(torque),
                remaining: timeout,
            });
        }
    }

    /// Counts `elapsed` seconds off every timed share and retracts the ones
    /// that ran out.
    pub fn advance_timers(&mut self, elapsed: f64) {
        let mut expired = Vec::new();
        self.timed.retain_mut(|entry| {
            entry.remaining -= elapsed;
            if entry.remaining <= 0.0 {
                expired.push(entry.contribution);
                false
            } else {
                true
            }
        });
        for contribution in expired {
            match contribution {
                Contribution::Force(force) => self.force -= force,
                Contribution::Torque(torque) => self.torque -= torque,
            }
            debug!(tag = %self.tag, ?contribution, "timed contribution expired");
        }
    }

    /// One integration step followed by `elapsed` seconds of timer progress.
    pub fn update(&mut self, environment: &Environment, elapsed: f64) {
        integrator::integrate(self, environment);
        self.advance_timers(elapsed);
    }

    /// `(gravity · mass + world force + own force) / mass`. Static bodies are
    /// left untouched.
    pub fn update_acceleration(&mut self, environment: &Environment) {
        if self.is_static {
            return;
        }
        self.acceleration =
            (environment.gravity * self.mass + environment.force + self.force) / self.mass;
    }

    pub fn update_velocity(&mut self) {
        self.velocity += self.acceleration;
    }

    pub fn update_position(&mut self) {
        let velocity = self.velocity;
        self.translate(velocity);
    }

    pub fn update_angular_acceleration(&mut self) {
        if self.is_static {
            return;
        }
        self.angular_acceleration = self.torque / self.rotational_inertia;
    }

    pub fn update_angular_velocity(&mut self) {
        self.angular_velocity += self.angular_acceleration;
    }

    pub fn update_angle(&mut self) {
        let angular_velocity = self.angular_velocity;
        self.rotate(angular_velocity);
    }
}

fn validate_mass(mass: f64) -> PhysicsResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}
