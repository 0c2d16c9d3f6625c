use crate::collision::BoundingBox;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> PhysicsResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(PhysicsError::invalid_geometry(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    /// Square of side `2 * radius` centered on `center`.
    pub fn bounding_box(&self, center: Vec2) -> BoundingBox {
        let diameter = 2.0 * self.radius;
        BoundingBox::new(center.x - self.radius, center.y - self.radius, diameter, diameter)
    }

    /// Interval covered on a unit `axis`, from the two extreme points
    /// `center ± radius * axis`.
    pub fn project(&self, center: Vec2, axis: Vec2) -> (f64, f64) {
        let offset = axis * self.radius;
        let a = (center + offset).dot(axis);
        let b = (center - offset).dot(axis);
        (a.min(b), a.max(b))
    }

    pub fn rotational_inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius
    }
}
