use tracing::trace;

use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Circle, Shape};

/// Which of the two tested bodies a minimum translation vector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionSide {
    A,
    B,
}

/// Result of a positive collision test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Smallest displacement that separates the pair when applied to `side`.
    pub mtv: Vec2,
    pub side: CollisionSide,
}

impl Collision {
    pub fn depth(&self) -> f64 {
        self.mtv.magnitude()
    }
}

/// Bounding boxes first, then the exact test for the shape pair. `None`
/// means the bodies are apart. Touching boxes never collide; circles that
/// touch on a diagonal do, see [`check_circle_circle`].
pub fn detect_collision(body_a: &RigidBody, body_b: &RigidBody) -> Option<Collision> {
    if !body_a.bounding_box().overlaps(&body_b.bounding_box()) {
        return None;
    }

    let collision = match (body_a.shape(), body_b.shape()) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => check_circle_circle(
            body_a.position(),
            circle_a,
            body_b.position(),
            circle_b,
        ),
        _ => sat(body_a, body_b),
    };

    if let Some(c) = &collision {
        trace!(
            a = body_a.tag(),
            b = body_b.tag(),
            mtv = ?c.mtv,
            side = ?c.side,
            "collision detected"
        );
    }
    collision
}

/// Analytic circle test. The vector always belongs to body A and points
/// from B's center toward A's.
///
/// Only `distance > radii_sum` rejects, so circles touching exactly still
/// report a contact with a zero-length vector. Along an axis the bounding
/// boxes reject that case first; on a diagonal they overlap and the contact
/// reaches resolution, which leaves positions alone and bounces velocities.
pub fn check_circle_circle(
    center_a: Vec2,
    circle_a: &Circle,
    center_b: Vec2,
    circle_b: &Circle,
) -> Option<Collision> {
    let offset = center_a - center_b;
    let distance = offset.magnitude();
    let radii_sum = circle_a.radius + circle_b.radius;

    if distance > radii_sum {
        return None;
    }

    Some(Collision {
        mtv: offset.unit() * (radii_sum - distance),
        side: CollisionSide::A,
    })
}

/// Separating axis test for pairs with at least one polygon.
///
/// Two circles are a caller error: use [`check_circle_circle`] for them.
pub fn separating_axis(body_a: &RigidBody, body_b: &RigidBody) -> PhysicsResult<Option<Collision>> {
    if !body_a.shape().is_polygon() && !body_b.shape().is_polygon() {
        return Err(PhysicsError::NoPolygonOperand);
    }
    Ok(sat(body_a, body_b))
}

fn sat(body_a: &RigidBody, body_b: &RigidBody) -> Option<Collision> {
    let (shape_a, center_a) = (body_a.shape(), body_a.position());
    let (shape_b, center_b) = (body_b.shape(), body_b.position());

    let axes = shape_a
        .axes_against(center_a, shape_b)
        .into_iter()
        .chain(shape_b.axes_against(center_b, shape_a));

    // Shallowest overlap wins; on ties the earliest axis is kept.
    let mut best: Option<(f64, Vec2, CollisionSide)> = None;

    for axis in axes {
        let (min_a, max_a) = shape_a.project_on_axis(center_a, axis);
        let (min_b, max_b) = shape_b.project_on_axis(center_b, axis);

        let (side, penetration) = if min_a > min_b {
            (CollisionSide::A, (max_b - min_a).max(0.0))
        } else {
            (CollisionSide::B, (max_a - min_b).max(0.0))
        };

        if penetration == 0.0 {
            return None;
        }

        if best.map_or(true, |(shallowest, _, _)| penetration < shallowest) {
            best = Some((penetration, axis, side));
        }
    }

    best.map(|(penetration, axis, side)| Collision {
        mtv: axis * penetration,
        side,
    })
}
