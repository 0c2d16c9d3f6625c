use tracing::trace;

use crate::collision::detection::{detect_collision, Collision, CollisionSide};
use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Detects, separates and bounces a pair of bodies.
pub fn resolve_collision(body_a: &mut RigidBody, body_b: &mut RigidBody) {
    if let Some(collision) = detect_collision(body_a, body_b) {
        apply_resolution(body_a, body_b, &collision);
    }
}

/// Pushes the pair apart by `collision` and replaces the velocities of the
/// non-static bodies with their elastic-collision results.
pub fn apply_resolution(body_a: &mut RigidBody, body_b: &mut RigidBody, collision: &Collision) {
    separate(body_a, body_b, collision);

    let (velocity_a, velocity_b) = elastic_velocities(body_a, body_b);
    trace!(
        a = body_a.tag(),
        b = body_b.tag(),
        ?velocity_a,
        ?velocity_b,
        "collision resolved"
    );
    if !body_a.is_static() {
        body_a.set_velocity(velocity_a);
    }
    if !body_b.is_static() {
        body_b.set_velocity(velocity_b);
    }
}

/// Moves the attributed body by the vector. A static body is never moved:
/// its partner takes the reversed vector instead.
fn separate(body_a: &mut RigidBody, body_b: &mut RigidBody, collision: &Collision) {
    let (target, other) = match collision.side {
        CollisionSide::A => (body_a, body_b),
        CollisionSide::B => (body_b, body_a),
    };
    if !target.is_static() {
        target.translate(collision.mtv);
    } else if !other.is_static() {
        other.translate(-collision.mtv);
    }
}

/// Post-collision velocities from the 2D elastic collision law along the
/// line of centers. A static partner counts as infinitely heavy. Coincident
/// centers give non-finite results.
pub fn elastic_velocities(body_a: &RigidBody, body_b: &RigidBody) -> (Vec2, Vec2) {
    let velocity_a = bounce(body_a, body_b);
    let velocity_b = bounce(body_b, body_a);
    (velocity_a, velocity_b)
}

fn bounce(body: &RigidBody, partner: &RigidBody) -> Vec2 {
    let mass_factor = if partner.is_static() {
        2.0
    } else {
        2.0 * partner.mass() / (body.mass() + partner.mass())
    };
    let relative_velocity = body.velocity() - partner.velocity();
    let offset = body.position() - partner.position();
    let projection = relative_velocity.dot(offset) / offset.magnitude_squared();
    body.velocity() - offset * (mass_factor * projection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BodyConfig;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    const EPSILON: f64 = 1e-9;

    fn ball(x: f64, y: f64, mass: f64, velocity: Vec2) -> RigidBody {
        RigidBody::circle(
            Vec2::new(x, y),
            1.0,
            BodyConfig::default().with_mass(mass).with_velocity(velocity),
        )
        .unwrap()
    }

    fn wall(x: f64, y: f64) -> RigidBody {
        RigidBody::regular_polygon(
            Vec2::new(x, y),
            4,
            2.0 * FRAC_1_SQRT_2,
            BodyConfig::default().with_static(true),
        )
        .unwrap()
    }

    fn momentum(a: &RigidBody, b: &RigidBody) -> Vec2 {
        a.velocity() * a.mass() + b.velocity() * b.mass()
    }

    fn kinetic_energy(a: &RigidBody, b: &RigidBody) -> f64 {
        0.5 * a.mass() * a.velocity().magnitude_squared()
            + 0.5 * b.mass() * b.velocity().magnitude_squared()
    }

    #[test]
    fn test_equal_masses_swap_velocities_head_on() {
        let mut a = ball(0.0, 0.0, 1.0, Vec2::new(10.0, 0.0));
        let mut b = ball(1.5, 0.0, 1.0, Vec2::new(-10.0, 0.0));
        resolve_collision(&mut a, &mut b);
        assert_abs_diff_eq!(a.velocity().x, -10.0, epsilon = EPSILON);
        assert_abs_diff_eq!(b.velocity().x, 10.0, epsilon = EPSILON);
        // A took the whole correction.
        assert_abs_diff_eq!(a.position().x, -0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(b.position().x, 1.5, epsilon = EPSILON);
    }

    #[test]
    fn test_momentum_and_energy_conserved() {
        let mut a = ball(0.0, 0.0, 1.0, Vec2::new(4.0, 0.0));
        let mut b = ball(1.2, 0.0, 3.0, Vec2::new(-2.0, 0.0));
        let p_before = momentum(&a, &b);
        let e_before = kinetic_energy(&a, &b);

        resolve_collision(&mut a, &mut b);

        let p_after = momentum(&a, &b);
        assert_abs_diff_eq!(p_before.x, p_after.x, epsilon = EPSILON);
        assert_abs_diff_eq!(p_before.y, p_after.y, epsilon = EPSILON);
        assert_abs_diff_eq!(e_before, kinetic_energy(&a, &b), epsilon = EPSILON);
        assert!(a.velocity().x < 0.0);
    }

    #[test]
    fn test_oblique_collision_conserves_momentum_and_energy() {
        let mut a = ball(0.0, 0.0, 2.0, Vec2::new(3.0, 1.0));
        let mut b = ball(1.0, 1.0, 5.0, Vec2::new(-1.0, 0.5));
        let p_before = momentum(&a, &b);
        let e_before = kinetic_energy(&a, &b);

        resolve_collision(&mut a, &mut b);

        let p_after = momentum(&a, &b);
        assert_abs_diff_eq!(p_before.x, p_after.x, epsilon = EPSILON);
        assert_abs_diff_eq!(p_before.y, p_after.y, epsilon = EPSILON);
        assert_abs_diff_eq!(e_before, kinetic_energy(&a, &b), epsilon = EPSILON);
    }

    #[test]
    fn test_no_collision_leaves_bodies_alone() {
        let mut a = ball(0.0, 0.0, 1.0, Vec2::new(1.0, 0.0));
        let mut b = ball(5.0, 0.0, 1.0, Vec2::new(-1.0, 0.0));
        let (a0, b0) = (a.clone(), b.clone());
        resolve_collision(&mut a, &mut b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_static_body_is_never_moved_or_bounced() {
        let mut ground = wall(0.0, 0.0);
        let mut falling = ball(0.0, -1.8, 1.0, Vec2::new(0.0, 3.0));
        let ground_before = ground.clone();

        resolve_collision(&mut ground, &mut falling);

        assert_eq!(ground, ground_before);
        // Half-extent 1 plus radius 1.
        assert_abs_diff_eq!(falling.position().y, -2.0, epsilon = 1e-6);
        assert!(falling.velocity().y < 0.0);
        assert_abs_diff_eq!(falling.velocity().y, -3.0, epsilon = EPSILON);
    }

    #[test]
    fn test_static_body_as_second_argument() {
        let mut falling = ball(0.0, -1.8, 1.0, Vec2::new(0.0, 3.0));
        let mut ground = wall(0.0, 0.0);
        let ground_before = ground.clone();

        resolve_collision(&mut falling, &mut ground);

        assert_eq!(ground, ground_before);
        assert_abs_diff_eq!(falling.position().y, -2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(falling.velocity().y, -3.0, epsilon = EPSILON);
    }

    #[test]
    fn test_coincident_centers_are_not_finite() {
        let a = ball(0.0, 0.0, 1.0, Vec2::new(1.0, 0.0));
        let b = ball(0.0, 0.0, 1.0, Vec2::new(-1.0, 0.0));
        let (va, vb) = elastic_velocities(&a, &b);
        assert!(!va.is_finite());
        assert!(!vb.is_finite());
    }

    #[test]
    fn test_apply_resolution_with_given_vector() {
        let mut a = ball(0.0, 0.0, 1.0, Vec2::ZERO);
        let mut b = ball(1.0, 0.0, 1.0, Vec2::ZERO);
        let collision = Collision { mtv: Vec2::new(1.0, 0.0), side: CollisionSide::B };
        apply_resolution(&mut a, &mut b, &collision);
        assert_eq!(a.position(), Vec2::ZERO);
        assert_eq!(b.position(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_grazing_contact_bounces_without_moving() {
        let config = |velocity| BodyConfig::default().with_velocity(velocity);
        let mut a = RigidBody::circle(Vec2::ZERO, 2.5, config(Vec2::new(1.0, 0.0))).unwrap();
        let mut b = RigidBody::circle(Vec2::new(3.0, 4.0), 2.5, config(Vec2::ZERO)).unwrap();

        resolve_collision(&mut a, &mut b);

        assert_eq!(a.position(), Vec2::ZERO);
        assert_eq!(b.position(), Vec2::new(3.0, 4.0));
        assert_abs_diff_eq!(a.velocity().x, 0.64, epsilon = EPSILON);
        assert_abs_diff_eq!(a.velocity().y, -0.48, epsilon = EPSILON);
        assert_abs_diff_eq!(b.velocity().x, 0.36, epsilon = EPSILON);
        assert_abs_diff_eq!(b.velocity().y, 0.48, epsilon = EPSILON);
    }
}
