use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// World-level inputs read by every body each step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Environment {
    /// Acceleration applied to every dynamic body regardless of its mass.
    pub gravity: Vec2,
    /// Uniform force applied to every dynamic body.
    pub force: Vec2,
}

impl Environment {
    pub fn new(gravity: Vec2, force: Vec2) -> Self {
        Self { gravity, force }
    }
}

/// Advances the body by one unit time step: linear acceleration, velocity,
/// position, then angular acceleration, angular velocity and angle.
pub fn integrate(body: &mut RigidBody, environment: &Environment) {
    body.update_acceleration(environment);
    body.update_velocity();
    body.update_position();
    body.update_angular_acceleration();
    body.update_angular_velocity();
    body.update_angle();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BodyConfig;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::TAU;

    const EPSILON: f64 = 1e-9;

    fn default_ball() -> RigidBody {
        RigidBody::circle(Vec2::ZERO, 1.0, BodyConfig::default()).unwrap()
    }

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut rb = RigidBody::circle(
            Vec2::ZERO,
            1.0,
            BodyConfig::default().with_velocity(Vec2::new(10.0, -5.0)),
        )
        .unwrap();
        integrate(&mut rb, &Environment::default());
        assert_eq!(rb.position(), Vec2::new(10.0, -5.0));
        assert_eq!(rb.velocity(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_constant_force() {
        let mut rb =
            RigidBody::circle(Vec2::ZERO, 1.0, BodyConfig::default().with_mass(2.0)).unwrap();
        rb.apply_force(Vec2::new(10.0, 0.0), 0.0);
        integrate(&mut rb, &Environment::default());
        // a = F/m = 5, v = 5, p = 5
        assert_abs_diff_eq!(rb.velocity().x, 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rb.position().x, 5.0, epsilon = EPSILON);
        // The accumulator is persistent.
        integrate(&mut rb, &Environment::default());
        assert_abs_diff_eq!(rb.velocity().x, 10.0, epsilon = EPSILON);
        assert_abs_diff_eq!(rb.position().x, 15.0, epsilon = EPSILON);
    }

    #[test]
    fn test_integrate_constant_torque() {
        let mut rb = default_ball();
        rb.apply_torque(0.25, 1.0, 0.0);
        let alpha = 0.25 / rb.rotational_inertia();
        integrate(&mut rb, &Environment::default());
        assert_abs_diff_eq!(rb.angular_velocity(), alpha, epsilon = EPSILON);
        assert_abs_diff_eq!(rb.angle(), alpha, epsilon = EPSILON);
        integrate(&mut rb, &Environment::default());
        assert_abs_diff_eq!(rb.angular_velocity(), 2.0 * alpha, epsilon = EPSILON);
        assert_abs_diff_eq!(rb.angle(), 3.0 * alpha, epsilon = EPSILON);
    }

    #[test]
    fn test_gravity_is_mass_independent() {
        let env = Environment::new(Vec2::new(0.0, 0.5), Vec2::ZERO);
        let mut light = default_ball();
        let mut heavy =
            RigidBody::circle(Vec2::ZERO, 1.0, BodyConfig::default().with_mass(50.0)).unwrap();
        for _ in 0..10 {
            integrate(&mut light, &env);
            integrate(&mut heavy, &env);
        }
        assert_abs_diff_eq!(light.velocity().y, heavy.velocity().y, epsilon = EPSILON);
        assert_abs_diff_eq!(light.position().y, heavy.position().y, epsilon = EPSILON);
    }

    #[test]
    fn test_world_force_is_divided_by_mass() {
        let env = Environment::new(Vec2::ZERO, Vec2::new(4.0, 0.0));
        let mut rb =
            RigidBody::circle(Vec2::ZERO, 1.0, BodyConfig::default().with_mass(4.0)).unwrap();
        integrate(&mut rb, &env);
        assert_abs_diff_eq!(rb.velocity().x, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_integrate_static_object() {
        let mut rb = RigidBody::circle(
            Vec2::new(1.0, 1.0),
            1.0,
            BodyConfig::default()
                .with_static(true)
                .with_angle(1.0)
                .with_force(Vec2::new(10.0, 10.0))
                .with_torque(10.0),
        )
        .unwrap();
        let env = Environment::new(Vec2::new(0.0, 9.8), Vec2::new(3.0, 0.0));
        let initial_state = rb.clone();
        for _ in 0..25 {
            integrate(&mut rb, &env);
        }
        assert_eq!(rb, initial_state);
    }

    #[test]
    fn test_polygon_spin_keeps_vertices_attached() {
        let mut rb = RigidBody::regular_polygon(
            Vec2::new(10.0, 10.0),
            5,
            3.0,
            BodyConfig::default().with_angular_velocity(1.3).with_velocity(Vec2::new(0.5, 0.0)),
        )
        .unwrap();
        for _ in 0..20 {
            integrate(&mut rb, &Environment::default());
            assert!((0.0..TAU).contains(&rb.angle()));
            for v in rb.vertices().unwrap() {
                assert_abs_diff_eq!(v.distance(rb.position()), 3.0, epsilon = 1e-6);
            }
        }
        assert_abs_diff_eq!(rb.position().x, 20.0, epsilon = 1e-6);
    }
}
