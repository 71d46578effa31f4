use nalgebra::{UnitQuaternion, Vector3};

use crate::components::MotionState;

/// Below this local speed squared the angle-of-attack pair is pinned to zero
/// to keep `atan2` away from its degenerate origin.
pub const MIN_AOA_SPEED_SQUARED: f64 = 0.1;

/// Rotates the body's world-frame motion into the body frame and derives the
/// angle-of-attack pair. Runs twice per tick, before and after the forces
/// are applied.
pub fn estimate_state(
    motion: &mut MotionState,
    attitude: &UnitQuaternion<f64>,
    velocity: Vector3<f64>,
    angular_velocity: Vector3<f64>,
) {
    let inverse = attitude.inverse();

    motion.velocity = velocity;
    motion.local_velocity = inverse * velocity;
    motion.local_angular_velocity = inverse * angular_velocity;

    if motion.local_velocity.norm_squared() < MIN_AOA_SPEED_SQUARED {
        motion.alpha = 0.0;
        motion.beta = 0.0;
        return;
    }

    motion.alpha = (-motion.local_velocity.y).atan2(motion.local_velocity.z);
    motion.beta = motion.local_velocity.x.atan2(motion.local_velocity.z);
}

/// Derives the body-frame inertial acceleration from the velocity change
/// since the previous tick, then stores the current velocity for the next
/// difference. Runs once per tick, right after the first state estimate.
pub fn update_g_force(motion: &mut MotionState, attitude: &UnitQuaternion<f64>, dt: f64) {
    let acceleration = (motion.velocity - motion.last_velocity) / dt;
    motion.local_g_force = attitude.inverse() * acceleration;
    motion.last_velocity = motion.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn angles_are_zero_when_nearly_stationary() {
        let mut motion = MotionState::default();

        estimate_state(
            &mut motion,
            &UnitQuaternion::identity(),
            Vector3::new(0.1, 0.2, 0.1),
            Vector3::zeros(),
        );

        assert!(motion.local_velocity.norm_squared() < MIN_AOA_SPEED_SQUARED);
        assert_eq!(motion.alpha, 0.0);
        assert_eq!(motion.beta, 0.0);
    }

    #[test]
    fn alpha_is_positive_when_nose_is_above_the_flight_path() {
        let mut motion = MotionState::default();

        // Moving forward and sinking: airflow comes from below the nose.
        estimate_state(
            &mut motion,
            &UnitQuaternion::identity(),
            Vector3::new(0.0, -10.0, 100.0),
            Vector3::zeros(),
        );

        assert_relative_eq!(motion.alpha, (10.0_f64 / 100.0).atan(), epsilon = 1e-12);
        assert_relative_eq!(motion.beta, 0.0);
    }

    #[test]
    fn beta_tracks_sideways_velocity() {
        let mut motion = MotionState::default();

        estimate_state(
            &mut motion,
            &UnitQuaternion::identity(),
            Vector3::new(10.0, 0.0, 100.0),
            Vector3::zeros(),
        );

        assert_relative_eq!(motion.beta, (10.0_f64 / 100.0).atan(), epsilon = 1e-12);
        assert_relative_eq!(motion.alpha, 0.0);
    }

    #[test]
    fn local_velocity_accounts_for_attitude() {
        let mut motion = MotionState::default();
        // Nose pointing along world +x.
        let attitude = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);

        estimate_state(
            &mut motion,
            &attitude,
            Vector3::new(50.0, 0.0, 0.0),
            Vector3::zeros(),
        );

        assert_relative_eq!(motion.local_velocity.z, 50.0, epsilon = 1e-9);
        assert_relative_eq!(motion.local_velocity.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(motion.alpha, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn g_force_differences_successive_velocities() {
        let mut motion = MotionState::default();
        let attitude = UnitQuaternion::identity();

        estimate_state(&mut motion, &attitude, Vector3::zeros(), Vector3::zeros());
        update_g_force(&mut motion, &attitude, 0.02);
        assert_relative_eq!(motion.local_g_force.norm(), 0.0);

        estimate_state(
            &mut motion,
            &attitude,
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::zeros(),
        );
        update_g_force(&mut motion, &attitude, 0.02);

        assert_relative_eq!(motion.local_g_force.y, 50.0, epsilon = 1e-9);
        assert_relative_eq!(motion.last_velocity.y, 1.0);
    }
}
