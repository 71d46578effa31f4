use nalgebra::Vector3;

use crate::components::{ControlState, MotionState};
use crate::config::PlaneConfig;
use crate::utils::scale6;

pub const GRAVITY: f64 = 9.81;

/// Control vectors shorter than this bypass the load limiter entirely.
const MIN_CONTROL_MAGNITUDE: f64 = 0.01;

/// Scale factor in (0, 1] that keeps the load resulting from the commanded
/// rotation under the structural limit.
///
/// The limiter asks: if the player's input were stretched to full deflection
/// and fully achieved, what inertial load would the turn produce at the
/// current speed? When that exceeds the per-axis limit the whole command is
/// scaled down proportionally. Positive pitch rate drops the nose in this
/// frame, so the pitch-up limit sits on the negative pitch half-axis.
fn g_limiter(
    control_input: &Vector3<f64>,
    max_angular_velocity: &Vector3<f64>,
    local_velocity: &Vector3<f64>,
    g_limit: f64,
    g_limit_pitch: f64,
) -> f64 {
    if control_input.norm() < MIN_CONTROL_MAGNITUDE {
        return 1.0;
    }
    let max_input = control_input.normalize();

    let limit = scale6(
        &max_input,
        g_limit,
        g_limit_pitch,
        g_limit,
        g_limit,
        g_limit,
        g_limit,
    ) * GRAVITY;

    let max_g_force = max_input
        .component_mul(max_angular_velocity)
        .cross(local_velocity);

    if max_g_force.norm() > limit.norm() {
        limit.norm() / max_g_force.norm()
    } else {
        1.0
    }
}

/// Rate-limited approach of one axis toward its target turn rate [deg/s].
fn axis_correction(current: f64, target: f64, acceleration: f64, dt: f64) -> f64 {
    (target - current).clamp(-acceleration * dt, acceleration * dt)
}

/// Converts the control input into a bounded angular velocity correction.
///
/// Returns the correction in rad/s, to be applied to the body as an
/// instantaneous angular velocity change. Also derives the effective-input
/// feedback on `controls`: how much of the commanded input the aircraft is
/// actually achieving once load limiting and turn-rate lag are accounted
/// for.
pub fn update_steering(
    motion: &MotionState,
    controls: &mut ControlState,
    config: &PlaneConfig,
    dt: f64,
) -> Vector3<f64> {
    let steering = &config.steering;

    let speed = motion.local_velocity.z.max(0.0);
    let steering_power = steering.steering_curve.evaluate(speed);

    let max_angular_velocity = steering.turn_speed.map(f64::to_radians) * steering_power;
    let scaling = g_limiter(
        &controls.control_input,
        &max_angular_velocity,
        &motion.local_velocity,
        config.g_limit,
        config.g_limit_pitch,
    );

    // Everything below runs in deg/s; the conversion happens on the way out.
    let target = controls.control_input.component_mul(&steering.turn_speed)
        * (steering_power * scaling);
    let current = motion.local_angular_velocity.map(f64::to_degrees);

    let correction = Vector3::new(
        axis_correction(
            current.x,
            target.x,
            steering.turn_acceleration.x * steering_power,
            dt,
        ),
        axis_correction(
            current.y,
            target.y,
            steering.turn_acceleration.y * steering_power,
            dt,
        ),
        axis_correction(
            current.z,
            target.z,
            steering.turn_acceleration.z * steering_power,
            dt,
        ),
    );

    let correction_input = Vector3::new(
        ((target.x - current.x) / steering.turn_acceleration.x).clamp(-1.0, 1.0),
        ((target.y - current.y) / steering.turn_acceleration.y).clamp(-1.0, 1.0),
        ((target.z - current.z) / steering.turn_acceleration.z).clamp(-1.0, 1.0),
    );
    let effective = (correction_input + controls.control_input) * scaling;
    controls.effective_input = Vector3::new(
        effective.x.clamp(-1.0, 1.0),
        effective.y.clamp(-1.0, 1.0),
        effective.z.clamp(-1.0, 1.0),
    );

    correction.map(f64::to_radians)
}
