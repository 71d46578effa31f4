use crate::components::ControlState;
use crate::config::PlaneConfig;
use crate::utils::move_towards;

/// Ramps the throttle toward its target and derives the airbrake state.
///
/// Positive input ramps toward full throttle, zero or negative input ramps
/// toward idle, both at a rate proportional to how far the lever is pushed.
/// The airbrake deploys only once the throttle has fully reached idle while
/// the lever is held at the stop.
pub fn update_throttle(controls: &mut ControlState, config: &PlaneConfig, dt: f64) {
    let target = if controls.throttle_input > 0.0 { 1.0 } else { 0.0 };
    let max_delta = config.throttle_speed * controls.throttle_input.abs() * dt;

    controls.throttle = move_towards(controls.throttle, target, max_delta).clamp(0.0, 1.0);
    controls.airbrake_deployed = controls.throttle == 0.0 && controls.throttle_input == -1.0;
}
