use std::collections::HashSet;

use crossbeam_channel::Receiver;
use nalgebra::{UnitQuaternion, Vector3};
use tracing::{debug, info};

use crate::components::{ControlState, HealthState, MotionState};
use crate::config::{ConfigError, PlaneConfig};
use crate::events::{EventBroadcast, PlaneEvent};
use crate::physics::{ColliderId, Contact, RigidBody, TorqueMode};
use crate::systems::{
    drag_forces, estimate_state, lift_forces, update_g_force, update_steering, update_throttle,
};

/// Altitude [m] below which the aircraft counts as flown into the floor.
const FLOOR_ALTITUDE: f64 = -10.0;

/// One aircraft: the flight profile plus all per-flight state, advanced by
/// an external fixed-timestep loop.
///
/// The plane never owns the rigid body. Each [`tick`] reads the body's
/// motion, runs the flight systems in a fixed order and pushes the resulting
/// forces and torques back through the [`RigidBody`] seam; the surrounding
/// simulation integrates them before the next tick. All state belongs to
/// exactly one plane, so separate aircraft can tick on separate threads.
///
/// [`tick`]: Plane::tick
pub struct Plane {
    config: PlaneConfig,
    controls: ControlState,
    motion: MotionState,
    health: HealthState,
    landing_gear: HashSet<ColliderId>,
    events: EventBroadcast,
}

impl Plane {
    /// Builds a plane from a validated profile. `landing_gear` lists the
    /// collider surfaces whose ground contacts are harmless.
    pub fn new(
        config: PlaneConfig,
        landing_gear: impl IntoIterator<Item = ColliderId>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let health = HealthState::new(config.max_health);
        Ok(Self {
            config,
            controls: ControlState::default(),
            motion: MotionState::default(),
            health,
            landing_gear: landing_gear.into_iter().collect(),
            events: EventBroadcast::default(),
        })
    }

    /// Runs one fixed simulation step against the external body.
    ///
    /// Order within the tick: estimate state, retract flaps past their speed
    /// limit, ramp throttle, thrust, lift, steering (skipped once dead),
    /// drag, re-estimate state, floor check.
    pub fn tick(&mut self, dt: f64, body: &mut dyn RigidBody) {
        if dt <= 0.0 {
            return;
        }

        estimate_state(
            &mut self.motion,
            &body.attitude(),
            body.velocity(),
            body.angular_velocity(),
        );
        update_g_force(&mut self.motion, &body.attitude(), dt);

        if self.motion.local_velocity.z > self.config.lift.flaps_retract_speed {
            self.set_flaps(false, body);
        }

        update_throttle(&mut self.controls, &self.config, dt);
        body.set_gear_braking(self.controls.airbrake_deployed);

        body.apply_local_force(Vector3::z() * (self.controls.throttle * self.config.max_thrust));

        let (wing, rudder) = lift_forces(&self.motion, &self.controls, &self.config.lift);
        body.apply_local_force(wing);
        body.apply_local_force(rudder);

        if !self.health.is_dead() {
            let correction = update_steering(&self.motion, &mut self.controls, &self.config, dt);
            body.apply_local_torque(correction, TorqueMode::VelocityChange);
        }

        let (drag, angular_drag) = drag_forces(&self.motion, &self.controls, &self.config);
        body.apply_local_force(drag);
        body.apply_local_torque(angular_drag, TorqueMode::Acceleration);

        estimate_state(
            &mut self.motion,
            &body.attitude(),
            body.velocity(),
            body.angular_velocity(),
        );

        if body.position().y < FLOOR_ALTITUDE {
            self.crash(None, body);
        }
    }

    /// Entry point for the external collision system. Contacts on a landing
    /// gear surface are harmless and abort the whole batch; anything else is
    /// a crash at that contact point.
    pub fn on_contact(&mut self, contacts: &[Contact], body: &mut dyn RigidBody) {
        for contact in contacts {
            if self.landing_gear.contains(&contact.collider) {
                return;
            }
            self.crash(Some(contact.point), body);
        }
    }

    /// Applies `amount` hit points of damage, dying when health runs out.
    pub fn apply_damage(&mut self, amount: f64, body: &dyn RigidBody) {
        if self.health.apply_damage(amount) {
            self.die(body.position());
        }
    }

    fn crash(&mut self, impact: Option<Vector3<f64>>, body: &mut dyn RigidBody) {
        if self.health.kill() {
            self.die(impact.unwrap_or_else(|| body.position()));
        }
        body.freeze(impact, level_attitude(&body.attitude()));
    }

    fn die(&mut self, position: Vector3<f64>) {
        self.controls.throttle_input = 0.0;
        self.controls.throttle = 0.0;
        info!(name = %self.config.name, "aircraft destroyed");
        self.events.send(PlaneEvent::Destroyed { position });
    }

    /// Stores the commanded turn rates (x = pitch, y = yaw, z = roll), each
    /// in [-1, 1]. Ignored once dead.
    pub fn set_control_input(&mut self, input: Vector3<f64>) {
        if !self.health.is_dead() {
            self.controls.control_input = input;
        }
    }

    /// Stores the throttle lever position in [-1, 1]. Ignored once dead.
    pub fn set_throttle_input(&mut self, input: f64) {
        if !self.health.is_dead() {
            self.controls.throttle_input = input;
        }
    }

    /// Flips the flap state. Refused above the flap retraction speed.
    pub fn toggle_flaps(&mut self, body: &mut dyn RigidBody) {
        if self.motion.local_velocity.z < self.config.lift.flaps_retract_speed {
            self.set_flaps(!self.controls.flaps_deployed, body);
        }
    }

    fn set_flaps(&mut self, deployed: bool, body: &mut dyn RigidBody) {
        if self.controls.flaps_deployed != deployed {
            debug!(deployed, "flap state changed");
            self.controls.flaps_deployed = deployed;
            body.set_gear_extended(deployed);
        }
    }

    /// Registers an event subscriber (destroyed notifications).
    pub fn subscribe(&mut self) -> Receiver<PlaneEvent> {
        self.events.subscribe()
    }

    /// Starts a new flight: full health, neutral controls, cleared motion
    /// state. The caller is responsible for restoring the rigid body.
    pub fn reset(&mut self) {
        self.controls = ControlState::default();
        self.motion = MotionState::default();
        self.health.reset();
        info!(name = %self.config.name, "aircraft respawned");
    }

    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn throttle(&self) -> f64 {
        self.controls.throttle
    }

    pub fn effective_input(&self) -> Vector3<f64> {
        self.controls.effective_input
    }

    pub fn local_velocity(&self) -> Vector3<f64> {
        self.motion.local_velocity
    }

    pub fn local_angular_velocity(&self) -> Vector3<f64> {
        self.motion.local_angular_velocity
    }

    pub fn local_g_force(&self) -> Vector3<f64> {
        self.motion.local_g_force
    }

    /// Pitch-plane angle of attack [rad].
    pub fn angle_of_attack(&self) -> f64 {
        self.motion.alpha
    }

    /// Yaw-plane angle of attack [rad].
    pub fn angle_of_attack_yaw(&self) -> f64 {
        self.motion.beta
    }

    pub fn airbrake_deployed(&self) -> bool {
        self.controls.airbrake_deployed
    }

    pub fn flaps_deployed(&self) -> bool {
        self.controls.flaps_deployed
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    pub fn health(&self) -> f64 {
        self.health.health()
    }

    pub fn max_health(&self) -> f64 {
        self.health.max_health()
    }
}

/// Keeps the heading of `attitude` and levels everything else.
fn level_attitude(attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    let forward = attitude * Vector3::z();
    let yaw = forward.x.atan2(forward.z);
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
}
