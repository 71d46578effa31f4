//! Flight dynamics for a fixed-wing aircraft.
//!
//! The crate turns rigid-body motion state and normalized player input into
//! aerodynamic forces, torques and control-surface state once per fixed
//! simulation step. It owns no integrator: the surrounding simulation
//! injects a [`physics::RigidBody`] and integrates the requested forces
//! between ticks.

pub mod components;
pub mod config;
pub mod events;
pub mod physics;
pub mod plane;
pub mod systems;
pub mod utils;

pub use components::{ControlState, HealthState, MotionState};
pub use config::{ConfigError, Curve, PlaneConfig};
pub use events::PlaneEvent;
pub use physics::{ColliderId, Contact, RigidBody, TorqueMode};
pub use plane::Plane;
