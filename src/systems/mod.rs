pub mod air_data;
pub mod drag;
pub mod lift;
pub mod steering;
pub mod throttle;

pub use air_data::{estimate_state, update_g_force};
pub use drag::drag_forces;
pub use lift::lift_forces;
pub use steering::update_steering;
pub use throttle::update_throttle;
