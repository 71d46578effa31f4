use serde::{Deserialize, Serialize};

/// Hit points plus the terminal dead flag.
///
/// Health is clamped to `[0, max_health]` on every write. The transition to
/// dead fires exactly once, is reported to the caller as the return value of
/// the mutating functions, and never reverts within a flight; [`reset`]
/// starts a new flight.
///
/// [`reset`]: HealthState::reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthState {
    health: f64,
    max_health: f64,
    dead: bool,
}

impl HealthState {
    pub fn new(max_health: f64) -> Self {
        Self {
            health: max_health,
            max_health,
            dead: false,
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Writes a new health value, clamped to the valid range. Returns `true`
    /// when this particular write triggered the death transition.
    pub fn set_health(&mut self, value: f64) -> bool {
        self.health = value.clamp(0.0, self.max_health);

        if self.health == 0.0 && self.max_health > 0.0 && !self.dead {
            self.dead = true;
            return true;
        }
        false
    }

    /// Subtracts `amount` hit points. Returns `true` on the death transition.
    pub fn apply_damage(&mut self, amount: f64) -> bool {
        self.set_health(self.health - amount)
    }

    /// Forces health to zero. Returns `true` on the death transition.
    pub fn kill(&mut self) -> bool {
        self.set_health(0.0)
    }

    /// Restores full health and clears the dead flag for a new flight.
    pub fn reset(&mut self) {
        self.health = self.max_health;
        self.dead = false;
    }
}
