use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// A scalar calibration curve sampled from breakpoint data.
///
/// Curves are the tuning surface of the flight model: lift coefficient over
/// angle of attack, drag coefficient over speed, steering authority over
/// airspeed. Evaluation interpolates linearly between breakpoints and clamps
/// to the first/last value outside the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    /// Builds a curve from `(domain, value)` breakpoints. The domain values
    /// must be strictly increasing and the list must not be empty.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, ConfigError> {
        if points.is_empty() {
            return Err(ConfigError::ValidationError(
                "curve needs at least one breakpoint".to_string(),
            ));
        }
        if points.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(ConfigError::ValidationError(
                "curve breakpoints must be strictly increasing in the domain".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// A curve that evaluates to `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(0.0, value)],
        }
    }

    /// Samples the curve at `x`, clamping outside the breakpoint domain.
    pub fn evaluate(&self, x: f64) -> f64 {
        let first = self.points[0];
        if x <= first.0 {
            return first.1;
        }

        let last = self.points[self.points.len() - 1];
        if x >= last.0 {
            return last.1;
        }

        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }

        last.1
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl TryFrom<Vec<(f64, f64)>> for Curve {
    type Error = ConfigError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Curve> for Vec<(f64, f64)> {
    fn from(curve: Curve) -> Self {
        curve.points
    }
}
