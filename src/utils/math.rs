use nalgebra::Vector3;

/// Scale each component of `value` by one of two factors, selected by the
/// sign of that component. Zero components stay zero.
pub fn scale6(
    value: &Vector3<f64>,
    pos_x: f64,
    neg_x: f64,
    pos_y: f64,
    neg_y: f64,
    pos_z: f64,
    neg_z: f64,
) -> Vector3<f64> {
    let mut result = *value;

    if result.x > 0.0 {
        result.x *= pos_x;
    } else if result.x < 0.0 {
        result.x *= neg_x;
    }

    if result.y > 0.0 {
        result.y *= pos_y;
    } else if result.y < 0.0 {
        result.y *= neg_y;
    }

    if result.z > 0.0 {
        result.z *= pos_z;
    } else if result.z < 0.0 {
        result.z *= neg_z;
    }

    result
}

/// Move `value` toward `target` by at most `max_delta`, never overshooting.
#[inline]
pub fn move_towards(value: f64, target: f64, max_delta: f64) -> f64 {
    value + (target - value).clamp(-max_delta, max_delta)
}

/// Project `vector` onto the plane perpendicular to `normal`.
/// `normal` must be a unit vector.
#[inline]
pub fn project_on_plane(vector: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    vector - normal * vector.dot(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scale6_picks_factor_by_sign() {
        let value = Vector3::new(2.0, -3.0, 0.0);
        let scaled = scale6(&value, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0);

        assert_relative_eq!(scaled.x, 20.0);
        assert_relative_eq!(scaled.y, -120.0);
        assert_relative_eq!(scaled.z, 0.0);
    }

    #[test]
    fn scale6_handles_each_axis_independently() {
        let value = Vector3::new(-1.0, 1.0, -1.0);
        let scaled = scale6(&value, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

        assert_relative_eq!(scaled.x, -2.0);
        assert_relative_eq!(scaled.y, 3.0);
        assert_relative_eq!(scaled.z, -6.0);
    }

    #[test]
    fn move_towards_is_bounded() {
        assert_relative_eq!(move_towards(0.0, 1.0, 0.25), 0.25);
        assert_relative_eq!(move_towards(0.9, 1.0, 0.25), 1.0);
        assert_relative_eq!(move_towards(0.5, 0.0, 0.2), 0.3);
    }

    #[test]
    fn move_towards_never_overshoots() {
        let mut value = 0.0;
        for _ in 0..20 {
            value = move_towards(value, 1.0, 0.3);
            assert!(value <= 1.0);
        }
        assert_relative_eq!(value, 1.0);
    }

    #[test]
    fn project_on_plane_removes_normal_component() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        let projected = project_on_plane(&vector, &Vector3::x());

        assert_relative_eq!(projected.x, 0.0);
        assert_relative_eq!(projected.y, 2.0);
        assert_relative_eq!(projected.z, 3.0);
    }
}
