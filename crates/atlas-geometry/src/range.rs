//! Linear mapping between two numeric ranges.
//!
//! Argument order is `(value, target_min, target_max, source_min, source_max)`
//! for both directions: `rescale` carries a value from the source range into
//! the target range, `unrescale` carries it back.

/// Maps `value` from `[source_min, source_max]` into `[target_min, target_max]`.
///
/// Values outside the source range extrapolate linearly.
///
/// # Arguments
///
/// * `value`: The value in source-range units.
/// * `target_min`, `target_max`: Bounds of the range to map into.
/// * `source_min`, `source_max`: Bounds of the range `value` is expressed in.
pub fn rescale(value: f64, target_min: f64, target_max: f64, source_min: f64, source_max: f64) -> f64 {
    ((value - source_min) / (source_max - source_min)) * (target_max - target_min) + target_min
}

/// Inverse of [`rescale`] with the same argument order.
///
/// `value` is expressed in target-range units and the result in source-range
/// units.
pub fn unrescale(value: f64, target_min: f64, target_max: f64, source_min: f64, source_max: f64) -> f64 {
    (source_min * target_max - source_min * value - source_max * target_min + source_max * value)
        / (target_max - target_min)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_rescale_endpoints() {
        let precision = 256.0 / 7.0;
        assert!((rescale(0.0, -700_000.0, 700_000.0, 0.0, precision) - -700_000.0).abs() < EPSILON);
        assert!((rescale(precision, -700_000.0, 700_000.0, 0.0, precision) - 700_000.0).abs() < EPSILON);
        assert!((rescale(precision / 2.0, -700_000.0, 700_000.0, 0.0, precision)).abs() < EPSILON);
    }

    #[test]
    fn test_unrescale_endpoints() {
        let precision = 256.0 / 7.0;
        assert!((unrescale(-700_000.0, -700_000.0, 700_000.0, 0.0, precision)).abs() < EPSILON);
        assert!((unrescale(700_000.0, -700_000.0, 700_000.0, 0.0, precision) - precision).abs() < EPSILON);
    }

    #[test]
    fn test_unrescale_inverts_rescale() {
        let (t_min, t_max, s_min, s_max) = (-700_000.0, 700_000.0, 0.0, 256.0 / 5.0);
        let steps = 64;
        for i in 0..=steps {
            let v = s_min + (s_max - s_min) * (i as f64) / (steps as f64);
            let there = rescale(v, t_min, t_max, s_min, s_max);
            let back = unrescale(there, t_min, t_max, s_min, s_max);
            assert!((back - v).abs() < EPSILON, "{} -> {} -> {}", v, there, back);
        }
    }

    #[test]
    fn test_rescale_extrapolates() {
        // Outside the source range the mapping keeps its slope.
        assert!((rescale(2.0, 0.0, 10.0, 0.0, 1.0) - 20.0).abs() < EPSILON);
        assert!((rescale(-1.0, 0.0, 10.0, 0.0, 1.0) - -10.0).abs() < EPSILON);
    }
}
