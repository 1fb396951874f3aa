//! Step quantization - snapping continuous values onto a fixed grid
//!
//! Both the angle grid and the minute grid go through the same rounding rule
//! so a dragged handle and the time it reports can never disagree.

/// Round `value` to the nearest multiple of `step`.
///
/// A remainder of exactly half a step rounds up to the next multiple, at
/// negative values too (`quantize(-2.5, 5.0) == 0.0`). The caller must
/// guarantee `step > 0`.
pub fn quantize(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0, "quantize called with non-positive step");
    let whole_steps = (value / step).floor();
    let rest = value - step * whole_steps;
    if rest >= step / 2.0 {
        step * (whole_steps + 1.0)
    } else {
        step * whole_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_step_rounds_up() {
        assert_eq!(quantize(2.5, 5.0), 5.0);
        assert_eq!(quantize(2.49, 5.0), 0.0);
        assert_eq!(quantize(2.51, 5.0), 5.0);
    }

    #[test]
    fn test_negative_values_use_same_tie_break() {
        assert_eq!(quantize(-2.5, 5.0), 0.0);
        assert_eq!(quantize(-2.51, 5.0), -5.0);
        assert_eq!(quantize(-7.5, 5.0), -5.0);
    }

    #[test]
    fn test_grid_points_are_fixed() {
        assert_eq!(quantize(0.0, 5.0), 0.0);
        assert_eq!(quantize(10.0, 5.0), 10.0);
        assert_eq!(quantize(-15.0, 5.0), -15.0);
    }

    #[test]
    fn test_result_within_one_step() {
        let steps = [0.25, 1.0, 5.0, 7.3];
        let values = [-12.7, -0.3, 0.0, 0.126, 3.9, 88.88];
        for &step in &steps {
            for &value in &values {
                assert!(
                    (quantize(value, step) - value).abs() <= step,
                    "quantize({}, {}) strayed more than one step",
                    value,
                    step
                );
            }
        }
    }
}
