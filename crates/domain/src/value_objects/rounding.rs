//! Floor rounding for displayed measurements
//!
//! Card values are always rounded towards negative infinity, never to the
//! nearest digit: `20.97` shows as `20.9`.

/// Round `value` down to `places` decimal places
///
/// # Examples
///
/// ```
/// use domain::value_objects::floor_to;
///
/// assert!((floor_to(20.97, 1) - 20.9).abs() < 1e-9);
/// assert!((floor_to(-1.25, 1) + 1.3).abs() < 1e-9);
/// ```
#[must_use]
pub fn floor_to(value: f64, places: u8) -> f64 {
    let factor = 10f64.powi(i32::from(places));
    (value * factor).floor() / factor
}

/// Floor-round `value` and print it with exactly `places` decimals
///
/// ```
/// use domain::value_objects::format_floored;
///
/// assert_eq!(format_floored(68.0, 1), "68.0");
/// assert_eq!(format_floored(16.09, 1), "16.0");
/// ```
#[must_use]
pub fn format_floored(value: f64, places: u8) -> String {
    format!("{:.*}", usize::from(places), floor_to(value, places))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_rounds_down_not_nearest() {
        assert_eq!(format_floored(20.97, 1), "20.9");
        assert_eq!(format_floored(20.91, 1), "20.9");
    }

    #[test]
    fn test_floor_negative_values() {
        assert_eq!(format_floored(-0.01, 1), "-0.1");
        assert_eq!(format_floored(-3.25, 1), "-3.3");
    }

    #[test]
    fn test_whole_numbers_keep_one_decimal() {
        assert_eq!(format_floored(68.0, 1), "68.0");
        assert_eq!(format_floored(0.0, 1), "0.0");
    }

    #[test]
    fn test_converted_values() {
        assert_eq!(format_floored(1013.0 / 33.864, 1), "29.9");
        assert_eq!(format_floored(10.0 / 1.609, 1), "6.2");
        assert_eq!(format_floored(10.0 * 1.609, 1), "16.0");
    }

    #[test]
    fn test_other_precisions() {
        assert_eq!(format_floored(12.3456, 0), "12");
        assert_eq!(format_floored(12.3456, 2), "12.34");
    }
}
