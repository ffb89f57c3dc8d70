//! Numeric rounding and label text helpers shared by layout and axis code.

/// Rounds half-way cases towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// Axis math keys "nice" boundaries off this rule, so it is used instead of
/// `f64::round`, which rounds half-way cases away from zero.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds to `digits` decimal places; negative `digits` round to tens,
/// hundreds and so on.
#[must_use]
pub fn round_to_digits(value: f64, digits: i32) -> f64 {
    if digits >= 0 {
        let multiplier = 10f64.powi(digits);
        round_half_up(value * multiplier) / multiplier
    } else {
        let granularity = 10f64.powi(-digits);
        round_half_up(value / granularity) * granularity
    }
}

/// Shortest plain decimal text for a value; `-0` renders as `0`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Longest rendered text among `values` rounded to two decimals.
///
/// The first value wins on ties. Returns an empty string for empty input.
#[must_use]
pub fn longest_value_label(values: &[f64]) -> String {
    let mut longest = String::new();
    let mut longest_len = 0;
    for value in values {
        let text = format_value(round_to_digits(*value, 2));
        let len = text.chars().count();
        if len > longest_len {
            longest_len = len;
            longest = text;
        }
    }
    longest
}

/// Axis label text with an optional unit suffix.
#[must_use]
pub fn value_label_text(value: f64, unit: Option<&str>, separator: &str) -> String {
    let text = format_value(value);
    match unit {
        Some(unit) if !unit.is_empty() => format!("{text}{separator}{unit}"),
        _ => text,
    }
}

/// Hover text for a raw sample: the fraction is cut (not rounded) to three
/// digits and the unit, if any, follows after a space.
#[must_use]
pub fn tooltip_value_text(value: f64, unit: Option<&str>) -> String {
    let mut text = format_value(value);
    if let Some(dot) = text.find('.') {
        text.truncate((dot + 4).min(text.len()));
    }
    match unit {
        Some(unit) if !unit.is_empty() => format!("{text} {unit}"),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{format_value, round_half_up, round_to_digits, tooltip_value_text};

    #[test]
    fn half_up_rounding_moves_ties_towards_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn negative_digits_round_to_tens() {
        assert_eq!(round_to_digits(57.0, -1), 60.0);
        assert_eq!(round_to_digits(44.9, -1), 40.0);
        assert_eq!(round_to_digits(149.0, -2), 100.0);
    }

    #[test]
    fn negative_zero_formats_as_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(0.25), "0.25");
    }

    #[test]
    fn tooltip_text_truncates_fraction() {
        assert_eq!(tooltip_value_text(3.14159, None), "3.141");
        assert_eq!(tooltip_value_text(42.0, Some("kg")), "42 kg");
    }
}
