use contracts::shared::indicators::UnitKind;

/// Display rule for one unit kind
struct UnitFormat {
    decimals: usize,
    suffix: &'static str,
}

fn unit_format(unit: UnitKind) -> UnitFormat {
    let (decimals, suffix) = match unit {
        UnitKind::Percent => (1, "%"),
        UnitKind::MillionsUsd => (2, " MM"),
        UnitKind::PerTenThousand => (1, ""),
        UnitKind::Ratio => (1, "x"),
        UnitKind::Points => (0, " pts"),
        UnitKind::Hours => (0, " h"),
        UnitKind::Minutes => (0, " min"),
        UnitKind::PerMonth => (0, " /month"),
        UnitKind::KwhPerTonne => (0, " kWh/t"),
        UnitKind::KgPerTonne => (0, " kg/t"),
    };
    UnitFormat { decimals, suffix }
}

/// Format a number with space-separated thousands
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234.5, 1), "1 234.5");
/// assert_eq!(format_number(42.0, 0), "42");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Value with the unit's precision and suffix, e.g. `23.0%` or `1.50 MM`
pub fn format_value(value: f64, unit: UnitKind) -> String {
    let rule = unit_format(unit);
    format!("{}{}", format_number(value, rule.decimals), rule.suffix)
}

/// Signed one-decimal percentage. Empty when no comparison is available,
/// so absence never reads as "0%".
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(d) => format!("{}{:.1}%", if d >= 0.0 { "+" } else { "" }, d),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1 000");
        assert_eq!(format_number(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number(-1234.5, 1), "-1 234.5");
    }

    #[test]
    fn test_format_value_per_unit() {
        assert_eq!(format_value(23.0, UnitKind::Percent), "23.0%");
        assert_eq!(format_value(1.5, UnitKind::MillionsUsd), "1.50 MM");
        assert_eq!(format_value(4.2, UnitKind::PerTenThousand), "4.2");
        assert_eq!(format_value(6.84, UnitKind::Ratio), "6.8x");
        assert_eq!(format_value(52.0, UnitKind::Points), "52 pts");
        assert_eq!(format_value(41.6, UnitKind::Minutes), "42 min");
        assert_eq!(format_value(14.0, UnitKind::PerMonth), "14 /month");
        assert_eq!(format_value(1440.0, UnitKind::KwhPerTonne), "1 440 kWh/t");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(Some(4.545)), "+4.5%");
        assert_eq!(format_delta(Some(-4.1667)), "-4.2%");
        assert_eq!(format_delta(Some(0.0)), "+0.0%");
        assert_eq!(format_delta(None), "");
    }
}
