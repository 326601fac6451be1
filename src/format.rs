//! Number formatting for counters and chart axes.

use crate::data::CounterFormat;

/// Insert `,` between groups of three digits of an unsigned digit string
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimals with thousands separators, e.g. `284,562.45`
pub fn grouped_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{frac_part}", group_digits(int_part))
}

/// Floored integer with thousands separators, e.g. `1,247`
pub fn grouped_integer(value: f64) -> String {
    let floored = value.floor();
    let digits = format!("{:.0}", floored.abs());
    let sign = if floored < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_digits(&digits))
}

/// Render a counter value with its prefix and suffix
pub fn counter_value(value: f64, format: CounterFormat, prefix: &str, suffix: &str) -> String {
    let body = match format {
        CounterFormat::Currency => grouped_decimal(value),
        CounterFormat::Integer => grouped_integer(value),
    };
    format!("{prefix}{body}{suffix}")
}

/// Axis tick label for sales amounts, e.g. `$487,000`
pub fn currency_tick(value: f64) -> String {
    format!("${}", grouped_integer(value.round()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1950000"), "1,950,000");
    }

    #[test]
    fn test_currency_counter() {
        assert_eq!(
            counter_value(284562.45, CounterFormat::Currency, "$", ""),
            "$284,562.45"
        );
        assert_eq!(counter_value(0.0, CounterFormat::Currency, "$", ""), "$0.00");
        assert_eq!(counter_value(2845.6245, CounterFormat::Currency, "$", ""), "$2,845.62");
    }

    #[test]
    fn test_integer_counter_floors() {
        assert_eq!(counter_value(1247.0, CounterFormat::Integer, "", ""), "1,247");
        assert_eq!(counter_value(1234.99, CounterFormat::Integer, "", ""), "1,234");
        assert_eq!(counter_value(8.56, CounterFormat::Integer, "", "%"), "8%");
    }

    #[test]
    fn test_currency_tick() {
        assert_eq!(currency_tick(487000.0), "$487,000");
        assert_eq!(currency_tick(0.0), "$0");
    }
}
