//! Display formatting for balances, durations, and rates.

use num_bigint::BigUint;

use crate::amount::Sprinkles;

/// Short-scale unit names, one per power of 1000.
const UNITS: [&str; 34] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
    "duodecillion",
    "tredecillion",
    "quattuordecillion",
    "quindecillion",
    "sexdecillion",
    "septendecillion",
    "octodecillion",
    "novemdecillion",
    "vigintillion",
    "unvigintillion",
    "duovigintillion",
    "trevigintillion",
    "quattuorvigintillion",
    "quinvigintillion",
    "sexvigintillion",
    "septenvigintillion",
    "octovigintillion",
    "novemvigintillion",
    "trigintillion",
    "untrigintillion",
    "duotrigintillion",
];

/// Format a balance with a short-scale word suffix and up to two truncated
/// decimal places, e.g. `1.23 million`. Values past the largest named unit
/// keep that unit and grow the whole part.
pub fn format_sprinkles(amount: &Sprinkles) -> String {
    let thousand = BigUint::from(1000u32);
    let value = amount.as_biguint();
    if value < &thousand {
        return value.to_string();
    }

    let mut unit_index = 0usize;
    let mut current = value.clone();
    while current >= thousand && unit_index < UNITS.len() - 1 {
        current /= 1000u32;
        unit_index += 1;
    }

    // Re-derive at one unit finer so two decimal digits survive.
    let mut display = value.clone();
    for _ in 0..unit_index - 1 {
        display /= 1000u32;
    }
    let whole = &display / 1000u32;
    let remainder = &display % 1000u32;

    let tenths = (&remainder * 10u32) / 1000u32;
    let hundredths = (&remainder * 100u32) / 1000u32 % 10u32;

    let zero = BigUint::default();
    let unit = UNITS[unit_index];
    if tenths == zero && hundredths == zero {
        format!("{whole} {unit}")
    } else if hundredths == zero {
        format!("{whole}.{tenths} {unit}")
    } else {
        format!("{whole}.{tenths}{hundredths} {unit}")
    }
}

/// Format a millisecond duration as zero-padded `HH:MM:SS`.
pub fn format_time(ms: f64) -> String {
    let total_seconds = if ms > 0.0 { (ms / 1000.0) as u64 } else { 0 };
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a rate with thousands separators and one decimal place.
pub fn format_decimal(value: f64) -> String {
    let negative = value < 0.0;
    let total_tenths = (value.abs() * 10.0).round() as u64;
    let whole = total_tenths / 10;
    let tenth = total_tenths % 10;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{tenth}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprinkles(s: &str) -> Sprinkles {
        Sprinkles::from_decimal_string(s).unwrap()
    }

    #[test]
    fn small_values_print_plain() {
        assert_eq!(format_sprinkles(&Sprinkles::from(0)), "0");
        assert_eq!(format_sprinkles(&Sprinkles::from(999)), "999");
    }

    #[test]
    fn word_suffixes() {
        assert_eq!(format_sprinkles(&Sprinkles::from(1000)), "1 thousand");
        assert_eq!(format_sprinkles(&Sprinkles::from(1500)), "1.5 thousand");
        assert_eq!(format_sprinkles(&Sprinkles::from(1_234_567)), "1.23 million");
        assert_eq!(format_sprinkles(&Sprinkles::from(2_000_000)), "2 million");
        assert_eq!(
            format_sprinkles(&sprinkles("7100000000000")),
            "7.1 trillion"
        );
    }

    #[test]
    fn decimals_truncate_rather_than_round() {
        // 1.239 million shows as 1.23, not 1.24
        assert_eq!(format_sprinkles(&Sprinkles::from(1_239_000)), "1.23 million");
    }

    #[test]
    fn largest_unit_absorbs_the_overflow() {
        let one_duo = sprinkles(&format!("1{}", "0".repeat(99)));
        assert_eq!(format_sprinkles(&one_duo), "1 duotrigintillion");
        let thousand_duo = sprinkles(&format!("1{}", "0".repeat(102)));
        assert_eq!(format_sprinkles(&thousand_duo), "1000 duotrigintillion");
    }

    #[test]
    fn time_formats_zero_padded() {
        assert_eq!(format_time(0.0), "00:00:00");
        assert_eq!(format_time(59_999.0), "00:00:59");
        assert_eq!(format_time(3_661_000.0), "01:01:01");
        assert_eq!(format_time(36_000_000.0), "10:00:00");
    }

    #[test]
    fn negative_elapsed_clamps_to_zero() {
        assert_eq!(format_time(-500.0), "00:00:00");
    }

    #[test]
    fn decimal_grouping() {
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(1234.56), "1,234.6");
        assert_eq!(format_decimal(1_000_000.0), "1,000,000.0");
        assert_eq!(format_decimal(999.94), "999.9");
    }
}
