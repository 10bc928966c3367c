//! Number literals and number formatting.

/// Parse an identifier as a number literal.
///
/// Accepts `[+-]?[0-9]+(\.[0-9]+)?` only; there is no exponent form.
pub fn parse_number_literal(id: &str) -> Option<f64> {
    let digits = id.strip_prefix(['+', '-']).unwrap_or(id);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }
    id.parse().ok()
}

/// Shortest decimal text that reads back as the same number.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        String::from(if n > 0.0 { "inf" } else { "-inf" })
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Two's-complement 32-bit conversion used by the bitwise words.
pub fn to_int32(n: f64) -> i32 {
    if !n.is_finite() {
        return 0;
    }
    let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
    (wrapped as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn literal_grammar() {
        assert_eq!(parse_number_literal("42"), Some(42.0));
        assert_eq!(parse_number_literal("-1.5"), Some(-1.5));
        assert_eq!(parse_number_literal("+7"), Some(7.0));
        assert_eq!(parse_number_literal("1e3"), None);
        assert_eq!(parse_number_literal("1."), None);
        assert_eq!(parse_number_literal(".5"), None);
        assert_eq!(parse_number_literal("-"), None);
        assert_eq!(parse_number_literal("inf"), None);
        assert_eq!(parse_number_literal(""), None);
    }

    #[test]
    fn special_values_format() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn int32_wraps() {
        assert_eq!(to_int32(4_294_967_297.0), 1);
        assert_eq!(to_int32(-1.0), -1);
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(3.9), 3);
        assert_eq!(to_int32(f64::NAN), 0);
    }

    proptest! {
        #[test]
        fn integers_round_trip(n in -1_000_000_000i64..1_000_000_000) {
            let text = format_number(n as f64);
            prop_assert_eq!(parse_number_literal(&text), Some(n as f64));
        }

        #[test]
        fn finite_numbers_round_trip_through_format(n in -1.0e15f64..1.0e15) {
            let text = format_number(n);
            prop_assert_eq!(text.parse::<f64>().ok(), Some(n));
        }

        #[test]
        fn grammar_matches_digit_strings(whole in "[0-9]{1,12}", fraction in proptest::option::of("[0-9]{1,6}")) {
            let text = match &fraction {
                Some(f) => format!("{whole}.{f}"),
                None => whole.clone(),
            };
            prop_assert!(parse_number_literal(&text).is_some());
        }
    }
}
