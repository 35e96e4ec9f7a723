use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Deserializer};

const THOUSANDS_SEPARATOR: char = '.';

/// Colombian peso display, no fraction digits: `$ 1.234.567`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!(
        "{}$\u{a0}{}",
        sign,
        amount.unsigned_abs().to_formatted_string(&Locale::es_CO)
    )
}

/// Live mask for amount inputs: digits only, grouped by `.` from the right.
pub fn format_amount_input(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(*ch);
    }
    out
}

/// Reads a masked amount back into pesos.
///
/// Empty input is `Some(0)`. Otherwise the separators are dropped and the
/// remainder is read the way `parseInt` reads it: leading whitespace and an
/// optional sign, then as many digits as there are, ignoring the rest. Input
/// with no leading digits yields `None`, which callers send on as-is.
/// Magnitudes past `i64::MAX` saturate.
pub fn parse_amount(value: &str) -> Option<i64> {
    if value.is_empty() {
        return Some(0);
    }

    let cleaned: String = value.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();
    let trimmed = cleaned.trim_start();
    let (negative, rest) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Value placed in an amount input when a record is opened for editing.
pub fn amount_input_value(amount: i64) -> String {
    format_amount_input(&amount.to_string())
}

/// `2024-03-07` is shown as `07-03-2024`; anything unparseable is shown raw.
pub fn format_date_display(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d-%m-%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// The API stores amounts as floats; the dashboard works in whole pesos.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn currency_uses_colombian_grouping() {
        assert_eq!(format_currency(0), "$\u{a0}0");
        assert_eq!(format_currency(950), "$\u{a0}950");
        assert_eq!(format_currency(1_234_567), "$\u{a0}1.234.567");
        assert_eq!(format_currency(-50_000), "-$\u{a0}50.000");
    }

    #[test]
    fn mask_groups_from_the_right() {
        assert_eq!(format_amount_input(""), "");
        assert_eq!(format_amount_input("123"), "123");
        assert_eq!(format_amount_input("1234"), "1.234");
        assert_eq!(format_amount_input("50000"), "50.000");
        assert_eq!(format_amount_input("1234567"), "1.234.567");
    }

    #[test]
    fn mask_strips_non_digits_first() {
        assert_eq!(format_amount_input("$ 1.2a34"), "1.234");
        assert_eq!(format_amount_input("12,50"), "1.250");
        assert_eq!(format_amount_input("abc"), "");
    }

    #[test]
    fn parse_handles_empty_and_grouped_values() {
        assert_eq!(parse_amount(""), Some(0));
        assert_eq!(parse_amount("0"), Some(0));
        assert_eq!(parse_amount("1.234"), Some(1234));
        assert_eq!(parse_amount("1.234.567"), Some(1_234_567));
    }

    #[test]
    fn parse_follows_parse_int_quirks() {
        assert_eq!(parse_amount("..."), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("  42"), Some(42));
        assert_eq!(parse_amount("50.000,00"), Some(50_000));
        assert_eq!(parse_amount("-1.500"), Some(-1500));
    }

    #[test]
    fn oversized_amounts_saturate() {
        assert_eq!(parse_amount("99.999.999.999.999.999.999"), Some(i64::MAX));
        assert_eq!(parse_amount("-99.999.999.999.999.999.999"), Some(-i64::MAX));
        assert_eq!(parse_amount("9.223.372.036.854.775.807"), Some(i64::MAX));
    }

    #[test]
    fn edit_prefill_is_masked() {
        assert_eq!(amount_input_value(50_000), "50.000");
        assert_eq!(parse_amount(&amount_input_value(7_250_000)), Some(7_250_000));
    }

    #[test]
    fn dates_are_shown_day_first() {
        assert_eq!(format_date_display("2024-03-07"), "07-03-2024");
        assert_eq!(format_date_display(""), "");
        assert_eq!(format_date_display("ayer"), "ayer");
    }

    #[test]
    fn amounts_deserialize_from_floats_and_integers() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "deserialize_amount")]
            amount: i64,
        }
        let row: Row = serde_json::from_str(r#"{"amount": 50000.0}"#).unwrap();
        assert_eq!(row.amount, 50_000);
        let row: Row = serde_json::from_str(r#"{"amount": 1200}"#).unwrap();
        assert_eq!(row.amount, 1200);
    }

    proptest! {
        #[test]
        fn mask_places_separators_every_three_digits(digits in "[0-9]{1,25}") {
            let masked = format_amount_input(&digits);
            let separators = masked.matches('.').count();
            prop_assert_eq!(separators, (digits.len() + 2) / 3 - 1);
            for (i, group) in masked.rsplit('.').enumerate() {
                if i < separators {
                    prop_assert_eq!(group.len(), 3);
                } else {
                    prop_assert!((1..=3).contains(&group.len()));
                }
            }
        }

        #[test]
        fn masking_preserves_parsed_value(digits in "[0-9]{1,25}") {
            prop_assert_eq!(parse_amount(&format_amount_input(&digits)), parse_amount(&digits));
        }

        #[test]
        fn digits_always_parse_to_a_number(digits in "[0-9]{1,25}") {
            prop_assert!(parse_amount(&format_amount_input(&digits)).is_some());
        }

        #[test]
        fn mask_output_is_digits_and_separators(raw in ".{0,24}") {
            let masked = format_amount_input(&raw);
            prop_assert!(masked.chars().all(|c| c.is_ascii_digit() || c == '.'));
            prop_assert!(!masked.starts_with('.'));
        }
    }
}
