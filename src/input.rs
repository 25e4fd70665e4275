//! Turns the text a user typed into raw numeric fields.
//!
//! Parsing is forgiving in the same way a masked form input is: thousands
//! separators and stray characters are dropped, and an empty result means the
//! field was left blank.

use core_types::{PurchaseRequest, RawField};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Which characters survive cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Digits only.
    Whole,
    /// Digits and the first decimal point.
    Fractional,
}

/// Parses display text into a raw field.
///
/// Blank text, or text with no digits left after cleaning, is `Absent`.
/// A value too large for `Decimal` is `NotFinite`.
pub fn parse_field(text: &str, kind: NumberKind) -> RawField {
    let cleaned = clean(text, kind);
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() {
        return RawField::Absent;
    }

    let normalized = if cleaned.starts_with('.') {
        format!("0{}", cleaned)
    } else {
        cleaned.to_string()
    };

    Decimal::from_str(&normalized).map_or(RawField::NotFinite, RawField::Value)
}

fn clean(text: &str, kind: NumberKind) -> String {
    let mut seen_point = false;
    text.chars()
        .filter(|c| match c {
            '0'..='9' => true,
            '.' if kind == NumberKind::Fractional && !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Parses a purchase written as `AMOUNT@PRICE`, e.g. `1,000,000@50,000`.
///
/// Amounts are whole numbers; prices may carry decimals. Either side may be
/// blank, which leaves the field absent for the validator to flag.
pub fn parse_purchase(text: &str) -> Result<PurchaseRequest, String> {
    let (amount, price) = text
        .split_once('@')
        .ok_or_else(|| format!("'{}' is not in AMOUNT@PRICE form", text))?;

    Ok(PurchaseRequest {
        amount: parse_field(amount, NumberKind::Whole),
        unit_price: parse_field(price, NumberKind::Fractional),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(parse_field("1,000,000", NumberKind::Whole), RawField::Value(dec!(1000000)));
        assert_eq!(parse_field("12,345.5", NumberKind::Fractional), RawField::Value(dec!(12345.5)));
    }

    #[test]
    fn whole_numbers_drop_the_decimal_point() {
        assert_eq!(parse_field("1,234.56", NumberKind::Whole), RawField::Value(dec!(123456)));
    }

    #[test]
    fn only_the_first_decimal_point_is_kept() {
        assert_eq!(parse_field("5.2.5", NumberKind::Fractional), RawField::Value(dec!(5.25)));
    }

    #[test]
    fn blank_and_bare_points_are_absent() {
        assert_eq!(parse_field("", NumberKind::Fractional), RawField::Absent);
        assert_eq!(parse_field("   ", NumberKind::Whole), RawField::Absent);
        assert_eq!(parse_field(".", NumberKind::Fractional), RawField::Absent);
        assert_eq!(parse_field("abc", NumberKind::Whole), RawField::Absent);
    }

    #[test]
    fn partial_decimals_are_completed() {
        assert_eq!(parse_field(".5", NumberKind::Fractional), RawField::Value(dec!(0.5)));
        assert_eq!(parse_field("7.", NumberKind::Fractional), RawField::Value(dec!(7)));
    }

    #[test]
    fn stray_characters_are_ignored() {
        assert_eq!(parse_field("₩ 50,000원", NumberKind::Whole), RawField::Value(dec!(50000)));
        assert_eq!(parse_field("5%", NumberKind::Fractional), RawField::Value(dec!(5)));
    }

    #[test]
    fn oversized_numbers_are_not_finite() {
        let digits = "9".repeat(40);
        assert_eq!(parse_field(&digits, NumberKind::Whole), RawField::NotFinite);
    }

    #[test]
    fn purchases_split_on_at_sign() {
        let purchase = parse_purchase("1,000,000@50,000.5").unwrap();
        assert_eq!(purchase.amount, RawField::Value(dec!(1000000)));
        assert_eq!(purchase.unit_price, RawField::Value(dec!(50000.5)));

        let blank_price = parse_purchase("100@").unwrap();
        assert_eq!(blank_price.unit_price, RawField::Absent);

        assert!(parse_purchase("100").is_err());
    }
}
