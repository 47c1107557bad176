//! Currency magnitude formatting.
//!
//! Amounts render in abbreviated Indian-convention bands: thousands (K),
//! lakhs (L, 1e5), crores (Cr, 1e7). Chosen by absolute magnitude, two
//! decimal places, deterministic.

use rust_decimal::Decimal;

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
const CRORE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Formats an amount in abbreviated local-convention units.
#[must_use]
pub fn format_amount_short(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let magnitude = amount.abs();

    // normalize() drops trailing zeros so "1.50" renders as "1.5".
    if magnitude >= CRORE {
        format!("{sign}₹{} Cr", (magnitude / CRORE).round_dp(2).normalize())
    } else if magnitude >= LAKH {
        format!("{sign}₹{} L", (magnitude / LAKH).round_dp(2).normalize())
    } else if magnitude >= THOUSAND {
        format!("{sign}₹{} K", (magnitude / THOUSAND).round_dp(2).normalize())
    } else {
        format!("{sign}₹{}", magnitude.round_dp(2).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "₹0")]
    #[case(dec!(999.994), "₹999.99")]
    #[case(dec!(1000), "₹1 K")]
    #[case(dec!(1500), "₹1.5 K")]
    #[case(dec!(99999), "₹100 K")]
    #[case(dec!(100000), "₹1 L")]
    #[case(dec!(2550000), "₹25.5 L")]
    #[case(dec!(10000000), "₹1 Cr")]
    #[case(dec!(123456789), "₹12.35 Cr")]
    #[case(dec!(-1500), "-₹1.5 K")]
    #[case(dec!(-50), "-₹50")]
    fn test_magnitude_bands(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount_short(amount), expected);
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let amount = dec!(123456.78);
        assert_eq!(format_amount_short(amount), format_amount_short(amount));
    }
}
