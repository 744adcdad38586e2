use rust_decimal::Decimal;

/// Fixed two-decimal dollar display used by every table and card.
/// Purely presentational; amounts are never recomputed for display.
pub fn format_currency(value: Decimal) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_pads_to_two_decimals() {
        assert_eq!(format_currency(Decimal::from(30)), "$30.00");
        assert_eq!(format_currency(Decimal::new(305, 1)), "$30.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_currency_keeps_exact_cents() {
        assert_eq!(format_currency(Decimal::new(1999, 2)), "$19.99");
    }
}
