use currency_rs::Currency;

/// Format a dollar amount for terminal output ("$1,234.50").
pub fn format_usd(amount: f64) -> String {
    Currency::new_float(amount, None).format()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_symbol_and_cents() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_usd(0.0), "$0.00");
    }
}
