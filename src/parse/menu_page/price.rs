/// Number of leading characters of a price cell that hold the amount,
/// e.g. "3,50" out of "3,50 € / 4,80 € / 5,90 €".
pub const PRICE_WIDTH: usize = 4;

/// The displayed amount of a price cell. Shorter cells are used whole.
pub fn price_amount(text: &str) -> &str {
    match text.char_indices().nth(PRICE_WIDTH) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_amount() {
        assert_eq!(price_amount("3,50 € / 4,80 € / 5,90 €"), "3,50");
        assert_eq!(price_amount("2,10"), "2,10");
    }

    #[test]
    fn test_short_price() {
        assert_eq!(price_amount("1,5"), "1,5");
        assert_eq!(price_amount(""), "");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // '€' is three bytes long
        assert_eq!(price_amount("€€€€€"), "€€€€");
        assert_eq!(price_amount("1€"), "1€");
    }
}
