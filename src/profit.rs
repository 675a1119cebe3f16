/// Yields every whitespace-separated token of `text` that parses as a real
/// number. Words and punctuation-glued tokens are skipped silently.
pub fn extract_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    text.split_whitespace()
        .filter_map(|token| token.parse::<f64>().ok())
}

/// Total of every number found in `text`; 0.0 when there is none.
pub fn sum_profit(text: &str) -> f64 {
    extract_numbers(text).sum()
}
