/// Approximate token count using the ~4 chars per token heuristic.
const CHARS_PER_TOKEN: f64 = 4.0;

/// Estimate tokens from a character count.
#[must_use]
pub fn estimate_tokens(char_count: usize) -> u64 {
    (char_count as f64 / CHARS_PER_TOKEN).ceil() as u64
}

/// Estimate tokens for a group of page texts.
#[must_use]
pub fn estimate_tokens_for<S: AsRef<str>>(texts: &[S]) -> u64 {
    estimate_tokens(texts.iter().map(|t| t.as_ref().len()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_tokens_up() {
        assert_eq!(estimate_tokens(0), 0);
        assert_eq!(estimate_tokens(4), 1);
        assert_eq!(estimate_tokens(5), 2);
    }

    #[test]
    fn sums_across_pages() {
        // 6 + 5 = 11 chars -> ceil(11/4) = 3
        assert_eq!(estimate_tokens_for(&["page 1", "two 2"]), 3);
        assert_eq!(estimate_tokens_for::<&str>(&[]), 0);
    }
}
