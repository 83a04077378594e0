//! Token accounting: compare a CON rendering against its JSON equivalent.
//!
//! The default tokenizer is a deliberately crude character/word estimate —
//! close enough to rank payload variants without shipping a real BPE
//! vocabulary. Callers with an exact tokenizer can pass it to
//! [`count_tokens_with`].

/// Comparison of a CON payload against its JSON equivalent.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenReport {
    pub con_tokens: usize,
    pub json_tokens: usize,
    pub con_chars: usize,
    pub json_chars: usize,
    pub savings: Savings,
}

/// How much the CON rendering saves relative to JSON. Negative values mean
/// CON came out larger.
#[derive(Debug, Clone, PartialEq)]
pub struct Savings {
    pub tokens: i64,
    pub tokens_percent: f64,
    pub chars: i64,
    pub chars_percent: f64,
}

/// Compares `con_text` against `json_text` using the default estimator.
///
/// # Examples
///
/// ```rust
/// let report = serde_con::count_tokens(
///     "tags[3]: a,b,c",
///     r#"{"tags":["a","b","c"]}"#,
/// );
/// assert!(report.savings.chars > 0);
/// ```
#[must_use]
pub fn count_tokens(con_text: &str, json_text: &str) -> TokenReport {
    count_tokens_with(con_text, json_text, estimate_tokens)
}

/// Compares `con_text` against `json_text` with a caller-supplied tokenizer.
#[must_use]
pub fn count_tokens_with<F>(con_text: &str, json_text: &str, tokenizer: F) -> TokenReport
where
    F: Fn(&str) -> usize,
{
    let con_tokens = tokenizer(con_text);
    let json_tokens = tokenizer(json_text);
    let con_chars = con_text.chars().count();
    let json_chars = json_text.chars().count();
    TokenReport {
        con_tokens,
        json_tokens,
        con_chars,
        json_chars,
        savings: Savings {
            tokens: json_tokens as i64 - con_tokens as i64,
            tokens_percent: percent(json_tokens, con_tokens),
            chars: json_chars as i64 - con_chars as i64,
            chars_percent: percent(json_chars, con_chars),
        },
    }
}

/// The default character/word estimate: roughly four characters per token,
/// never fewer tokens than whitespace-separated words.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    let chars = text.chars().count();
    let words = text.split_whitespace().count();
    words.max(chars.div_ceil(4))
}

fn percent(json: usize, con: usize) -> f64 {
    if json == 0 {
        return 0.0;
    }
    (json as f64 - con as f64) / json as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_floors() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("hi"), 1);
        // nine words of one character each still count as nine tokens
        assert_eq!(estimate_tokens("a a a a a a a a a"), 9);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
    }

    #[test]
    fn report_math() {
        let report = count_tokens_with("abcd", "abcdabcd", |s| s.len());
        assert_eq!(report.con_tokens, 4);
        assert_eq!(report.json_tokens, 8);
        assert_eq!(report.savings.tokens, 4);
        assert_eq!(report.savings.tokens_percent, 50.0);
        assert_eq!(report.savings.chars, 4);
    }

    #[test]
    fn negative_savings_are_representable() {
        let report = count_tokens_with("longer output", "json", |s| s.len());
        assert!(report.savings.tokens < 0);
        assert!(report.savings.tokens_percent < 0.0);
    }

    #[test]
    fn empty_json_side_reports_zero_percent() {
        let report = count_tokens("con", "");
        assert_eq!(report.savings.tokens_percent, 0.0);
    }
}
