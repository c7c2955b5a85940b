// src/processing/counter.rs

use crate::constants::{TOKENS_PER_CHAR_DENOMINATOR, TOKENS_PER_CHAR_NUMERATOR};

/// Estimates the language-model token count of `content`.
///
/// The estimate is `ceil(chars * 0.3)`, where `chars` counts Unicode scalar
/// values (line terminators included). Integer arithmetic keeps it exact: 10
/// characters give 3 tokens, 11 give 4.
///
/// # Examples
///
/// ```
/// use slncat::processing::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("a"), 1);
/// assert_eq!(estimate_tokens("0123456789"), 3);
/// assert_eq!(estimate_tokens("class Foo {}\n}\n"), 5);
/// ```
#[inline]
pub fn estimate_tokens(content: &str) -> u64 {
    let chars = content.chars().count() as u64;
    (chars * TOKENS_PER_CHAR_NUMERATOR).div_ceil(TOKENS_PER_CHAR_DENOMINATOR)
}
