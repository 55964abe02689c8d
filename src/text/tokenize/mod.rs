//! Tokenization for tweet text.
//!
//! [`PunctuationTokenizer`] isolates every ASCII punctuation character as
//! its own token, lowercases, and splits on whitespace. The punctuation set
//! is exactly `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.

use crate::error::Result;
use crate::traits::Tokenizer;

/// Tokenizer that surrounds each punctuation character with spaces, lowercases
/// the whole line, then splits on runs of whitespace.
///
/// Unlike a contraction-aware word tokenizer, apostrophes are punctuation
/// too: `"don't"` becomes `["don", "'", "t"]`.
///
/// # Examples
///
/// ```
/// use tweetsense::text::tokenize::PunctuationTokenizer;
/// use tweetsense::traits::Tokenizer;
///
/// let tokenizer = PunctuationTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hi!").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["hi", "!"]);
///
/// let tokens = tokenizer.tokenize("#Rust... rocks").expect("tokenize should succeed");
/// assert_eq!(tokens, vec!["#", "rust", ".", ".", ".", "rocks"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationTokenizer;

impl PunctuationTokenizer {
    /// Create a new punctuation tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether `c` is split out as a standalone token.
    #[must_use]
    pub fn is_punctuation(c: char) -> bool {
        c.is_ascii_punctuation()
    }

    /// Tokenizes without going through the fallible [`Tokenizer`] interface.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut padded = String::with_capacity(text.len() * 2);
        for ch in text.chars() {
            if Self::is_punctuation(ch) {
                padded.push(' ');
                padded.push(ch);
                padded.push(' ');
            } else {
                padded.push(ch);
            }
        }

        // Lowercase after padding so context-sensitive mappings see the whole line
        padded
            .to_lowercase()
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    }
}

impl Tokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.split(text))
    }
}

/// Tokenizes one line with [`PunctuationTokenizer`].
///
/// # Examples
///
/// ```
/// use tweetsense::text::tokenize::extract_words;
///
/// assert_eq!(extract_words("bye."), vec!["bye", "."]);
/// ```
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    PunctuationTokenizer.split(text)
}
