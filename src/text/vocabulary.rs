//! Vocabulary construction.
//!
//! A [`Vocabulary`] maps each distinct token to a dense index in first-seen
//! order. Once built it is immutable; the same instance must be used to
//! vectorize both training and test text.

use crate::error::Result;
use crate::text::tokenize::PunctuationTokenizer;
use crate::traits::Tokenizer;
use std::collections::HashMap;

/// Ordered set of distinct tokens with stable integer indices.
///
/// Indices are contiguous, start at 0, and follow first occurrence.
///
/// # Examples
///
/// ```
/// use tweetsense::text::Vocabulary;
///
/// let vocab = Vocabulary::from_lines(&["hi!", "bye."]);
/// assert_eq!(vocab.len(), 4);
/// assert_eq!(vocab.index_of("hi"), Some(0));
/// assert_eq!(vocab.index_of("!"), Some(1));
/// assert_eq!(vocab.index_of("bye"), Some(2));
/// assert_eq!(vocab.index_of("."), Some(3));
/// assert_eq!(vocab.index_of("hello"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary by tokenizing `lines` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokenizer fails on any line.
    pub fn build<S: AsRef<str>>(lines: &[S], tokenizer: &dyn Tokenizer) -> Result<Self> {
        let mut vocab = Self::default();
        for line in lines {
            for token in tokenizer.tokenize(line.as_ref())? {
                vocab.insert(token);
            }
        }
        Ok(vocab)
    }

    /// Builds a vocabulary with the default [`PunctuationTokenizer`].
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let tokenizer = PunctuationTokenizer::new();
        Self::from_token_sequences(lines.iter().map(|line| tokenizer.split(line.as_ref())))
    }

    /// Builds a vocabulary from already-tokenized lines.
    pub fn from_token_sequences<I, T>(sequences: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = String>,
    {
        let mut vocab = Self::default();
        for sequence in sequences {
            for token in sequence {
                vocab.insert(token);
            }
        }
        vocab
    }

    fn insert(&mut self, token: String) {
        if !self.index.contains_key(&token) {
            self.index.insert(token.clone(), self.tokens.len());
            self.tokens.push(token);
        }
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if no token has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index assigned to `token`, or `None` if it was never seen.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Whether `token` has an index.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Token at `index`, if any.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Tokens in index order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterates `(token, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.as_str(), i))
    }
}
