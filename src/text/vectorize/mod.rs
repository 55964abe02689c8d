//! Binary bag-of-words feature extraction.
//!
//! Each line becomes one row; column `j` is 1 when the token with vocabulary
//! index `j` occurs in that line. Tokens the vocabulary has never seen are
//! dropped rather than reported as errors.

use crate::error::Result;
use crate::primitives::Matrix;
use crate::text::tokenize::PunctuationTokenizer;
use crate::text::Vocabulary;
use crate::traits::Tokenizer;
use std::fmt;
use tracing::debug;

/// Maps lines of text to a fixed-width 0/1 presence matrix over a [`Vocabulary`].
///
/// # Examples
///
/// ```
/// use tweetsense::text::{BinaryVectorizer, Vocabulary};
///
/// let vocab = Vocabulary::from_lines(&["hi!", "bye."]);
/// let vectorizer = BinaryVectorizer::new();
///
/// let x = vectorizer.transform(&["hi!"], &vocab).expect("transform should succeed");
/// assert_eq!(x.row(0), &[1.0, 1.0, 0.0, 0.0]);
/// ```
pub struct BinaryVectorizer {
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
}

impl BinaryVectorizer {
    /// Create a vectorizer using [`PunctuationTokenizer`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(PunctuationTokenizer::new()),
        }
    }

    /// Set the tokenizer to use.
    ///
    /// The vocabulary passed to [`transform`](Self::transform) should have
    /// been built with the same tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer + Send + Sync>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Builds a vocabulary from `lines`, then vectorizes the same lines with it.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> Result<(Vocabulary, Matrix<f32>)> {
        let vocab = Vocabulary::build(lines, self.tokenizer.as_ref())?;
        let x = self.transform(lines, &vocab)?;
        Ok((vocab, x))
    }

    /// Vectorizes `lines` against a fixed vocabulary.
    ///
    /// Returns a `lines.len() × vocabulary.len()` matrix. Repeated tokens in a
    /// line still produce a single 1.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    pub fn transform<S: AsRef<str>>(
        &self,
        lines: &[S],
        vocabulary: &Vocabulary,
    ) -> Result<Matrix<f32>> {
        let mut x = Matrix::zeros(lines.len(), vocabulary.len());
        let mut dropped = 0usize;

        for (row, line) in lines.iter().enumerate() {
            for token in self.tokenizer.tokenize(line.as_ref())? {
                match vocabulary.index_of(&token) {
                    Some(col) => x.set(row, col, 1.0),
                    None => dropped += 1,
                }
            }
        }

        if dropped > 0 {
            debug!(
                dropped,
                rows = lines.len(),
                "ignored out-of-vocabulary tokens"
            );
        }

        Ok(x)
    }
}

impl Default for BinaryVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BinaryVectorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryVectorizer").finish_non_exhaustive()
    }
}

/// Vectorizes `lines` with the default tokenizer.
///
/// # Examples
///
/// ```
/// use tweetsense::text::{extract_feature_vectors, Vocabulary};
///
/// let vocab = Vocabulary::from_lines(&["good day", "bad day"]);
/// let x = extract_feature_vectors(&["bad bad!"], &vocab).expect("vectorize");
/// assert_eq!(x.row(0), &[0.0, 0.0, 1.0]);
/// ```
///
/// # Errors
///
/// Same as [`BinaryVectorizer::transform`].
pub fn extract_feature_vectors<S: AsRef<str>>(
    lines: &[S],
    vocabulary: &Vocabulary,
) -> Result<Matrix<f32>> {
    BinaryVectorizer::new().transform(lines, vocabulary)
}

#[cfg(test)]
mod tests;
