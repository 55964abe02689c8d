//! Text processing: tokenization, vocabulary building, and vectorization.
//!
//! ```
//! use tweetsense::text::{BinaryVectorizer, Vocabulary};
//!
//! let train = ["Loving this weather!", "worst. day. ever."];
//! let vocab = Vocabulary::from_lines(&train);
//! let x = BinaryVectorizer::new().transform(&train, &vocab).expect("transform should succeed");
//! assert_eq!(x.shape(), (2, vocab.len()));
//! ```

pub mod tokenize;
pub mod vectorize;
pub mod vocabulary;

pub use tokenize::PunctuationTokenizer;
pub use vectorize::{extract_feature_vectors, BinaryVectorizer};
pub use vocabulary::Vocabulary;
