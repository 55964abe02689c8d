use super::*;
use crate::traits::Tokenizer;

/// Splits on whitespace only, keeping case and punctuation.
struct RawWhitespace;

impl Tokenizer for RawWhitespace {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(ToString::to_string).collect())
    }
}

#[test]
fn test_hi_vector() {
    let vocab = Vocabulary::from_lines(&["hi!", "bye."]);
    let x = extract_feature_vectors(&["hi!"], &vocab).expect("vectorize should succeed");
    assert_eq!(x.shape(), (1, 4));
    assert_eq!(x.row(0), &[1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_shape_matches_lines_and_vocabulary() {
    let train = ["the cat sat", "the dog ran", "a bird flew"];
    let vocab = Vocabulary::from_lines(&train);
    let x = BinaryVectorizer::new()
        .transform(&train, &vocab)
        .expect("transform should succeed");
    assert_eq!(x.shape(), (3, vocab.len()));
}

#[test]
fn test_presence_not_count() {
    let vocab = Vocabulary::from_lines(&["yes no"]);
    let x = extract_feature_vectors(&["yes yes YES yes"], &vocab)
        .expect("vectorize should succeed");
    assert_eq!(x.row(0), &[1.0, 0.0]);
}

#[test]
fn test_out_of_vocabulary_tokens_are_dropped() {
    let vocab = Vocabulary::from_lines(&["happy"]);
    let x = BinaryVectorizer::new()
        .transform(&["happy sad angry", "sad"], &vocab)
        .expect("unseen tokens must not be an error");
    assert_eq!(x.shape(), (2, 1));
    assert_eq!(x.row(0), &[1.0]);
    assert_eq!(x.row(1), &[0.0]);
}

#[test]
fn test_line_without_known_tokens_is_all_zero() {
    let vocab = Vocabulary::from_lines(&["alpha beta"]);
    let x = extract_feature_vectors(&["gamma delta", ""], &vocab)
        .expect("vectorize should succeed");
    assert_eq!(x.row_sum(0), 0.0);
    assert_eq!(x.row_sum(1), 0.0);
}

#[test]
fn test_row_sum_equals_distinct_known_tokens() {
    let vocab = Vocabulary::from_lines(&["I love rust, I love it!"]);
    let x = extract_feature_vectors(&["love love it , !"], &vocab)
        .expect("vectorize should succeed");
    // love, it, ",", "!"
    assert_eq!(x.row_sum(0), 4.0);
}

#[test]
fn test_empty_vocabulary_gives_zero_columns() {
    let vocab = Vocabulary::default();
    let x = extract_feature_vectors(&["anything", "at all"], &vocab)
        .expect("vectorize should succeed");
    assert_eq!(x.shape(), (2, 0));
}

#[test]
fn test_no_lines_gives_zero_rows() {
    let vocab = Vocabulary::from_lines(&["a b c"]);
    let lines: [&str; 0] = [];
    let x = BinaryVectorizer::new()
        .transform(&lines, &vocab)
        .expect("transform should succeed");
    assert_eq!(x.shape(), (0, 3));
}

#[test]
fn test_fit_transform_reuses_built_vocabulary() {
    let lines = ["Good food.", "bad food!"];
    let (vocab, x) = BinaryVectorizer::new()
        .fit_transform(&lines)
        .expect("fit_transform should succeed");
    assert_eq!(vocab.tokens(), &["good", "food", ".", "bad", "!"]);
    assert_eq!(x.row(0), &[1.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(x.row(1), &[0.0, 1.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_custom_tokenizer() {
    let vectorizer = BinaryVectorizer::new().with_tokenizer(Box::new(RawWhitespace));
    let (vocab, x) = vectorizer
        .fit_transform(&["Hi! hi!"])
        .expect("fit_transform should succeed");
    assert_eq!(vocab.tokens(), &["Hi!", "hi!"]);
    assert_eq!(x.row(0), &[1.0, 1.0]);
}

#[test]
fn test_free_function_matches_vectorizer() {
    let train = ["one, two", "three four!"];
    let test = ["two four five", "!!"];
    let vocab = Vocabulary::from_lines(&train);
    let a = extract_feature_vectors(&test, &vocab).expect("vectorize should succeed");
    let b = BinaryVectorizer::new()
        .transform(&test, &vocab)
        .expect("transform should succeed");
    assert_eq!(a, b);
}
