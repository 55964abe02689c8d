//! Vocab command: build and list the vocabulary of a tweet file

use crate::error::{CliError, Result};
use crate::output;
use serde::Serialize;
use std::path::Path;
use tweetsense::data::read_lines;
use tweetsense::text::Vocabulary;

#[derive(Serialize)]
struct VocabSummary<'a> {
    n_tweets: usize,
    size: usize,
    tokens: Vec<&'a str>,
}

pub(crate) fn run(tweets: &Path, limit: usize, json: bool) -> Result<()> {
    if !tweets.exists() {
        return Err(CliError::FileNotFound(tweets.to_path_buf()));
    }
    let lines = read_lines(tweets)?;
    let vocabulary = Vocabulary::from_lines(&lines);
    let shown: Vec<&str> = vocabulary.tokens().iter().take(limit).map(String::as_str).collect();

    if json {
        let summary = VocabSummary {
            n_tweets: lines.len(),
            size: vocabulary.len(),
            tokens: shown,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::section("Vocabulary");
    output::kv("tweets", lines.len());
    output::kv("size", vocabulary.len());
    for (index, token) in shown.iter().enumerate() {
        println!("  {index:>6}  {token}");
    }
    if vocabulary.len() > shown.len() {
        println!("  ... {} more", vocabulary.len() - shown.len());
    }
    Ok(())
}
