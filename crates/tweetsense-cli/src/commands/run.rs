//! Run command: hyperparameter selection and held-out evaluation

use crate::error::{CliError, Result};
use crate::output;
use tweetsense::config::PipelineConfig;
use tweetsense::pipeline;

pub(crate) fn run(config: &PipelineConfig, json: bool) -> Result<()> {
    for path in [&config.data.tweets_path, &config.data.labels_path] {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.clone()));
        }
    }

    let report = pipeline::run(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::report(&report);
    }
    Ok(())
}
