//! Config command: print the resolved configuration

use crate::error::Result;
use tweetsense::config::PipelineConfig;

pub(crate) fn run(config: &PipelineConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
