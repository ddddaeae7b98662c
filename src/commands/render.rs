use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::data::load_summary;
use crate::error::ExitError;
use crate::render::{DEFAULT_TEMPLATE, render_document};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Path to the day-summary JSON data file
    #[arg(long)]
    pub data_file: PathBuf,
    /// Path for the generated HTML document (overwritten if present)
    #[arg(long)]
    pub output_file: PathBuf,
    /// Replace the built-in page template
    #[arg(long)]
    pub template: Option<PathBuf>,
}

impl RenderArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let day = load_summary(&self.data_file)?;

        let template = match &self.template {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|e| ExitError::missing_file(path, e))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let html = render_document(&template, &day)?;

        std::fs::write(&self.output_file, html)
            .with_context(|| format!("could not write {}", self.output_file.display()))?;

        tracing::info!(
            data = %self.data_file.display(),
            output = %self.output_file.display(),
            items = day.timeline.len(),
            "rendered day summary"
        );
        println!("Generated: {}", self.output_file.display());
        Ok(())
    }
}
