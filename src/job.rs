use crate::reader::read_records;
use crate::xml::render_value_set;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "countries.csv";
pub const DEFAULT_OUTPUT: &str = "App_Countries.globalValueSet-meta.xml";

/// One conversion run: CSV in, GlobalValueSet metadata out.
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Job {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT.into(), DEFAULT_OUTPUT.into())
    }
}

impl Job {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }

    pub fn run(&self) -> Result<()> {
        // Read everything before touching the output file, so a bad input
        // never leaves a truncated document behind.
        let records = read_records(&self.input)?;
        let document = render_value_set(&records);

        std::fs::write(&self.output, document)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!(
            "{}",
            format!(
                "{} written with {} countries.",
                self.output.display(),
                records.len()
            )
            .green()
        );

        Ok(())
    }
}
