use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

use crate::network::types::AddressFamily;

#[derive(Serialize, Debug)]
pub struct ZoneOutput {
    pub subnet: String,
    pub family: String,
    pub zones: Vec<String>,
}

impl ZoneOutput {
    pub fn new(subnet: String, family: AddressFamily, zones: Vec<String>) -> Self {
        Self {
            subnet,
            family: family.to_string(),
            zones,
        }
    }

    /// Writes pretty JSON, appending `.json` when the path lacks it. Returns the final path.
    pub fn write_to_file(&self, output_file: &str) -> Result<String> {
        let output_file = json_path(output_file);
        let file = File::create(&output_file)
            .with_context(|| format!("Failed to create JSON output file {output_file}"))?;
        serde_json::to_writer_pretty(file, self)
            .with_context(|| format!("Failed to write JSON to {output_file}"))?;
        Ok(output_file)
    }
}

fn json_path(output_file: &str) -> String {
    if Path::new(output_file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        output_file.to_string()
    } else {
        format!("{output_file}.json")
    }
}
