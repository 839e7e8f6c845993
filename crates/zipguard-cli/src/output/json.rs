//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io;
use std::io::Write;
use std::path::Path;
use zipguard_activity::ActivityOutput;
use zipguard_core::ExtractionReport;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ExtractionOutput {
    output_dir: String,
    files_extracted: usize,
    directories_created: usize,
    bytes_written: u64,
    duration_ms: u128,
    extracted_paths: Vec<String>,
}

impl ExtractionOutput {
    fn new(output_dir: &Path, report: &ExtractionReport) -> Self {
        Self {
            output_dir: output_dir.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
            extracted_paths: report
                .extracted_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        let output = JsonOutput::success("extract", ExtractionOutput::new(output_dir, report));
        Self::output(&output)
    }

    // The activity contract is the bare `{"result": ...}` object.
    fn format_activity_output(&self, output: &ActivityOutput) -> Result<()> {
        Self::output(output)
    }
}
