//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use crate::progress::humanize_bytes;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use zipguard_activity::ActivityOutput;
use zipguard_core::ExtractionReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, c) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    fn line(&self, text: &str) -> Result<()> {
        self.term.write_line(text)?;
        Ok(())
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_extraction_result(
        &self,
        output_dir: &Path,
        report: &ExtractionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            self.line(&format!(
                "{} Extracted into {}",
                style("✓").green().bold(),
                output_dir.display()
            ))?;
        } else {
            self.line(&format!("Extracted into {}", output_dir.display()))?;
        }

        self.line(&format!(
            "  Files extracted: {}",
            Self::format_number(report.files_extracted)
        ))?;
        self.line(&format!(
            "  Directories: {}",
            Self::format_number(report.directories_created)
        ))?;
        self.line(&format!(
            "  Total size: {}",
            humanize_bytes(report.bytes_written)
        ))?;

        if self.verbose {
            self.line(&format!("  Duration: {:?}", report.duration))?;
            for path in &report.extracted_paths {
                self.line(&format!("  {}", path.display()))?;
            }
        }

        Ok(())
    }

    fn format_activity_output(&self, output: &ActivityOutput) -> Result<()> {
        // Printed even when quiet: the result object is the command's answer.
        let json = serde_json::to_string(output)?;
        if self.use_colors && !output.is_ok() {
            self.line(&style(json).red().to_string())
        } else {
            self.line(&json)
        }
    }
}
