//! Run command: evaluates one activity request.

use crate::cli::RunArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::fs;
use zipguard_activity::Activity;
use zipguard_activity::ActivityInput;
use zipguard_activity::ActivityOutput;

pub fn execute(args: &RunArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let text = read_input(&args.input)?;
    let input = ActivityInput::from_json_str(&text)?;

    let outcome = Activity::default().eval(&input);
    formatter.format_activity_output(&ActivityOutput::from_outcome(&outcome))?;

    outcome
        .map(drop)
        .with_context(|| format!("activity '{}' failed", input.action))
}

/// Returns the request text; `@path` reads it from a file.
fn read_input(raw: &str) -> Result<String> {
    match raw.strip_prefix('@') {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read input file '{path}'"))
        }
        None => Ok(raw.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_inline() {
        assert_eq!(read_input("{\"a\":1}").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_read_input_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{}").unwrap();
        let arg = format!("@{}", file.path().display());
        assert_eq!(read_input(&arg).unwrap(), "{}");
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input("@/nonexistent/request.json").unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }
}
