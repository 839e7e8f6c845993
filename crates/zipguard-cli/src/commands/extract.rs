//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use log::debug;
use std::env;
use zipguard_core::ExtractOptions;
use zipguard_core::NoopProgress;
use zipguard_core::extract_archive_with_progress;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, silent: bool) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let options = options_from_args(args);
    debug!(
        "extracting {} into {} with {options:?}",
        args.archive.display(),
        output_dir.display()
    );

    // Progress bar only on an interactive terminal and human output
    let report = if !silent && CliProgress::should_show() {
        let mut progress = CliProgress::new("Extracting");
        add_archive_context(
            extract_archive_with_progress(&args.archive, &output_dir, &options, &mut progress),
            &args.archive,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            extract_archive_with_progress(&args.archive, &output_dir, &options, &mut noop),
            &args.archive,
        )?
    };

    formatter.format_extraction_result(&output_dir, &report)
}

const fn options_from_args(args: &ExtractArgs) -> ExtractOptions {
    ExtractOptions {
        preserve_permissions: !args.no_preserve_permissions,
        create_destination: !args.no_create_destination,
    }
}
