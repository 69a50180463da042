//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::processor::ClaimsProcessor;

/// Execute the batch command.
///
/// Individual document failures are part of the summary; only an unreadable
/// input directory fails the command.
pub fn execute_batch(
    args: BatchArgs,
    processor: &ClaimsProcessor,
    formatter: &Formatter,
) -> Result<()> {
    let summary = processor.process_directory(&args.dir, &args.output_dir)?;

    let output = formatter.format_batch(&summary)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
