//! Process command implementation.

use crate::cli::ProcessArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::processor::ClaimsProcessor;

/// Execute the process command.
pub fn execute_process(
    args: ProcessArgs,
    processor: &ClaimsProcessor,
    formatter: &Formatter,
) -> Result<()> {
    let record = processor.process_document(&args.file)?;

    println!("{}", formatter.format_record(&record)?);

    if let Some(output) = args.output {
        processor.save_record(&record, &output)?;
        // stdout carries only the result
        eprintln!(
            "{}",
            formatter.success(&format!("Result saved to {}", output.display()))
        );
    }

    Ok(())
}
