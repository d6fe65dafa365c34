mod lines;


use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::run::RunReport;

pub(crate) use lines::{report_json, summary_lines};

/// Writes the final report to stdout in the requested format.
pub(crate) fn print_report(report: &RunReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(report) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report_json(report))?);
        }
    }
    Ok(())
}
