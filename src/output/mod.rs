//! Output formatting and report generation

pub mod formatter;
pub mod report;

pub use formatter::{
    save_report_to_file, suggest_filename, ConsoleFormatter, JsonFormatter, MarkdownFormatter,
    OutputFormatter, ReportGenerator,
};
pub use report::{ReportMetadata, ScreeningReport, ScreeningSummary};
