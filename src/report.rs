/*!
 * Reporting functionality for mdtree
 *
 * Renders a summary of a finished run as console tables using the tabled
 * library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::RenderStats;
use crate::utils::format_file_size;

/// Statistics for a finished run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Output file path
    pub output_file: String,
    /// Size of the written document in bytes
    pub output_size: u64,
    /// Time taken to render and write
    pub duration: Duration,
    /// Entry counters
    pub stats: RenderStats,
    /// Recoverable errors, already formatted
    pub errors: Vec<String>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "📦 Output Size".to_string(),
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: report.stats.directories.to_string(),
            },
            SummaryRow {
                key: "📄 Files".to_string(),
                value: report.stats.files.to_string(),
            },
            SummaryRow {
                key: "📝 Inlined Files".to_string(),
                value: report.stats.inlined_files.to_string(),
            },
            SummaryRow {
                key: "🎞️ Media Files".to_string(),
                value: report.stats.media_files.to_string(),
            },
            SummaryRow {
                key: "⚠️ Errors".to_string(),
                value: report.errors.len().to_string(),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_errors_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct ErrorRow {
            #[tabled(rename = "#")]
            index: usize,

            #[tabled(rename = "Error")]
            message: String,
        }

        let rows: Vec<ErrorRow> = report
            .errors
            .iter()
            .enumerate()
            .map(|(i, message)| ErrorRow {
                index: i + 1,
                message: message.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        let summary = format!(
            "✅  TREE GENERATION COMPLETE\n{}",
            self.create_summary_table(report)
        );

        if report.errors.is_empty() {
            return summary;
        }

        format!(
            "{}\n\n⚠️  ERRORS ENCOUNTERED\n{}",
            summary,
            self.create_errors_table(report)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(errors: Vec<String>) -> RunReport {
        RunReport {
            output_file: "/tmp/demo_20240101-000000.md".to_string(),
            output_size: 2048,
            duration: Duration::from_millis(12),
            stats: RenderStats {
                directories: 2,
                files: 5,
                media_files: 1,
                inlined_files: 3,
            },
            errors,
        }
    }

    #[test]
    fn test_summary_without_errors() {
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report(vec![]));
        assert!(text.contains("TREE GENERATION COMPLETE"));
        assert!(text.contains("/tmp/demo_20240101-000000.md"));
        assert!(text.contains("2.00 KB"));
        assert!(!text.contains("ERRORS ENCOUNTERED"));
    }

    #[test]
    fn test_summary_lists_errors() {
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report(vec![
            "Binary or undecodable file skipped: /p/x.txt".to_string(),
        ]));
        assert!(text.contains("ERRORS ENCOUNTERED"));
        assert!(text.contains("Binary or undecodable file skipped: /p/x.txt"));
    }
}
