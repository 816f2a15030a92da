//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use console::style;
use pokerep_ops::OperationResult;
use pokerep_types::{DeleteOutcome, Report};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self { json_output }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_human(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    /// Render for a terminal
    fn render_human(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::CategoryList(categories) => Self::render_category_list(categories),
            OperationResult::ReportList(reports) => Self::render_report_list(reports),
            OperationResult::Created(report) => Self::render_created(report),
            OperationResult::Deleted(outcome) => Self::render_delete_outcome(outcome),
            OperationResult::Artifact { url } => {
                println!("{url}");
            }
            OperationResult::Success(message) => {
                println!("{} {message}", style("✓").green());
            }
        }
        Ok(())
    }

    fn render_category_list(categories: &[String]) {
        for category in categories {
            println!("{category}");
        }
    }

    fn render_report_list(reports: &[Report]) {
        if reports.is_empty() {
            println!("No reports generated yet.");
            return;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("ID").add_attribute(Attribute::Bold),
                Cell::new("Type").add_attribute(Attribute::Bold),
                Cell::new("Quantity").add_attribute(Attribute::Bold),
                Cell::new("Artifact").add_attribute(Attribute::Bold),
            ]);

        for report in reports {
            table.add_row(vec![
                Cell::new(report.id.to_string()),
                Cell::new(&report.category),
                Cell::new(report.quantity.to_string()),
                Cell::new(&report.artifact_url),
            ]);
        }

        println!("{table}");
    }

    fn render_created(report: &Report) {
        println!(
            "{} Report {} created for type {} ({} Pokémon)",
            style("✓").green(),
            style(&report.id).bold(),
            report.category,
            report.quantity
        );
    }

    fn render_delete_outcome(outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted { id } => {
                println!("{} Report {id} deleted", style("✓").green());
            }
            DeleteOutcome::PartialFailure { id, message } => {
                println!(
                    "{} Report {id} removed, but blob deletion failed: {message}",
                    style("!").yellow()
                );
            }
            DeleteOutcome::MalformedResponse { id } => {
                println!(
                    "{} Could not confirm deletion of report {id}: unexpected backend response",
                    style("✗").red()
                );
            }
        }
    }
}
