//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processor::BatchSummary;
use fnol_domain::{format_currency, ClaimRecord, Decimal, ExtractedFieldTree, Route};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a claim record.
    pub fn format_record(&self, record: &ClaimRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.recommended_route.to_string()),
        }
    }

    /// Format a claim record as a decision header plus a field table.
    fn format_record_table(&self, record: &ClaimRecord) -> String {
        let missing = if record.missing_fields.is_empty() {
            "none".to_string()
        } else {
            record
                .missing_fields
                .iter()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut lines = vec![
            format!("Route:       {}", self.route_label(record.recommended_route)),
            format!("Confidence:  {:.2}", record.confidence),
            format!("Reasoning:   {}", record.reasoning),
            format!("Missing:     {}", missing),
            format!(
                "Flags:       {}",
                record.flags.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
            ),
        ];

        lines.push(self.fields_table(&record.extracted_fields));
        lines.join("\n")
    }

    /// Render the extracted fields as a two-column table.
    fn fields_table(&self, tree: &ExtractedFieldTree) -> String {
        let policy = tree.policy_information.clone().unwrap_or_default();
        let incident = tree.incident_information.clone().unwrap_or_default();
        let parties = tree.involved_parties.clone().unwrap_or_default();
        let contact = parties.contact_details.clone().unwrap_or_default();
        let asset = tree.asset_details.clone().unwrap_or_default();
        let other = tree.other_mandatory_fields.clone().unwrap_or_default();

        let effective = policy.effective_dates.map(|dates| {
            format!(
                "{} to {}",
                dates.start.as_deref().unwrap_or("?"),
                dates.end.as_deref().unwrap_or("?")
            )
        });

        let rows: Vec<(&str, String)> = vec![
            ("Policy Number", text(policy.policy_number)),
            ("Policyholder", text(policy.policyholder_name)),
            ("Effective Dates", text(effective)),
            ("Incident Date", text(incident.date)),
            ("Incident Time", text(incident.time)),
            ("Location", text(incident.location)),
            ("Description", text(incident.description)),
            ("Claimant", text(parties.claimant)),
            ("Third Parties", list(parties.third_parties)),
            ("Phone", text(contact.phone)),
            ("Email", text(contact.email)),
            ("Asset Type", text(asset.asset_type)),
            ("Asset ID", text(asset.asset_id)),
            ("Estimated Damage", amount(asset.estimated_damage)),
            ("Claim Type", text(other.claim_type)),
            ("Attachments", list(other.attachments)),
            ("Initial Estimate", amount(other.initial_estimate)),
        ];

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in rows {
            builder.push_record([field.to_string(), value]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a batch summary.
    pub fn format_batch(&self, summary: &BatchSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(self.format_batch_table(summary)),
            OutputFormat::Quiet => Ok(summary
                .processed
                .iter()
                .map(|entry| format!("{}\t{}", entry.source.display(), entry.route))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_batch_table(&self, summary: &BatchSummary) -> String {
        if summary.total() == 0 {
            return self.warning("No documents found.");
        }

        let mut lines = Vec::new();

        if !summary.processed.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Document", "Route", "Result"]);
            for entry in &summary.processed {
                builder.push_record([
                    file_name(&entry.source),
                    self.route_label(entry.route),
                    entry.output.display().to_string(),
                ]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(table.to_string());
        }

        for failure in &summary.failed {
            lines.push(self.error(&format!("{}: {}", file_name(&failure.source), failure.error)));
        }

        let totals = format!(
            "Processed {} of {} document(s)",
            summary.processed.len(),
            summary.total()
        );
        if summary.failed.is_empty() {
            lines.push(self.success(&totals));
        } else {
            lines.push(self.warning(&format!("{}, {} failed", totals, summary.failed.len())));
        }

        lines.join("\n")
    }

    /// Route name colored by queue.
    pub fn route_label(&self, route: Route) -> String {
        let color = match route {
            Route::ManualReview => "yellow",
            Route::InvestigationFlag => "red",
            Route::SpecialistQueue => "magenta",
            Route::FastTrack => "green",
            Route::StandardProcessing => "cyan",
        };
        self.colorize(route.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

fn list(values: Option<Vec<String>>) -> String {
    values.map(|v| v.join(", ")).unwrap_or_else(|| "-".to_string())
}

fn amount(value: Option<Decimal>) -> String {
    value.map(format_currency).unwrap_or_else(|| "-".to_string())
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{BatchEntry, BatchFailure};
    use fnol_domain::{
        AssetDetails, MandatoryField, PolicyInformation, RoutingFlag, RoutingResult,
    };
    use std::path::PathBuf;

    fn create_test_record() -> ClaimRecord {
        let tree = ExtractedFieldTree {
            policy_information: Some(PolicyInformation {
                policy_number: Some("POL-2024-001".to_string()),
                ..Default::default()
            }),
            asset_details: Some(AssetDetails {
                estimated_damage: Some(Decimal::new(1_500_000, 2)),
                ..Default::default()
            }),
            ..Default::default()
        };
        let routing = RoutingResult::new(
            Route::ManualReview,
            "Missing mandatory fields: claimant. Claim requires manual review to complete information.",
            1.0,
            RoutingFlag::MissingFields,
        );
        ClaimRecord::new(tree, vec![MandatoryField::Claimant], routing)
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert!(output.contains("\"recommendedRoute\": \"Manual Review\""));
        assert!(output.contains("\"policyNumber\": \"POL-2024-001\""));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert_eq!(output, "Manual Review");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert!(output.contains("Route:       Manual Review"));
        assert!(output.contains("Missing:     claimant"));
        assert!(output.contains("POL-2024-001"));
        assert!(output.contains("$15,000.00"));
        assert!(output.contains("Estimated Damage"));
    }

    #[test]
    fn test_batch_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let summary = BatchSummary {
            processed: vec![BatchEntry {
                source: PathBuf::from("docs/claim_a.txt"),
                output: PathBuf::from("output/claim_a_result.json"),
                route: Route::FastTrack,
            }],
            failed: vec![BatchFailure {
                source: PathBuf::from("docs/broken.txt"),
                error: "bad bytes".to_string(),
            }],
        };

        let output = formatter.format_batch(&summary).unwrap();
        assert!(output.contains("claim_a.txt"));
        assert!(output.contains("Fast-track"));
        assert!(output.contains("✗ broken.txt: bad bytes"));
        assert!(output.contains("Processed 1 of 2 document(s), 1 failed"));
    }

    #[test]
    fn test_empty_batch() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&BatchSummary::default()).unwrap();
        assert!(output.contains("No documents found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.route_label(Route::FastTrack), "Fast-track");
    }
}
