//! Conversion report generation

use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::convert::SkippedEntry;
use crate::pack::{BatchOutcome, FileKind, RecordStatus};

/// List the files the scan found convertible, before asking to proceed.
pub fn display_convertible_files(paths: &[&str]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Convertible Files").add_attribute(Attribute::Bold)
    ]);
    for path in paths {
        table.add_row(vec![Cell::new(path).fg(Color::Cyan)]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Per-file processing report plus the skipped-override listing.
pub fn display_file_report(outcome: &BatchOutcome) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("FILE PROCESSING REPORT").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("File Name").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Status").add_attribute(Attribute::Bold),
    ]);

    for record in &outcome.records {
        let kind = match record.kind {
            FileKind::Json => "JSON",
            FileKind::Other => "Other",
        };
        let (status, color) = match record.status {
            RecordStatus::Converted => ("Converted", Color::Green),
            RecordStatus::Copied => ("Copied", Color::Blue),
            RecordStatus::Failed => ("Failed", Color::Red),
        };
        table.add_row(vec![
            Cell::new(&record.path).fg(Color::Cyan),
            Cell::new(kind),
            Cell::new(status).fg(color),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }

    display_failures(outcome);
}

fn display_failures(outcome: &BatchOutcome) {
    let failures: Vec<_> = outcome
        .records
        .iter()
        .filter(|record| record.status == RecordStatus::Failed)
        .collect();

    if !failures.is_empty() {
        println!();
        println!(
            "      {} {}:",
            style("Failed Files").red(),
            style(format!("({})", failures.len())).dim()
        );
        for record in failures {
            let reason = record.detail.as_deref().unwrap_or("unknown error");
            println!(
                "        {} {} {}",
                style("•").dim(),
                record.path,
                style(reason).dim()
            );
        }
    }

    if !outcome.skipped_entries.is_empty() {
        println!();
        println!(
            "      {} {}:",
            style("Skipped Overrides").yellow(),
            style(format!("({})", outcome.skipped_entries.len())).dim()
        );
        for (source, SkippedEntry { label, error }) in &outcome.skipped_entries {
            println!(
                "        {} {} ({}) {}",
                style("•").dim(),
                source,
                label,
                style(error.to_string()).dim()
            );
        }
    }
}

/// Summary of one conversion run
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub total_files: usize,
    pub converted: usize,
    pub copied: usize,
    pub failed: usize,
    pub skipped_entries: usize,
    pub output_documents: usize,
    pub output: String,
}

impl ConversionSummary {
    pub fn from_outcome(outcome: &BatchOutcome, output: &Path) -> Self {
        ConversionSummary {
            total_files: outcome.records.len(),
            converted: outcome.converted(),
            copied: outcome.copied(),
            failed: outcome.failed(),
            skipped_entries: outcome.skipped_entries.len(),
            output_documents: outcome.outputs.len(),
            output: output.display().to_string(),
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📦").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Input Files"),
            Cell::new(self.total_files),
        ]);

        table.add_row(vec![
            Cell::new("🔁 Converted"),
            Cell::new(self.converted)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📄 Copied"), Cell::new(self.copied)]);

        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(self.failed).fg(if self.failed == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("⏭️  Skipped Overrides"),
            Cell::new(self.skipped_entries).fg(if self.skipped_entries == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("💾 Output Documents"),
            Cell::new(self.output_documents),
        ]);

        table.add_row(vec![
            Cell::new("📦 Output"),
            Cell::new(&self.output).fg(Color::Cyan),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
