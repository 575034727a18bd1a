use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use studyhub_sheets::validation::{ValidationReport, Validator};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

const RULE_WIDTH: usize = 50;

/// Returns whether the workbook passed; the caller maps `false` to exit 1.
pub fn validate_command(file: Option<&Path>, format: ReportFormat) -> Result<bool> {
    let Some(file) = file else {
        anyhow::bail!("Please provide a file path to validate");
    };

    if let ReportFormat::Text = format {
        println!("Validating: {}", file.display());
    }

    let report = match Validator::new().validate_file(file) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Could not read workbook {}", file.display());
        }
    };

    match format {
        ReportFormat::Text => print_report(&report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report.to_json())?),
    }

    Ok(report.is_valid())
}

fn print_report(report: &ValidationReport) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{rule}");

    if !report.errors.is_empty() {
        println!("{}", "❌ ERRORS:".red().bold());
        for error in &report.errors {
            println!("  • {error}");
        }
    }

    if !report.warnings.is_empty() {
        println!("{}", "⚠️  WARNINGS:".yellow().bold());
        for warning in &report.warnings {
            println!("  • {warning}");
        }
    }

    if report.is_clean() {
        println!("{}", "✅ Validation passed! No issues found.".green());
    } else if report.is_valid() {
        println!("{}", "✅ Validation passed with warnings.".green());
    } else {
        println!(
            "{}",
            "❌ Validation failed. Please fix errors before using.".red()
        );
    }

    println!("{rule}");
}
