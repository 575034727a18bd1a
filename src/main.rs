use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{
    ReportFormat, create_sample_command, export_json_command, schema_command, validate_command,
};

#[derive(Parser)]
#[command(
    name = "studyhub",
    about = "Validate StudyHub content workbooks and export them to JSON",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a sample workbook with every sheet filled in
    CreateSample {
        /// Output workbook path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a workbook against the StudyHub schema
    Validate {
        /// Workbook to validate
        file: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Export every sheet of a workbook to JSON
    ExportJson {
        /// Workbook to export
        file: Option<PathBuf>,

        /// Output JSON path (defaults to the workbook path with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the workbook schema
    Schema {
        /// Show only this sheet, one column per line
        sheet: Option<String>,

        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
}

const QUICK_START: &str = "\
StudyHub data setup

Author content in a spreadsheet, validate it, export it to JSON.

Quick start:
  studyhub create-sample            # Create sample Excel file
  studyhub schema                   # Show data schema
  studyhub schema Study_Content     # Show one sheet's columns
  studyhub validate data.xlsx       # Check a workbook
  studyhub export-json data.xlsx    # Write data.json

Run `studyhub --help` for all options.";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::CreateSample { output }) => {
            create_sample_command(output)?;
        }
        Some(Commands::Validate { file, format }) => {
            if !validate_command(file.as_deref(), format)? {
                std::process::exit(1);
            }
        }
        Some(Commands::ExportJson { file, output }) => {
            export_json_command(file.as_deref(), output)?;
        }
        Some(Commands::Schema { sheet, json }) => {
            schema_command(sheet.as_deref(), json)?;
        }
        None => {
            println!("{QUICK_START}");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    // STUDYHUB_LOG takes precedence over -v flags
    let filter = EnvFilter::try_from_env("STUDYHUB_LOG").unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("studyhub_sheets=warn,studyhub=warn"),
        1 => EnvFilter::new("studyhub_sheets=info,studyhub=info"),
        _ => EnvFilter::new("studyhub_sheets=debug,studyhub=debug"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
