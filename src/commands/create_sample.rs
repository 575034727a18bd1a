use anyhow::Result;
use std::path::PathBuf;
use studyhub_sheets::sample::{DEFAULT_SAMPLE_PATH, create_sample};

pub fn create_sample_command(output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH));
    println!("Creating sample Excel file: {}", output.display());

    let workbook = create_sample(&output)?;

    println!("✅ Sample Excel file created: {}", output.display());
    println!("   Sheets created: {}", workbook.sheet_names().join(", "));
    Ok(())
}
