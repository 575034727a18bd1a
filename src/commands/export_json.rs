use anyhow::Result;
use std::path::{Path, PathBuf};
use studyhub_sheets::export::{default_output_path, export_file};

pub fn export_json_command(file: Option<&Path>, output: Option<PathBuf>) -> Result<()> {
    let Some(file) = file else {
        anyhow::bail!("Please provide a file path to export");
    };
    let output = output.unwrap_or_else(|| default_output_path(file));

    println!("Exporting to JSON: {}", file.display());

    let data = match export_file(file, &output) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Export failed");
        }
    };

    for (sheet, records) in &data {
        println!("  {sheet}: {} records", records.len());
    }
    println!("✅ JSON exported: {}", output.display());
    Ok(())
}
