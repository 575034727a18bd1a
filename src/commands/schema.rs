use anyhow::{Result, bail};
use colored::Colorize;
use serde_json::json;
use studyhub_sheets::schema::{Domain, SheetSchema, find_schema, schemas};

pub fn schema_command(sheet: Option<&str>, as_json: bool) -> Result<()> {
    if let Some(name) = sheet {
        let Some(schema) = find_schema(name) else {
            let names: Vec<&str> = schemas().iter().map(|s| s.name.as_str()).collect();
            bail!("Unknown sheet '{name}'. Sheets: {}", names.join(", "));
        };
        if as_json {
            println!("{}", serde_json::to_string_pretty(schema)?);
        } else {
            print_sheet_columns(schema);
        }
        return Ok(());
    }

    if as_json {
        let domains: serde_json::Map<String, serde_json::Value> = Domain::ALL
            .iter()
            .map(|domain| (domain.to_string(), json!(domain.values())))
            .collect();
        let document = json!({
            "sheets": schemas(),
            "domains": domains,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    let rule = "=".repeat(60);
    println!("\n{rule}");
    println!("{}", "STUDYHUB DATA SCHEMA".bold());
    println!("{rule}");

    for schema in schemas() {
        println!("\n📄 {}", schema.name.cyan().bold());
        println!("   Description: {}", schema.description);
        println!("   Columns: {}", schema.columns.join(", "));
        println!("   Required: {}", schema.required.join(", "));
    }

    println!("\n{}", "-".repeat(60));
    for domain in Domain::ALL {
        println!(
            "VALID {}: {}",
            domain.label().to_uppercase(),
            domain.values().join(", ")
        );
    }
    println!("{rule}");

    Ok(())
}

/// One line per column, marking required and enumerated columns
fn print_sheet_columns(schema: &SheetSchema) {
    println!("📄 {}", schema.name.cyan().bold());
    println!("   {}", schema.description);

    for column in &schema.columns {
        let mut notes = Vec::new();
        if schema.is_required(column) {
            notes.push("required".to_string());
        }
        if let Some(check) = schema.checks.iter().find(|check| &check.column == column) {
            notes.push(format!("valid {}", check.domain.label()));
        }

        if notes.is_empty() {
            println!("   - {column}");
        } else {
            println!("   - {column} ({})", notes.join(", "));
        }
    }
}
