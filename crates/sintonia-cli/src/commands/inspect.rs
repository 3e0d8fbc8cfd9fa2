use anyhow::Result;
use std::path::Path;

use sintonia_etl::inspect_catalog;

/// Report a catalog file's columns and numeric parse quality.
pub fn run_inspect(path: &Path) -> Result<()> {
    let report = inspect_catalog(path)?;

    println!("\n📄 {}\n", path.display());
    println!("  Rows: {}", report.rows);
    println!("  Columns: {}", report.headers.join(", "));

    println!("\n  Numeric parse quality:");
    for column in &report.columns {
        let note = if column.coerced > 0 { "  ⚠" } else { "" };
        println!(
            "    {:<20} parsed {:>6}   coerced to NaN {:>6}{}",
            column.name, column.parsed, column.coerced, note
        );
    }

    Ok(())
}
