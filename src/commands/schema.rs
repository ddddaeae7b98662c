use schemars::schema_for;

use crate::data::DaySummary;

/// Print the JSON Schema for the day-summary data file to stdout.
pub fn run_schema() -> anyhow::Result<()> {
    let schema = schema_for!(DaySummary);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
