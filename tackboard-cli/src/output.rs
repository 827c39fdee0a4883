//! Rendering of results and the operation catalog

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use tackboard::schema::OperationInfo;
use tackboard::OperationResult;

/// How `run` prints its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// A single YAML sequence
    Yaml,
}

/// Write results in `format`
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[OperationResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            for result in results {
                write_json_line(out, result)?;
            }
        }
        OutputFormat::Yaml => {
            out.write_all(serde_yaml_ng::to_string(results)?.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Write one result as a single line of JSON
pub fn write_json_line<W: Write>(out: &mut W, result: &OperationResult) -> Result<()> {
    serde_json::to_writer(&mut *out, result)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Operation catalog as a terminal table
pub fn catalog_table(operations: &[OperationInfo]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Operation", "Parameters", "Description"]);

    for op in operations {
        let params: Vec<String> = op
            .params
            .iter()
            .map(|p| {
                if p.required {
                    format!("{}*", p.name)
                } else {
                    p.name.to_string()
                }
            })
            .collect();
        table.add_row(vec![
            op.op.clone(),
            params.join(", "),
            truncate_str(op.description, 60),
        ]);
    }
    table
}

/// Truncate to `max` characters, appending "..." when cut
fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
