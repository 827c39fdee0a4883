//! `run`, `shell` and `ops` commands

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tackboard::dispatch::execute_value;
use tackboard::{schema, OperationResult, TackboardContext, TackboardOperationProcessor};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::config::Settings;
use crate::output::{catalog_table, write_json_line, write_results};

/// Read a batch file; YAML by extension, otherwise JSON with YAML fallback
pub fn read_batch(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if yaml {
        return serde_yaml_ng::from_str(&text)
            .with_context(|| format!("invalid YAML in {}", path.display()));
    }

    serde_json::from_str(&text).or_else(|json_err| {
        serde_yaml_ng::from_str(&text)
            .map_err(|_| json_err)
            .with_context(|| format!("invalid JSON in {}", path.display()))
    })
}

/// Execute a batch in order, optionally stopping at the first failure
pub async fn run_batch(
    processor: &TackboardOperationProcessor,
    ctx: &TackboardContext,
    input: Value,
    fail_fast: bool,
) -> Vec<OperationResult> {
    let items = match input {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut results = Vec::with_capacity(items.len());
    for item in items {
        let result = execute_value(processor, ctx, item).await;
        let failed = !result.ok;
        results.push(result);
        if failed && fail_fast {
            info!(completed = results.len(), "stopping at first failure");
            break;
        }
    }
    results
}

/// `tackboard run`: returns the process exit code
pub async fn run_file<W: Write>(
    settings: &Settings,
    file: &Path,
    fail_fast: bool,
    out: &mut W,
) -> Result<i32> {
    let input = read_batch(file)?;
    let ctx = settings.context();
    let results = run_batch(&settings.processor(), &ctx, input, fail_fast).await;

    write_results(out, &results, settings.output)?;

    let failures = results.iter().filter(|r| !r.ok).count();
    debug!(total = results.len(), failures, "batch finished");
    Ok(if failures == 0 { 0 } else { 1 })
}

/// `tackboard shell`: one JSON operation per line in, one JSON result per line out
pub async fn run_shell<R, W>(settings: &Settings, input: R, out: &mut W) -> Result<i32>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let ctx = settings.context();
    let processor = settings.processor();
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<Value>(line) {
            Ok(value) => execute_value(&processor, &ctx, value).await,
            Err(err) => OperationResult::failure(None, format!("invalid JSON: {}", err), 0),
        };
        write_json_line(out, &result)?;
        out.flush()?;
    }
    Ok(0)
}

/// `tackboard ops`
pub fn run_ops<W: Write>(json: bool, out: &mut W) -> Result<i32> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &schema::catalog_json())?;
        out.write_all(b"\n")?;
    } else {
        writeln!(out, "{}", catalog_table(&schema::operation_catalog()))?;
    }
    Ok(0)
}
