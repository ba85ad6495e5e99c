use std::path::Path;

use anyhow::{Context, Result};

use gutensearch_core::{
    format_result_block, load_query_file, parse_query_line, Config, ParagraphStore, ParsedQuery,
};

pub fn run(query_file: &Path, db: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let db_path = db.unwrap_or(&config.db_path);

    if !query_file.exists() {
        anyhow::bail!("query file not found: {}", query_file.display());
    }
    if !db_path.exists() {
        anyhow::bail!(
            "database not found: {}; run `guten index` first to build it",
            db_path.display()
        );
    }

    let lines = load_query_file(query_file)
        .with_context(|| format!("failed to read query file {}", query_file.display()))?;
    if lines.is_empty() {
        return Ok(());
    }

    // Parse everything up front so a syntax error aborts the batch before
    // any query runs.
    let mut parsed: Vec<(String, ParsedQuery)> = Vec::with_capacity(lines.len());
    for (number, line) in lines.iter().enumerate() {
        let query = parse_query_line(line).with_context(|| {
            format!("error on line {}: {line}", number + 1)
        })?;
        parsed.push((line.clone(), query));
    }

    let store = ParagraphStore::open(db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    let mut blocks = Vec::with_capacity(parsed.len());
    for (line, query) in &parsed {
        let rows = store
            .search(&query.terms, query.op, config.max_results)
            .with_context(|| format!("query failed: {line}"))?;
        let display = line.split('#').next().unwrap_or("").trim();
        blocks.push(format_result_block(&rows, display, &query.comment));
    }

    println!("{}", blocks.join("\n\n"));
    Ok(())
}
