use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use gutensearch_core::{index_books, Config, ParagraphStore};

pub fn run(store: Option<&Path>, db: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let store_dir = store.unwrap_or(&config.store_dir);
    let db_path = db.unwrap_or(&config.db_path);

    if !store_dir.exists() {
        anyhow::bail!(
            "store directory not found: {}; run `guten fetch` first to download books",
            store_dir.display()
        );
    }

    info!("creating database at {}", db_path.display());
    let mut store = ParagraphStore::create(db_path)
        .with_context(|| format!("failed to create database at {}", db_path.display()))?;

    let indexed = index_books(store_dir, &mut store, &config).context("indexing failed")?;
    eprintln!("Indexed {indexed} paragraph(s).");
    Ok(())
}
