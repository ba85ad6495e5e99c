use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use gutensearch_core::{load_book_ids, Config, Downloader, FetchError};

pub fn run(ids_file: Option<&Path>, store: Option<&Path>) -> Result<()> {
    let config = Config::default();
    let ids_path = ids_file.unwrap_or(&config.book_ids_path);
    let store_dir = store.unwrap_or(&config.store_dir);

    let book_ids = load_book_ids(ids_path).with_context(|| {
        format!(
            "no book ids found at {}; create it with one id per line, \
             or seed it with `guten authors <name> --ids`",
            ids_path.display()
        )
    })?;
    if book_ids.is_empty() {
        anyhow::bail!(
            "{} contains no book ids; add one id per line",
            ids_path.display()
        );
    }

    info!("found {} book id(s) to process", book_ids.len());
    fs::create_dir_all(store_dir)
        .with_context(|| format!("failed to create store directory {}", store_dir.display()))?;

    let downloader = Downloader::new(&config).context("failed to build downloader")?;
    for book_id in &book_ids {
        check(downloader.download_text(book_id, store_dir), book_id)?;
        check(downloader.download_metadata(book_id, store_dir), book_id)?;
    }

    info!("done");
    Ok(())
}

fn check(result: Result<bool, FetchError>, book_id: &str) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(FetchError::Unreachable(err)) => {
            anyhow::bail!(
                "cannot reach the book archive ({err}); \
                 check your network connection and retry"
            );
        }
        Err(err) => Err(err).with_context(|| format!("downloading book {book_id} failed")),
    }
}
