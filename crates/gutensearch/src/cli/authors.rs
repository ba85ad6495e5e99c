use anyhow::{Context, Result};

use gutensearch_core::catalog::{format_book_line, format_id_line};
use gutensearch_core::{CatalogClient, CatalogError, Config};

pub fn run(author: &str, ids: bool) -> Result<()> {
    let config = Config::default();
    let client = CatalogClient::new(&config).context("failed to build catalog client")?;

    let books = match client.search_by_author(author) {
        Ok(books) => books,
        Err(CatalogError::Unreachable(err)) => {
            anyhow::bail!(
                "cannot reach the book catalog ({err}); \
                 check your network connection and retry"
            );
        }
        Err(err) => return Err(err).context("catalog search failed"),
    };

    for book in &books {
        if ids {
            println!("{}", format_id_line(book));
        } else {
            println!("{}", format_book_line(book));
        }
    }

    Ok(())
}
