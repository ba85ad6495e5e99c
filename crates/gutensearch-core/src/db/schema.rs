/// Full rebuild: every indexing run drops the paragraph table and starts
/// from a clean slate. An incremental variant would need a durable ledger
/// of already-indexed books keyed by id and content hash.
pub const PARAGRAPHS_SCHEMA: &str = "
DROP TABLE IF EXISTS paragraphs;

CREATE VIRTUAL TABLE paragraphs USING fts5(
    book_id,
    paragraph_num,
    author,
    title,
    content,
    tokenize='porter unicode61'
);
";
