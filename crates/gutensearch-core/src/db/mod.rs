mod schema;
mod store;

pub use store::{IndexRecord, IndexRun, ParagraphRow, ParagraphStore, StoreError, StoreResult};
