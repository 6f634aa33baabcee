//! Client-side data table: fetch, search, status filter and pagination
//! over an arbitrary record type.

pub mod controller;
pub mod field_path;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod source;

pub use controller::{FetchOutcome, FetchTicket, TableConfig, TableController, TableSnapshot};
pub use field_path::FieldPath;
pub use record::TableRecord;
pub use source::{source_fn, FnSource, RecordSource, StaticSource};
