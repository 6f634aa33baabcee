//! Domain logic for the Mecarvi Prints admin back-office.
//!
//! Everything here is UI-framework agnostic: the table controller that
//! backs every list screen, the typed admin resources it runs over, the
//! product wizard, and the session guard used by the app shell.

pub mod config;
pub mod error;
pub mod form_mode;
pub mod product_wizard;
pub mod records;
pub mod session;
pub mod table;
pub mod wizard;

pub use config::AdminConfig;
pub use error::{ConfigError, FetchError, SessionError};
pub use form_mode::FormMode;
pub use records::AdminResource;
pub use table::{FieldPath, RecordSource, TableConfig, TableController, TableRecord, TableSnapshot};
