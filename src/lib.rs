//! Keyword search and documentation lookup for a catalog of UI components and
//! page templates, served over the Model Context Protocol.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use catalog::{CatalogEntry, CatalogIndex, EntryKind, ScoredEntry, SearchScope};
pub use config::Config;
pub use error::CatalogError;
pub use server::CatalogServer;
pub use state::CatalogState;
