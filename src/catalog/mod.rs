//! The component and template catalog: entry types, the immutable index and
//! the JSON loader that produces it.

pub mod entry;
pub mod index;
pub mod loader;

pub use entry::{CatalogEntry, EntryKind, ScoredEntry};
pub use index::{CatalogIndex, SearchScope};
pub use loader::{load_index, parse_catalog};
