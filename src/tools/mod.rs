pub mod get_documentation;
pub mod list_entries;
pub mod reload_catalog;
pub mod search;

pub use get_documentation::*;
pub use list_entries::*;
pub use reload_catalog::*;
pub use search::*;
