//! Dataset access: CSV tables, the dataset loader, and error types

pub mod error;
pub mod loader;
pub mod table;

pub use error::{DataError, DataResult};
pub use loader::DatasetLoader;
pub use table::Table;
