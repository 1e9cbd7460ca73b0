pub mod error;
pub mod format;
pub mod loader;
pub mod source;
pub mod stats;

pub use error::{LoadError, Result};
pub use format::{format_currency, format_date, or_na, scalar_or_na, AsAmount};
pub use loader::DataLoader;
pub use source::{DatasetSource, FileSource, HttpSource, MemorySource};
pub use stats::RoadStats;
