//! Domain model types (pure).

pub mod config;
pub mod error;
pub mod handle;

pub use config::LogViewConfig;
pub use error::TailError;
pub use handle::LogFileHandle;

/// Ordered lines to display, one entry per logical line, in file order.
pub type LineBatch = Vec<String>;
