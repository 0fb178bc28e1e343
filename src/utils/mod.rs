pub mod assertion;
pub mod formatting;
pub mod config;

// Re-exports
pub use assertion::*;
pub use config::*;
