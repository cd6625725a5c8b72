//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against a tag store, writing results to the
//! given output.

pub mod config;
pub mod get;
pub mod tag;
pub mod types;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use get::execute as get;
pub use tag::execute as tag;
pub use types::execute as gettypes;
