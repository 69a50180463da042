//! Command implementations.

pub mod batch;
pub mod config;
pub mod process;

pub use self::batch::execute_batch;
pub use self::config::execute_config;
pub use self::process::execute_process;
