//! # formcraft-core
//!
//! Foundation types for the formcraft workspace: error types, service
//! settings, and logging setup. This crate has no internal dependencies
//! and is shared by every other formcraft crate.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Service settings with TOML loading
//! - [`logging`] - Tracing-based logging setup

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{FormcraftError, FormcraftResult, ValidationErrors};
pub use settings::Settings;
