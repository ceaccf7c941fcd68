//! # formcraft
//!
//! A drag-and-drop form builder core for Rust.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `formcraft` to get the whole system, or on individual
//! crates for finer-grained control.

/// Foundation types: errors, settings, logging.
pub use formcraft_core as core;

/// The shared field model: entities, registry, validation, gateway trait.
pub use formcraft_fields as fields;

/// Builder state machine, drag/drop controller, and sessions.
#[cfg(feature = "builder")]
pub use formcraft_builder as builder;

/// JSON-file-backed record store.
#[cfg(feature = "store")]
pub use formcraft_store as store;

/// HTTP persistence gateway service.
#[cfg(feature = "server")]
pub use formcraft_server as server;
