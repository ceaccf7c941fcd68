//! # formcraft-store
//!
//! The JSON-file-backed record store for forms and their submissions. The
//! store is an explicit object with a defined lifecycle: opened once at
//! process start and passed by reference to request handlers, exposing the
//! same CRUD contract as the HTTP gateway without hidden global state.

mod gateway_impl;
pub mod store;

pub use store::{FormStore, StoredForm};
