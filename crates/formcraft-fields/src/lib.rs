//! # formcraft-fields
//!
//! The shared form-definition model: field kinds and entities, the field
//! type registry with its factory defaults, the submission-time validation
//! engine, and the persistence gateway contract. The builder, store, and
//! server crates all speak these types.
//!
//! ## Modules
//!
//! - [`model`] - `FieldKind`, `FormField`, `FormData`, `Submission` entities
//! - [`registry`] - Palette constants and the `create_field` factory
//! - [`validation`] - Pure per-field and full-form validation
//! - [`gateway`] - The `FormGateway` trait and its payload types

pub mod gateway;
pub mod model;
pub mod registry;
pub mod validation;

// Re-export the most commonly used types at the crate root.
pub use gateway::{FormDraft, FormGateway, SubmissionPayload};
pub use model::{
    FieldKind, FormData, FormField, FormSummary, Submission, SubmissionValueMap, ValidationRules,
};
pub use registry::{create_field, CANVAS_ID, PALETTE_PREFIX};
pub use validation::{validate_field, validate_form};
