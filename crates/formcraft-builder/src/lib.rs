//! # formcraft-builder
//!
//! The interactive form-design core: an immutable builder state driven by a
//! closed action set, the drag/drop controller translating pointer gestures
//! into those actions, and the session objects orchestrating persistence on
//! the designer and respondent sides.
//!
//! ## Modules
//!
//! - [`state`] - `BuilderState` and the `BuilderAction` variants
//! - [`reducer`] - The pure `(state, action) -> state` transition function
//! - [`dnd`] - `DragController` over the palette and canvas surfaces
//! - [`session`] - `DesignerSession`: one live editing interaction
//! - [`respondent`] - `FillSession`: one respondent filling a form
//! - [`testing`] - In-memory gateway double for tests

pub mod dnd;
pub mod reducer;
pub mod respondent;
pub mod session;
pub mod state;
pub mod testing;

// Re-export the most commonly used types at the crate root.
pub use dnd::{move_item, DragController};
pub use reducer::reduce;
pub use respondent::FillSession;
pub use session::DesignerSession;
pub use state::{BuilderAction, BuilderState};
