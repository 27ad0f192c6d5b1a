//! Selection state and viewport geometry for the patch explorer.

mod patch_state;
mod selection;
mod viewport;

pub use patch_state::{PatchState, SelectionError};
pub use selection::{Selection, SelectionMode, SelectionRange};
pub use viewport::calculate_origin;
