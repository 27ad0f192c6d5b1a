//! # patch-explorer
//!
//! An interactive explorer for a single file's patch: line and hunk/range
//! selection, syntax-highlighted diff rendering for a terminal view, and
//! viewport scrolling that keeps the selection visible.
//!
//! ## Design Principles
//!
//! The crate never draws to a terminal itself. It renders ANSI-styled text and
//! pushes it, along with scroll and cursor coordinates, to a [`HostView`]
//! supplied by the application. Colors come from an injected [`Palette`].
//!
//! ## Action-Based Architecture
//!
//! The orchestrating application maps key events to [`ExplorerAction`]
//! variants and dispatches them to the explorer. All state changes and the
//! render that follows happen under one lock, so events may arrive from any
//! thread.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patch_explorer::{ExplorerAction, HighlightAssets, Palette, PatchExplorer};
//! use std::sync::Arc;
//!
//! let assets = Arc::new(HighlightAssets::new(Palette::default()));
//! let explorer = PatchExplorer::new(my_view, assets, || included_rows());
//!
//! explorer.load_patch(patch);
//! explorer.handle_focus();
//! explorer.handle_action(ExplorerAction::ToggleSelectMode)?;
//!
//! let fragment = explorer.selected_plain_patch();
//! ```

pub mod action;
pub mod explorer;
pub mod highlight;
pub mod model;
pub mod render;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use action::ExplorerAction;
pub use explorer::{FocusState, IncludedLines, PatchExplorer};
pub use highlight::{DiffBackground, HighlightAssets, Palette, SyntaxHighlighter};
pub use model::{Hunk, LineKind, Patch, PatchLine, RowKind};
pub use render::{format_plain, format_range_plain, format_view, RenderOptions};
pub use state::{PatchState, SelectionError, SelectionMode, SelectionRange};
pub use traits::HostView;
