//! Data models for patch representation.

mod patch;

pub use patch::{Hunk, HunkSpan, LineKind, Patch, PatchLine, Row, RowKind};
