//! Rendering a patch to plain or styled text.

mod presenter;

pub use presenter::{format_plain, format_range_plain, format_view, RenderOptions};
