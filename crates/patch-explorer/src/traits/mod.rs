//! Extension traits for connecting the explorer to a host.

mod host_view;

pub use host_view::HostView;
