//! Trait for the view that displays the explorer's output.

/// The terminal view hosting a patch explorer.
///
/// Implement this trait to connect the explorer to your window manager. The
/// explorer never draws anything itself: it reads the view's geometry, then
/// pushes the rendered content and the new scroll/cursor coordinates back.
/// Every setter is idempotent.
///
/// # Example
///
/// ```ignore
/// struct PaneView {
///     pane: MyPane,
/// }
///
/// impl HostView for PaneView {
///     fn inner_height(&self) -> usize {
///         self.pane.height()
///     }
///
///     fn set_content(&mut self, content: String) {
///         self.pane.set_text(content);
///     }
///
///     // ... other methods
/// }
/// ```
pub trait HostView: Send {
    /// Number of rows visible in the view.
    fn inner_height(&self) -> usize;

    /// Number of columns visible in the view.
    fn inner_width(&self) -> usize;

    /// Current scroll origin (first visible row).
    fn origin_y(&self) -> usize;

    /// Number of rows the current content occupies.
    fn view_lines_height(&self) -> usize;

    /// Replace the view's content.
    fn set_content(&mut self, content: String);

    /// Scroll so that `origin` is the first visible row.
    fn set_origin_y(&mut self, origin: usize);

    /// Place the cursor on a row relative to the origin.
    fn set_cursor_y(&mut self, row: usize);

    /// Start row of the view's range selection.
    fn set_range_select_start(&mut self, row: usize);

    /// Whether the view should draw its full-row cursor highlight.
    fn set_highlight(&mut self, highlight: bool);

    /// Ask the host to redraw. Hosts that redraw every frame can ignore this.
    fn request_redraw(&mut self) {}
}
