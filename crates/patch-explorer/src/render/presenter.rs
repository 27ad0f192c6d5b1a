//! Patch presenter producing the text handed to the host view.

use crate::highlight::ansi::paint;
use crate::highlight::{
    extract_filename_from_header, DiffBackground, HighlightAssets, Palette, SyntaxHighlighter,
};
use crate::model::{LineKind, Patch};
use crate::state::{SelectionMode, SelectionRange};
use ratatui::style::{Modifier, Style};
use std::collections::HashSet;

/// Options for a styled render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rows included in a custom patch being built.
    pub included: HashSet<usize>,
    /// Selected rows; `None` hides the indicator on every row.
    pub selection: Option<SelectionRange>,
    /// Line mode leaves the selection cue to the host's full-row highlight.
    pub mode: SelectionMode,
    /// Width of the host view. Informational only: rows are not padded,
    /// since the width does not reliably match the host's wrapping.
    pub view_width: usize,
}

/// Format the whole patch as plain text, suitable for `git apply`.
///
/// Every row (header, hunk headers and body) followed by a newline, without
/// any styling. Empty if the patch contains no changes.
pub fn format_plain(patch: &Patch) -> String {
    if !patch.contains_changes() {
        return String::new();
    }

    patch
        .rows()
        .iter()
        .map(|row| format!("{}\n", row.content))
        .collect()
}

/// Format rows `start..=end` as plain text.
///
/// Used to turn a selection into a patch fragment. A range outside the patch
/// yields an empty string.
pub fn format_range_plain(patch: &Patch, start: usize, end: usize) -> String {
    let rows = patch.rows();
    rows.get(start..=end)
        .unwrap_or_default()
        .iter()
        .map(|row| format!("{}\n", row.content))
        .collect()
}

/// Format the patch for a view: colored, syntax highlighted, with the
/// selection indicator in the margin.
///
/// The file name for highlighting is recovered from the patch header; when
/// none is found lines keep their diff coloring without syntax colors.
pub fn format_view(patch: &Patch, opts: &RenderOptions, assets: &HighlightAssets) -> String {
    let highlighter = extract_filename_from_header(patch.header())
        .map(|filename| assets.highlighter_for(&filename));

    PatchPresenter {
        patch,
        opts,
        highlighter,
        palette: assets.palette(),
    }
    .format()
}

struct PatchPresenter<'a> {
    patch: &'a Patch,
    opts: &'a RenderOptions,
    highlighter: Option<SyntaxHighlighter<'a>>,
    palette: &'a Palette,
}

impl PatchPresenter<'_> {
    fn format(&self) -> String {
        // No additions or deletions means the patch is effectively empty.
        if !self.patch.contains_changes() {
            return String::new();
        }

        let mut buf = String::new();
        let mut row = 0;

        let header_style = Style::default()
            .fg(self.palette.default_foreground)
            .add_modifier(Modifier::BOLD);
        for line in self.patch.header() {
            // Header lines are not part of the selectable patch body.
            self.append_row(&mut buf, row, false, &paint(header_style, line));
            row += 1;
        }

        for hunk in self.patch.hunks() {
            let marker = paint(Style::default().fg(self.palette.accent), &hunk.header_start);
            let context = self.format_line(
                &hunk.header_context,
                self.line_style(LineKind::Context),
                false,
                LineKind::Context,
            );
            self.append_row(&mut buf, row, true, &(marker + &context));
            row += 1;

            for line in &hunk.body_lines {
                let included = line.is_change() && self.opts.included.contains(&row);
                let text =
                    self.format_line(&line.content, self.line_style(line.kind), included, line.kind);
                self.append_row(&mut buf, row, true, &text);
                row += 1;
            }
        }

        buf
    }

    fn append_row(&self, buf: &mut String, row: usize, selectable: bool, text: &str) {
        buf.push_str(&self.selection_indicator(row, selectable));
        buf.push_str(text);
        buf.push('\n');
    }

    /// Margin indicator for hunk/range mode.
    ///
    /// Line mode gets nothing because the host highlights the full row.
    /// Unselected rows get a space so columns stay aligned.
    fn selection_indicator(&self, row: usize, selectable: bool) -> String {
        if self.opts.mode == SelectionMode::Line {
            return String::new();
        }

        let selected = selectable && self.opts.selection.is_some_and(|s| s.contains(row));
        if selected {
            paint(
                Style::default().fg(self.palette.accent),
                &self.palette.indicator.to_string(),
            )
        } else {
            " ".to_string()
        }
    }

    fn line_style(&self, kind: LineKind) -> Style {
        let fg = match kind {
            LineKind::Addition => self.palette.addition_foreground,
            LineKind::Deletion => self.palette.deletion_foreground,
            LineKind::Context => self.palette.default_foreground,
        };
        Style::default().fg(fg)
    }

    /// Style the diff marker, then the code after it.
    fn format_line(&self, text: &str, text_style: Style, included: bool, kind: LineKind) -> String {
        let marker_style = if included {
            text_style.bg(self.palette.included_background)
        } else {
            text_style
        };

        let Some((split, _)) = text.char_indices().nth(1) else {
            return paint(marker_style, text);
        };
        let (marker, code) = text.split_at(split);

        let bg = match kind {
            LineKind::Addition => DiffBackground::Addition,
            LineKind::Deletion => DiffBackground::Deletion,
            LineKind::Context => DiffBackground::None,
        };

        let code = match &self.highlighter {
            Some(highlighter) => highlighter.highlight_line_with_background(code, bg),
            None => {
                let style = match self.palette.background(bg) {
                    Some(color) => text_style.bg(color),
                    None => text_style,
                };
                paint(style, code)
            }
        };

        paint(marker_style, marker) + &code
    }
}
