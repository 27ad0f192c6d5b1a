//! Patch data structures representing one file's parsed diff.

use std::borrow::Cow;
use std::ops::RangeInclusive;

/// A parsed diff for a single file.
///
/// Built once per diff snapshot by an upstream parser and never mutated
/// afterwards. A new snapshot replaces the whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    header: Vec<String>,
    hunks: Vec<Hunk>,
}

impl Patch {
    /// Create a patch from its header lines and hunks (in source order).
    pub fn new(header: Vec<String>, hunks: Vec<Hunk>) -> Self {
        Self { header, hunks }
    }

    /// Raw header lines (`diff --git`, `index`, `---`, `+++`, ...).
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Hunks in the order they appear in the diff.
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    /// Whether the patch has at least one addition or deletion.
    ///
    /// A patch made only of context lines has nothing to show.
    pub fn contains_changes(&self) -> bool {
        self.hunks
            .iter()
            .flat_map(|h| &h.body_lines)
            .any(|l| l.kind.is_change())
    }

    /// Total number of rows in the flattened sequence.
    pub fn line_count(&self) -> usize {
        self.header.len()
            + self
                .hunks
                .iter()
                .map(|h| h.body_lines.len() + 1) // +1 for hunk header
                .sum::<usize>()
    }

    /// Flatten the patch into rows: header lines, then each hunk's header
    /// row followed by its body lines.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::with_capacity(self.line_count());

        for line in &self.header {
            rows.push(Row {
                index: rows.len(),
                kind: RowKind::Header,
                content: Cow::Borrowed(line.as_str()),
            });
        }

        for hunk in &self.hunks {
            rows.push(Row {
                index: rows.len(),
                kind: RowKind::HunkHeader,
                content: Cow::Owned(hunk.header_row()),
            });
            for line in &hunk.body_lines {
                rows.push(Row {
                    index: rows.len(),
                    kind: RowKind::Body(line.kind),
                    content: Cow::Borrowed(line.content.as_str()),
                });
            }
        }

        rows
    }

    /// Row kinds of the flattened sequence, indexed by row.
    pub fn row_kinds(&self) -> Vec<RowKind> {
        let mut kinds = vec![RowKind::Header; self.header.len()];
        for hunk in &self.hunks {
            kinds.push(RowKind::HunkHeader);
            kinds.extend(hunk.body_lines.iter().map(|l| RowKind::Body(l.kind)));
        }
        kinds
    }

    /// Row positions of every hunk.
    pub fn hunk_spans(&self) -> Vec<HunkSpan> {
        let mut spans = Vec::with_capacity(self.hunks.len());
        let mut row = self.header.len();

        for hunk in &self.hunks {
            let header_row = row;
            row += 1 + hunk.body_lines.len();
            spans.push(HunkSpan {
                header_row,
                end_row: row,
            });
        }

        spans
    }
}

/// A contiguous block of changes sharing one `@@ ... @@` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The location marker, e.g. `@@ -10,5 +10,7 @@`.
    pub header_start: String,
    /// Text following the marker on the same line (usually a function name).
    pub header_context: String,
    /// Lines in this hunk.
    pub body_lines: Vec<PatchLine>,
}

impl Hunk {
    /// Create a hunk from its marker, trailing context and body.
    pub fn new(
        header_start: impl Into<String>,
        header_context: impl Into<String>,
        body_lines: Vec<PatchLine>,
    ) -> Self {
        Self {
            header_start: header_start.into(),
            header_context: header_context.into(),
            body_lines,
        }
    }

    /// The full header row as it appears in the diff.
    pub fn header_row(&self) -> String {
        format!("{}{}", self.header_start, self.header_context)
    }
}

/// A single body line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLine {
    /// Raw text including the leading `+`, `-` or space.
    pub content: String,
    /// Line type.
    pub kind: LineKind,
}

impl PatchLine {
    /// Create a line with an explicit kind.
    pub fn new(content: impl Into<String>, kind: LineKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Create a line, deriving its kind from the leading marker.
    ///
    /// Anything other than `+` or `-` (including `\ No newline at end of
    /// file`) is context.
    pub fn from_raw(content: impl Into<String>) -> Self {
        let content = content.into();
        let kind = match content.chars().next() {
            Some('+') => LineKind::Addition,
            Some('-') => LineKind::Deletion,
            _ => LineKind::Context,
        };
        Self { content, kind }
    }

    /// Create a context line.
    pub fn context(content: impl Into<String>) -> Self {
        Self::new(content, LineKind::Context)
    }

    /// Create an addition line.
    pub fn addition(content: impl Into<String>) -> Self {
        Self::new(content, LineKind::Addition)
    }

    /// Create a deletion line.
    pub fn deletion(content: impl Into<String>) -> Self {
        Self::new(content, LineKind::Deletion)
    }

    /// Whether this line is an addition or deletion.
    pub fn is_change(&self) -> bool {
        self.kind.is_change()
    }
}

/// Line type in a hunk body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Unchanged line.
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Whether this is an addition or deletion.
    pub fn is_change(&self) -> bool {
        matches!(self, LineKind::Addition | LineKind::Deletion)
    }
}

/// What a row of the flattened sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A patch header line. Never selectable.
    Header,
    /// A hunk's `@@` row.
    HunkHeader,
    /// A hunk body line.
    Body(LineKind),
}

impl RowKind {
    /// Whether a selection may start or end on this row.
    pub fn is_selectable(&self) -> bool {
        matches!(self, RowKind::Body(_))
    }

    /// Whether this row is an addition or deletion.
    pub fn is_change(&self) -> bool {
        matches!(self, RowKind::Body(kind) if kind.is_change())
    }
}

/// One row of the flattened sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// Position in the flattened sequence.
    pub index: usize,
    /// Row type.
    pub kind: RowKind,
    /// Raw text of the row.
    pub content: Cow<'a, str>,
}

/// Row positions of a hunk: its header row followed by its body rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkSpan {
    /// Row of the `@@` line.
    pub header_row: usize,
    /// One past the last body row.
    pub end_row: usize,
}

impl HunkSpan {
    /// Body rows, or `None` for a hunk without body lines.
    pub fn body(&self) -> Option<RangeInclusive<usize>> {
        let first = self.header_row + 1;
        (first < self.end_row).then(|| first..=self.end_row - 1)
    }

    /// Whether `row` belongs to this hunk (header included).
    pub fn contains(&self, row: usize) -> bool {
        row >= self.header_row && row < self.end_row
    }
}
