//! Line scanning: splits source text into structural lines with computed
//! nesting depth, tracks blank lines, and validates indentation in strict
//! mode. [`LineCursor`] is the forward-only read head the decoder drives.

use crate::{Error, Result};

/// A non-blank source line with its indentation stripped and depth computed.
///
/// Lines borrow from the source string; the scanner allocates no per-line
/// buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// The raw line, including leading whitespace.
    pub raw: &'a str,
    /// Number of leading space characters.
    pub indent: usize,
    /// Text after the leading spaces.
    pub content: &'a str,
    /// `indent / indent_unit`, integer division.
    pub depth: usize,
    /// One-based source line number.
    pub line_number: usize,
}

/// A blank line, recorded for diagnostics but excluded from the structural
/// stream. Blank lines never count toward array item totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlankLineInfo {
    pub line_number: usize,
    pub indent: usize,
    pub depth: usize,
}

/// The scanner's output: structural lines plus blank-line bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult<'a> {
    pub lines: Vec<ParsedLine<'a>>,
    pub blank_lines: Vec<BlankLineInfo>,
}

/// Scans source text into structural lines.
///
/// Empty or blank-only input yields an empty line list; signalling that as
/// an error is the decoder's job. In strict mode a tab anywhere in a line's
/// leading whitespace, or an indentation width that is not a multiple of
/// `indent_unit`, aborts the whole scan with a line-numbered error.
pub fn scan_lines(source: &str, indent_unit: usize, strict: bool) -> Result<ScanResult<'_>> {
    if source.trim().is_empty() {
        return Ok(ScanResult::default());
    }

    let mut lines = Vec::new();
    let mut blank_lines = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let line_number = i + 1;

        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let content = &raw[indent..];
        let depth = indent / indent_unit;

        if content.trim().is_empty() {
            blank_lines.push(BlankLineInfo {
                line_number,
                indent,
                depth,
            });
            continue;
        }

        if strict {
            let leading_ws = &raw[..raw.len() - raw.trim_start_matches([' ', '\t']).len()];
            if leading_ws.contains('\t') {
                return Err(Error::TabIndentation { line: line_number });
            }
            if indent > 0 && indent % indent_unit != 0 {
                return Err(Error::IndentationUnit {
                    line: line_number,
                    unit: indent_unit,
                    found: indent,
                });
            }
        }

        lines.push(ParsedLine {
            raw,
            indent,
            content,
            depth,
            line_number,
        });
    }

    Ok(ScanResult { lines, blank_lines })
}

/// A forward-only, single-pass read head over the scanner's output.
///
/// The decoder never rewinds this cursor; lookahead is `peek` only.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<ParsedLine<'a>>,
    blank_lines: Vec<BlankLineInfo>,
    index: usize,
}

impl<'a> LineCursor<'a> {
    /// Wraps a scan result.
    #[must_use]
    pub fn new(scan: ScanResult<'a>) -> Self {
        LineCursor {
            lines: scan.lines,
            blank_lines: scan.blank_lines,
            index: 0,
        }
    }

    /// The current line, without moving.
    #[must_use]
    pub fn peek(&self) -> Option<ParsedLine<'a>> {
        self.lines.get(self.index).copied()
    }

    /// Returns the current line and advances.
    pub fn next(&mut self) -> Option<ParsedLine<'a>> {
        let line = self.lines.get(self.index).copied();
        self.index += 1;
        line
    }

    /// The line most recently consumed by [`next`](Self::next) or
    /// [`advance`](Self::advance).
    #[must_use]
    pub fn current(&self) -> Option<ParsedLine<'a>> {
        if self.index > 0 {
            self.lines.get(self.index - 1).copied()
        } else {
            None
        }
    }

    /// Skips the current line without returning it.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Returns `true` once every line has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Total number of structural lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the cursor holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The current line, only if its depth equals `depth`.
    #[must_use]
    pub fn peek_at_depth(&self, depth: usize) -> Option<ParsedLine<'a>> {
        self.peek().filter(|line| line.depth == depth)
    }

    /// Returns `true` if the current line sits exactly at `depth`.
    #[must_use]
    pub fn has_more_at_depth(&self, depth: usize) -> bool {
        self.peek_at_depth(depth).is_some()
    }

    /// Blank lines recorded during the scan.
    #[must_use]
    pub fn blank_lines(&self) -> &[BlankLineInfo] {
        &self.blank_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_scans_to_nothing() {
        let result = scan_lines("", 2, false).unwrap();
        assert!(result.lines.is_empty());
        assert!(result.blank_lines.is_empty());

        let result = scan_lines("   \n  ", 2, false).unwrap();
        assert!(result.lines.is_empty());
    }

    #[test]
    fn simple_lines() {
        let result = scan_lines("line1\nline2", 2, false).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].content, "line1");
        assert_eq!(result.lines[1].content, "line2");
        assert_eq!(result.lines[0].line_number, 1);
        assert_eq!(result.lines[1].line_number, 2);
    }

    #[test]
    fn depth_follows_indent_unit() {
        let result = scan_lines("level0\n  level1\n    level2", 2, false).unwrap();
        assert_eq!(result.lines[0].depth, 0);
        assert_eq!(result.lines[1].depth, 1);
        assert_eq!(result.lines[2].depth, 2);

        let result = scan_lines("level0\n    level1", 4, false).unwrap();
        assert_eq!(result.lines[1].depth, 1);
    }

    #[test]
    fn blank_lines_are_tracked_separately() {
        let result = scan_lines("line1\n\nline2", 2, false).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.blank_lines.len(), 1);
        assert_eq!(result.blank_lines[0].line_number, 2);

        // The cursor keeps them available for diagnostics.
        let cursor = LineCursor::new(result);
        assert_eq!(cursor.blank_lines().len(), 1);
    }

    #[test]
    fn strict_rejects_non_multiple_indent() {
        let err = scan_lines("parent:\n   child: value", 2, true).unwrap_err();
        assert_eq!(
            err,
            Error::IndentationUnit {
                line: 2,
                unit: 2,
                found: 3
            }
        );
    }

    #[test]
    fn strict_rejects_tabs_in_indentation() {
        let err = scan_lines("level0\n\tlevel1", 2, true).unwrap_err();
        assert_eq!(err, Error::TabIndentation { line: 2 });

        // A tab after spaces is still a leading-whitespace tab.
        let err = scan_lines("level0\n  \tlevel1", 2, true).unwrap_err();
        assert_eq!(err, Error::TabIndentation { line: 2 });
    }

    #[test]
    fn lenient_mode_allows_tabs() {
        let result = scan_lines("level0\n\tlevel1", 2, false).unwrap();
        assert_eq!(result.lines.len(), 2);
    }

    #[test]
    fn cursor_navigation() {
        let scan = scan_lines("line1\nline2\nline3", 2, false).unwrap();
        let mut cursor = LineCursor::new(scan);

        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.peek().unwrap().content, "line1");
        assert_eq!(cursor.next().unwrap().content, "line1");
        assert_eq!(cursor.current().unwrap().content, "line1");
        assert_eq!(cursor.peek().unwrap().content, "line2");

        cursor.advance();
        assert_eq!(cursor.peek().unwrap().content, "line3");
        assert!(!cursor.at_end());
        cursor.advance();
        assert!(cursor.at_end());
        assert!(cursor.peek().is_none());
    }

    #[test]
    fn cursor_depth_checks() {
        let scan = scan_lines("level0\n  level1\n    level2", 2, false).unwrap();
        let mut cursor = LineCursor::new(scan);

        assert!(cursor.peek_at_depth(0).is_some());
        assert!(cursor.has_more_at_depth(0));
        assert!(!cursor.has_more_at_depth(1));

        cursor.advance();
        assert!(cursor.peek_at_depth(1).is_some());
        assert!(!cursor.has_more_at_depth(0));
    }
}
