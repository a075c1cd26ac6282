// sql-highlight - classification of SQL fragments in free-form text.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Line and column positions for reporting spans to people.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Range,
};

use unicode_width::UnicodeWidthStr;

/// A line number and column number within a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    /// 1-based line number.
    pub line: usize,

    /// 1-based column number.
    ///
    /// Column numbers are measured according to the width of characters as
    /// shown in a typical fixed-width font, in which CJK characters have width
    /// 2 and combining characters have width 0, as measured by the
    /// `unicode_width` crate.
    pub column: usize,
}

impl Default for Point {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Point {
    /// Takes `point`, adds to it the text in `text`, incrementing the line
    /// number for each new-line in `text` and the column number for each
    /// column, and returns the result.
    pub fn advance(&self, text: &str) -> Self {
        let mut result = *self;
        for line in text.split_inclusive('\n') {
            if line.ends_with('\n') {
                result.line += 1;
                result.column = 1;
            } else {
                result.column += line.width();
            }
        }
        result
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.line, self.column)
    }
}

/// Maps byte offsets in a document to [Point]s.
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    text: &'a str,

    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Returns the position of byte `offset`, which must be on a character
    /// boundary no later than the end of the document.
    pub fn point(&self, offset: usize) -> Point {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        Point {
            line: line + 1,
            column: 1 + self.text[start..offset].width(),
        }
    }

    /// Returns the location of `range`.
    pub fn location(&self, range: Range<usize>) -> Location {
        Location {
            start: self.point(range.start),
            end: self.point(range.end),
        }
    }
}

/// A range of [Point]s.  `end` is just past the last character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub start: Point,
    pub end: Point,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let Point { line: l1, column: c1 } = self.start;
        let Point { line: l2, column: c2 } = self.end;
        if l2 > l1 {
            write!(f, "{l1}.{c1}-{l2}.{}", c2.saturating_sub(1))
        } else {
            write!(f, "{l1}.{c1}-{}", c2.saturating_sub(1))
        }
    }
}
