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

//! Painting classified spans onto text.
//!
//! Classification output may contain overlapping spans.  [paint] flattens
//! them into a sequence of non-overlapping [Run]s in which each byte takes
//! the category of the last span that covers it.

use std::ops::Range;

use crate::{
    category::{Category, CategoryStyles},
    classifier::ClassifiedSpan,
};

/// A maximal range of text with a single category (or none).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub range: Range<usize>,
    pub category: Option<Category>,
}

impl Run {
    /// Returns this run's style from `styles`, or `None` for plain text.
    pub fn style<'a, T>(&self, styles: &'a CategoryStyles<T>) -> Option<&'a T> {
        self.category.map(|category| styles.get(category))
    }
}

/// Divides `0..len` into runs according to `spans`.  Later spans take
/// precedence over earlier ones.  Parts of spans beyond `len` are ignored.
pub fn paint(len: usize, spans: &[ClassifiedSpan]) -> Vec<Run> {
    let mut painted = vec![None; len];
    for span in spans {
        let end = span.end().min(len);
        if span.start < end {
            painted[span.start..end].fill(Some(span.category));
        }
    }

    let mut runs: Vec<Run> = Vec::new();
    for (offset, category) in painted.into_iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.category == category => run.range.end = offset + 1,
            _ => runs.push(Run {
                range: offset..offset + 1,
                category,
            }),
        }
    }
    runs
}
