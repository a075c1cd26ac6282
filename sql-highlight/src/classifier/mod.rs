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

//! The classification service.
//!
//! A [Classifier] scans each region supplied by a [RegionProvider] with three
//! independent passes, in this order:
//!
//! 1. Keywords, with [Vocabulary::KEYWORDS].
//!
//! 2. Function names, with [Vocabulary::FUNCTIONS].
//!
//! 3. Variable references, with [find_variables].
//!
//! Spans are emitted in pass order within each region, and regions in the
//! order the provider returns them.  Nothing is sorted or merged afterward:
//! spans from different passes, or from different words in one pass, may
//! overlap, and a host that paints them in order lets the later span win.
//!
//! A [Classifier] holds only immutable tables, so one instance may be shared
//! freely between threads.

use std::ops::Range;

use log::debug;
use serde::Serialize;

use crate::{
    category::Category,
    region::{RegionProvider, TextRegion},
    scan::{variable::find_variables, vocabulary::Vocabulary},
};

/// A classified piece of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedSpan {
    /// Byte offset of the start of the span in the document.
    pub start: usize,

    /// Length of the span in bytes.  Never zero.
    #[serde(rename = "length")]
    pub len: usize,

    pub category: Category,
}

impl ClassifiedSpan {
    pub fn new(start: usize, len: usize, category: Category) -> Self {
        Self {
            start,
            len,
            category,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Classifies SQL keywords, function names, and variables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classifier {
    keywords: Vocabulary,
    functions: Vocabulary,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub const fn new() -> Self {
        Self {
            keywords: Vocabulary::KEYWORDS,
            functions: Vocabulary::FUNCTIONS,
        }
    }

    pub fn keywords(&self) -> &Vocabulary {
        &self.keywords
    }

    pub fn functions(&self) -> &Vocabulary {
        &self.functions
    }

    /// Classifies the regions that `provider` returns for `query`.
    pub fn classify<P>(&self, provider: &P, query: Range<usize>) -> Vec<ClassifiedSpan>
    where
        P: RegionProvider + ?Sized,
    {
        let mut spans = Vec::new();
        for region in provider.regions(query) {
            self.classify_region(&region, &mut spans);
        }
        spans
    }

    /// Classifies `text` as a single region at offset 0.
    pub fn classify_text(&self, text: &str) -> Vec<ClassifiedSpan> {
        let mut spans = Vec::new();
        self.classify_region(&TextRegion::new(0, text), &mut spans);
        spans
    }

    /// Appends the spans found in `region` to `spans`, translated into
    /// document offsets.
    pub fn classify_region(&self, region: &TextRegion<'_>, spans: &mut Vec<ClassifiedSpan>) {
        let n = spans.len();
        let translate = |range: Range<usize>, category: Category| {
            ClassifiedSpan::new(region.offset + range.start, range.len(), category)
        };

        spans.extend(
            self.keywords
                .find_matches(region.text)
                .map(|range| translate(range, Category::Keyword)),
        );
        spans.extend(
            self.functions
                .find_matches(region.text)
                .map(|range| translate(range, Category::Function)),
        );
        spans.extend(find_variables(region.text).map(|range| translate(range, Category::Variable)));

        debug!(
            "region {}..{}: {} spans",
            region.offset,
            region.offset + region.text.len(),
            spans.len() - n
        );
    }
}

#[cfg(test)]
mod tests;
