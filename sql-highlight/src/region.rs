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

//! Text regions eligible for classification.
//!
//! Deciding which parts of a document contain SQL is up to the host.  The
//! host exposes that decision as a [RegionProvider], which the
//! [Classifier](crate::classifier::Classifier) queries with a span of the
//! document.

use std::ops::Range;

use log::warn;

/// A contiguous piece of a document to be scanned as a unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextRegion<'a> {
    /// Byte offset of `text` within the document.
    pub offset: usize,

    /// The region's contents.
    pub text: &'a str,
}

impl<'a> TextRegion<'a> {
    pub fn new(offset: usize, text: &'a str) -> Self {
        Self { offset, text }
    }

    /// Returns the byte range that this region occupies in the document.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// Returns true if this region overlaps or touches `query`.
    ///
    /// Touching counts, so that an empty query positioned at either edge of a
    /// region still finds it.
    pub fn intersects(&self, query: &Range<usize>) -> bool {
        let range = self.range();
        range.start <= query.end && query.start <= range.end
    }
}

/// A source of regions that are eligible for classification.
pub trait RegionProvider {
    /// Returns the regions that intersect `query`, in document order or
    /// whatever order the provider considers meaningful.  Each region is
    /// returned whole, even if it extends beyond `query`.
    fn regions(&self, query: Range<usize>) -> Vec<TextRegion<'_>>;
}

impl RegionProvider for [TextRegion<'_>] {
    fn regions(&self, query: Range<usize>) -> Vec<TextRegion<'_>> {
        self.iter()
            .filter(|region| region.intersects(&query))
            .copied()
            .collect()
    }
}

impl RegionProvider for Vec<TextRegion<'_>> {
    fn regions(&self, query: Range<usize>) -> Vec<TextRegion<'_>> {
        self.as_slice().regions(query)
    }
}

/// A provider that treats an entire document as a single region.
#[derive(Copy, Clone, Debug)]
pub struct WholeText<'a>(pub &'a str);

impl RegionProvider for WholeText<'_> {
    fn regions(&self, query: Range<usize>) -> Vec<TextRegion<'_>> {
        let region = TextRegion::new(0, self.0);
        if !region.text.is_empty() && region.intersects(&query) {
            vec![region]
        } else {
            Vec::new()
        }
    }
}

/// A provider for a fixed list of byte ranges within a document.
#[derive(Clone, Debug, Default)]
pub struct FixedRegions<'a> {
    regions: Vec<TextRegion<'a>>,
}

impl<'a> FixedRegions<'a> {
    /// Creates a provider for the given `ranges` of `document`, in the order
    /// given.  Ranges that are empty, that extend past the end of `document`,
    /// or that do not start and end on character boundaries are dropped.
    pub fn new<I>(document: &'a str, ranges: I) -> Self
    where
        I: IntoIterator<Item = Range<usize>>,
    {
        let regions = ranges
            .into_iter()
            .filter_map(|range| match document.get(range.clone()) {
                Some(text) if !text.is_empty() => Some(TextRegion::new(range.start, text)),
                _ => {
                    warn!(
                        "ignoring region {}..{}: not a non-empty span of a {}-byte document",
                        range.start,
                        range.end,
                        document.len()
                    );
                    None
                }
            })
            .collect();
        Self { regions }
    }

    pub fn as_slice(&self) -> &[TextRegion<'a>] {
        &self.regions
    }
}

impl RegionProvider for FixedRegions<'_> {
    fn regions(&self, query: Range<usize>) -> Vec<TextRegion<'_>> {
        self.regions.regions(query)
    }
}
