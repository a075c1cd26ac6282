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

#![no_main]

use libfuzzer_sys::fuzz_target;
use sql_highlight::{classifier::Classifier, region::TextRegion};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let region = TextRegion::new(1000, text);
        let mut spans = Vec::new();
        Classifier::new().classify_region(&region, &mut spans);
        for span in spans {
            assert!(span.len > 0);
            assert!(span.start >= region.offset && span.end() <= region.range().end);
            assert!(text.is_char_boundary(span.start - region.offset));
            assert!(text.is_char_boundary(span.end() - region.offset));
        }
    }
});
