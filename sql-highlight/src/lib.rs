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

//! Classification of SQL fragments embedded in free-form text.
//!
//! Text that is believed to carry SQL (string literals in source code,
//! comments, documentation) is handed to a [Classifier](classifier::Classifier)
//! as a sequence of [TextRegion](region::TextRegion)s.  The classifier tags
//! occurrences of SQL keywords, SQL function names, and `@name`/`:name`
//! variable references so that a host can render them distinctly.
//!
//! This is not a SQL parser.  Tokens are recognized by literal matching plus
//! a check of the characters on either side of the match.

pub mod category;
pub mod classifier;
pub mod highlight;
pub mod location;
pub mod region;
pub mod scan;
