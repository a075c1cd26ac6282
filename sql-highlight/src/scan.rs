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

//! Scanning text for SQL tokens.
//!
//! Scanning is split into two independent matchers, each of which is a total
//! function over arbitrary text and reports byte ranges relative to the start
//! of the text it was given:
//!
//! 1. [vocabulary] finds literal occurrences of the words in a fixed word
//!    list, accepting an occurrence only if the characters on either side of
//!    it belong to the list's boundary-character sets.  Keywords and function
//!    names are both found this way, with different lists and sets.
//!
//! 2. [variable] finds `@name` and `:name` references with a single
//!    line-oriented pattern.
//!
//! Neither matcher resolves overlaps with the other, or between different
//! words of the same list.

pub mod variable;
pub mod vocabulary;
