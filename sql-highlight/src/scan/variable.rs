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

//! Variable and parameter references.
//!
//! A reference is `@` or `:` followed by one or more ASCII letters, digits,
//! or underscores.  It is recognized only where it stands alone:
//!
//! - It must be at the start of a line or follow one of `"`, white space,
//!   `(`, `+`, `,`, or `=`.
//!
//! - It must be at the end of a line or be followed by one of `"`, white
//!   space, `)`, `+`, or `,`.
//!
//! The delimiting characters are consumed by the match, so two references
//! that share a single delimiter, as in `@a,@b`, yield only the first.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(?:^|["\s(+,=])(?P<variable>[@:][a-zA-Z0-9_]+)(?:$|["\s)+,])"#)
        .expect("variable pattern should compile")
});

/// Returns the ranges of the variable references in `text`, in order of
/// position.  Each range covers the sigil and the name, not the delimiters.
pub fn find_variables(text: &str) -> impl Iterator<Item = Range<usize>> + '_ {
    VARIABLE
        .captures_iter(text)
        .filter_map(|captures| captures.name("variable"))
        .map(|variable| variable.range())
}

#[cfg(test)]
mod tests {
    use super::find_variables;

    fn variables(text: &str) -> Vec<&str> {
        find_variables(text).map(|range| &text[range]).collect()
    }

    #[test]
    fn parameters() {
        let text = "SELECT @userId FROM t WHERE id = :id";
        assert_eq!(find_variables(text).collect::<Vec<_>>(), vec![7..14, 33..36]);
        assert_eq!(variables(text), vec!["@userId", ":id"]);
    }

    #[test]
    fn embedded() {
        assert!(variables("abc@userId").is_empty());
        assert!(variables("user@example.com").is_empty());
        assert!(variables("@userId.x").is_empty());
    }

    #[test]
    fn casts_are_not_variables() {
        assert!(variables("SELECT x::int FROM t").is_empty());
    }

    #[test]
    fn delimiters() {
        assert_eq!(variables("(@a)"), vec!["@a"]);
        assert_eq!(variables("x=@a+1"), vec!["@a"]);
        assert_eq!(variables("\"@a\""), vec!["@a"]);
        assert_eq!(variables("x\t:b_2\ty"), vec![":b_2"]);
    }

    #[test]
    fn shared_delimiter() {
        assert_eq!(variables("(@a,@b)"), vec!["@a"]);
        assert_eq!(variables("(@a, @b)"), vec!["@a", "@b"]);
    }

    #[test]
    fn line_anchors() {
        assert_eq!(variables("@first\n:second\nx@third"), vec!["@first", ":second"]);
    }

    #[test]
    fn sigil_alone() {
        assert!(variables("@ : @@x").is_empty());
    }

    #[test]
    fn idempotent() {
        let text = "EXEC proc @a, @b = :c";
        let first: Vec<_> = find_variables(text).collect();
        let second: Vec<_> = find_variables(text).collect();
        assert_eq!(first, second);
        assert_eq!(variables(text), vec!["@a", "@b", ":c"]);
    }
}
