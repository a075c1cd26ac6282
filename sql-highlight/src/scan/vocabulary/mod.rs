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

//! Word lists and the boundary-checked literal matcher.

use std::ops::Range;

use log::trace;

/// Characters that may immediately precede a keyword.
pub const KEYWORD_PREFIX: &[char] = &['\t', ' ', '"', '('];

/// Characters that may immediately follow a keyword.
pub const KEYWORD_POSTFIX: &[char] = &['\t', ' ', '"', '(', ')', ';'];

/// Characters that may immediately precede a function name.
pub const FUNCTION_PREFIX: &[char] = &['\t', ' ', '"', ',', '('];

/// Characters that may immediately follow a function name.
///
/// A function name must be followed by its argument list, so this is much
/// stricter than [KEYWORD_POSTFIX].
pub const FUNCTION_POSTFIX: &[char] = &['\t', '('];

/// Keywords, including multi-word phrases and data type names.
///
/// Matching is case-sensitive, so only the upper-case spellings are
/// recognized.
pub const KEYWORDS: &[&str] = &[
    "SELECT",
    "INSERT",
    "DELETE",
    "UPDATE",
    "ONLY",
    "INTO",
    "VALUES",
    "TRUNCATE",
    "DISTINCT",
    "TOP",
    "WITH",
    "FROM",
    "JOIN",
    "INNER JOIN",
    "OUTER JOIN",
    "LEFT OUTER JOIN",
    "RIGHT OUTER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "CROSS JOIN",
    "UNION",
    "EXCEPT",
    "WHERE",
    "LIKE",
    "BETWEEN",
    "HAVING",
    "EXISTS",
    "ORDER BY",
    "ASC",
    "DESC",
    "OVER",
    "GROUP BY",
    "LIMIT",
    "OFFSET",
    "PARTITION BY",
    "WINDOW",
    "ON",
    "IN",
    "IS",
    "NOT",
    "AS",
    "AND",
    "OR",
    "ALL",
    "ANY",
    "CREATE",
    "ALTER",
    "DROP",
    "TEMP",
    "TEMPORARY",
    "TABLE",
    "FUNCTION",
    "PROCEDURE",
    "VIEW",
    "SCHEMA",
    "DECLARE",
    "SET",
    "READ ONLY",
    "IF",
    "BEGIN",
    "THEN",
    "ELSE",
    "END",
    "FOR",
    "WHILE",
    "NULL",
    "CASE",
    "WHEN",
    "TRANSACTION",
    "COMMIT",
    "ROLLBACK",
    "EXEC",
    "RETURN",
    "RETURNS",
    "PRINT",
    "USE",
    "USING",
    "RETURNING",
    "COPY",
    "STDIN",
    "STDOUT",
    // Data types.
    "BIGINT",
    "NUMERIC",
    "BIT",
    "SMALLINT",
    "DECIMAL",
    "SMALLMONEY",
    "INT",
    "TINYINT",
    "MONEY",
    "FLOAT",
    "REAL",
    "DATE",
    "DATETIMEOFFSET",
    "DATETIME2",
    "SMALLDATETIME",
    "DATETIME",
    "TIME",
    "TIMESTAMP",
    "CHAR",
    "VARCHAR",
    "TEXT",
    "NCHAR",
    "NVARCHAR",
    "NTEXT",
    "BINARY",
    "VARBINARY",
    "IMAGE",
    "CURSOR",
    "HIERARCHYID",
    "UNIQUEIDENTIFIER",
    "SQL_VARIANT",
    "XML",
];

/// Built-in function names.
pub const FUNCTIONS: &[&str] = &[
    "COUNT",
    "COUNT_BIG",
    "SUM",
    "MIN",
    "MAX",
    "AVG",
    "ABS",
    "NEWID",
    "RAND",
    "ISNULL",
    "COALESCE",
    "LEFT",
    "RIGHT",
    "SUBSTRING",
    "LTRIM",
    "RTRIM",
    "UPPER",
    "LOWER",
    "CHARINDEX",
    "LEN",
    "STUFF",
    "GETDATE",
    "DATEADD",
    "DATEDIFF",
    "DATEPART",
    "DATENAME",
    "CONVERT",
    "CAST",
    "ROW_NUMBER",
    "NULLIF",
];

/// A word list together with the characters allowed on either side of a
/// match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    words: &'static [&'static str],
    prefix: &'static [char],
    postfix: &'static [char],
}

impl Vocabulary {
    /// [KEYWORDS] delimited by [KEYWORD_PREFIX] and [KEYWORD_POSTFIX].
    pub const KEYWORDS: Self = Self::new(KEYWORDS, KEYWORD_PREFIX, KEYWORD_POSTFIX);

    /// [FUNCTIONS] delimited by [FUNCTION_PREFIX] and [FUNCTION_POSTFIX].
    pub const FUNCTIONS: Self = Self::new(FUNCTIONS, FUNCTION_PREFIX, FUNCTION_POSTFIX);

    pub const fn new(
        words: &'static [&'static str],
        prefix: &'static [char],
        postfix: &'static [char],
    ) -> Self {
        Self {
            words,
            prefix,
            postfix,
        }
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn prefix(&self) -> &'static [char] {
        self.prefix
    }

    pub fn postfix(&self) -> &'static [char] {
        self.postfix
    }

    /// Returns the ranges of every accepted occurrence of every word in this
    /// vocabulary within `text`.
    ///
    /// Matches are grouped by word, in word-list order, and within a word in
    /// order of position.  The result as a whole is not sorted by position,
    /// and matches for different words may overlap.
    pub fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.words
            .iter()
            .flat_map(move |word| find_matches(text, word, self.prefix, self.postfix))
    }
}

/// Returns an iterator over the accepted occurrences of `word` in `text`.
///
/// An occurrence is accepted if it is at the start of `text` or preceded by a
/// character in `prefix`, and at the end of `text` or followed by a character
/// in `postfix`.  After each occurrence, accepted or not, the search resumes
/// one character past its start.  Region edges count as boundaries: nothing
/// outside `text` is ever inspected.
pub fn find_matches<'a>(
    text: &'a str,
    word: &'a str,
    prefix: &'a [char],
    postfix: &'a [char],
) -> WordMatches<'a> {
    WordMatches {
        text,
        word,
        prefix,
        postfix,
        pos: 0,
    }
}

/// Iterator returned by [find_matches].
#[derive(Clone, Debug)]
pub struct WordMatches<'a> {
    text: &'a str,
    word: &'a str,
    prefix: &'a [char],
    postfix: &'a [char],

    /// Byte offset in `text` where the next search begins.
    pos: usize,
}

impl WordMatches<'_> {
    fn is_delimited(&self, range: &Range<usize>) -> bool {
        self.text[..range.start]
            .chars()
            .next_back()
            .is_none_or(|c| self.prefix.contains(&c))
            && self.text[range.end..]
                .chars()
                .next()
                .is_none_or(|c| self.postfix.contains(&c))
    }
}

impl Iterator for WordMatches<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word.is_empty() {
            return None;
        }
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find(self.word)?;
            let range = start..start + self.word.len();
            self.pos = start
                + self.text[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
            if self.is_delimited(&range) {
                return Some(range);
            }
            trace!("rejecting {:?} at offset {start}: not delimited", self.word);
        }
        None
    }
}
