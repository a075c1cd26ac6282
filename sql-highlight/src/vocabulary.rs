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

use std::io::{Write, stdout};

use anyhow::Result;
use clap::{Args, ValueEnum};
use sql_highlight::{category::Category, scan::vocabulary::Vocabulary};

/// List the fixed keywords, function names, or category identifiers.
#[derive(Args, Clone, Debug)]
pub struct ShowVocabulary {
    /// What to list.
    #[arg(value_enum, default_value_t = Mode::Keywords)]
    mode: Mode,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Keywords and keyword phrases.
    Keywords,

    /// Function names.
    Functions,

    /// Category identifiers.
    Categories,
}

impl Mode {
    fn entries(self) -> Vec<&'static str> {
        match self {
            Mode::Keywords => Vocabulary::KEYWORDS.words().to_vec(),
            Mode::Functions => Vocabulary::FUNCTIONS.words().to_vec(),
            Mode::Categories => Category::iter().map(Category::id).collect(),
        }
    }
}

impl ShowVocabulary {
    pub fn run(self) -> Result<()> {
        let mut stdout = stdout().lock();
        for entry in self.mode.entries() {
            writeln!(stdout, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Mode;

    #[test]
    fn entries() {
        assert_eq!(
            Mode::Categories.entries(),
            vec!["sql-keyword", "sql-function", "sql-variable"]
        );
        assert_eq!(Mode::Functions.entries().first(), Some(&"COUNT"));
        assert!(Mode::Keywords.entries().contains(&"LEFT OUTER JOIN"));
    }
}
