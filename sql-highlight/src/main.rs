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

use std::{num::ParseIntError, ops::Range};

use anyhow::Result;
use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use env_logger::Env;
use thiserror::Error as ThisError;

use crate::{classify::Classify, vocabulary::ShowVocabulary};

mod classify;
mod vocabulary;

/// Highlights SQL keywords, functions, and variables in free-form text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Classify(Classify),
    Vocabulary(ShowVocabulary),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Classify(classify) => classify.run(),
            Command::Vocabulary(vocabulary) => vocabulary.run(),
        }
    }
}

#[derive(ThisError, Debug)]
#[error("{0}: unknown encoding")]
struct UnknownEncodingError(String);

fn parse_encoding(arg: &str) -> Result<&'static Encoding, UnknownEncodingError> {
    match Encoding::for_label_no_replacement(arg.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(UnknownEncodingError(arg.to_string())),
    }
}

#[derive(ThisError, Debug, PartialEq, Eq)]
enum RangeError {
    #[error("{0:?}: expected a byte range in the form START..END")]
    Syntax(String),

    #[error("{0:?}: {1}")]
    Number(String, ParseIntError),

    #[error("{0:?}: range ends before it starts")]
    Reversed(String),
}

fn parse_range(arg: &str) -> Result<Range<usize>, RangeError> {
    let (start, end) = arg
        .split_once("..")
        .ok_or_else(|| RangeError::Syntax(arg.into()))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|error| RangeError::Number(arg.into(), error))
    };
    let range = parse(start)?..parse(end)?;
    if range.end < range.start {
        return Err(RangeError::Reversed(arg.into()));
    }
    Ok(range)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    Cli::parse().command.run()
}

#[cfg(test)]
mod tests {
    use super::{RangeError, parse_encoding, parse_range};

    #[test]
    fn ranges() {
        assert_eq!(parse_range("5..13"), Ok(5..13));
        assert_eq!(parse_range("0..0"), Ok(0..0));
        assert_eq!(
            parse_range("5-13"),
            Err(RangeError::Syntax(String::from("5-13")))
        );
        assert!(matches!(parse_range("a..3"), Err(RangeError::Number(..))));
        assert_eq!(
            parse_range("9..3"),
            Err(RangeError::Reversed(String::from("9..3")))
        );
    }

    #[test]
    fn encodings() {
        assert_eq!(parse_encoding("utf-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(
            parse_encoding("latin1").unwrap(),
            encoding_rs::WINDOWS_1252
        );
        assert!(parse_encoding("klingon").is_err());
    }
}
