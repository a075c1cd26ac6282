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

use std::{
    collections::HashMap,
    fs::File,
    io::{BufWriter, Read, Write, stdin, stdout},
    ops::Range,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use encoding_rs::{Encoding, UTF_8};
use log::{info, warn};
use sql_highlight::{
    category::CategoryStyles,
    classifier::{ClassifiedSpan, Classifier},
    highlight::paint,
    location::LineIndex,
    region::{FixedRegions, WholeText},
};

use crate::{parse_encoding, parse_range};

/// Classify SQL keywords, functions, and variables in a text file.
#[derive(Args, Clone, Debug)]
pub struct Classify {
    /// Input file name (if omitted, input is read from stdin).
    input: Option<PathBuf>,

    /// Output file name (if omitted, output is written to stdout).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// The encoding to use for reading the input file.
    ///
    /// A byte-order mark in the input overrides this.
    #[arg(short = 'e', long, value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,

    /// Byte range of the input, as START..END, that contains SQL.
    ///
    /// May be given more than once.  If omitted, the whole input is scanned
    /// as a single region.
    #[arg(short = 'r', long = "region", value_parser = parse_range)]
    regions: Vec<Range<usize>>,

    /// Byte range, as START..END, to classify.  Only regions that intersect
    /// this range are scanned.  Defaults to the whole input.
    #[arg(short = 'q', long, value_parser = parse_range)]
    query: Option<Range<usize>>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = ClassifyFormat::Json)]
    format: ClassifyFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ClassifyFormat {
    /// All spans as one JSON array.
    #[default]
    Json,

    /// One JSON object per span, one per line.
    Ndjson,

    /// One line per span, with its location, category, and text.
    Text,

    /// The input, with spans highlighted by ANSI terminal colors.
    Color,
}

/// SGR parameters for each category in [ClassifyFormat::Color] output.
const COLORS: [(&str, &str); 3] = [
    ("sql-keyword", "1;34"),
    ("sql-function", "35"),
    ("sql-variable", "32"),
];

impl Classify {
    pub fn run(self) -> Result<()> {
        let input = match &self.input {
            Some(file_name) => std::fs::read(file_name)
                .with_context(|| format!("{}: read failed", file_name.display()))?,
            None => {
                let mut input = Vec::new();
                stdin()
                    .read_to_end(&mut input)
                    .context("reading stdin failed")?;
                input
            }
        };
        let (text, encoding, malformed) = self.encoding.unwrap_or(UTF_8).decode(&input);
        if malformed {
            warn!(
                "input is not valid {}; malformed sequences were replaced",
                encoding.name()
            );
        }

        let query = self.query.clone().unwrap_or(0..text.len());
        let classifier = Classifier::new();
        let spans = if self.regions.is_empty() {
            classifier.classify(&WholeText(&text), query)
        } else {
            classifier.classify(&FixedRegions::new(&text, self.regions.iter().cloned()), query)
        };
        info!("classified {} spans", spans.len());

        let mut writer: Box<dyn Write> = match &self.output {
            Some(file_name) => Box::new(BufWriter::new(
                File::create(file_name)
                    .with_context(|| format!("{}: create failed", file_name.display()))?,
            )),
            None => Box::new(BufWriter::new(stdout().lock())),
        };
        self.format.write(&text, &spans, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl ClassifyFormat {
    fn write(self, text: &str, spans: &[ClassifiedSpan], writer: &mut dyn Write) -> Result<()> {
        match self {
            ClassifyFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, spans)?;
                writeln!(writer)?;
            }
            ClassifyFormat::Ndjson => {
                for span in spans {
                    serde_json::to_writer(&mut *writer, span)?;
                    writeln!(writer)?;
                }
            }
            ClassifyFormat::Text => {
                let index = LineIndex::new(text);
                for span in spans {
                    writeln!(
                        writer,
                        "{}: {} {:?}",
                        index.location(span.range()),
                        span.category,
                        &text[span.range()]
                    )?;
                }
            }
            ClassifyFormat::Color => {
                let registry: HashMap<&str, &str> = COLORS.into_iter().collect();
                let styles = CategoryStyles::resolve(&registry)?;
                for run in paint(text.len(), spans) {
                    let segment = &text[run.range.clone()];
                    match run.style(&styles) {
                        Some(sgr) => write!(writer, "\x1b[{sgr}m{segment}\x1b[0m")?,
                        None => write!(writer, "{segment}")?,
                    }
                }
            }
        }
        Ok(())
    }
}
