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

use crate::{
    category::Category,
    region::{FixedRegions, TextRegion, WholeText},
};

use super::{ClassifiedSpan, Classifier};

fn check_classification(text: &str, expected: &[(Category, &str, usize)]) {
    let spans: Vec<_> = Classifier::new()
        .classify_text(text)
        .into_iter()
        .map(|span| (span.category, &text[span.range()], span.start))
        .collect();

    if spans != expected {
        eprintln!("classification of {text:?} differs from expected:");
        let difference = diff::slice(expected, &spans);
        for result in difference {
            match result {
                diff::Result::Left(left) => eprintln!("-{left:?}"),
                diff::Result::Both(left, _right) => eprintln!(" {left:?}"),
                diff::Result::Right(right) => eprintln!("+{right:?}"),
            }
        }
        panic!();
    }
}

#[test]
fn select_from() {
    check_classification(
        "SELECT * FROM users",
        &[(Category::Keyword, "SELECT", 0), (Category::Keyword, "FROM", 9)],
    );
}

#[test]
fn pass_order() {
    check_classification(
        "SELECT COUNT(*) FROM t WHERE id = @id",
        &[
            (Category::Keyword, "SELECT", 0),
            (Category::Keyword, "FROM", 16),
            (Category::Keyword, "WHERE", 23),
            (Category::Function, "COUNT", 7),
            (Category::Variable, "@id", 34),
        ],
    );
}

#[test]
fn parameters() {
    check_classification(
        "SELECT @userId FROM t WHERE id = :id",
        &[
            (Category::Keyword, "SELECT", 0),
            (Category::Keyword, "FROM", 15),
            (Category::Keyword, "WHERE", 22),
            (Category::Variable, "@userId", 7),
            (Category::Variable, ":id", 33),
        ],
    );
}

#[test]
fn passes_may_overlap() {
    // `LEFT` is both a function name and the start of a join keyword.
    check_classification(
        "SELECT LEFT(a, 1) FROM x LEFT JOIN y",
        &[
            (Category::Keyword, "SELECT", 0),
            (Category::Keyword, "FROM", 18),
            (Category::Keyword, "JOIN", 30),
            (Category::Keyword, "LEFT JOIN", 25),
            (Category::Function, "LEFT", 7),
        ],
    );
}

#[test]
fn no_matches() {
    check_classification("", &[]);
    check_classification("just some prose, nothing to see", &[]);
    check_classification("abc@userId x.INTO", &[]);
}

#[test]
fn region_offsets() {
    let regions = [TextRegion::new(100, "x = (SELECT 1)")];
    assert_eq!(
        Classifier::new().classify(&regions[..], 0..200),
        vec![ClassifiedSpan::new(105, 6, Category::Keyword)]
    );
}

#[test]
fn regions_in_provider_order() {
    let document = "a = \"DELETE x\"; b = \"SELECT @y\";";
    let provider = FixedRegions::new(document, [21..30, 5..13]);
    assert_eq!(
        Classifier::new().classify(&provider, 0..document.len()),
        vec![
            ClassifiedSpan::new(21, 6, Category::Keyword),
            ClassifiedSpan::new(28, 2, Category::Variable),
            ClassifiedSpan::new(5, 6, Category::Keyword),
        ]
    );
}

#[test]
fn query_selects_regions() {
    let document = "a = \"DELETE x\"; b = \"SELECT @y\";";
    let provider = FixedRegions::new(document, [5..13, 21..30]);
    assert_eq!(
        Classifier::new().classify(&provider, 22..23),
        vec![
            ClassifiedSpan::new(21, 6, Category::Keyword),
            ClassifiedSpan::new(28, 2, Category::Variable),
        ]
    );
}

#[test]
fn region_edges_are_boundaries() {
    // Inside the region, `SELECT` is at the start, even though the document
    // has a letter just before it.
    let document = "xSELECTy";
    let provider = FixedRegions::new(document, [1..7]);
    assert_eq!(
        Classifier::new().classify(&provider, 0..document.len()),
        vec![ClassifiedSpan::new(1, 6, Category::Keyword)]
    );
    assert!(Classifier::new().classify(&WholeText(document), 0..document.len()).is_empty());
}

#[test]
fn idempotent() {
    let classifier = Classifier::new();
    let text = "UPDATE t SET x = @x WHERE y IN (SELECT MAX(z) FROM u)";
    assert_eq!(classifier.classify_text(text), classifier.classify_text(text));
}

#[test]
fn serialize() {
    assert_eq!(
        serde_json::to_string(&ClassifiedSpan::new(3, 6, Category::Keyword)).unwrap(),
        r#"{"start":3,"length":6,"category":"sql-keyword"}"#
    );
}
