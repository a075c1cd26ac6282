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

//! Classification categories.
//!
//! A host renders each classified span according to its [Category].  Hosts
//! know categories by their stable string identifiers (see [Category::id]),
//! which are resolved to styles exactly once, through a [CategoryRegistry],
//! into a [CategoryStyles] table.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result as FmtResult},
    hash::BuildHasher,
    ops::Index,
    str::FromStr,
};

use enum_iterator::{Sequence, all};
use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// The kind of SQL token that a classified span covers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum, Sequence, Serialize, Deserialize)]
pub enum Category {
    /// A keyword or multi-word keyword phrase, such as `SELECT` or `ORDER BY`.
    /// Data type names are keywords too.
    #[serde(rename = "sql-keyword")]
    Keyword,

    /// A built-in function name, such as `COUNT`.
    #[serde(rename = "sql-function")]
    Function,

    /// A variable or parameter reference, such as `@userId` or `:id`.
    #[serde(rename = "sql-variable")]
    Variable,
}

impl Category {
    /// Returns the stable identifier that hosts use for this category.
    pub const fn id(self) -> &'static str {
        match self {
            Category::Keyword => "sql-keyword",
            Category::Function => "sql-function",
            Category::Variable => "sql-variable",
        }
    }

    /// Returns all of the categories, in declaration order.
    pub fn iter() -> impl Iterator<Item = Self> {
        all::<Self>()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("{0:?} is not a SQL classification category.")]
pub struct UnknownCategoryError(pub String);

impl FromStr for Category {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|category| category.id() == s)
            .ok_or_else(|| UnknownCategoryError(s.into()))
    }
}

/// A host service that maps category identifiers to styles.
pub trait CategoryRegistry {
    /// The host's representation of a style.
    type Style;

    /// Returns the style registered under `id`, if any.
    fn lookup(&self, id: &str) -> Option<Self::Style>;
}

impl<T, S> CategoryRegistry for HashMap<String, T, S>
where
    T: Clone,
    S: BuildHasher,
{
    type Style = T;

    fn lookup(&self, id: &str) -> Option<T> {
        self.get(id).cloned()
    }
}

impl<T, S> CategoryRegistry for HashMap<&str, T, S>
where
    T: Clone,
    S: BuildHasher,
{
    type Style = T;

    fn lookup(&self, id: &str) -> Option<T> {
        self.get(id).cloned()
    }
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
#[error("No style is registered for category \"{0}\".")]
pub struct UnregisteredCategoryError(pub Category);

/// A style for each [Category].
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryStyles<T>(EnumMap<Category, T>);

impl<T> CategoryStyles<T> {
    pub fn new(styles: EnumMap<Category, T>) -> Self {
        Self(styles)
    }

    /// Looks up the style for every category in `registry`.
    ///
    /// Fails if the registry lacks any of the three identifiers.
    pub fn resolve<R>(registry: &R) -> Result<Self, UnregisteredCategoryError>
    where
        R: CategoryRegistry<Style = T> + ?Sized,
    {
        let lookup = |category: Category| {
            registry
                .lookup(category.id())
                .ok_or(UnregisteredCategoryError(category))
        };
        Ok(Self(EnumMap::from_array([
            lookup(Category::Keyword)?,
            lookup(Category::Function)?,
            lookup(Category::Variable)?,
        ])))
    }

    pub fn get(&self, category: Category) -> &T {
        &self.0[category]
    }
}

impl<T> Index<Category> for CategoryStyles<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Category, CategoryStyles, UnknownCategoryError, UnregisteredCategoryError};

    #[test]
    fn identifiers() {
        assert_eq!(
            Category::iter().map(Category::id).collect::<Vec<_>>(),
            vec!["sql-keyword", "sql-function", "sql-variable"]
        );
        for category in Category::iter() {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn unknown_identifier() {
        assert_eq!(
            "sql-operator".parse::<Category>(),
            Err(UnknownCategoryError(String::from("sql-operator")))
        );
        assert!("SQL-KEYWORD".parse::<Category>().is_err());
    }

    #[test]
    fn serialize_as_identifier() {
        assert_eq!(
            serde_json::to_string(&Category::Function).unwrap(),
            "\"sql-function\""
        );
    }

    #[test]
    fn resolve() {
        let registry: HashMap<&str, u32> = [
            ("sql-keyword", 1),
            ("sql-function", 2),
            ("sql-variable", 3),
            ("comment", 4),
        ]
        .into_iter()
        .collect();
        let styles = CategoryStyles::resolve(&registry).unwrap();
        assert_eq!(styles[Category::Keyword], 1);
        assert_eq!(styles[Category::Function], 2);
        assert_eq!(styles[Category::Variable], 3);
    }

    #[test]
    fn resolve_missing() {
        let registry: HashMap<String, u32> = [
            (String::from("sql-keyword"), 1),
            (String::from("sql-variable"), 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            CategoryStyles::resolve(&registry),
            Err(UnregisteredCategoryError(Category::Function))
        );
    }
}
