// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client-side filtering and sorting of list results

use std::cmp::{Ordering, Reverse};

use clap::Args;
use cloud_client::Timestamp;

use crate::error::CliError;
use crate::output::Tabular;
use crate::output::columns::ColumnSet;

/// Options shared by every list command
#[derive(Args, Clone, Debug, Default)]
pub struct ListArgs {
    /// Only show records whose column equals a value (KEY=VALUE, repeatable)
    #[arg(short = 'F', long, value_delimiter = ',')]
    pub filters: Vec<String>,

    /// Sort by column (ascending)
    #[arg(long)]
    pub order_by: Option<String>,

    /// Maximum number of results to show
    #[arg(short = 'M', long)]
    pub max_results: Option<usize>,

    /// Level of detail for response objects
    #[arg(short = 'D', long)]
    pub depth: Option<u32>,
}

impl ListArgs {
    /// Validate `--filters` and `--order-by` against the record's columns
    ///
    /// Runs before any network call so typos fail fast.
    pub fn query<T: Tabular>(&self) -> Result<ListQuery, CliError> {
        let filters = parse_filters(&self.filters, &T::COLUMNS)?;
        let order_by = match &self.order_by {
            Some(name) => Some(T::COLUMNS.resolve(name).ok_or_else(|| {
                CliError::InvalidOrderBy {
                    column: name.clone(),
                    available: T::COLUMNS.available(),
                }
            })?),
            None => None,
        };
        Ok(ListQuery {
            filters,
            order_by,
            max_results: self.max_results,
        })
    }

    pub fn depth_or(&self, default: u32) -> u32 {
        self.depth.unwrap_or(default)
    }
}

/// A validated `--filters KEY=VALUE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub column: &'static str,
    pub value: String,
}

/// Validated list options, ready to apply to fetched records
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filters: Vec<FieldFilter>,
    pub order_by: Option<&'static str>,
    pub max_results: Option<usize>,
}

impl ListQuery {
    /// Filter, sort and truncate
    pub fn apply<T: Tabular>(&self, items: Vec<T>) -> Vec<T> {
        self.arrange(self.filter(items))
    }

    /// Keep the records matching every `--filters` pair
    ///
    /// Commands with their own narrowing flags (such as `--latest`) run
    /// them between [`filter`](Self::filter) and [`arrange`](Self::arrange).
    pub fn filter<T: Tabular>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .filter(|item| {
                self.filters
                    .iter()
                    .all(|f| item.cell(f.column).eq_ignore_ascii_case(&f.value))
            })
            .collect()
    }

    /// Apply `--order-by`, then `--max-results`
    pub fn arrange<T: Tabular>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(column) = self.order_by {
            order_by(&mut items, column);
        }

        if let Some(max) = self.max_results {
            items.truncate(max);
        }

        items
    }
}

/// Parse `KEY=VALUE` pairs, checking every key is a known column
pub fn parse_filters(raw: &[String], set: &ColumnSet) -> Result<Vec<FieldFilter>, CliError> {
    raw.iter()
        .filter(|r| !r.trim().is_empty())
        .map(|r| {
            let (key, value) = r.split_once('=').ok_or_else(|| CliError::InvalidFilter {
                filter: r.clone(),
                reason: "expected KEY=VALUE".to_string(),
            })?;
            let column = set.resolve(key).ok_or_else(|| CliError::InvalidFilter {
                filter: r.clone(),
                reason: format!("unknown key '{}' (available: {})", key.trim(), set.available()),
            })?;
            Ok(FieldFilter {
                column,
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// Stable ascending sort by the rendered value of a column
///
/// Values that render as a number, optionally followed by a unit
/// ("2", "10 GB", "1.5"), compare numerically and sort before text.
pub fn order_by<T: Tabular>(items: &mut Vec<T>, column: &str) {
    let mut keyed: Vec<(SortKey, T)> = items
        .drain(..)
        .map(|item| (SortKey::of(&item.cell(column)), item))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    items.extend(keyed.into_iter().map(|(_, item)| item));
}

#[derive(Debug, PartialEq, PartialOrd)]
enum SortKey {
    Number(f64, String),
    Text(String),
}

impl SortKey {
    fn of(cell: &str) -> Self {
        let text = cell.trim().to_lowercase();
        let (digits, unit) = text.split_once(' ').unwrap_or((text.as_str(), ""));
        let numeric = !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
            && digits.starts_with(|c: char| c.is_ascii_digit())
            && unit.chars().all(|c| c.is_alphabetic());
        match digits.parse::<f64>() {
            Ok(n) if numeric => Self::Number(n, text),
            _ => Self::Text(text),
        }
    }
}

/// Keep the records whose field equals `value`
pub fn filter_by<T, F>(items: Vec<T>, field: F, value: &str) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    items
        .into_iter()
        .filter(|item| field(item) == Some(value))
        .collect()
}

/// Keep the records with at least one alias containing `needle`
pub fn alias_contains<T, F>(items: Vec<T>, aliases: F, needle: &str) -> Vec<T>
where
    F: Fn(&T) -> &[String],
{
    items
        .into_iter()
        .filter(|item| aliases(item).iter().any(|a| a.contains(needle)))
        .collect()
}

/// The `n` most recently created records, newest first
///
/// Records with equal timestamps keep their relative order; records without
/// a creation time sort last.
pub fn latest<T, F>(mut items: Vec<T>, n: usize, created: F) -> Vec<T>
where
    F: Fn(&T) -> Option<Timestamp>,
{
    // Option orders None first, so Reverse puts it last
    items.sort_by_key(|item| Reverse(created(item)));
    items.truncate(n);
    items
}
