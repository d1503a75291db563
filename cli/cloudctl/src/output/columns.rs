// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Column selection for table output
//!
//! Each printable record declares the columns it can render and which of
//! them are shown by default. `--cols` picks a subset by name
//! (case-insensitive). Unknown names are reported and skipped; they never
//! fail the command.

use chrono::SecondsFormat;
use cloud_client::Timestamp;
use comfy_table::{Table, presets::NOTHING};
use serde::Serialize;

/// The columns a record type can render
#[derive(Debug, Clone, Copy)]
pub struct ColumnSet {
    pub all: &'static [&'static str],
    pub default: &'static [&'static str],
}

impl ColumnSet {
    /// Canonical spelling of a column name, if it exists
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.all
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(name))
    }

    pub fn available(&self) -> String {
        self.all.join(", ")
    }
}

/// A record that can be rendered as a table row
pub trait Tabular: Serialize {
    const COLUMNS: ColumnSet;

    /// Render one cell; `column` is always a member of `COLUMNS.all`
    fn cell(&self, column: &str) -> String;
}

/// Outcome of matching `--cols` against a [`ColumnSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub columns: Vec<&'static str>,
    pub unknown: Vec<String>,
}

/// Match requested column names against the available set
///
/// An empty request selects the defaults. If every requested name is
/// unknown, the defaults are used as well.
pub fn select(set: &ColumnSet, requested: &[String]) -> Selection {
    let mut columns = Vec::new();
    let mut unknown = Vec::new();

    for name in requested.iter().filter(|n| !n.trim().is_empty()) {
        match set.resolve(name) {
            Some(col) if !columns.contains(&col) => columns.push(col),
            Some(_) => {}
            None => unknown.push(name.trim().to_string()),
        }
    }

    if columns.is_empty() {
        columns = set.default.to_vec();
    }

    Selection { columns, unknown }
}

/// Tell the user which requested columns were ignored
pub fn report_unknown(set: &ColumnSet, unknown: &[String]) {
    for name in unknown {
        eprintln!(
            "Warning: unknown column '{}' ignored (available: {})",
            name,
            set.available()
        );
    }
}

/// Build the table for a list of records
pub fn build_table<T: Tabular>(items: &[T], columns: &[&str], no_headers: bool) -> Table {
    let mut tbl = Table::new();
    tbl.load_preset(NOTHING);
    if !no_headers {
        tbl.set_header(columns);
    }

    for item in items {
        let row: Vec<String> = columns.iter().map(|col| item.cell(col)).collect();
        tbl.add_row(row);
    }

    tbl
}

/// Placeholder for absent values
pub const EMPTY: &str = "-";

pub fn or_empty<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_timestamp(ts: Option<Timestamp>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn join_or_empty(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY.to_string()
    } else {
        values.join(",")
    }
}
