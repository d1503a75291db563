// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting utilities

pub mod columns;
pub mod json;

use std::fmt::Display;

use anyhow::Result;
use clap::ValueEnum;

pub use columns::Tabular;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How command results are written to the terminal
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub format: OutputFormat,
    /// Requested table columns (`--cols`)
    pub cols: Vec<String>,
    pub no_headers: bool,
    pub quiet: bool,
}

impl Output {
    /// Print a list of records as a table or a JSON array
    pub fn list<T: Tabular>(&self, items: &[T]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => json::print_json(items),
            OutputFormat::Text => {
                let selection = columns::select(&T::COLUMNS, &self.cols);
                columns::report_unknown(&T::COLUMNS, &selection.unknown);
                let tbl = columns::build_table(items, &selection.columns, self.no_headers);
                println!("{tbl}");
                Ok(())
            }
        }
    }

    /// Print a single record
    pub fn one<T: Tabular>(&self, item: &T) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match self.format {
            OutputFormat::Json => json::print_json(item),
            OutputFormat::Text => self.list(std::slice::from_ref(item)),
        }
    }

    /// Progress and status messages, kept off stdout so JSON stays parseable
    pub fn note(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
