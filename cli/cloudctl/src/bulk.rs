// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Deleting every resource of a kind (`--all`)

use std::future::Future;

use anyhow::{Context as _, Result};

use crate::confirm::{self, Confirm};
use crate::error::{AggregateError, CliError};

/// Delete every listed item, one at a time
///
/// The list must succeed and be non-empty before anything is deleted. Each
/// item is confirmed first unless `force` is set; a "no" stops the loop
/// with [`CliError::UserDenied`], folded into the aggregate error when
/// earlier items already failed. Failed deletions do not stop the loop:
/// they are returned together as one aggregate error once every item has
/// been attempted.
///
/// Returns the number of items deleted.
pub async fn delete_all<T, L, N, D, Fut>(
    kind: &'static str,
    listed: L,
    label: N,
    confirm: &mut dyn Confirm,
    force: bool,
    mut delete: D,
) -> Result<usize>
where
    L: Future<Output = Result<Vec<T>>>,
    N: Fn(&T) -> String,
    D: FnMut(T) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let items = listed.await.with_context(|| format!("listing {}", kind))?;
    if items.is_empty() {
        return Err(CliError::NothingToDelete(kind).into());
    }

    tracing::debug!(kind, count = items.len(), "deleting all");

    let mut failures = AggregateError::default();
    let mut deleted = 0;

    for item in items {
        let name = label(&item);
        let prompt = format!("Delete {} {}?", kind, name);
        if let Err(denied) = confirm::require(confirm, force, &prompt) {
            if failures.is_empty() {
                return Err(denied);
            }
            // Earlier failures are reported along with the denial
            failures.push(name, denied);
            return Err(CliError::Aggregate(failures).into());
        }

        match delete(item).await {
            Ok(()) => deleted += 1,
            Err(e) => {
                tracing::debug!(kind, item = %name, error = %e, "delete failed");
                failures.push(name, e);
            }
        }
    }

    failures.into_result()?;
    Ok(deleted)
}
