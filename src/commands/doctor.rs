// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{icon_map, load_transactions, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::warn;

/// Data problems the reports silently tolerate.
pub fn check(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let known = icon_map(conn)?;

    for t in load_transactions(conn)? {
        if t.value <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_value".into(),
                format!("#{} {} {}", t.id, t.date, t.value),
            ]);
        }
        if t.category.trim().is_empty() {
            rows.push(vec!["blank_category".into(), format!("#{} {}", t.id, t.date)]);
        } else if !known.contains_key(&t.category) {
            rows.push(vec![
                "unregistered_category".into(),
                format!("#{} {}", t.id, t.category),
            ]);
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = check(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        warn!(issues = rows.len(), "doctor found issues");
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
