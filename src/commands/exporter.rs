// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter_month;
use crate::utils::{load_transactions, parse_month};
use anyhow::{bail, Result};
use rusqlite::Connection;
use serde_json::json;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // oldest first
    let mut txs = load_transactions(conn)?;
    txs.reverse();
    if let Some(m) = sub.get_one::<String>("month") {
        txs = filter_month(&txs, parse_month(m)?);
    }

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "name", "category", "value"])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.name.clone(),
                    t.category.clone(),
                    format!("{:.2}", t.value),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date.to_string(), "type": t.kind, "name": t.name,
                        "category": t.category, "value": format!("{:.2}", t.value)
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    info!(count = txs.len(), %out, "export written");
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
