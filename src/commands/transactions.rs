// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::filter_month;
use crate::error::SaldusError;
use crate::models::TxKind;
use crate::utils::{
    category_exists, format_brl, icon_map, load_transactions, maybe_print_json, month_key,
    parse_date, parse_positive_amount, pretty_table, require_nonblank, resolve_month, today,
    UNKNOWN_ICON,
};
use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::{debug, info};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(conn, sub)?;
        }
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
            if n == 0 {
                return Err(SaldusError::UnknownTransaction(id).into());
            }
            println!("Removed transaction {}", id);
        }
        _ => {}
    }
    Ok(())
}

/// Validates and stores a transaction, returning its id.
pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<i64> {
    let kind = sub.get_one::<String>("type").unwrap().parse::<TxKind>()?;
    let name = require_nonblank(sub.get_one::<String>("name").unwrap(), "Name")?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let category = require_nonblank(sub.get_one::<String>("category").unwrap(), "Category")?;
    if !category_exists(conn, &category)? {
        return Err(SaldusError::UnknownCategory(category).into());
    }
    let value = parse_positive_amount(sub.get_one::<String>("amount").unwrap())?;

    conn.execute(
        "INSERT INTO transactions(name, value, category, date, type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![name, value.to_string(), category, date.to_string(), kind.as_str()],
    )?;
    let id = conn.last_insert_rowid();
    info!(id, %kind, %value, %category, "transaction recorded");
    println!(
        "Recorded {} {} on {} ({})",
        kind.sign(),
        format_brl(value),
        date,
        category
    );
    Ok(id)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.icon.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    format!("{} {}", r.sign, format_brl(r.value)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Icon", "Name", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(skip)]
    pub sign: &'static str,
    pub value: rust_decimal::Decimal,
    pub category: String,
    pub icon: String,
}

/// Transactions of the requested month, newest first, with category icons.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = resolve_month(sub.get_one::<String>("month"), today())?;
    let all = load_transactions(conn)?;
    let mut selected = filter_month(&all, month);
    debug!(month = %month_key(month), total = all.len(), selected = selected.len(), "month filter");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        selected.truncate(*limit);
    }

    let icons = icon_map(conn)?;
    Ok(selected
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            icon: icons
                .get(&t.category)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_ICON.to_string()),
            name: t.name,
            kind: t.kind,
            sign: t.kind.sign(),
            value: t.value,
            category: t.category,
        })
        .collect())
}
