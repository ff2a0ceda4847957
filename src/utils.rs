// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::SaldusError;
use crate::models::{Category, Transaction, TxKind};

pub const DEFAULT_ICON: &str = "list";
pub const UNKNOWN_ICON: &str = "help-circle";

pub const ICONS: &[&str] = &[
    "home",
    "wallet",
    "card",
    "cart",
    "cash",
    "car",
    "restaurant",
    "fast-food",
    "airplane",
    "bicycle",
    "gift",
    "school",
    "shirt",
    "phone-portrait",
    "game-controller",
    "medical",
    "briefcase",
    "heart",
    "book",
    "fitness",
    "paw",
    "pizza",
    "trending-up",
    "trending-down",
    DEFAULT_ICON,
];

// "R$ 1.234,56", "1.234,56", "12,5", "R$ 1.234"
static BRL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:R\$)?\s*(\d{1,3}(?:\.\d{3})*|\d+)(?:,(\d{1,2}))?$")
        .expect("valid BRL regex")
});

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SaldusError::InvalidDate(s.to_string()).into())
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| SaldusError::InvalidMonth(s.to_string()).into())
}

pub fn month_key(d: NaiveDate) -> String {
    format!("{:04}-{:02}", d.year(), d.month())
}

/// Reference month for a report: `--month` if given, else the current month.
/// Months after `today` are rejected.
pub fn resolve_month(arg: Option<&String>, today: NaiveDate) -> Result<NaiveDate> {
    let month = match arg {
        Some(s) => parse_month(s)?,
        None => today.with_day(1).unwrap_or(today),
    };
    if month > today {
        return Err(SaldusError::FutureMonth(month_key(month)).into());
    }
    Ok(month)
}

/// Accepts plain decimals (`1234.56`) and Brazilian currency (`R$ 1.234,56`).
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let trimmed = s.trim();
    let amount = if let Some(caps) = BRL.captures(trimmed) {
        let int = caps[1].replace('.', "");
        let cents = caps.get(2).map_or("0", |c| c.as_str());
        format!("{}.{}", int, cents)
            .parse::<Decimal>()
            .map_err(|_| SaldusError::InvalidAmount(s.to_string()))?
    } else {
        trimmed
            .trim_start_matches("R$")
            .trim()
            .parse::<Decimal>()
            .map_err(|_| SaldusError::InvalidAmount(s.to_string()))?
    };
    Ok(amount)
}

pub fn parse_positive_amount(s: &str) -> Result<Decimal> {
    let amount = parse_amount(s)?.round_dp(2);
    if amount <= Decimal::ZERO {
        return Err(SaldusError::NonPositiveAmount(s.to_string()).into());
    }
    Ok(amount)
}

/// `R$ 1.234,56`
pub fn format_brl(d: Decimal) -> String {
    let s = format!("{:.2}", d.round_dp(2).abs());
    let (int, frac) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if d.is_sign_negative() && !d.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, frac)
}

pub fn require_nonblank(value: &str, field: &'static str) -> Result<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(SaldusError::BlankField(field).into());
    }
    Ok(v.to_string())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Settings

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn get_balance(conn: &Connection) -> Result<Option<Decimal>> {
    match get_setting(conn, "balance")? {
        Some(s) => Ok(Some(
            s.parse::<Decimal>()
                .with_context(|| format!("Invalid stored balance '{}'", s))?,
        )),
        None => Ok(None),
    }
}

// Categories

pub fn category_exists(conn: &Connection, name: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM categories WHERE name=?1",
            params![name],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, icon FROM categories ORDER BY name")?;
    let rows = stmt.query_map([], |r| {
        Ok(Category {
            id: r.get(0)?,
            name: r.get(1)?,
            icon: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

pub fn icon_map(conn: &Connection) -> Result<HashMap<String, String>> {
    Ok(load_categories(conn)?
        .into_iter()
        .map(|c| (c.name, c.icon))
        .collect())
}

// Transactions

/// Every stored transaction, newest first.
pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, value, category, date, type FROM transactions
         ORDER BY date DESC, id DESC",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let value: String = r.get(2)?;
        let date: String = r.get(4)?;
        let kind: String = r.get(5)?;
        out.push(Transaction {
            id,
            name: r.get(1)?,
            value: value
                .parse::<Decimal>()
                .with_context(|| format!("Invalid value '{}' on transaction {}", value, id))?,
            category: r.get(3)?,
            date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}' on transaction {}", date, id))?,
            kind: kind.parse::<TxKind>()?,
        });
    }
    Ok(out)
}
