// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    category_aggregate, category_color, expense_total, filter_month, income_total, next_month,
    previous_month, top_categories, weekly_totals,
};
use crate::models::Transaction;
use crate::utils::{
    format_brl, load_transactions, maybe_print_json, month_key, pretty_table, resolve_month,
    today,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("pie", sub)) => pie(conn, sub)?,
        Some(("weekly", sub)) => weekly(conn, sub)?,
        Some(("top", sub)) => top(conn, sub)?,
        Some(("summary", sub)) => summary(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn month_transactions(
    conn: &Connection,
    sub: &clap::ArgMatches,
) -> Result<(NaiveDate, Vec<Transaction>)> {
    let month = resolve_month(sub.get_one::<String>("month"), today())?;
    let txs = filter_month(&load_transactions(conn)?, month);
    debug!(month = %month_key(month), count = txs.len(), "loaded month");
    Ok((month, txs))
}

#[derive(Debug, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub total: Decimal,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct PieReport {
    pub month: String,
    pub slices: Vec<PieSlice>,
    pub total: Decimal,
    pub previous: String,
    pub next: Option<String>,
}

pub fn pie_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<PieReport> {
    let (month, txs) = month_transactions(conn, sub)?;
    let slices: Vec<PieSlice> = category_aggregate(&txs)
        .into_iter()
        .map(|c| PieSlice {
            color: category_color(&c.name),
            name: c.name,
            total: c.total,
        })
        .collect();
    let total: Decimal = slices.iter().map(|s| s.total).sum();
    Ok(PieReport {
        month: month_key(month),
        slices,
        total,
        previous: month_key(previous_month(month)),
        next: next_month(month, today()).map(month_key),
    })
}

fn pie(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = pie_report(conn, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    if report.slices.is_empty() {
        println!("No expenses in {}", report.month);
    } else {
        let rows = report
            .slices
            .iter()
            .map(|s| vec![s.name.clone(), format_brl(s.total), s.color.clone()])
            .collect();
        println!("Spending in {}", report.month);
        println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
        println!("Total: {}", format_brl(report.total));
    }
    match report.next {
        Some(next) => println!("< {}   {} >", report.previous, next),
        None => println!("< {}", report.previous),
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct WeekRow {
    pub label: &'static str,
    pub total: Decimal,
}

pub fn weekly_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<WeekRow>> {
    let (month, txs) = month_transactions(conn, sub)?;
    Ok(weekly_totals(&txs, month.month(), month.year())
        .labelled()
        .map(|(label, total)| WeekRow { label, total })
        .collect())
}

fn weekly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = weekly_report(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|w| vec![w.label.to_string(), format_brl(w.total)])
            .collect();
        println!("{}", pretty_table(&["Days", "Spent"], rows));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TopRow {
    pub rank: usize,
    pub name: String,
    pub total: Decimal,
}

pub fn top_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TopRow>> {
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&3);
    let (_, txs) = month_transactions(conn, sub)?;
    Ok(top_categories(&txs, limit)
        .into_iter()
        .enumerate()
        .map(|(i, c)| TopRow {
            rank: i + 1,
            name: c.name,
            total: c.total,
        })
        .collect())
}

fn top(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = top_report(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        for row in &data {
            println!("{}. {} - {}", row.rank, row.name, format_brl(row.total));
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn summary_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<MonthSummary> {
    let (month, txs) = month_transactions(conn, sub)?;
    let income = income_total(&txs);
    let expense = expense_total(&txs);
    Ok(MonthSummary {
        month: month_key(month),
        income,
        expense,
        net: income - expense,
    })
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let s = summary_report(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        println!(
            "{}",
            pretty_table(
                &["Month", "Income", "Expense", "Net"],
                vec![vec![
                    s.month.clone(),
                    format_brl(s.income),
                    format_brl(s.expense),
                    format_brl(s.net),
                ]],
            )
        );
    }
    Ok(())
}
