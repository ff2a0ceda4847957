// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{
    format_brl, get_balance, get_setting, icon_map, load_transactions, parse_positive_amount,
    pretty_table, set_setting, today, UNKNOWN_ICON,
};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tracing::info;

pub const LATEST_COUNT: usize = 5;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            set(conn, sub)?;
        }
        Some(("show", sub)) => show(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<Decimal> {
    let amount = parse_positive_amount(sub.get_one::<String>("amount").unwrap())?;
    set_setting(conn, "balance", &amount.to_string())?;
    info!(%amount, "balance updated");
    println!("Balance updated: {}", format_brl(amount));
    Ok(amount)
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let Some(balance) = get_balance(conn)? else {
        println!("No balance yet. Set one with `saldus balance set <amount>`.");
        return Ok(());
    };
    let name = get_setting(conn, "name")?.unwrap_or_default();
    println!("Olá, {}", name);
    println!("{}", today().format("%d/%m/%Y"));
    if sub.get_flag("hide") {
        println!("Saldo disponível: •••••••••");
    } else {
        println!("Saldo disponível: {}", format_brl(balance));
    }

    let icons = icon_map(conn)?;
    let rows: Vec<Vec<String>> = load_transactions(conn)?
        .into_iter()
        .take(LATEST_COUNT)
        .map(|t| {
            let icon = icons
                .get(&t.category)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_ICON.to_string());
            vec![
                t.date.to_string(),
                icon,
                t.name,
                format!("{} {}", t.kind.sign(), format_brl(t.value)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Icon", "Name", "Amount"], rows)
    );
    Ok(())
}
