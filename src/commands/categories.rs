// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::SaldusError;
use crate::utils::{category_exists, load_categories, pretty_table, require_nonblank, ICONS};
use anyhow::Result;
use rusqlite::{params, Connection};
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = require_nonblank(sub.get_one::<String>("name").unwrap(), "Category name")?;
            let icon = sub.get_one::<String>("icon").unwrap();
            add(conn, &name, icon)?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let data = load_categories(conn)?
                .into_iter()
                .map(|c| vec![c.name, c.icon])
                .collect();
            println!("{}", pretty_table(&["Category", "Icon"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let n = conn.execute("DELETE FROM categories WHERE name=?1", params![name])?;
            if n == 0 {
                return Err(SaldusError::UnknownCategory(name.clone()).into());
            }
            println!("Removed category '{}'", name);
        }
        Some(("icons", _)) => {
            let data = ICONS.iter().map(|i| vec![i.to_string()]).collect();
            println!("{}", pretty_table(&["Icon"], data));
        }
        _ => {}
    }
    Ok(())
}

pub fn add(conn: &Connection, name: &str, icon: &str) -> Result<()> {
    if !ICONS.contains(&icon) {
        return Err(SaldusError::UnknownIcon(icon.to_string()).into());
    }
    if category_exists(conn, name)? {
        return Err(SaldusError::DuplicateCategory(name.to_string()).into());
    }
    conn.execute(
        "INSERT INTO categories(name, icon) VALUES (?1, ?2)",
        params![name, icon],
    )?;
    info!(%name, %icon, "category added");
    Ok(())
}
