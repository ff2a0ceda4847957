// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{format_brl, get_balance, get_setting, pretty_table, require_nonblank, set_setting};
use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-name", sub)) => {
            let name = require_nonblank(sub.get_one::<String>("name").unwrap(), "Name")?;
            set_setting(conn, "name", &name)?;
            info!(%name, "profile name updated");
            println!("Name set to '{}'", name);
        }
        Some(("show", _)) => {
            let name = get_setting(conn, "name")?.unwrap_or_default();
            let balance = get_balance(conn)?
                .map(format_brl)
                .unwrap_or_else(|| "(not set)".into());
            println!(
                "{}",
                pretty_table(&["Name", "Balance"], vec![vec![name, balance]])
            );
        }
        _ => {}
    }
    Ok(())
}
