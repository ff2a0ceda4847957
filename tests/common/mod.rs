// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use rusqlite::{params, Connection};

pub fn conn() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    saldus::db::init_schema(&mut conn).unwrap();
    conn
}

pub fn category(conn: &Connection, name: &str, icon: &str) {
    conn.execute(
        "INSERT INTO categories(name, icon) VALUES (?1, ?2)",
        params![name, icon],
    )
    .unwrap();
}

pub fn tx(conn: &Connection, name: &str, value: &str, category: &str, date: &str, kind: &str) {
    conn.execute(
        "INSERT INTO transactions(name, value, category, date, type) VALUES (?1,?2,?3,?4,?5)",
        params![name, value, category, date, kind],
    )
    .unwrap();
}

/// Runs `argv` through the CLI and returns the matches of the innermost subcommand.
pub fn sub_matches(argv: &[&str]) -> clap::ArgMatches {
    let mut m = saldus::cli::build_cli().get_matches_from(argv);
    loop {
        let next = match m.subcommand() {
            Some((_, sub)) => sub.clone(),
            None => return m,
        };
        m = next;
    }
}
