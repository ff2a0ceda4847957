// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{category, conn, sub_matches, tx};
use rust_decimal::Decimal;
use saldus::commands::{doctor, reports};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seeded() -> rusqlite::Connection {
    let conn = conn();
    for (name, icon) in [
        ("Alimentação", "restaurant"),
        ("Transporte", "car"),
        ("Lazer", "game-controller"),
        ("Saúde", "medical"),
    ] {
        category(&conn, name, icon);
    }
    tx(&conn, "Supermercado", "150.90", "Alimentação", "2025-06-03", "expense");
    tx(&conn, "Posto", "200.00", "Transporte", "2025-06-09", "expense");
    tx(&conn, "Cinema", "50.00", "Lazer", "2025-06-15", "expense");
    tx(&conn, "Farmácia", "100.00", "Saúde", "2025-06-22", "expense");
    tx(&conn, "Delivery", "300.00", "Alimentação", "2025-06-30", "expense");
    tx(&conn, "Salário", "4000.00", "Renda", "2025-06-05", "income");
    tx(&conn, "Mercado", "80.00", "Alimentação", "2025-05-28", "expense");
    conn
}

#[test]
fn pie_report_ranks_month_expenses_with_colors() {
    let conn = seeded();
    let m = sub_matches(&["saldus", "report", "pie", "--month", "2025-06"]);
    let report = reports::pie_report(&conn, &m).unwrap();

    let slices: Vec<(&str, Decimal)> = report
        .slices
        .iter()
        .map(|s| (s.name.as_str(), s.total))
        .collect();
    assert_eq!(
        slices,
        vec![
            ("Alimentação", dec("450.90")),
            ("Transporte", dec("200")),
            ("Saúde", dec("100")),
            ("Lazer", dec("50")),
        ]
    );
    assert_eq!(report.total, dec("800.90"));
    assert_eq!(report.slices[0].color, "#891b70");
    assert_eq!(report.previous, "2025-05");
    assert_eq!(report.next.as_deref(), Some("2025-07"));
}

#[test]
fn weekly_report_buckets_by_day_window() {
    let conn = seeded();
    let m = sub_matches(&["saldus", "report", "weekly", "--month", "2025-06"]);
    let weeks = reports::weekly_report(&conn, &m).unwrap();
    let totals: Vec<(&str, Decimal)> = weeks.iter().map(|w| (w.label, w.total)).collect();
    assert_eq!(
        totals,
        vec![
            ("1-7", dec("150.90")),
            ("8-14", dec("200")),
            ("15-21", dec("50")),
            ("22-28", dec("400")),
        ]
    );
}

#[test]
fn top_report_defaults_to_three() {
    let conn = seeded();
    let m = sub_matches(&["saldus", "report", "top", "--month", "2025-06"]);
    let top = reports::top_report(&conn, &m).unwrap();
    let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alimentação", "Transporte", "Saúde"]);
    assert_eq!(top[0].rank, 1);
}

#[test]
fn summary_report_nets_income_and_expense() {
    let conn = seeded();
    let m = sub_matches(&["saldus", "report", "summary", "--month", "2025-06"]);
    let s = reports::summary_report(&conn, &m).unwrap();
    assert_eq!(s.income, dec("4000"));
    assert_eq!(s.expense, dec("800.90"));
    assert_eq!(s.net, dec("3199.10"));
}

#[test]
fn empty_month_gives_empty_reports() {
    let conn = seeded();
    let m = sub_matches(&["saldus", "report", "pie", "--month", "2024-01"]);
    let report = reports::pie_report(&conn, &m).unwrap();
    assert!(report.slices.is_empty());
    assert_eq!(report.total, Decimal::ZERO);

    let m = sub_matches(&["saldus", "report", "weekly", "--month", "2024-01"]);
    let weeks = reports::weekly_report(&conn, &m).unwrap();
    assert_eq!(weeks.len(), 4);
    assert!(weeks.iter().all(|w| w.total.is_zero()));
}

#[test]
fn doctor_flags_unregistered_categories() {
    let conn = seeded();
    let issues = doctor::check(&conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0][0], "unregistered_category");
    assert!(issues[0][1].contains("Renda"));
}
