// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use saldus::models::TxKind;
use saldus::utils::{format_brl, parse_amount, parse_month, parse_positive_amount, resolve_month};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parses_brazilian_and_plain_amounts() {
    assert_eq!(parse_amount("R$ 1.234,56").unwrap(), dec("1234.56"));
    assert_eq!(parse_amount("R$1.000.000,00").unwrap(), dec("1000000"));
    assert_eq!(parse_amount("12,5").unwrap(), dec("12.5"));
    assert_eq!(parse_amount("1234.56").unwrap(), dec("1234.56"));
    assert_eq!(parse_amount(" 42 ").unwrap(), dec("42"));
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("1.234.5,00").is_err());
    assert!(parse_positive_amount("0").is_err());
    assert_eq!(parse_positive_amount("10.556").unwrap(), dec("10.56"));
}

#[test]
fn amounts_that_round_to_zero_are_rejected() {
    assert!(parse_positive_amount("0.004").is_err());
    assert!(parse_positive_amount("R$ 0,00").is_err());
    assert_eq!(parse_positive_amount("0.01").unwrap(), dec("0.01"));
}

#[test]
fn dot_grouped_thousands_without_cents_are_brazilian() {
    assert_eq!(parse_amount("R$ 1.234").unwrap(), dec("1234"));
    assert_eq!(parse_amount("1.234.567").unwrap(), dec("1234567"));
    assert_eq!(parse_positive_amount("R$ 1.234").unwrap(), dec("1234"));
    assert_eq!(parse_amount("R$ 50").unwrap(), dec("50"));
    assert_eq!(parse_amount("1.5").unwrap(), dec("1.5"));
}

#[test]
fn formats_brl() {
    assert_eq!(format_brl(dec("950")), "R$ 950,00");
    assert_eq!(format_brl(dec("1234.5")), "R$ 1.234,50");
    assert_eq!(format_brl(dec("1234567.891")), "R$ 1.234.567,89");
    assert_eq!(format_brl(dec("-200")), "-R$ 200,00");
    assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
}

#[test]
fn resolves_reference_month() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
    assert_eq!(
        resolve_month(None, today).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    );
    let may = "2025-05".to_string();
    assert_eq!(resolve_month(Some(&may), today).unwrap(), parse_month("2025-05").unwrap());
    let july = "2025-07".to_string();
    assert!(resolve_month(Some(&july), today).is_err());
    assert!(parse_month("2025-13").is_err());
}

#[test]
fn transaction_kind_accepts_portuguese_labels() {
    assert_eq!("entrada".parse::<TxKind>().unwrap(), TxKind::Income);
    assert_eq!("Saída".parse::<TxKind>().unwrap(), TxKind::Expense);
    assert_eq!("EXPENSE".parse::<TxKind>().unwrap(), TxKind::Expense);
    assert!("transfer".parse::<TxKind>().is_err());
}
