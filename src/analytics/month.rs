// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::Transaction;

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Transactions dated in the calendar month of `reference`, in input order.
pub fn filter_month(txs: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    txs.iter()
        .filter(|t| same_month(t.date, reference))
        .cloned()
        .collect()
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn previous_month(reference: NaiveDate) -> NaiveDate {
    let first = first_of_month(reference);
    first.checked_sub_months(Months::new(1)).unwrap_or(first)
}

/// The month after `reference`, or `None` when it would start after `today`.
pub fn next_month(reference: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let next = first_of_month(reference).checked_add_months(Months::new(1))?;
    if next > today {
        return None;
    }
    Some(next)
}
