// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{Transaction, WeeklyTotals};

/// Bucket for a day of month: 1-7 -> 0, 8-14 -> 1, 15-21 -> 2, 22 and later -> 3.
/// These are fixed windows, not calendar weeks.
pub fn week_index(day_of_month: u32) -> usize {
    (day_of_month.saturating_sub(1) / 7).min(3) as usize
}

pub fn weekly_totals(txs: &[Transaction], month: u32, year: i32) -> WeeklyTotals {
    let mut buckets = [Decimal::ZERO; 4];
    for t in txs
        .iter()
        .filter(|t| t.is_expense() && t.date.month() == month && t.date.year() == year)
    {
        buckets[week_index(t.date.day())] += t.value;
    }
    WeeklyTotals(buckets)
}
