// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{CategoryTotal, Transaction, TxKind};

pub const TOP_CATEGORIES: usize = 5;
pub const OTHER_LABEL: &str = "Other";

/// Expense totals per category, highest first.
///
/// Groups keep the order in which their category first appears, and the sort is
/// stable, so among equal totals the category seen first ranks higher.
/// Categories whose total is not positive are left out.
pub fn rank_categories(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CategoryTotal> = Vec::new();

    for t in txs.iter().filter(|t| t.is_expense()) {
        match slots.get(t.category.as_str()) {
            Some(&i) => groups[i].total += t.value,
            None => {
                slots.insert(t.category.as_str(), groups.len());
                groups.push(CategoryTotal::new(t.category.clone(), t.value));
            }
        }
    }

    groups.retain(|g| g.total > Decimal::ZERO);
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups
}

/// Chart slices: the five largest categories, then one "Other" slice holding
/// the rest when that remainder is positive.
pub fn category_aggregate(txs: &[Transaction]) -> Vec<CategoryTotal> {
    let mut ranked = rank_categories(txs);
    let rest: Decimal = if ranked.len() > TOP_CATEGORIES {
        ranked
            .drain(TOP_CATEGORIES..)
            .map(|c| c.total)
            .sum()
    } else {
        Decimal::ZERO
    };
    if rest > Decimal::ZERO {
        ranked.push(CategoryTotal::new(OTHER_LABEL, rest));
    }
    debug!(slices = ranked.len(), %rest, "aggregated categories");
    ranked
}

pub fn top_categories(txs: &[Transaction], n: usize) -> Vec<CategoryTotal> {
    let mut ranked = rank_categories(txs);
    ranked.truncate(n);
    ranked
}

fn total_of(txs: &[Transaction], kind: TxKind) -> Decimal {
    txs.iter().filter(|t| t.kind == kind).map(|t| t.value).sum()
}

pub fn expense_total(txs: &[Transaction]) -> Decimal {
    total_of(txs, TxKind::Expense)
}

pub fn income_total(txs: &[Transaction]) -> Decimal {
    total_of(txs, TxKind::Income)
}
