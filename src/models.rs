// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SaldusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }

    /// Sign shown in front of the amount in listings.
    pub fn sign(&self) -> &'static str {
        match self {
            TxKind::Income => "+",
            TxKind::Expense => "-",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = SaldusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "entrada" => Ok(TxKind::Income),
            "expense" | "saida" | "saída" => Ok(TxKind::Expense),
            other => Err(SaldusError::InvalidKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub name: String,
    pub value: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TxKind,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

/// One slice of the monthly spending chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

impl CategoryTotal {
    pub fn new(name: impl Into<String>, total: Decimal) -> Self {
        Self {
            name: name.into(),
            total,
        }
    }
}

pub const WEEK_LABELS: [&str; 4] = ["1-7", "8-14", "15-21", "22-28"];

/// Expense sums for the four day-of-month windows of one month.
/// The last window also holds days 29 to 31.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotals(pub [Decimal; 4]);

impl WeeklyTotals {
    pub fn buckets(&self) -> &[Decimal; 4] {
        &self.0
    }

    pub fn total(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        WEEK_LABELS.into_iter().zip(self.0.iter().copied())
    }
}
