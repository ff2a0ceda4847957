// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures raised while accepting user input.
#[derive(Debug, Error)]
pub enum SaldusError {
    #[error("Invalid amount '{0}', expected e.g. 1234.56 or R$ 1.234,56")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(String),
    #[error("{0} is required")]
    BlankField(&'static str),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("Transaction {0} not found")]
    UnknownTransaction(i64),
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("Unknown icon '{0}' (see `saldus category icons`)")]
    UnknownIcon(String),
    #[error("Invalid transaction type '{0}', expected income|expense")]
    InvalidKind(String),
    #[error("Month {0} is in the future")]
    FutureMonth(String),
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
