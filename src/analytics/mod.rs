// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure reporting core. Every function here recomputes its result from the
//! transactions it is handed; nothing is cached or written back.

pub mod category;
pub mod color;
pub mod month;
pub mod weekly;

pub use category::{
    category_aggregate, expense_total, income_total, rank_categories, top_categories, OTHER_LABEL,
    TOP_CATEGORIES,
};
pub use color::category_color;
pub use month::{filter_month, next_month, previous_month, same_month};
pub use weekly::{week_index, weekly_totals};
