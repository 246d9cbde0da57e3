//! Exact 0/1 knapsack selection via dynamic programming
//!
//! Given a budget and a list of priced items, picks the subset that
//! maximizes total value without the total price exceeding the budget.
//! Pure and side-effect free; every invocation is independent.

use crate::types::{Item, Selection};

/// Select the optimal item subset for the given budget.
///
/// Runs in O(n * budget) time and space; the full table is allocated up
/// front, so callers gate oversized `n * budget` products before invoking
/// (the request validator enforces this bound). Degenerate input (no
/// items or a zero budget) yields the empty selection rather than an
/// error. Prices and values are `u32` at the boundary and accumulated in
/// `u64`, so the totals cannot overflow.
///
/// Deterministic: when including an item does not strictly improve the
/// value at a cell, the item is excluded, so ties resolve toward the
/// earlier-indexed alternative and repeated calls return identical output.
pub fn select(items: &[Item], budget: u32) -> Selection {
    let n = items.len();
    let budget = budget as usize;

    if n == 0 || budget == 0 {
        return Selection::empty();
    }

    // best[i][b] = max total value using only the first i items with
    // total price <= b. Row 0 stays zero: no items, no value.
    let mut best = vec![vec![0u64; budget + 1]; n + 1];

    for i in 1..=n {
        let price = items[i - 1].price as usize;
        let value = items[i - 1].value as u64;

        for b in 0..=budget {
            best[i][b] = if price <= b {
                best[i - 1][b].max(best[i - 1][b - price] + value)
            } else {
                best[i - 1][b]
            };
        }
    }

    // Backtrack: item i is in the optimum iff its row changed the cell.
    let mut selected = Vec::new();
    let mut b = budget;
    for i in (1..=n).rev() {
        if best[i][b] != best[i - 1][b] {
            selected.push(items[i - 1].clone());
            b -= items[i - 1].price as usize;
        }
    }
    selected.reverse();

    // Recompute the price from the selected items rather than assuming
    // the budget was exhausted.
    let total_price = selected.iter().map(|item| item.price as u64).sum();

    Selection {
        total_price,
        total_value: best[n][budget],
        selected_items: selected,
    }
}
