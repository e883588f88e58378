//! Min-size shortfall handling.
//!
//! Two cases, both decided by the engine from the pass totals:
//!
//! - **Shortfall**: preferred sizes do not fit but the minimums do. Flexed
//!   items drop to their minimum. The other items give up space in order of
//!   headroom (smallest first), each taking `ceil(shortfall / items_left)`
//!   of the cut without going under its minimum, so whatever one item cannot
//!   absorb rolls over to the next.
//! - **Too narrow**: even the minimums do not fit. Every item is set to its
//!   minimum and the row overflows.

use super::types::LayoutItem;
use crate::types::Px;

/// Reduce fixed items toward their minimums until `shortfall` is absorbed.
///
/// Returns the part of the shortfall that could not be absorbed.
pub fn reduce_toward_minimums(items: &[LayoutItem], sizes: &mut [Px], shortfall: Px) -> Px {
    let mut candidates: Vec<(usize, Px)> = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let min = item.min_size().unwrap_or(0);
        if item.flex_weight().is_some() {
            sizes[i] = min;
        } else {
            candidates.push((i, (sizes[i] - min).max(0)));
        }
    }

    // Stable: equal headroom keeps item order.
    candidates.sort_by_key(|&(_, headroom)| headroom);

    let mut remaining = shortfall.max(0);
    let count = candidates.len();

    for (n, &(i, _)) in candidates.iter().enumerate() {
        let left = (count - n) as Px;
        let cut = ceil_div(remaining.max(0), left);
        let min = items[i].min_size().unwrap_or(0);

        let old = sizes[i];
        let new = (old - cut).max(min).min(old);
        sizes[i] = new;
        remaining -= old - new;
    }

    remaining.max(0)
}

/// Force every item to its minimum, keeping the current size for items that
/// declare none.
pub fn force_minimums(items: &[LayoutItem], sizes: &mut [Px]) {
    for (i, item) in items.iter().enumerate() {
        if let Some(min) = item.min_size() {
            sizes[i] = min;
        }
    }
}

#[inline]
fn ceil_div(n: Px, d: Px) -> Px {
    if d <= 0 {
        0
    } else {
        n / d + Px::from(n % d != 0)
    }
}
