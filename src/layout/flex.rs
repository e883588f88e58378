//! Flex distribution.
//!
//! Leftover primary space is handed out in item order. Each flexed item takes
//! `ceil(flex * remaining_space / remaining_flex)` and the last flexed item
//! takes whatever is left, so the shares always add up to the space exactly.

use super::types::LayoutItem;
use crate::types::Px;

/// Share `space` among the flexed items, writing their sizes into `sizes`.
///
/// Items that do not flex keep the size already in `sizes`. Returns the
/// number of pixels handed out.
pub fn distribute_flex(items: &[LayoutItem], sizes: &mut [Px], space: Px) -> Px {
    let space = space.max(0);
    let total_flex: f64 = items.iter().filter_map(LayoutItem::flex_weight).sum();
    if total_flex <= 0.0 {
        return 0;
    }

    let Some(last) = items.iter().rposition(|item| item.flex_weight().is_some()) else {
        return 0;
    };

    let mut remaining_space = space;
    let mut remaining_flex = total_flex;

    for (i, item) in items.iter().enumerate() {
        let Some(flex) = item.flex_weight() else {
            continue;
        };

        let share = if i == last {
            remaining_space
        } else if remaining_flex > 0.0 {
            // Multiply first so whole-number splits stay exact.
            ((flex * remaining_space as f64) / remaining_flex).ceil() as Px
        } else {
            0
        };
        let share = share.clamp(0, remaining_space);

        sizes[i] = share;
        remaining_space -= share;
        remaining_flex -= flex;
    }

    space - remaining_space
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flexed(weights: &[f64]) -> Vec<LayoutItem> {
        weights.iter().map(|w| LayoutItem::flexed(*w, 10)).collect()
    }

    #[test]
    fn test_equal_weights() {
        let items = flexed(&[1.0, 1.0, 1.0, 1.0]);
        let mut sizes = vec![0; 4];
        assert_eq!(distribute_flex(&items, &mut sizes, 400), 400);
        assert_eq!(sizes, vec![100, 100, 100, 100]);
    }

    #[test]
    fn test_weighted() {
        let items = flexed(&[1.0, 2.0, 3.0, 4.0]);
        let mut sizes = vec![0; 4];
        distribute_flex(&items, &mut sizes, 400);
        assert_eq!(sizes, vec![40, 80, 120, 160]);
    }

    #[test]
    fn test_remainder_is_absorbed() {
        let items = flexed(&[1.0, 1.0, 1.0]);
        let mut sizes = vec![0; 3];
        distribute_flex(&items, &mut sizes, 10);
        assert_eq!(sizes, vec![4, 3, 3]);
        assert_eq!(sizes.iter().sum::<Px>(), 10);
    }

    #[test]
    fn test_fractional_weights_sum_exactly() {
        let items = flexed(&[0.1, 0.2, 0.7]);
        let mut sizes = vec![0; 3];
        distribute_flex(&items, &mut sizes, 333);
        assert_eq!(sizes.iter().sum::<Px>(), 333);
        assert!(sizes.iter().all(|s| *s >= 0));
    }

    #[test]
    fn test_fixed_items_untouched() {
        let items = vec![
            LayoutItem::fixed(250, 10).with_flex(1.0),
            LayoutItem::flexed(1.0, 10),
            LayoutItem::flexed(1.0, 10),
            LayoutItem::flexed(1.0, 10),
        ];
        let mut sizes = vec![250, 0, 0, 0];
        distribute_flex(&items, &mut sizes, 150);
        assert_eq!(sizes, vec![250, 50, 50, 50]);
    }

    #[test]
    fn test_no_space() {
        let items = flexed(&[1.0, 3.0]);
        let mut sizes = vec![7, 7];
        assert_eq!(distribute_flex(&items, &mut sizes, -20), 0);
        assert_eq!(sizes, vec![0, 0]);
    }

    #[test]
    fn test_no_flexed_items() {
        let items = vec![LayoutItem::fixed(10, 10), LayoutItem::measured(20, 10)];
        let mut sizes = vec![10, 20];
        assert_eq!(distribute_flex(&items, &mut sizes, 100), 0);
        assert_eq!(sizes, vec![10, 20]);
    }
}
