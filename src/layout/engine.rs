//! Box layout engine.
//!
//! Computes every child's box inside an hbox/vbox style container.
//!
//! # Algorithm
//!
//! 1. **Resolve**: fixed or measured primary size per item; totals for
//!    non-flex, desired and minimum space; largest cross extent
//! 2. **Size**: exactly one of
//!    - too narrow: force minimums ([`shortfall::force_minimums`])
//!    - shortfall: reduce toward minimums ([`shortfall::reduce_toward_minimums`])
//!    - otherwise: share leftover space by flex ([`flex::distribute_flex`])
//! 3. **Place**: pack offset, sequential primary offsets, cross alignment
//!
//! The function is pure: identical inputs give identical output and
//! malformed input (negative lengths, zero flex without a size) degrades to
//! zero-size boxes instead of failing.

use super::align::place;
use super::flex::distribute_flex;
use super::shortfall::{force_minimums, reduce_toward_minimums};
use super::types::{ContainerSpec, LayoutFlags, LayoutItem, LayoutMeta, LayoutResult, Sizing};
use crate::types::Px;

/// Lay out `items` inside `container`.
///
/// Boxes come back in item order.
pub fn compute_layout(items: &[LayoutItem], container: &ContainerSpec) -> LayoutResult {
    if items.is_empty() {
        return LayoutResult::default();
    }

    let available = container.content_primary();

    // =========================================================================
    // PASS 1: Resolve per-item sizes and totals
    // =========================================================================

    let mut sizes: Vec<Px> = Vec::with_capacity(items.len());
    let mut meta = LayoutMeta::default();

    for item in items {
        let margins = item.margins.primary_total();
        let sizing = item.sizing();

        let size = match sizing {
            Sizing::Fixed(size) => size,
            Sizing::Flex(_) => 0,
        };
        let min = item.min_size();

        let desired = match sizing {
            Sizing::Fixed(size) => size,
            Sizing::Flex(_) => min.unwrap_or(0),
        };

        // Totals saturate: lengths are unbounded and overflow must not wrap.
        meta.non_flex_primary = meta.non_flex_primary.saturating_add(margins.saturating_add(size));
        meta.desired_primary = meta.desired_primary.saturating_add(margins.saturating_add(desired));
        meta.minimum_primary = meta
            .minimum_primary
            .saturating_add(margins.saturating_add(min.unwrap_or(size)));
        meta.max_cross = meta
            .max_cross
            .max(item.resolved_cross().saturating_add(item.margins.cross_total()));

        sizes.push(size);
    }

    meta.shortfall = meta.desired_primary.saturating_sub(available);

    tracing::trace!(
        items = items.len(),
        available,
        non_flex = meta.non_flex_primary,
        desired = meta.desired_primary,
        minimum = meta.minimum_primary,
        "box layout resolved"
    );

    // =========================================================================
    // PASS 2: Size along the primary axis
    // =========================================================================

    if meta.minimum_primary > available {
        meta.flags |= LayoutFlags::TOO_NARROW;
        force_minimums(items, &mut sizes);
        tracing::debug!(
            minimum = meta.minimum_primary,
            available,
            "box layout too narrow, forcing minimums"
        );
    } else if meta.shortfall > 0 {
        meta.flags |= LayoutFlags::SHORTFALL;
        let unabsorbed = reduce_toward_minimums(items, &mut sizes, meta.shortfall);
        tracing::debug!(
            shortfall = meta.shortfall,
            unabsorbed,
            "box layout short, reducing toward minimums"
        );
    } else {
        let flex_space = available.saturating_sub(meta.non_flex_primary);
        if distribute_flex(items, &mut sizes, flex_space) > 0 || has_flex(items) {
            meta.flags |= LayoutFlags::FLEXED;
        }
    }

    // =========================================================================
    // PASS 3: Pack and align
    // =========================================================================

    let boxes = place(items, &sizes, container, meta.max_cross);

    LayoutResult { boxes, meta }
}

fn has_flex(items: &[LayoutItem]) -> bool {
    items.iter().any(|item| item.flex_weight().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Align, AxisEdges, Pack};

    fn flex_row(weights: &[f64]) -> Vec<LayoutItem> {
        weights.iter().map(|w| LayoutItem::flexed(*w, 20)).collect()
    }

    fn minimum_row() -> Vec<LayoutItem> {
        vec![
            LayoutItem::fixed(100, 10).with_min(100),
            LayoutItem::fixed(200, 10).with_min(120),
            LayoutItem::fixed(200, 10).with_min(120),
            LayoutItem::fixed(200, 10).with_min(120),
        ]
    }

    #[test]
    fn test_empty() {
        let result = compute_layout(&[], &ContainerSpec::new(400, 100));
        assert!(result.is_empty());
        assert_eq!(result.meta, LayoutMeta::default());
    }

    #[test]
    fn test_equal_flex() {
        let result = compute_layout(&flex_row(&[1.0; 4]), &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![100, 100, 100, 100]);
        assert_eq!(result.primary_offsets(), vec![0, 100, 200, 300]);
        assert!(result.meta.flags.contains(LayoutFlags::FLEXED));
    }

    #[test]
    fn test_weighted_flex() {
        let items = flex_row(&[1.0, 2.0, 3.0, 4.0]);
        let result = compute_layout(&items, &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![40, 80, 120, 160]);
        assert_eq!(result.primary_offsets(), vec![0, 40, 120, 240]);
    }

    #[test]
    fn test_fixed_size_overrides_flex() {
        let mut items = vec![LayoutItem::fixed(250, 20).with_flex(1.0)];
        items.extend(flex_row(&[1.0; 3]));
        let result = compute_layout(&items, &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![250, 50, 50, 50]);
    }

    #[test]
    fn test_margins_reduce_flex_space() {
        let items: Vec<_> = flex_row(&[1.0; 4])
            .into_iter()
            .map(|item| item.with_margins(AxisEdges::primary(10)))
            .collect();
        let result = compute_layout(&items, &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![80, 80, 80, 80]);
        assert_eq!(result.primary_offsets(), vec![10, 110, 210, 310]);
    }

    #[test]
    fn test_padding_reduces_flex_space() {
        let container = ContainerSpec::new(400, 100).with_padding(AxisEdges::new(10, 30, 0, 0));
        let result = compute_layout(&flex_row(&[1.0, 1.0]), &container);
        assert_eq!(result.primary_sizes(), vec![180, 180]);
        assert_eq!(result.primary_offsets(), vec![10, 190]);
    }

    #[test]
    fn test_natural_widths_when_space_allows() {
        let result = compute_layout(&minimum_row(), &ContainerSpec::new(700, 100));
        assert_eq!(result.primary_sizes(), vec![100, 200, 200, 200]);
        assert_eq!(result.primary_offsets(), vec![0, 100, 300, 500]);
        assert!(result.meta.flags.is_empty());
    }

    #[test]
    fn test_shortfall_reduces_toward_minimums() {
        let result = compute_layout(&minimum_row(), &ContainerSpec::new(500, 100));
        assert_eq!(result.primary_sizes(), vec![100, 133, 133, 134]);
        assert_eq!(result.primary_offsets(), vec![0, 100, 233, 366]);
        assert_eq!(result.meta.shortfall, 200);
        assert!(result.meta.flags.contains(LayoutFlags::SHORTFALL));
    }

    #[test]
    fn test_too_narrow_forces_minimums() {
        let result = compute_layout(&minimum_row(), &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![100, 120, 120, 120]);
        assert_eq!(result.primary_offsets(), vec![0, 100, 220, 340]);
        assert_eq!(result.meta.minimum_primary, 460);
        assert!(result.meta.flags.contains(LayoutFlags::TOO_NARROW));
    }

    #[test]
    fn test_flexed_minimums_in_shortfall() {
        let items = vec![
            LayoutItem::flexed(1.0, 10).with_min(50),
            LayoutItem::fixed(200, 10).with_min(100),
        ];
        let result = compute_layout(&items, &ContainerSpec::new(200, 100));
        // desired = 50 + 200 = 250, shortfall 50 absorbed by the fixed item
        assert_eq!(result.primary_sizes(), vec![50, 150]);
    }

    #[test]
    fn test_pack_end() {
        let items = vec![LayoutItem::fixed(50, 10), LayoutItem::fixed(70, 10)];
        let container = ContainerSpec::new(400, 100).with_pack(Pack::End);
        let result = compute_layout(&items, &container);
        assert_eq!(result.primary_offsets(), vec![280, 330]);
        assert_eq!(result.boxes[1].primary_end(), 400);
    }

    #[test]
    fn test_pack_center() {
        let items = vec![LayoutItem::fixed(50, 10), LayoutItem::fixed(70, 10)];
        let container = ContainerSpec::new(400, 100).with_pack(Pack::Center);
        let result = compute_layout(&items, &container);
        assert_eq!(result.primary_offsets(), vec![140, 190]);
        assert_eq!(400 - result.boxes[1].primary_end(), result.boxes[0].primary_offset);
    }

    #[test]
    fn test_pack_has_no_effect_with_flex() {
        for pack in [Pack::Start, Pack::Center, Pack::End] {
            let container = ContainerSpec::new(400, 100).with_pack(pack);
            let result = compute_layout(&flex_row(&[1.0, 1.0]), &container);
            assert_eq!(result.primary_offsets(), vec![0, 200], "{pack}");
        }
    }

    #[test]
    fn test_align_start() {
        let items = vec![LayoutItem::fixed(10, 20), LayoutItem::fixed(10, 40)];
        let container = ContainerSpec::new(400, 100).with_padding(AxisEdges::cross(5));
        let result = compute_layout(&items, &container);
        assert_eq!(result.cross_sizes(), vec![20, 40]);
        assert!(result.boxes.iter().all(|b| b.cross_offset == 5));
    }

    #[test]
    fn test_align_center() {
        let items = vec![LayoutItem::fixed(10, 20), LayoutItem::fixed(10, 40)];
        let container = ContainerSpec::new(400, 100).with_align(Align::Center);
        let result = compute_layout(&items, &container);
        assert_eq!(result.boxes[0].cross_offset, 40);
        assert_eq!(result.boxes[1].cross_offset, 30);
    }

    #[test]
    fn test_align_stretch() {
        let items = vec![LayoutItem::fixed(10, 20), LayoutItem::fixed(10, 40)];
        let container = ContainerSpec::new(400, 100)
            .with_padding(AxisEdges::cross(10))
            .with_align(Align::Stretch);
        let result = compute_layout(&items, &container);
        assert_eq!(result.cross_sizes(), vec![80, 80]);
        assert!(result.boxes.iter().all(|b| b.cross_offset == 10));
        assert!(result.boxes.iter().all(|b| b.cross_end() == 90));
    }

    #[test]
    fn test_align_stretchmax() {
        let items: Vec<_> = [10, 20, 30, 40]
            .iter()
            .map(|c| LayoutItem::fixed(10, *c))
            .collect();
        let container = ContainerSpec::new(400, 100).with_align(Align::StretchMax);
        let result = compute_layout(&items, &container);
        assert_eq!(result.cross_sizes(), vec![40, 40, 40, 40]);
        assert_eq!(result.meta.max_cross, 40);
    }

    #[test]
    fn test_zero_flex_and_zero_size_collapses() {
        let items = vec![
            LayoutItem { flex: Some(0.0), ..LayoutItem::default() },
            LayoutItem::fixed(50, 10),
        ];
        let result = compute_layout(&items, &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![0, 50]);
        assert_eq!(result.boxes[0].cross_size, 0);
    }

    #[test]
    fn test_negative_container_degrades() {
        let result = compute_layout(&flex_row(&[1.0, 1.0]), &ContainerSpec::new(-100, -5));
        assert_eq!(result.primary_sizes(), vec![0, 0]);
        assert!(result.boxes.iter().all(|b| b.primary_offset >= 0));
    }

    #[test]
    fn test_huge_lengths_saturate() {
        let items = vec![LayoutItem::fixed(1_500_000_000, 10); 2];
        let result = compute_layout(&items, &ContainerSpec::new(400, 100));
        assert_eq!(result.primary_sizes(), vec![1_500_000_000, 1_500_000_000]);
        assert_eq!(result.primary_offsets(), vec![0, 1_500_000_000]);
        assert_eq!(result.boxes[1].primary_end(), Px::MAX);
        assert_eq!(result.meta.desired_primary, Px::MAX);
        assert!(result.meta.flags.contains(LayoutFlags::TOO_NARROW));
    }

    #[test]
    fn test_huge_margins_and_padding_saturate() {
        let items = vec![
            LayoutItem::flexed(1.0, Px::MAX).with_margins(AxisEdges::new(Px::MAX, Px::MAX, 1, 1)),
            LayoutItem::fixed(Px::MAX, 10),
        ];
        let container = ContainerSpec::new(Px::MAX, Px::MAX)
            .with_padding(AxisEdges::new(Px::MAX, 0, Px::MAX, 0))
            .with_pack(Pack::Center)
            .with_align(Align::Center);
        let result = compute_layout(&items, &container);
        assert_eq!(result.boxes.len(), 2);
        assert_eq!(result.meta.max_cross, Px::MAX);
        assert!(result.boxes.iter().all(|b| b.primary_size >= 0 && b.cross_size >= 0));
    }

    #[test]
    fn test_idempotent() {
        let items = minimum_row();
        let container = ContainerSpec::new(500, 100)
            .with_align(Align::Center)
            .with_pack(Pack::End);
        assert_eq!(compute_layout(&items, &container), compute_layout(&items, &container));
    }
}
