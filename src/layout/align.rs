//! Pack and align placement.
//!
//! Runs after sizing. Pack moves the whole item block along the primary axis
//! when the items leave space over; align places (or stretches) each item on
//! the cross axis independently.

use super::types::{ComputedBox, ContainerSpec, LayoutItem};
use crate::types::{Align, Pack, Px};

/// Leading offset of the item block for the given leftover primary space.
///
/// Overflowing blocks (negative leftover) always start at the leading edge.
pub fn pack_offset(pack: Pack, leftover: Px) -> Px {
    let leftover = leftover.max(0);
    match pack {
        Pack::Start => 0,
        Pack::Center => leftover / 2,
        Pack::End => leftover,
    }
}

/// Cross offset and cross size for one item.
///
/// `max_cross` is the largest cross extent among all items, margins included.
pub fn align_cross(
    align: Align,
    item: &LayoutItem,
    container: &ContainerSpec,
    max_cross: Px,
) -> (Px, Px) {
    let margins = item.margins.clamped();
    let leading = container.padding.cross_before.max(0).saturating_add(margins.cross_before);
    let available = container.content_cross();
    let own = item.resolved_cross();

    match align {
        Align::Start => (leading, own),
        Align::Center => {
            let diff = available.saturating_sub(own).saturating_sub(margins.cross_total());
            let shift = if diff > 0 { diff / 2 } else { 0 };
            (leading.saturating_add(shift), own)
        }
        Align::Stretch => {
            let size = item.constrain_cross(available.saturating_sub(margins.cross_total()));
            (leading, size.max(0))
        }
        Align::StretchMax => {
            let size = item.constrain_cross(max_cross - margins.cross_total());
            (leading, size.max(0))
        }
    }
}

/// Turn resolved primary sizes into boxes.
pub fn place(
    items: &[LayoutItem],
    sizes: &[Px],
    container: &ContainerSpec,
    max_cross: Px,
) -> Vec<ComputedBox> {
    let used = items
        .iter()
        .zip(sizes)
        .map(|(item, size)| size.saturating_add(item.margins.primary_total()))
        .fold(0, Px::saturating_add);
    let leftover = container.content_primary().saturating_sub(used);

    let mut offset = container
        .padding
        .before
        .max(0)
        .saturating_add(pack_offset(container.pack, leftover));

    items
        .iter()
        .zip(sizes)
        .map(|(item, &size)| {
            let margins = item.margins.clamped();
            offset = offset.saturating_add(margins.before);
            let primary_offset = offset;
            offset = offset.saturating_add(size).saturating_add(margins.after);

            let (cross_offset, cross_size) =
                align_cross(container.align, item, container, max_cross);

            ComputedBox {
                primary_offset,
                cross_offset,
                primary_size: size,
                cross_size,
            }
        })
        .collect()
}
