//! Taffy Bridge - CSS flexbox reference backend
//!
//! Builds a one-level Taffy tree from the same inputs as
//! [`super::compute_layout`] and reads the result back as [`LayoutResult`].
//! Where box layout and CSS flexbox agree (no shortfall, no too-narrow rows)
//! the two backends produce identical boxes, which is how the hand-written
//! engine is cross-checked.
//!
//! Mapping:
//! - primary axis → Taffy row (width), cross axis → height
//! - flex → `flex_grow` with a zero basis, explicit/measured size → fixed
//!   length that never shrinks
//! - pack → `justify_content`, align → `align_items`; `stretchmax` becomes a
//!   fixed cross length of the tallest item

use taffy::{
    AlignItems as TaffyAlignItems, AvailableSpace, Dimension as TaffyDimension, Display,
    FlexDirection as TaffyFlexDirection, JustifyContent as TaffyJustifyContent, LengthPercentage,
    LengthPercentageAuto, Rect as TaffyRect, Size, Style, TaffyResult, TaffyTree,
};

use super::types::{ComputedBox, ContainerSpec, LayoutItem, LayoutMeta, LayoutResult, Sizing};
use crate::types::{Align, AxisEdges, Pack, Px};

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_justify_content(pack: Pack) -> TaffyJustifyContent {
    match pack {
        Pack::Start => TaffyJustifyContent::FlexStart,
        Pack::Center => TaffyJustifyContent::Center,
        Pack::End => TaffyJustifyContent::FlexEnd,
    }
}

fn to_taffy_align_items(align: Align) -> TaffyAlignItems {
    match align {
        Align::Start | Align::StretchMax => TaffyAlignItems::FlexStart,
        Align::Center => TaffyAlignItems::Center,
        Align::Stretch => TaffyAlignItems::Stretch,
    }
}

fn length(px: Px) -> TaffyDimension {
    TaffyDimension::Length(px.max(0) as f32)
}

fn margin_rect(edges: AxisEdges) -> TaffyRect<LengthPercentageAuto> {
    let edges = edges.clamped();
    TaffyRect {
        left: LengthPercentageAuto::Length(edges.before as f32),
        right: LengthPercentageAuto::Length(edges.after as f32),
        top: LengthPercentageAuto::Length(edges.cross_before as f32),
        bottom: LengthPercentageAuto::Length(edges.cross_after as f32),
    }
}

fn padding_rect(edges: AxisEdges) -> TaffyRect<LengthPercentage> {
    let edges = edges.clamped();
    TaffyRect {
        left: LengthPercentage::Length(edges.before as f32),
        right: LengthPercentage::Length(edges.after as f32),
        top: LengthPercentage::Length(edges.cross_before as f32),
        bottom: LengthPercentage::Length(edges.cross_after as f32),
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn container_style(container: &ContainerSpec) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: TaffyFlexDirection::Row,
        justify_content: Some(to_taffy_justify_content(container.pack)),
        align_items: Some(to_taffy_align_items(container.align)),
        size: Size {
            width: length(container.primary),
            height: length(container.cross),
        },
        padding: padding_rect(container.padding),
        ..Default::default()
    }
}

fn item_style(item: &LayoutItem, align: Align, max_cross: Px) -> Style {
    let (width, flex_grow, flex_basis) = match item.sizing() {
        Sizing::Fixed(size) => (length(size), 0.0, TaffyDimension::Auto),
        Sizing::Flex(flex) => (TaffyDimension::Auto, flex as f32, length(0)),
    };

    let height = match align {
        Align::Stretch => TaffyDimension::Auto,
        Align::StretchMax => length(item.constrain_cross(max_cross - item.margins.cross_total())),
        Align::Start | Align::Center => length(item.resolved_cross()),
    };

    let mut style = Style {
        display: Display::Flex,
        flex_grow,
        flex_shrink: 0.0,
        flex_basis,
        size: Size { width, height },
        margin: margin_rect(item.margins),
        ..Default::default()
    };

    if align == Align::Stretch {
        style.min_size.height = item.min_cross.map_or(TaffyDimension::Auto, length);
        style.max_size.height = item.max_cross.map_or(TaffyDimension::Auto, length);
    }

    style
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute the same layout as [`super::compute_layout`] using Taffy.
///
/// Only `meta.max_cross` is filled in; the sizing totals belong to the box
/// engine. A Taffy error yields zero-size boxes.
pub fn compute_layout_taffy(items: &[LayoutItem], container: &ContainerSpec) -> LayoutResult {
    let max_cross = items
        .iter()
        .map(|item| item.resolved_cross().saturating_add(item.margins.cross_total()))
        .max()
        .unwrap_or(0);

    let boxes = build_and_compute(items, container, max_cross).unwrap_or_else(|err| {
        tracing::warn!(%err, "taffy layout failed, returning empty boxes");
        vec![ComputedBox::default(); items.len()]
    });

    LayoutResult {
        boxes,
        meta: LayoutMeta {
            max_cross,
            ..LayoutMeta::default()
        },
    }
}

fn build_and_compute(
    items: &[LayoutItem],
    container: &ContainerSpec,
    max_cross: Px,
) -> TaffyResult<Vec<ComputedBox>> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children = items
        .iter()
        .map(|item| tree.new_leaf(item_style(item, container.align, max_cross)))
        .collect::<TaffyResult<Vec<_>>>()?;

    let root = tree.new_with_children(container_style(container), &children)?;

    let available = Size {
        width: AvailableSpace::Definite(container.primary.max(0) as f32),
        height: AvailableSpace::Definite(container.cross.max(0) as f32),
    };
    tree.compute_layout(root, available)?;

    children
        .iter()
        .map(|&node| {
            let layout = tree.layout(node)?;
            Ok(ComputedBox {
                primary_offset: layout.location.x.round() as Px,
                cross_offset: layout.location.y.round() as Px,
                primary_size: layout.size.width.round() as Px,
                cross_size: layout.size.height.round() as Px,
            })
        })
        .collect()
}
