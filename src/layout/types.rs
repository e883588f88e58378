//! Layout input and output types.
//!
//! Everything here is axis-neutral: "primary" is the axis items are laid out
//! along, "cross" is the perpendicular one. [`super::box_layout`] maps
//! physical widths and heights onto these.

use serde::Serialize;

use crate::types::{Align, AxisEdges, Pack, Px};

/// Upper bound applied to stretched cross sizes when an item declares no max.
pub const DEFAULT_MAX_CROSS: Px = 1_000_000;

// =============================================================================
// LayoutItem
// =============================================================================

/// One child as measured by the caller.
///
/// An explicit `size` greater than zero always wins over `flex`. Items with
/// neither an explicit size nor a positive flex weight use `measured`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutItem {
    /// Explicit primary size.
    pub size: Option<Px>,
    /// Intrinsic primary size, used when the item is neither sized nor flexed.
    pub measured: Px,
    /// Explicit cross size.
    pub cross: Option<Px>,
    /// Intrinsic cross size, used when `cross` is absent.
    pub measured_cross: Px,
    /// Relative weight for sharing leftover primary space.
    pub flex: Option<f64>,
    /// Primary-axis floor honoured when space runs short.
    pub min: Option<Px>,
    /// Floor for stretched cross sizes.
    pub min_cross: Option<Px>,
    /// Ceiling for stretched cross sizes.
    pub max_cross: Option<Px>,
    pub margins: AxisEdges,
}

/// How an item's primary size is decided before any distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Sizing {
    Fixed(Px),
    Flex(f64),
}

impl LayoutItem {
    /// Item with an explicit primary size.
    pub fn fixed(size: Px, cross: Px) -> Self {
        Self {
            size: Some(size),
            cross: Some(cross),
            ..Self::default()
        }
    }

    /// Item sharing leftover space by `flex` weight.
    pub fn flexed(flex: f64, cross: Px) -> Self {
        Self {
            flex: Some(flex),
            cross: Some(cross),
            ..Self::default()
        }
    }

    /// Item sized by its own content.
    pub fn measured(size: Px, cross: Px) -> Self {
        Self {
            measured: size,
            measured_cross: cross,
            ..Self::default()
        }
    }

    pub fn with_flex(mut self, flex: f64) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn with_min(mut self, min: Px) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_cross_limits(mut self, min: Option<Px>, max: Option<Px>) -> Self {
        self.min_cross = min;
        self.max_cross = max;
        self
    }

    pub fn with_margins(mut self, margins: AxisEdges) -> Self {
        self.margins = margins;
        self
    }

    /// Explicit primary size, if one was given and is positive.
    #[inline]
    pub fn explicit_size(&self) -> Option<Px> {
        self.size.filter(|s| *s > 0)
    }

    /// Flex weight, if this item takes part in flex distribution.
    #[inline]
    pub fn flex_weight(&self) -> Option<f64> {
        if self.explicit_size().is_some() {
            return None;
        }
        self.flex.filter(|f| f.is_finite() && *f > 0.0)
    }

    /// Declared primary minimum, if positive.
    #[inline]
    pub fn min_size(&self) -> Option<Px> {
        self.min.filter(|m| *m > 0)
    }

    pub(crate) fn sizing(&self) -> Sizing {
        match (self.explicit_size(), self.flex_weight()) {
            (Some(size), _) => Sizing::Fixed(size),
            (None, Some(flex)) => Sizing::Flex(flex),
            (None, None) => Sizing::Fixed(self.measured.max(0)),
        }
    }

    /// Cross size before alignment.
    #[inline]
    pub fn resolved_cross(&self) -> Px {
        self.cross
            .filter(|c| *c > 0)
            .unwrap_or(self.measured_cross)
            .max(0)
    }

    /// Clamp a stretched cross size into `[min_cross, max_cross]`.
    ///
    /// The minimum wins when the two conflict.
    pub fn constrain_cross(&self, value: Px) -> Px {
        let max = self.max_cross.filter(|m| *m > 0).unwrap_or(DEFAULT_MAX_CROSS);
        let min = self.min_cross.unwrap_or(0).max(0);
        value.min(max).max(min)
    }
}

// =============================================================================
// ContainerSpec
// =============================================================================

/// The box the items are laid out in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerSpec {
    /// Available primary length, padding included.
    pub primary: Px,
    /// Available cross length, padding included.
    pub cross: Px,
    pub padding: AxisEdges,
    pub pack: Pack,
    pub align: Align,
}

impl ContainerSpec {
    pub fn new(primary: Px, cross: Px) -> Self {
        Self {
            primary,
            cross,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: AxisEdges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_pack(mut self, pack: Pack) -> Self {
        self.pack = pack;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Primary length left for items once padding is removed.
    #[inline]
    pub fn content_primary(&self) -> Px {
        self.primary.max(0).saturating_sub(self.padding.primary_total()).max(0)
    }

    /// Cross length left for items once padding is removed.
    #[inline]
    pub fn content_cross(&self) -> Px {
        self.cross.max(0).saturating_sub(self.padding.cross_total()).max(0)
    }
}

// =============================================================================
// Output
// =============================================================================

/// Resolved box for one item. Offsets are relative to the container's outer
/// edge, so they include padding and the item's leading margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ComputedBox {
    pub primary_offset: Px,
    pub cross_offset: Px,
    pub primary_size: Px,
    pub cross_size: Px,
}

impl ComputedBox {
    /// Trailing edge on the primary axis, margins excluded.
    #[inline]
    pub fn primary_end(&self) -> Px {
        self.primary_offset.saturating_add(self.primary_size)
    }

    /// Trailing edge on the cross axis, margins excluded.
    #[inline]
    pub fn cross_end(&self) -> Px {
        self.cross_offset.saturating_add(self.cross_size)
    }
}

bitflags::bitflags! {
    /// Which sizing branch a layout pass took.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayoutFlags: u8 {
        /// Preferred sizes exceeded the space; items were reduced toward their minimums.
        const SHORTFALL = 1 << 0;
        /// Minimums alone exceed the space; items were forced to their minimums.
        const TOO_NARROW = 1 << 1;
        /// Leftover space was shared among flexed items.
        const FLEXED = 1 << 2;
    }
}

/// Aggregate figures from a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutMeta {
    /// Largest item cross size, cross margins included.
    pub max_cross: Px,
    /// Fixed sizes plus every item's primary margins.
    pub non_flex_primary: Px,
    /// Fixed sizes, flexed minimums and margins.
    pub desired_primary: Px,
    /// Minimums (or fixed sizes) and margins.
    pub minimum_primary: Px,
    /// `desired_primary` minus the content length; positive means short.
    pub shortfall: Px,
    pub flags: LayoutFlags,
}

/// Boxes in input order plus aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutResult {
    pub boxes: Vec<ComputedBox>,
    pub meta: LayoutMeta,
}

impl LayoutResult {
    /// Primary sizes in item order.
    pub fn primary_sizes(&self) -> Vec<Px> {
        self.boxes.iter().map(|b| b.primary_size).collect()
    }

    /// Cross sizes in item order.
    pub fn cross_sizes(&self) -> Vec<Px> {
        self.boxes.iter().map(|b| b.cross_size).collect()
    }

    /// Primary offsets in item order.
    pub fn primary_offsets(&self) -> Vec<Px> {
        self.boxes.iter().map(|b| b.primary_offset).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
