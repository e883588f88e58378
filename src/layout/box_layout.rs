//! HBox / VBox containers.
//!
//! Maps physical children (widths, heights, CSS-style margins) onto the
//! axis-neutral engine and maps the resulting boxes back to rectangles.

use super::container::{reconcile_inner_size, InnerSize};
use super::engine::compute_layout;
use super::types::{ContainerSpec, LayoutItem, LayoutMeta};
use crate::types::{Align, Edges, Orientation, Pack, Px, Rect};

/// A child as a row or column box sees it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxChild {
    pub width: Option<Px>,
    pub height: Option<Px>,
    /// Content width, used when the width is neither set nor flexed.
    pub measured_width: Px,
    /// Content height, used when the height is not set.
    pub measured_height: Px,
    pub flex: Option<f64>,
    pub min_width: Option<Px>,
    pub min_height: Option<Px>,
    pub max_width: Option<Px>,
    pub max_height: Option<Px>,
    pub margins: Edges,
}

impl BoxChild {
    pub fn sized(width: Px, height: Px) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn flexed(flex: f64) -> Self {
        Self {
            flex: Some(flex),
            ..Self::default()
        }
    }

    pub fn with_flex(mut self, flex: f64) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn with_margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_min(mut self, min_width: Option<Px>, min_height: Option<Px>) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }
}

/// Row (`hbox`) or column (`vbox`) container settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxLayout {
    pub orientation: Orientation,
    pub pack: Pack,
    pub align: Align,
    pub padding: Edges,
}

/// Physical result of a box layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxLayoutOutput {
    /// One rectangle per child, in child order, relative to the container.
    pub rects: Vec<Rect>,
    /// Size of the element wrapping the children.
    pub inner: Rect,
    pub meta: LayoutMeta,
}

impl BoxLayout {
    pub fn hbox() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            ..Self::default()
        }
    }

    pub fn vbox() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }

    pub fn with_pack(mut self, pack: Pack) -> Self {
        self.pack = pack;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Axis-neutral view of one child.
    pub fn to_item(&self, child: &BoxChild) -> LayoutItem {
        let margins = child.margins.to_axis(self.orientation);
        if self.orientation.is_horizontal() {
            LayoutItem {
                size: child.width,
                measured: child.measured_width,
                cross: child.height,
                measured_cross: child.measured_height,
                flex: child.flex,
                min: child.min_width,
                min_cross: child.min_height,
                max_cross: child.max_height,
                margins,
            }
        } else {
            LayoutItem {
                size: child.height,
                measured: child.measured_height,
                cross: child.width,
                measured_cross: child.measured_width,
                flex: child.flex,
                min: child.min_height,
                min_cross: child.min_width,
                max_cross: child.max_width,
                margins,
            }
        }
    }

    /// Axis-neutral view of a container of the given outer size.
    pub fn to_container(&self, width: Px, height: Px) -> ContainerSpec {
        let (primary, cross) = self.swap(width, height);
        ContainerSpec {
            primary,
            cross,
            padding: self.padding.to_axis(self.orientation),
            pack: self.pack,
            align: self.align,
        }
    }

    /// Lay out `children` in a container of `width` x `height`.
    pub fn layout(&self, width: Px, height: Px, children: &[BoxChild]) -> BoxLayoutOutput {
        let items: Vec<LayoutItem> = children.iter().map(|c| self.to_item(c)).collect();
        let container = self.to_container(width, height);
        let result = compute_layout(&items, &container);
        let InnerSize { primary, cross } = reconcile_inner_size(&container, &result.meta);

        let rects = result
            .boxes
            .iter()
            .map(|b| {
                let (x, y) = self.swap(b.primary_offset, b.cross_offset);
                let (w, h) = self.swap(b.primary_size, b.cross_size);
                Rect::new(x, y, w, h)
            })
            .collect();

        let (inner_width, inner_height) = self.swap(primary, cross);

        BoxLayoutOutput {
            rects,
            inner: Rect::new(0, 0, inner_width, inner_height),
            meta: result.meta,
        }
    }

    /// (x, y) <-> (primary, cross). The mapping is its own inverse.
    #[inline]
    fn swap(&self, a: Px, b: Px) -> (Px, Px) {
        if self.orientation.is_horizontal() { (a, b) } else { (b, a) }
    }
}
