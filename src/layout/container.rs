//! Inner container reconciliation.
//!
//! After the child boxes are known, the element wrapping them has to be
//! resized on the cross axis: stretched layouts keep the container's cross
//! length, everything else grows (or shrinks) to the tallest child plus
//! padding. Centered layouts never shrink below the container.

use super::types::{ContainerSpec, LayoutMeta};
use crate::types::{Align, Px};

/// Size of the element that wraps the laid-out items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InnerSize {
    pub primary: Px,
    pub cross: Px,
}

/// Work out the wrapping element's size from a finished layout pass.
pub fn reconcile_inner_size(container: &ContainerSpec, meta: &LayoutMeta) -> InnerSize {
    let grown = meta.max_cross.saturating_add(container.padding.cross_total());
    let available = container.cross.max(0);

    let cross = match container.align {
        Align::Stretch => available,
        Align::Center => available.max(grown),
        Align::Start | Align::StretchMax => grown,
    };

    InnerSize {
        primary: container.primary.max(0),
        cross,
    }
}
