//! Layout Derived - Reactive layout computation.
//!
//! Creates a Derived that recomputes the box layout whenever:
//! - The container is resized or its pack/align/padding change
//! - The child set changes (added, removed, remeasured)
//!
//! Between changes, reads are served from the last computed result.

use spark_signals::{derived, Derived, Signal};

use crate::layout::{compute_layout, ContainerSpec, LayoutItem, LayoutResult};

/// Create the layout derived.
///
/// Reading `items` and `container` inside the derived creates the reactive
/// dependencies; setting either signal invalidates the cached result.
pub fn create_layout_derived(
    items: Signal<Vec<LayoutItem>>,
    container: Signal<ContainerSpec>,
) -> Derived<LayoutResult> {
    derived(move || {
        let items = items.get();
        let container = container.get();

        tracing::trace!(
            items = items.len(),
            primary = container.primary,
            "layout derived recompute"
        );

        compute_layout(&items, &container)
    })
}

// =============================================================================
// Tests
// =============================================================================
