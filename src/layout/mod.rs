//! boxflow - Layout Module
//!
//! Box layout computation for row and column containers.
//!
//! # Architecture
//!
//! The engine works on axis-neutral measurements and is a pure function:
//!
//! 1. [`compute_layout`] sizes and places items ([`flex`], [`shortfall`],
//!    [`align`])
//! 2. [`reconcile_inner_size`] sizes the element wrapping the items
//! 3. [`BoxLayout`] maps physical hbox/vbox children onto both
//!
//! [`compute_layout_taffy`] runs the same inputs through
//! [Taffy](https://github.com/DioxusLabs/taffy) and is kept as a CSS flexbox
//! reference for cross-checking.
//!
//! # Example
//!
//! ```
//! use boxflow::layout::{compute_layout, ContainerSpec, LayoutItem};
//!
//! let items = vec![LayoutItem::flexed(1.0, 20), LayoutItem::flexed(3.0, 20)];
//! let result = compute_layout(&items, &ContainerSpec::new(400, 100));
//! assert_eq!(result.primary_sizes(), vec![100, 300]);
//! ```

pub mod align;
pub mod flex;
pub mod shortfall;

mod box_layout;
mod container;
mod engine;
mod taffy_bridge;
mod types;

pub use box_layout::{BoxChild, BoxLayout, BoxLayoutOutput};
pub use container::{reconcile_inner_size, InnerSize};
pub use engine::compute_layout;
pub use taffy_bridge::compute_layout_taffy;
pub use types::*;
