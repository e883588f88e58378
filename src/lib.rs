//! # boxflow
//!
//! Box layout engine for row (`hbox`) and column (`vbox`) containers.
//!
//! Given measured children and a container, boxflow works out every child's
//! offset and size: leftover space is shared by flex weight, rows that do not
//! fit shrink toward per-item minimums, and pack/align place the result on
//! both axes. The engine is a pure function with no rendering dependency.
//!
//! ## Modules
//!
//! - [`types`] - Pack, Align, Orientation, edges and rectangles
//! - [`layout`] - The engine, hbox/vbox mapping and the Taffy reference backend
//! - [`pipeline`] - Reactive recompute on top of spark-signals
//! - [`config`] - JSON scene files
//! - [`renderer`] - Terminal preview of a computed layout

pub mod config;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use layout::{
    compute_layout, compute_layout_taffy, reconcile_inner_size, BoxChild, BoxLayout,
    BoxLayoutOutput, ComputedBox, ContainerSpec, InnerSize, LayoutFlags, LayoutItem,
    LayoutMeta, LayoutResult,
};

pub use pipeline::create_layout_derived;

pub use config::{ConfigError, Scene, SceneItem};

pub use renderer::{detect_preview_size, render_layout, write_grid, CellGrid, Scale};
