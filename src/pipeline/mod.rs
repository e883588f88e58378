//! Reactive pipeline.
//!
//! Wraps the pure layout engine in a spark-signals derived so callers that
//! hold their measurements in signals get recomputation on change and a
//! cached result otherwise.

mod layout_derived;

pub use layout_derived::create_layout_derived;
