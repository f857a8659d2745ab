//! Widget handles and the per-form widget arena.

pub mod node;
pub mod tree;

pub use node::{Widget, WidgetId, WidgetKind};
pub use tree::WidgetTree;
