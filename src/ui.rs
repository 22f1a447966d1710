//! Rendering layer for colordir.
//!
//! - [render]: layout selection (list vs. grid) and output writing.
//! - [theme]: the injected color/icon lookup keyed by category.

pub mod render;
pub mod theme;

pub use render::{RenderContext, Renderer, grid_selected};
pub use theme::{EntryStyle, Theme};
