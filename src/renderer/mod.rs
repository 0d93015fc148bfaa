//! Render boundary
//!
//! Turns the world into draw descriptors. Vertex submission happens outside
//! this crate.

pub mod draw;

pub use draw::{DrawInstance, Drawable, Primitive, as_bytes, colors, draw_list};
