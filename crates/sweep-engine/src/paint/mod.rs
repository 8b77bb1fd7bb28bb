//! Paint model shared by the renderers.
//!
//! Colors are linear premultiplied RGBA. Geometry types live in `coords`.

mod color;

pub use color::Color;
