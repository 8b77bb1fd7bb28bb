//! Scene (draw stream) types.
//!
//! A frame is recorded as an ordered list of renderer-agnostic commands and
//! replayed by the renderers in insertion order (back-to-front).

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd};
pub use list::DrawList;
