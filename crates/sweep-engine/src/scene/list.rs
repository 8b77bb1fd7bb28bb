use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

use super::{DrawCmd, RectCmd, TextCmd};

/// Recorded draw stream for a frame.
///
/// `clear()` keeps the allocation, so a list reused every frame stops
/// allocating once warmed up.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a solid rectangle. Empty rectangles are dropped.
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        let rect = rect.normalized();
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a single-line text run. Empty strings are dropped.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.push(DrawCmd::Text(TextCmd { text, font, size, color, origin }));
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::black());
        dl.push_text("60 FPS", FontId(0), 33.0, Color::black(), Vec2::default());

        assert!(matches!(dl.items()[0], DrawCmd::Rect(_)));
        assert!(matches!(dl.items()[1], DrawCmd::Text(_)));
        assert_eq!(dl.rects().count(), 1);
        assert_eq!(dl.texts().count(), 1);
    }

    #[test]
    fn degenerate_commands_are_dropped() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::black());
        dl.push_text("", FontId(0), 33.0, Color::black(), Vec2::default());
        assert!(dl.is_empty());
    }

    #[test]
    fn negative_size_rect_is_normalized() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::new(10.0, 10.0, -5.0, 5.0), Color::black());
        let r = dl.rects().next().unwrap();
        assert_eq!(r.rect, Rect::new(5.0, 10.0, 5.0, 5.0));
    }

    #[test]
    fn clear_empties_the_list() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::black());
        dl.clear();
        assert!(dl.is_empty());
    }
}
