//! Paint context - the drawing side of the host contract

use glide_core::{Color, Rect};

use crate::primitives::{CornerRadius, RoundedRect};

/// Append-only drawing target for one frame.
///
/// Implementations forward to whatever the host renders with. Commands are
/// painted in emission order, so later commands draw on top.
pub trait DrawSurface {
    fn fill_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32);
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRoundedRect { rect: RoundedRect, color: Color },
}

impl PaintCommand {
    pub fn rect(&self) -> Rect {
        match self {
            PaintCommand::FillRoundedRect { rect, .. } => rect.rect,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PaintCommand::FillRoundedRect { color, .. } => *color,
        }
    }
}

/// Recording draw surface
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for PaintContext {
    fn fill_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        let rounded = RoundedRect {
            rect,
            corner_radius: CornerRadius::uniform(radius.max(0.0))
                .clamped_to(rect.width(), rect.height()),
        };
        tracing::trace!(
            "fill_rounded_rect ({:.1}, {:.1}) {:.1}x{:.1} alpha={:.2}",
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height(),
            color.a
        );
        self.commands.push(PaintCommand::FillRoundedRect {
            rect: rounded,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        ctx.fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 100.0), Color::BLACK, 9.0);
        ctx.fill_rounded_rect(Rect::new(2.0, 10.0, 6.0, 20.0), Color::WHITE, 3.0);

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.commands()[0].color(), Color::BLACK);
        assert_eq!(ctx.commands()[1].rect(), Rect::new(2.0, 10.0, 6.0, 20.0));
    }

    #[test]
    fn test_radius_clamped_to_rect() {
        let mut ctx = PaintContext::new();
        ctx.fill_rounded_rect(Rect::new(0.0, 0.0, 6.0, 40.0), Color::WHITE, 9.0);

        let PaintCommand::FillRoundedRect { rect, .. } = &ctx.commands()[0];
        assert_eq!(rect.corner_radius.top_left, 3.0);
    }
}
