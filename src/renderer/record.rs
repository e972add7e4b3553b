//! Command-recording backend
//!
//! Records every surface call verbatim instead of painting. This is how
//! the renderer is observed headlessly: tests assert on exactly the calls
//! a frame issued, including their order.

use glam::Affine2;

use super::surface::{Color, Surface};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear,
    SetTransform(Affine2),
    ResetTransform,
    SetAlpha(f32),
    SetFill(Color),
    SetStroke(Color),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    ClearRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    RoundedRect {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
    },
    Stroke,
}

/// Surface that appends a [`Command`] per call and draws nothing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<Command>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in issue order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The `(x, y, width, height)` of every recorded fill, in issue order
    pub fn fill_rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            Command::FillRect {
                x,
                y,
                width,
                height,
            } => Some((x, y, width, height)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.commands.push(Command::SetTransform(transform));
    }

    fn reset_transform(&mut self) {
        self.commands.push(Command::ResetTransform);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(Command::SetAlpha(alpha));
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(Command::SetFill(color));
    }

    fn set_stroke(&mut self, color: Color) {
        self.commands.push(Command::SetStroke(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(Command::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(Command::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn rounded_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) {
        self.commands.push(Command::RoundedRect {
            x0,
            y0,
            x1,
            y1,
            radius,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }
}
