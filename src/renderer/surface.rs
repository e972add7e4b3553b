//! Drawing-surface contract shared by all rendering backends

use glam::Affine2;

/// RGBA color with linear 0-1 components
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [0.118, 0.969, 0.333, 1.0];
    pub const ENEMY: Color = [0.969, 0.118, 0.161, 1.0];
    pub const PLATFORM: Color = [0.667, 0.667, 0.667, 1.0];
    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
    pub const STATUS_BG: Color = [0.05, 0.05, 0.1, 1.0];
    pub const STATUS_FRAME: Color = [0.667, 0.667, 0.667, 1.0];
}

/// Canvas-style 2D drawing surface.
///
/// The renderer issues world-space coordinates; the surface applies the
/// current transform. Paint state (fill, stroke, alpha, transform) is
/// sticky until overwritten, so callers that change it are responsible for
/// restoring it — see [`with_alpha`].
pub trait Surface {
    /// Reset the surface to blank: background everywhere, identity
    /// transform, full opacity
    fn clear(&mut self);

    fn set_transform(&mut self, transform: Affine2);
    fn reset_transform(&mut self);

    /// Global opacity applied to subsequent fills and strokes
    fn set_alpha(&mut self, alpha: f32);

    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with the current fill color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Erase an axis-aligned rectangle back to the background
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Replace the current path with a rounded rectangle spanning
    /// `(x0, y0)` to `(x1, y1)` with the given corner radius
    fn rounded_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32);
    /// Stroke the current path with the current stroke color
    fn stroke(&mut self);
}

/// Run `draw` with the surface alpha set to `alpha`, restoring full opacity
/// afterwards. The only place in the crate that touches the global alpha;
/// a faded draw can never leak transparency into the next one.
pub fn with_alpha<S: Surface + ?Sized>(surface: &mut S, alpha: f32, draw: impl FnOnce(&mut S)) {
    surface.set_alpha(alpha);
    draw(surface);
    surface.set_alpha(1.0);
}
