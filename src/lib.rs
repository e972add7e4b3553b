//! Ledge Runner - frame renderer for a side-scrolling arcade runner
//!
//! Core modules:
//! - `state`: Read-only game-state snapshot consumed once per frame
//! - `renderer`: Camera transform, culling and per-frame drawing
//!
//! The simulation that produces snapshots lives outside this crate. Each
//! frame is painted from scratch; no rendering state survives between calls
//! apart from what the snapshot itself carries.

pub mod renderer;
pub mod state;

pub use renderer::{PixelSurface, RecordingSurface, Surface, render_frame};
pub use state::{Bullet, BulletState, Gauge, Platform, Player, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (device pixels)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Height of the screen-space status strip at the top of the viewport
    pub const STATUS_HEIGHT: f32 = 60.0;

    /// World-to-viewport zoom factor
    pub const WORLD_SCALE: f32 = 2.0;

    /// Side length of the player's square sprite (world units)
    pub const PLAYER_SIZE: f32 = 16.0;
    pub const BULLET_WIDTH: f32 = 6.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    /// Distance over which a bullet that fell behind the camera fades out
    pub const BULLET_FADE: f32 = 20.0;

    /// Horizontal cull distance from the player; nothing is drawn beyond it
    pub const OFFSCREEN: f32 = 300.0;

    /// Maximum shake displacement at a fully drained gauge
    pub const SHAKE_SIZE: f32 = 6.0;

    /// Vertical extent of a platform body below its top surface
    pub const PLATFORM_DEPTH: f32 = VIEW_HEIGHT / 4.0;
    /// Horizontal spacing between crack marks on a platform surface
    pub const CRACK_SPACING_X: f32 = 13.0;
    /// Per-unit-height phase shift of the crack pattern
    pub const CRACK_SPACING_Y: f32 = 7.0;
}
