//! Camera-to-viewport transform
//!
//! World +y is up, viewport +y is down, so the transform is a uniform
//! scale of [`WORLD_SCALE`] with a vertical flip, translated to center the
//! player. A draining gauge shakes the camera with fresh per-frame noise.

use glam::{Affine2, Vec2};
use rand::Rng;

use crate::consts::{PLAYER_SIZE, SHAKE_SIZE, STATUS_HEIGHT, VIEW_HEIGHT, VIEW_WIDTH, WORLD_SCALE};

/// Compute the viewport transform for the current frame.
///
/// The shake jitter is re-drawn from `rng` on every call, with no smoothing
/// across frames. A full gauge consults the RNG not at all, so calm frames
/// are reproducible without fixing a seed.
pub fn camera_transform(player_pos: Vec2, gauge_value: f32, rng: &mut impl Rng) -> Affine2 {
    let mut offset = Vec2::new(
        VIEW_WIDTH / 2.0 - player_pos.x * WORLD_SCALE,
        (VIEW_HEIGHT + STATUS_HEIGHT) / 2.0 + player_pos.y * WORLD_SCALE + PLAYER_SIZE,
    );

    if gauge_value < 1.0 {
        let amplitude = SHAKE_SIZE * (1.0 - gauge_value);
        offset.x += amplitude * rng.random_range(-1.0..=1.0);
        offset.y += amplitude * rng.random_range(-1.0..=1.0);
    }

    Affine2::from_cols(
        Vec2::new(WORLD_SCALE, 0.0),
        Vec2::new(0.0, -WORLD_SCALE),
        offset,
    )
}
