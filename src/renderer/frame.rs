//! Frame composition
//!
//! Orchestrates one full frame: clear, camera transform, platforms
//! back-to-front, bullets in snapshot order, the player, then the
//! screen-space status strip. Paint order is the layering model; nothing
//! here re-sorts bullets, so a later bullet's enemy can legitimately cover
//! an earlier bullet.

use rand::Rng;

use crate::consts::PLAYER_SIZE;
use crate::state::{Platform, Snapshot};

use super::bullet::draw_bullet;
use super::camera::camera_transform;
use super::platform::draw_platform;
use super::status::draw_status;
use super::surface::{Surface, colors};

/// Render one frame of `snapshot` onto `surface`.
///
/// The snapshot is read-only; platform paint order is resolved on borrowed
/// references. `rng` feeds the camera shake and is only consumed while the
/// gauge is below full.
pub fn render_frame<S: Surface>(surface: &mut S, snapshot: &Snapshot, rng: &mut impl Rng) {
    let player_pos = snapshot.player.pos;
    let transform = camera_transform(player_pos, snapshot.gauge.value, rng);

    surface.clear();
    surface.set_transform(transform);

    // Descending y: farther platforms first, nearer ones painted over them
    let mut platforms: Vec<&Platform> = snapshot.platforms.iter().collect();
    platforms.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal));

    for platform in &platforms {
        draw_platform(surface, platform, player_pos.x, snapshot.offset);
    }
    for bullet in &snapshot.bullets {
        draw_bullet(surface, bullet, player_pos.x);
    }

    surface.set_fill(colors::PLAYER);
    surface.fill_rect(
        player_pos.x - PLAYER_SIZE / 2.0,
        player_pos.y,
        PLAYER_SIZE,
        PLAYER_SIZE,
    );

    draw_status(surface, snapshot);

    log::trace!(
        "frame: {} platforms, {} bullets, gauge {:.2}",
        platforms.len(),
        snapshot.bullets.len(),
        snapshot.gauge.value,
    );
}
