//! Bullet and enemy rendering
//!
//! A player bullet is a small filled rectangle that fades out once it falls
//! behind the camera focus. A bullet that has spawned an enemy also paints
//! the enemy body (growing with the distance from the impact point) and any
//! return fire the enemy has produced, occlusion-culled while still inside
//! the enemy's bounds.

use glam::Vec2;

use crate::consts::{BULLET_FADE, BULLET_HEIGHT, BULLET_WIDTH, PLAYER_SIZE};
use crate::state::{Bullet, BulletState};

use super::surface::{Color, Surface, colors, with_alpha};

/// Enemy height gained per unit of distance from the impact point
const GROW_SLOPE: f32 = (PLAYER_SIZE - BULLET_HEIGHT) / 2.0 / PLAYER_SIZE;
/// Height at the moment the enemy separates from its bullet
const GROW_BASE: f32 = PLAYER_SIZE - GROW_SLOPE * (BULLET_WIDTH + PLAYER_SIZE / 2.0);

/// Draw one bullet and, if it has spawned an enemy, the enemy and its
/// return fire.
pub fn draw_bullet<S: Surface>(surface: &mut S, bullet: &Bullet, player_x: f32) {
    let Vec2 { x, y } = bullet.pos;

    // The projectile sprite disappears once it merges into its enemy
    let merged = match bullet.state {
        BulletState::Spawned { enemy_x, .. } => enemy_x - x < PLAYER_SIZE / 2.0,
        BulletState::Free => false,
    };

    if !bullet.hit && !merged {
        if x < player_x {
            let alpha = (1.0 - (player_x - x) / BULLET_FADE).max(0.0);
            with_alpha(surface, alpha, |s| fill_projectile(s, x, y, colors::PLAYER));
        } else {
            fill_projectile(surface, x, y, colors::PLAYER);
        }
    }

    if let BulletState::Spawned {
        enemy_x,
        ref return_fire,
    } = bullet.state
    {
        draw_enemy(surface, x, y, enemy_x);
        for shot in return_fire {
            if shot.x < enemy_x - PLAYER_SIZE / 2.0 {
                fill_projectile(surface, shot.x, shot.y, colors::ENEMY);
            }
        }
    }
}

/// Visible height of an enemy whose bullet sits at `x`: grows linearly as
/// the enemy recedes from the impact point, clamped to `[2, PLAYER_SIZE]`.
pub fn enemy_height(x: f32, enemy_x: f32) -> f32 {
    ((enemy_x - x) * GROW_SLOPE + GROW_BASE)
        .min(PLAYER_SIZE)
        .max(2.0)
}

fn draw_enemy<S: Surface>(surface: &mut S, x: f32, y: f32, enemy_x: f32) {
    surface.set_fill(colors::ENEMY);
    surface.fill_rect(
        enemy_x - PLAYER_SIZE / 2.0,
        y - PLAYER_SIZE / 2.0,
        PLAYER_SIZE,
        enemy_height(x, enemy_x),
    );
}

fn fill_projectile<S: Surface>(surface: &mut S, x: f32, y: f32, color: Color) {
    surface.set_fill(color);
    surface.fill_rect(x, y - BULLET_HEIGHT / 2.0, BULLET_WIDTH, BULLET_HEIGHT);
}
