//! Read-only game-state snapshot consumed by the renderer
//!
//! The simulation owns and mutates these values; the renderer only reads
//! them for the duration of one frame. Everything here is serializable so a
//! captured frame can be replayed headlessly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The player character
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// World-space position; the camera centers on its x
    pub pos: Vec2,
}

/// A platform segment: left edge, top surface height and horizontal extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self { x, y, width }
    }

    /// World x of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// What a player bullet has turned into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BulletState {
    /// Still a plain projectile in flight
    Free,
    /// The bullet has spawned an enemy at the given world x; the enemy may
    /// fire back, and its shots live here until they expire
    Spawned {
        enemy_x: f32,
        return_fire: Vec<Vec2>,
    },
}

/// A player-fired projectile, possibly carrying the enemy it spawned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Current world position of the projectile itself
    pub pos: Vec2,
    /// True once the projectile has been absorbed; its enemy, if any,
    /// still renders
    pub hit: bool,
    pub state: BulletState,
}

impl Bullet {
    /// A plain projectile at `pos`
    pub fn free(pos: Vec2) -> Self {
        Self {
            pos,
            hit: false,
            state: BulletState::Free,
        }
    }

    /// A projectile whose enemy has spawned at `enemy_x`
    pub fn spawned(pos: Vec2, enemy_x: f32, return_fire: Vec<Vec2>) -> Self {
        Self {
            pos,
            hit: false,
            state: BulletState::Spawned {
                enemy_x,
                return_fire,
            },
        }
    }
}

/// Depleting meter driving the screen shake: 1 = full/calm, 0 = max shake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub value: f32,
}

impl Default for Gauge {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}

/// Everything the renderer reads for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub bullets: Vec<Bullet>,
    pub gauge: Gauge,
    /// World-scroll phase; advances over time and shifts the crack pattern
    pub offset: f32,
}

impl Snapshot {
    /// A minimal snapshot: player at `pos`, nothing else on screen
    pub fn with_player(pos: Vec2) -> Self {
        Self {
            player: Player { pos },
            platforms: Vec::new(),
            bullets: Vec::new(),
            gauge: Gauge::default(),
            offset: 0.0,
        }
    }
}
