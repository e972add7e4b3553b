//! Ledge Runner entry point
//!
//! Renders one frame headlessly and writes it to `frame.ppm`. With no
//! arguments a built-in demo scene is used; pass a snapshot JSON file to
//! replay a captured frame, and an optional seed for the shake RNG.
//!
//! ```text
//! ledge-runner [snapshot.json] [seed]
//! ```

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use ledge_runner::consts::{VIEW_HEIGHT, VIEW_WIDTH};
use ledge_runner::renderer::{PixelSurface, render_frame};
use ledge_runner::state::{Bullet, Gauge, Platform, Player, Snapshot};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let snapshot = match args.next() {
        Some(path) => {
            log::info!("Loading snapshot from {path}");
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => demo_snapshot(),
    };
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => 0,
    };

    let mut surface = PixelSurface::new(VIEW_WIDTH as usize, VIEW_HEIGHT as usize);
    let mut rng = Pcg32::seed_from_u64(seed);
    render_frame(&mut surface, &snapshot, &mut rng);

    write_ppm(&surface, "frame.ppm")?;
    log::info!(
        "Wrote frame.ppm ({}x{}, seed {seed})",
        surface.width(),
        surface.height(),
    );
    Ok(())
}

/// A scene exercising every draw path: platforms at several depths, a
/// fading bullet, a spawned enemy with return fire, and a half-drained
/// gauge for visible shake.
fn demo_snapshot() -> Snapshot {
    Snapshot {
        player: Player {
            pos: Vec2::new(120.0, 42.0),
        },
        platforms: vec![
            Platform::new(-60.0, 40.0, 260.0),
            Platform::new(230.0, 70.0, 140.0),
            Platform::new(60.0, 110.0, 90.0),
        ],
        bullets: vec![
            Bullet::free(Vec2::new(108.0, 52.0)),
            Bullet::spawned(
                Vec2::new(180.0, 50.0),
                240.0,
                vec![Vec2::new(210.0, 50.0), Vec2::new(236.0, 50.0)],
            ),
        ],
        gauge: Gauge { value: 0.5 },
        offset: 87.0,
    }
}

/// Dump the framebuffer as a binary PPM (P6)
fn write_ppm(surface: &PixelSurface, path: &str) -> Result<(), Box<dyn Error>> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "P6\n{} {}\n255", surface.width(), surface.height())?;
    for &pixel in surface.pixels() {
        let rgb = [
            ((pixel >> 16) & 0xff) as u8,
            ((pixel >> 8) & 0xff) as u8,
            (pixel & 0xff) as u8,
        ];
        out.write_all(&rgb)?;
    }
    Ok(())
}
