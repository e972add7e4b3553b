//! Screen-space status strip
//!
//! Drawn last each frame, after the world pass. The strip ignores the
//! camera entirely: it resets the transform itself, so shake never moves
//! the HUD.

use crate::consts::{STATUS_HEIGHT, VIEW_WIDTH};
use crate::state::Snapshot;

use super::surface::{Color, Surface, colors};

/// Inner margin between the strip edge and the gauge bar
const GAUGE_MARGIN: f32 = 8.0;
/// Corner radius of the gauge frame
const GAUGE_RADIUS: f32 = 2.75;

/// Paint the status strip and the gauge meter across the top of the
/// viewport.
pub fn draw_status<S: Surface>(surface: &mut S, snapshot: &Snapshot) {
    surface.reset_transform();

    surface.set_fill(colors::STATUS_BG);
    surface.fill_rect(0.0, 0.0, VIEW_WIDTH, STATUS_HEIGHT);

    surface.set_stroke(colors::STATUS_FRAME);
    surface.rounded_rect(
        GAUGE_MARGIN + 0.5,
        GAUGE_MARGIN + 0.5,
        VIEW_WIDTH - GAUGE_MARGIN - 0.5,
        STATUS_HEIGHT - GAUGE_MARGIN - 0.5,
        GAUGE_RADIUS,
    );
    surface.stroke();

    let value = snapshot.gauge.value.clamp(0.0, 1.0);
    let full_width = VIEW_WIDTH - 2.0 * GAUGE_MARGIN - 4.0;
    let fill_width = full_width * value;
    if fill_width > 0.0 {
        surface.set_fill(gauge_color(value));
        surface.fill_rect(
            GAUGE_MARGIN + 2.0,
            GAUGE_MARGIN + 2.0,
            fill_width,
            STATUS_HEIGHT - 2.0 * GAUGE_MARGIN - 4.0,
        );
    }
}

/// Gauge bar color: green when full, through amber, to red when drained
fn gauge_color(value: f32) -> Color {
    let t = value.clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.5 {
        // Red to amber
        let u = t / 0.5;
        (0.9, 0.2 + 0.5 * u, 0.1)
    } else {
        // Amber to green
        let u = (t - 0.5) / 0.5;
        (0.9 - 0.8 * u, 0.7 + 0.2 * u, 0.1 + 0.1 * u)
    };

    [r, g, b, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::record::{Command, RecordingSurface};
    use crate::state::Snapshot;
    use glam::Vec2;

    #[test]
    fn test_status_resets_transform_first() {
        let snapshot = Snapshot::with_player(Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        draw_status(&mut surface, &snapshot);

        assert_eq!(surface.commands().first(), Some(&Command::ResetTransform));
    }

    #[test]
    fn test_gauge_fill_tracks_value() {
        let full_width = VIEW_WIDTH - 2.0 * GAUGE_MARGIN - 4.0;

        let mut snapshot = Snapshot::with_player(Vec2::ZERO);
        snapshot.gauge.value = 0.5;
        let mut surface = RecordingSurface::new();
        draw_status(&mut surface, &snapshot);

        let bar = surface
            .fill_rects()
            .find(|&(x, ..)| x == GAUGE_MARGIN + 2.0)
            .expect("gauge bar drawn");
        assert!((bar.2 - full_width * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_empty_gauge_draws_no_bar() {
        let mut snapshot = Snapshot::with_player(Vec2::ZERO);
        snapshot.gauge.value = 0.0;
        let mut surface = RecordingSurface::new();
        draw_status(&mut surface, &snapshot);

        // Strip background only; the bar itself is absent
        assert_eq!(surface.fill_rects().count(), 1);
    }

    #[test]
    fn test_gauge_color_endpoints() {
        let full = gauge_color(1.0);
        let empty = gauge_color(0.0);
        assert!(full[1] > full[0], "full gauge reads green");
        assert!(empty[0] > empty[1], "empty gauge reads red");
    }
}
