//! Platform rendering: horizontal culling, crack pattern, outline
//!
//! A platform is drawn as an erased body with a stroked rounded outline and
//! a row of procedural crack marks just under its top surface. The crack
//! phase is derived from the platform's world position and the global
//! scroll offset, so the pattern stays pinned to the world while the
//! camera moves.

use crate::consts::{CRACK_SPACING_X, CRACK_SPACING_Y, OFFSCREEN, PLATFORM_DEPTH};
use crate::state::Platform;

use super::surface::{Surface, colors};

/// Corner radius of the platform outline
const CORNER_RADIUS: f32 = 2.75;

/// Crack-pattern phase for a platform at `(x, y)` under the given scroll.
///
/// Plain remainder, following the dividend's sign like the scroll counter
/// it tracks; pinned to world coordinates while advancing with the scroll.
fn crack_phase(scroll: f32, x: f32, y: f32) -> f32 {
    (scroll - x + y * CRACK_SPACING_Y) % CRACK_SPACING_X
}

/// Draw one platform, culled and clipped against `player_x ± OFFSCREEN`.
///
/// A platform entirely outside the cull window issues no surface calls.
pub fn draw_platform<S: Surface>(surface: &mut S, platform: &Platform, player_x: f32, scroll: f32) {
    let mut x = platform.x;
    let mut width = platform.width;

    if x - player_x < -OFFSCREEN {
        width -= -OFFSCREEN - x + player_x;
        x = player_x - OFFSCREEN;
    }
    if x + width - player_x > OFFSCREEN {
        width = OFFSCREEN - x + player_x;
    }
    if width <= 0.0 {
        return;
    }

    let phase = crack_phase(scroll, x, platform.y);
    let y = platform.y;

    // Separation line under the lip, then the body interior
    surface.clear_rect(x + 2.0, y - 2.0, width - 4.0, 1.0);
    surface.clear_rect(x + 1.0, y - PLATFORM_DEPTH, width - 2.0, PLATFORM_DEPTH - 1.0);

    surface.set_fill(colors::PLATFORM);
    let mut crack_x = x + 2.0 + phase;
    while crack_x <= x + width - 4.0 {
        if crack_x < x + width {
            surface.fill_rect(crack_x, y - 2.0, 1.0, 1.0);
        }
        surface.fill_rect(crack_x - 1.0, y - 3.0, 1.0, 1.0);
        crack_x += CRACK_SPACING_X;
    }

    surface.set_stroke(colors::PLATFORM);
    surface.rounded_rect(x + 0.5, y - PLATFORM_DEPTH, x + width - 0.5, y - 0.5, CORNER_RADIUS);
    surface.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::record::{Command, RecordingSurface};
    use proptest::prelude::*;

    fn drawn_extent(surface: &RecordingSurface) -> Option<(f32, f32)> {
        surface.commands().iter().find_map(|c| match *c {
            Command::RoundedRect { x0, x1, .. } => Some((x0 - 0.5, x1 + 0.5)),
            _ => None,
        })
    }

    #[test]
    fn test_visible_platform_draws_unclipped() {
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &Platform::new(0.0, 40.0, 100.0), 0.0, 0.0);

        let (left, right) = drawn_extent(&surface).expect("outline drawn");
        assert_eq!(left, 0.0);
        assert_eq!(right, 100.0);
    }

    #[test]
    fn test_platform_beyond_offscreen_is_skipped() {
        // Left edge 500 units behind the player, width 50: fully culled
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &Platform::new(0.0, 40.0, 50.0), 500.0, 0.0);

        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_left_clip_conserves_width() {
        // Platform pokes 20 units past the left cull edge
        let platform = Platform::new(-OFFSCREEN - 20.0, 40.0, 100.0);
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &platform, 0.0, 0.0);

        let (left, right) = drawn_extent(&surface).unwrap();
        assert_eq!(left, -OFFSCREEN);
        assert_eq!(right - left, 80.0);
    }

    #[test]
    fn test_right_clip_stops_at_offscreen() {
        let platform = Platform::new(OFFSCREEN - 30.0, 40.0, 100.0);
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &platform, 0.0, 0.0);

        let (left, right) = drawn_extent(&surface).unwrap();
        assert_eq!(right, OFFSCREEN);
        assert_eq!(right - left, 30.0);
    }

    #[test]
    fn test_crack_marks_are_periodic() {
        let platform = Platform::new(0.0, 0.0, 200.0);
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &platform, 0.0, 0.0);

        // Surface-row ticks are the 1x1 fills at y - 2
        let marks: Vec<f32> = surface
            .fill_rects()
            .filter(|&(_, y, w, h)| y == -2.0 && w == 1.0 && h == 1.0)
            .map(|(x, ..)| x)
            .collect();
        assert!(marks.len() >= 2);
        for pair in marks.windows(2) {
            assert!((pair[1] - pair[0] - CRACK_SPACING_X).abs() < 1e-4);
        }
    }

    #[test]
    fn test_crack_marks_are_deterministic() {
        let platform = Platform::new(26.0, 14.0, 120.0);
        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        draw_platform(&mut a, &platform, 0.0, 37.5);
        draw_platform(&mut b, &platform, 0.0, 37.5);

        assert_eq!(a.commands(), b.commands());
    }

    #[test]
    fn test_crack_marks_stay_inside_right_edge() {
        let platform = Platform::new(0.0, 40.0, 60.0);
        let mut surface = RecordingSurface::new();
        draw_platform(&mut surface, &platform, 0.0, 11.0);

        for (x, y, ..) in surface.fill_rects() {
            if y == platform.y - 2.0 {
                assert!(x < platform.right());
            }
        }
    }

    proptest! {
        #[test]
        fn prop_clip_conserves_width(
            x in -1000.0f32..1000.0,
            width in 1.0f32..500.0,
            player_x in -1000.0f32..1000.0,
        ) {
            let platform = Platform::new(x, 40.0, width);
            let mut surface = RecordingSurface::new();
            draw_platform(&mut surface, &platform, player_x, 0.0);

            if let Some((left, right)) = drawn_extent(&surface) {
                let clipped_left = left - x;
                let clipped_right = platform.right() - right;
                prop_assert!(left >= player_x - OFFSCREEN - 1e-3);
                prop_assert!(right <= player_x + OFFSCREEN + 1e-3);
                prop_assert!(
                    ((right - left) + clipped_left + clipped_right - width).abs() < 1e-3
                );
            } else {
                // Skipped platforms must be fully outside the cull window
                prop_assert!(
                    platform.right() - player_x <= -OFFSCREEN + 1e-3
                        || x - player_x >= OFFSCREEN - 1e-3
                );
            }
        }

        #[test]
        fn prop_crack_phase_has_scroll_period(
            x in -200.0f32..200.0,
            y in 0.0f32..100.0,
            scroll in 1500.0f32..3000.0,
        ) {
            // Advancing the scroll by one full spacing leaves the phase unchanged
            let a = crack_phase(scroll, x, y);
            let b = crack_phase(scroll + CRACK_SPACING_X, x, y);
            prop_assert!((a - b).abs() < 1e-2);
            prop_assert!(a.abs() < CRACK_SPACING_X);
        }
    }
}
