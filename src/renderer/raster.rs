//! Software framebuffer backend
//!
//! A plain CPU surface: packed 0xAARRGGBB pixels, source-over blending,
//! and an affine transform applied on the way in. Rects stay axis-aligned
//! because the renderer's transform is scale/flip/translate; arbitrary
//! affines are handled by taking the transformed bounding box.

use glam::{Affine2, Vec2};

use super::surface::{Color, Surface, colors};

/// Pack linear RGBA into 0xAARRGGBB
fn pack(color: Color) -> u32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
    (c(color[3]) << 24) | (c(color[0]) << 16) | (c(color[1]) << 8) | c(color[2])
}

/// Source-over blend of `src` onto `dst` with the given opacity
fn blend(dst: u32, src: Color, alpha: f32) -> u32 {
    let a = (src[3] * alpha).clamp(0.0, 1.0);
    if a >= 1.0 {
        return pack([src[0], src[1], src[2], 1.0]);
    }

    let channel = |shift: u32, s: f32| {
        let d = ((dst >> shift) & 0xff) as f32 / 255.0;
        let out = s.clamp(0.0, 1.0) * a + d * (1.0 - a);
        (((out * 255.0 + 0.5) as u32) & 0xff) << shift
    };
    0xff00_0000 | channel(16, src[0]) | channel(8, src[1]) | channel(0, src[2])
}

/// The current rounded-rectangle path, in world coordinates
#[derive(Debug, Clone, Copy)]
struct RoundedRect {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
}

/// CPU framebuffer implementing [`Surface`]
#[derive(Debug)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    transform: Affine2,
    fill: Color,
    stroke: Color,
    alpha: f32,
    path: Option<RoundedRect>,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![pack(colors::BACKGROUND); width * height],
            transform: Affine2::IDENTITY,
            fill: [1.0; 4],
            stroke: [1.0; 4],
            alpha: 1.0,
            path: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed 0xAARRGGBB pixel at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    /// The whole framebuffer, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Framebuffer as raw bytes (native-endian u32 rows)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Device-space pixel span of a world-space rect under the current
    /// transform, clipped to the framebuffer. `None` when nothing remains.
    fn device_span(&self, x: f32, y: f32, width: f32, height: f32) -> Option<(usize, usize, usize, usize)> {
        let corners = [
            Vec2::new(x, y),
            Vec2::new(x + width, y),
            Vec2::new(x, y + height),
            Vec2::new(x + width, y + height),
        ]
        .map(|p| self.transform.transform_point2(p));

        let min_x = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

        let x0 = (min_x.round().max(0.0)) as usize;
        let y0 = (min_y.round().max(0.0)) as usize;
        let x1 = (max_x.round().min(self.width as f32)) as usize;
        let y1 = (max_y.round().min(self.height as f32)) as usize;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn blend_span(&mut self, span: (usize, usize, usize, usize), color: Color, alpha: f32) {
        let (x0, y0, x1, y1) = span;
        for y in y0..y1 {
            let row = y * self.width;
            for px in &mut self.pixels[row + x0..row + x1] {
                *px = blend(*px, color, alpha);
            }
        }
    }

    /// Blend a square of `size` device pixels centered on `center`
    fn plot(&mut self, center: Vec2, size: f32) {
        let x0 = ((center.x - size / 2.0).round().max(0.0)) as usize;
        let y0 = ((center.y - size / 2.0).round().max(0.0)) as usize;
        let x1 = (((center.x + size / 2.0).round()).min(self.width as f32)) as usize;
        let y1 = (((center.y + size / 2.0).round()).min(self.height as f32)) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let (stroke, alpha) = (self.stroke, self.alpha);
        self.blend_span((x0, y0, x1, y1), stroke, alpha);
    }
}

impl Surface for PixelSurface {
    fn clear(&mut self) {
        self.pixels.fill(pack(colors::BACKGROUND));
        self.transform = Affine2::IDENTITY;
        self.alpha = 1.0;
        self.path = None;
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    fn reset_transform(&mut self) {
        self.transform = Affine2::IDENTITY;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if let Some(span) = self.device_span(x, y, width, height) {
            let (fill, alpha) = (self.fill, self.alpha);
            self.blend_span(span, fill, alpha);
        }
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if let Some(span) = self.device_span(x, y, width, height) {
            let (x0, y0, x1, y1) = span;
            let bg = pack(colors::BACKGROUND);
            for y in y0..y1 {
                let row = y * self.width;
                self.pixels[row + x0..row + x1].fill(bg);
            }
        }
    }

    fn rounded_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32) {
        let radius = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);
        self.path = Some(RoundedRect {
            x0,
            y0,
            x1,
            y1,
            radius,
        });
    }

    fn stroke(&mut self) {
        let Some(rect) = self.path else {
            return;
        };
        let RoundedRect {
            x0,
            y0,
            x1,
            y1,
            radius: r,
        } = rect;

        // 1 world unit of line width, at the transform's scale
        let scale = self.transform.matrix2.x_axis.length().max(1e-6);
        let line_width = scale.max(1.0);
        let step = 0.5 / scale;

        let mut walk_edge = |a: Vec2, b: Vec2| {
            let length = a.distance(b);
            let samples = (length / step).ceil().max(1.0) as usize;
            for i in 0..=samples {
                let p = a.lerp(b, i as f32 / samples as f32);
                let q = self.transform.transform_point2(p);
                self.plot(q, line_width);
            }
        };

        // Straight edges, shortened by the corner radius
        walk_edge(Vec2::new(x0 + r, y0), Vec2::new(x1 - r, y0));
        walk_edge(Vec2::new(x0 + r, y1), Vec2::new(x1 - r, y1));
        walk_edge(Vec2::new(x0, y0 + r), Vec2::new(x0, y1 - r));
        walk_edge(Vec2::new(x1, y0 + r), Vec2::new(x1, y1 - r));

        if r > 0.0 {
            // Quarter arcs at each corner
            let corners = [
                (Vec2::new(x0 + r, y0 + r), std::f32::consts::PI),
                (Vec2::new(x1 - r, y0 + r), 1.5 * std::f32::consts::PI),
                (Vec2::new(x1 - r, y1 - r), 0.0),
                (Vec2::new(x0 + r, y1 - r), 0.5 * std::f32::consts::PI),
            ];
            let arc_len = std::f32::consts::FRAC_PI_2 * r;
            let samples = (arc_len / step).ceil().max(2.0) as usize;
            for (center, start) in corners {
                for i in 0..=samples {
                    let theta = start + std::f32::consts::FRAC_PI_2 * i as f32 / samples as f32;
                    let p = center + r * Vec2::new(theta.cos(), theta.sin());
                    let q = self.transform.transform_point2(p);
                    self.plot(q, line_width);
                }
            }
        }
    }
}
