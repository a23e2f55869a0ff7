use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use image::{Rgba, RgbaImage};
use std::ops::Range;

use super::{Path, Surface};
use crate::geometry::distance_to_line_segment;

/// Software rasterizer over an RGBA image, used for export.
///
/// A pixel is covered when its center lies inside the painted area. Fills use
/// the even-odd rule, strokes are round-capped, and colors are blended
/// source-over with straight alpha.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A fully transparent surface; each dimension is at least one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Color at a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
    }

    fn blend(&mut self, x: u32, y: u32, src: [u8; 4]) {
        blend_pixel(self.image.get_pixel_mut(x, y), src);
    }
}

/// Indices of the pixels whose centers fall in `[min, max)`, clipped to `0..limit`.
fn pixel_span(min: f32, max: f32, limit: u32) -> Range<u32> {
    let to_index = |value: f32| (value - 0.5).ceil().clamp(0.0, limit as f32) as u32;
    to_index(min)..to_index(max)
}

fn blend_pixel(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let src_alpha = src[3] as f32 / 255.0;
    if src_alpha <= 0.0 {
        return;
    }
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    for channel in 0..3 {
        let value = (src[channel] as f32 * src_alpha
            + dst[channel] as f32 * dst_alpha * (1.0 - src_alpha))
            / out_alpha;
        dst[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let src = color.to_srgba_unmultiplied();
        for y in pixel_span(rect.min.y, rect.max.y, self.image.height()) {
            for x in pixel_span(rect.min.x, rect.max.x, self.image.width()) {
                self.blend(x, y, src);
            }
        }
    }

    fn fill_path(&mut self, path: &Path, color: Color32) {
        let polygons: Vec<Vec<Pos2>> = path
            .flatten()
            .into_iter()
            .filter(|polyline| polyline.points.len() >= 3)
            .map(|polyline| polyline.points)
            .collect();
        if polygons.is_empty() {
            return;
        }

        let (min_y, max_y) = polygons
            .iter()
            .flatten()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });

        let src = color.to_srgba_unmultiplied();
        let mut crossings = Vec::new();
        for y in pixel_span(min_y, max_y, self.image.height()) {
            let center_y = y as f32 + 0.5;
            crossings.clear();

            for polygon in &polygons {
                // Fill treats every subpath as implicitly closed
                let edges = polygon.iter().zip(polygon.iter().cycle().skip(1));
                for (a, b) in edges {
                    if (a.y <= center_y) != (b.y <= center_y) {
                        crossings.push(a.x + (center_y - a.y) * (b.x - a.x) / (b.y - a.y));
                    }
                }
            }

            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                for x in pixel_span(pair[0], pair[1], self.image.width()) {
                    self.blend(x, y, src);
                }
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        if stroke.width <= 0.0 || stroke.color.a() == 0 {
            return;
        }
        let half_width = stroke.width / 2.0;
        let (width, height) = self.image.dimensions();

        // Coverage mask so overlapping segments of one stroke blend only once
        let mut covered = vec![false; width as usize * height as usize];

        for polyline in path.flatten() {
            let points = &polyline.points;
            let mut segments: Vec<(Pos2, Pos2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
            if polyline.closed {
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    segments.push((*last, *first));
                }
            }

            for (a, b) in segments {
                let xs = pixel_span(a.x.min(b.x) - half_width, a.x.max(b.x) + half_width, width);
                let ys = pixel_span(a.y.min(b.y) - half_width, a.y.max(b.y) + half_width, height);
                for y in ys {
                    for x in xs.clone() {
                        let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                        if distance_to_line_segment(center, a, b) <= half_width {
                            covered[y as usize * width as usize + x as usize] = true;
                        }
                    }
                }
            }
        }

        let src = stroke.color.to_srgba_unmultiplied();
        for (index, _) in covered.iter().enumerate().filter(|(_, hit)| **hit) {
            let x = (index % width as usize) as u32;
            let y = (index / width as usize) as u32;
            self.blend(x, y, src);
        }
    }
}
