//! Software canvas: a CPU-side pixel buffer the simulation draws into
//!
//! Pixels are RGBA8 packed little-endian, so the whole buffer can be handed
//! to `queue.write_texture` as-is for an `Rgba8UnormSrgb` texture. All draw
//! operations clip against the buffer; plotting outside it is a no-op.

use glam::Vec2;

/// Pack an RGBA color into the canvas pixel format.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

pub const COLOR_WHITE: u32 = rgba(0xff, 0xff, 0xff, 0xff);
pub const COLOR_BLACK: u32 = rgba(0x00, 0x00, 0x00, 0xff);
pub const COLOR_GRAY: u32 = rgba(0xef, 0xef, 0xef, 0xff);

/// Fixed-resolution RGBA8 pixel buffer
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            pixels: vec![COLOR_BLACK; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flood the whole canvas with one color
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Write a single pixel, ignoring out-of-range coordinates
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    /// Read a pixel back; `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.width as i32);
        let y1 = (y + h as i32).min(self.height as i32);

        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels[(py as u32 * self.width + px as u32) as usize] = color;
            }
        }
    }

    /// Rasterize a filled disk by squared-distance inclusion over its
    /// bounding box
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        let radius_squared = radius * radius;
        let x_min = (center.x - radius).floor() as i32;
        let x_max = (center.x + radius).ceil() as i32;
        let y_min = (center.y - radius).floor() as i32;
        let y_max = (center.y + radius).ceil() as i32;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                if dx * dx + dy * dy <= radius_squared {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// The raw pixel data, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_floods_every_pixel() {
        let mut canvas = Canvas::new(8, 4);
        canvas.clear(COLOR_GRAY);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(canvas.pixel(x, y), Some(COLOR_GRAY));
            }
        }
    }

    #[test]
    fn set_pixel_clips_outside_buffer() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_pixel(-1, 0, COLOR_WHITE);
        canvas.set_pixel(0, -1, COLOR_WHITE);
        canvas.set_pixel(4, 0, COLOR_WHITE);
        canvas.set_pixel(0, 4, COLOR_WHITE);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), Some(COLOR_BLACK));
            }
        }
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(2, 2, 10, 10, COLOR_WHITE);
        assert_eq!(canvas.pixel(3, 3), Some(COLOR_WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(COLOR_BLACK));

        // Fully outside is a no-op
        canvas.fill_rect(-10, -10, 2, 2, COLOR_GRAY);
        assert_eq!(canvas.pixel(0, 0), Some(COLOR_BLACK));
    }

    #[test]
    fn fill_circle_covers_center_not_corners() {
        let mut canvas = Canvas::new(16, 16);
        canvas.fill_circle(Vec2::new(8.0, 8.0), 3.0, COLOR_WHITE);
        assert_eq!(canvas.pixel(8, 8), Some(COLOR_WHITE));
        assert_eq!(canvas.pixel(8, 5), Some(COLOR_WHITE)); // on the rim
        assert_eq!(canvas.pixel(0, 0), Some(COLOR_BLACK));
        assert_eq!(canvas.pixel(12, 12), Some(COLOR_BLACK));
    }

    #[test]
    fn pixel_bytes_are_rgba_order() {
        let canvas = Canvas::new(1, 1);
        assert_eq!(&canvas.as_bytes()[..4], &[0x00, 0x00, 0x00, 0xff]);
    }
}
